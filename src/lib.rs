//! MeshPanel library
//!
//! Display mode management for an admin dashboard, a generic record filter,
//! and the sample users and audit log pages that exercise both from a
//! terminal UI and a scriptable CLI.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod filter;
pub mod i18n;
pub mod models;
pub mod storage;
pub mod theme;
pub mod tui;
