//! CLI command handlers for MeshPanel.
//!
//! This module provides headless, scriptable access to the dashboard's
//! display mode, record lists and configuration.

pub mod common;
pub mod config;
pub mod logs;
pub mod theme;
pub mod users;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use logs::LogsArgs;
pub use theme::ThemeArgs;
pub use users::UsersArgs;
