//! Record types shown on the dashboard's list pages.
//!
//! Records are plain data supplied by [`crate::data`]. Each type declares
//! which of its fields take part in free-text search and which field acts as
//! its category through [`Searchable`].

pub mod audit_log;
pub mod user;

pub use audit_log::{AuditLogEntry, Severity, SeverityCounts};
pub use user::{User, UserCounts, UserStatus, USER_ROLES};

use crate::filter::RecordFilter;

/// A record type with designated searchable fields.
pub trait Searchable: Sized {
    /// Filter configured with this type's searchable fields and category field.
    fn record_filter() -> RecordFilter<Self>;
}
