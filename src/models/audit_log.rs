//! Audit log records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Searchable;
use crate::filter::RecordFilter;

/// Severity of an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine event
    Info,
    /// Needs attention
    Warning,
    /// Failure or security event
    Error,
}

impl Severity {
    /// All severities in menu order.
    pub const ALL: [Self; 3] = [Self::Info, Self::Warning, Self::Error];

    /// Lowercase identifier, also the category value used for filtering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Capitalised label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Identifiers of [`Severity::ALL`], for category cycling.
    #[must_use]
    pub fn names() -> [&'static str; 3] {
        Self::ALL.map(Self::as_str)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| {
                anyhow::anyhow!("Invalid severity '{s}'. Must be 'info', 'warning', or 'error'")
            })
    }
}

/// One audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Stable identifier (`log-N`)
    pub id: String,
    /// Dotted action name (e.g. `user.login`)
    pub action: String,
    /// Display name of the acting user
    pub user: String,
    /// Email of the acting user
    pub user_email: String,
    /// When the event happened
    pub timestamp: DateTime<Utc>,
    /// Free-form description
    pub details: String,
    /// Severity
    pub severity: Severity,
    /// Affected resource area
    pub resource: String,
}

impl AuditLogEntry {
    /// Timestamp in the table's short form, e.g. `Jun 1, 11:55 AM`.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format("%b %-d, %I:%M %p").to_string()
    }
}

/// Per-severity totals shown above the audit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeverityCounts {
    /// All events
    pub total: usize,
    /// Info events
    pub info: usize,
    /// Warning events
    pub warning: usize,
    /// Error events
    pub error: usize,
}

impl SeverityCounts {
    /// Counts the entries by severity.
    pub fn tally<'a>(entries: impl IntoIterator<Item = &'a AuditLogEntry>) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |mut counts, entry| {
                counts.total += 1;
                match entry.severity {
                    Severity::Info => counts.info += 1,
                    Severity::Warning => counts.warning += 1,
                    Severity::Error => counts.error += 1,
                }
                counts
            })
    }
}

fn action(entry: &AuditLogEntry) -> &str {
    &entry.action
}

fn user(entry: &AuditLogEntry) -> &str {
    &entry.user
}

fn details(entry: &AuditLogEntry) -> &str {
    &entry.details
}

fn resource(entry: &AuditLogEntry) -> &str {
    &entry.resource
}

fn severity(entry: &AuditLogEntry) -> &str {
    entry.severity.as_str()
}

impl Searchable for AuditLogEntry {
    fn record_filter() -> RecordFilter<Self> {
        RecordFilter::new()
            .search_field(action)
            .search_field(user)
            .search_field(details)
            .search_field(resource)
            .category_field(severity)
    }
}
