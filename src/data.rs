//! Sample records for the demo dashboard.
//!
//! All data is fictional. Relative timestamps are anchored at the `now`
//! passed in, so a given instant always produces the same records.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{AuditLogEntry, Severity, User, UserStatus};

/// Every collection the list pages render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    /// Instant the relative timestamps were computed from
    pub generated_at: DateTime<Utc>,
    /// Users page records
    pub users: Vec<User>,
    /// Audit log page records, newest first
    pub audit_logs: Vec<AuditLogEntry>,
}

impl SampleData {
    /// Builds the sample collections relative to `now`.
    #[must_use]
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self {
            generated_at: now,
            users: sample_users(now),
            audit_logs: sample_audit_logs(now),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: u32,
    name: &str,
    email: &str,
    role: &str,
    status: UserStatus,
    last_active: Option<DateTime<Utc>>,
    department: &str,
    joined: (i32, u32, u32),
) -> User {
    let (year, month, day) = joined;
    User {
        id: format!("usr-{id}"),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status,
        last_active,
        department: department.to_string(),
        join_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

/// The six demo users.
#[must_use]
pub fn sample_users(now: DateTime<Utc>) -> Vec<User> {
    vec![
        user(
            1,
            "John Doe",
            "john.doe@example.com",
            "Admin",
            UserStatus::Active,
            Some(now - Duration::minutes(5)),
            "Engineering",
            (2023, 1, 15),
        ),
        user(
            2,
            "Sarah Johnson",
            "sarah.j@example.com",
            "Editor",
            UserStatus::Active,
            Some(now - Duration::minutes(30)),
            "Content",
            (2023, 3, 22),
        ),
        user(
            3,
            "Mike Williams",
            "mike.w@example.com",
            "Viewer",
            UserStatus::Active,
            Some(now - Duration::hours(2)),
            "Marketing",
            (2023, 6, 10),
        ),
        user(
            4,
            "Emily Chen",
            "emily.chen@example.com",
            "Editor",
            UserStatus::Inactive,
            Some(now - Duration::days(7)),
            "Design",
            (2023, 2, 28),
        ),
        user(
            5,
            "Alex Rodriguez",
            "alex.r@example.com",
            "Admin",
            UserStatus::Active,
            Some(now - Duration::minutes(15)),
            "Engineering",
            (2022, 11, 5),
        ),
        user(
            6,
            "Lisa Park",
            "lisa.park@example.com",
            "Viewer",
            UserStatus::Active,
            Some(now - Duration::minutes(45)),
            "Sales",
            (2023, 8, 18),
        ),
    ]
}

/// Raw audit event: id, action, user, email, age, details, severity, resource.
type EventSpec = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    Duration,
    &'static str,
    Severity,
    &'static str,
);

/// The eight demo audit events, newest first.
#[must_use]
pub fn sample_audit_logs(now: DateTime<Utc>) -> Vec<AuditLogEntry> {
    let events: [EventSpec; 8] = [
        (
            1,
            "user.login",
            "John Doe",
            "john.doe@example.com",
            Duration::minutes(5),
            "Successful login from 192.168.1.1",
            Severity::Info,
            "Authentication",
        ),
        (
            2,
            "project.create",
            "John Doe",
            "john.doe@example.com",
            Duration::minutes(15),
            "Created project: E-Commerce Platform Redesign",
            Severity::Info,
            "Projects",
        ),
        (
            3,
            "user.permission_change",
            "Admin",
            "admin@example.com",
            Duration::minutes(30),
            "Updated permissions for user: Sarah Johnson",
            Severity::Warning,
            "Users",
        ),
        (
            4,
            "settings.update",
            "Alex Rodriguez",
            "alex.r@example.com",
            Duration::hours(2),
            "Updated system notification settings",
            Severity::Info,
            "Settings",
        ),
        (
            5,
            "security.failed_login",
            "Unknown",
            "unknown@suspicious.com",
            Duration::hours(3),
            "Failed login attempt from IP: 45.33.22.11",
            Severity::Error,
            "Security",
        ),
        (
            6,
            "data.export",
            "Sarah Johnson",
            "sarah.j@example.com",
            Duration::hours(4),
            "Exported analytics data (CSV)",
            Severity::Info,
            "Analytics",
        ),
        (
            7,
            "user.create",
            "Admin",
            "admin@example.com",
            Duration::hours(6),
            "Created new user: Lisa Park",
            Severity::Info,
            "Users",
        ),
        (
            8,
            "api.rate_limit",
            "System",
            "system@meshpanel.com",
            Duration::hours(8),
            "Rate limit exceeded for API endpoint /api/analytics",
            Severity::Warning,
            "API",
        ),
    ];

    events
        .into_iter()
        .map(
            |(id, action, user, user_email, age, details, severity, resource)| AuditLogEntry {
                id: format!("log-{id}"),
                action: action.to_string(),
                user: user.to_string(),
                user_email: user_email.to_string(),
                timestamp: now - age,
                details: details.to_string(),
                severity,
                resource: resource.to_string(),
            },
        )
        .collect()
}
