//! Team member records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Searchable;
use crate::filter::RecordFilter;

/// Roles a user can hold, in menu order.
pub const USER_ROLES: [&str; 3] = ["Admin", "Editor", "Viewer"];

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account in use
    Active,
    /// Account suspended or dormant
    Inactive,
}

impl UserStatus {
    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// A dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier (`usr-N`)
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// One of [`USER_ROLES`]
    pub role: String,
    /// Account status
    pub status: UserStatus,
    /// Last sign-in, `None` if the user never signed in
    pub last_active: Option<DateTime<Utc>>,
    /// Department name
    pub department: String,
    /// Date the user joined
    pub join_date: NaiveDate,
}

impl User {
    /// Relative "last active" label (`Just now`, `5m ago`, `2h ago`, `7d ago`).
    ///
    /// Returns `None` for users that never signed in so callers can show a
    /// localised "never".
    #[must_use]
    pub fn last_active_label(&self, now: DateTime<Utc>) -> Option<String> {
        self.last_active.map(|at| format_relative(at, now))
    }
}

/// Headline totals shown above the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UserCounts {
    /// All users
    pub total: usize,
    /// Users with an active account
    pub active: usize,
    /// Users holding the `Admin` role
    pub admins: usize,
}

impl UserCounts {
    /// Counts the users by status and role.
    pub fn tally<'a>(users: impl IntoIterator<Item = &'a User>) -> Self {
        users.into_iter().fold(Self::default(), |mut counts, user| {
            counts.total += 1;
            if user.status == UserStatus::Active {
                counts.active += 1;
            }
            if user.role == USER_ROLES[0] {
                counts.admins += 1;
            }
            counts
        })
    }
}

/// Formats the distance from `at` to `now` the way the users table shows it.
#[must_use]
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{days}d ago")
    }
}

fn name(user: &User) -> &str {
    &user.name
}

fn email(user: &User) -> &str {
    &user.email
}

fn department(user: &User) -> &str {
    &user.department
}

fn role(user: &User) -> &str {
    &user.role
}

impl Searchable for User {
    fn record_filter() -> RecordFilter<Self> {
        RecordFilter::new()
            .search_field(name)
            .search_field(email)
            .search_field(department)
            .category_field(role)
    }
}
