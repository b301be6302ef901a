//! User list CLI command.

use chrono::Utc;
use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::data::SampleData;
use crate::filter::{FilterQuery, ALL_CATEGORIES};
use crate::i18n::Language;
use crate::models::{Searchable, User, UserCounts, USER_ROLES};

/// List users, optionally filtered
#[derive(Args, Debug)]
pub struct UsersArgs {
    /// Case-insensitive text searched in name, email and department
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Role to show (Admin, Editor, Viewer, or all)
    #[arg(short, long, value_name = "ROLE", default_value = ALL_CATEGORIES)]
    role: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable user listing
#[derive(Serialize, Debug)]
struct UsersOutput<'a> {
    total: usize,
    shown: usize,
    counts: UserCounts,
    users: Vec<&'a User>,
}

impl UsersArgs {
    /// Execute users command
    pub fn execute(&self) -> CliResult<()> {
        validate_role(&self.role)?;

        let data = SampleData::generate(Utc::now());
        let query = FilterQuery::new(&self.search, &self.role);
        let users = User::record_filter().apply(&data.users, &query);
        let counts = UserCounts::tally(&data.users);

        if self.json {
            return print_json(&UsersOutput {
                total: data.users.len(),
                shown: users.len(),
                counts,
                users,
            });
        }

        println!(
            "Total: {}  Active: {}  Admins: {}",
            counts.total, counts.active, counts.admins
        );
        println!();

        let strings = Language::English.strings();
        let [user_col, role_col, department_col, status_col, last_active_col, _] =
            strings.user_columns;
        println!(
            "{user_col:<18} {:<26} {role_col:<8} {department_col:<12} {status_col:<9} {last_active_col}",
            "Email"
        );
        for user in &users {
            let last_active = user
                .last_active_label(data.generated_at)
                .unwrap_or_else(|| strings.never.to_string());
            println!(
                "{:<18} {:<26} {:<8} {:<12} {:<9} {}",
                user.name,
                user.email,
                user.role,
                user.department,
                user.status.as_str(),
                last_active
            );
        }
        println!();
        println!("{}", strings.showing(users.len(), data.users.len()));

        Ok(())
    }
}

fn validate_role(role: &str) -> CliResult<()> {
    if role == ALL_CATEGORIES || USER_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "Invalid role '{role}'. Must be one of: all, {}",
            USER_ROLES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_role() {
        assert!(validate_role("all").is_ok());
        assert!(validate_role("Admin").is_ok());
        // Categories match exactly, so lowercase role names are rejected up front
        assert!(validate_role("admin").is_err());
        assert!(validate_role("Owner").is_err());
    }
}
