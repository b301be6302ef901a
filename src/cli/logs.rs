//! Audit log CLI command.

use chrono::Utc;
use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::data::SampleData;
use crate::filter::{FilterQuery, ALL_CATEGORIES};
use crate::i18n::Language;
use crate::models::{AuditLogEntry, Searchable, Severity, SeverityCounts};

/// List audit log events, optionally filtered
#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Case-insensitive text searched in action, user, details and resource
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Severity to show (info, warning, error, or all)
    #[arg(long, value_name = "SEVERITY", default_value = ALL_CATEGORIES)]
    severity: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable audit listing
#[derive(Serialize, Debug)]
struct LogsOutput<'a> {
    total: usize,
    shown: usize,
    counts: SeverityCounts,
    entries: Vec<&'a AuditLogEntry>,
}

impl LogsArgs {
    /// Execute logs command
    pub fn execute(&self) -> CliResult<()> {
        if self.severity != ALL_CATEGORIES {
            self.severity
                .parse::<Severity>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        let data = SampleData::generate(Utc::now());
        let query = FilterQuery::new(&self.search, &self.severity);
        let entries = AuditLogEntry::record_filter().apply(&data.audit_logs, &query);
        let counts = SeverityCounts::tally(&data.audit_logs);

        if self.json {
            return print_json(&LogsOutput {
                total: data.audit_logs.len(),
                shown: entries.len(),
                counts,
                entries,
            });
        }

        println!(
            "Total: {}  Errors: {}  Warnings: {}  Info: {}",
            counts.total, counts.error, counts.warning, counts.info
        );
        println!();

        let strings = Language::English.strings();
        let [action_col, user_col, resource_col, severity_col, time_col] = strings.log_columns;
        println!("{action_col:<24} {user_col:<16} {resource_col:<16} {severity_col:<9} {time_col}");
        for entry in &entries {
            println!(
                "{:<24} {:<16} {:<16} {:<9} {}",
                entry.action,
                entry.user,
                entry.resource,
                entry.severity.label(),
                entry.formatted_timestamp()
            );
            println!("    {}", entry.details);
        }
        println!();
        println!("{}", strings.showing(entries.len(), data.audit_logs.len()));

        Ok(())
    }
}
