//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, StartPage};
use crate::i18n::Language;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Interface language (ar or en)
    #[arg(long, value_name = "LANG")]
    language: Option<String>,

    /// Page opened at startup (users or audit-logs)
    #[arg(long, value_name = "PAGE")]
    start_page: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    language: String,
    direction: String,
    start_page: String,
    show_help_on_startup: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            output_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.language.is_none() && self.start_page.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --language or --start-page",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(value) = &self.language {
            config.ui.language = value
                .parse::<Language>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(value) = &self.start_page {
            config.ui.start_page = value
                .parse::<StartPage>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn direction_name(language: Language) -> &'static str {
    match language.direction() {
        crate::i18n::TextDirection::Ltr => "ltr",
        crate::i18n::TextDirection::Rtl => "rtl",
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    print_json(&ConfigOutput {
        ui: UiOutput {
            language: config.ui.language.code().to_string(),
            direction: direction_name(config.ui.language).to_string(),
            start_page: config.ui.start_page.to_string(),
            show_help_on_startup: config.ui.show_help_on_startup,
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("MeshPanel Configuration");
    println!("=======================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("UI:");
    println!(
        "  Language: {} ({})",
        config.ui.language,
        direction_name(config.ui.language)
    );
    println!("  Start Page: {}", config.ui.start_page);
    println!("  Show Help On Startup: {}", config.ui.show_help_on_startup);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_name() {
        assert_eq!(direction_name(Language::Arabic), "rtl");
        assert_eq!(direction_name(Language::English), "ltr");
    }
}
