//! Display mode CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::constants::THEME_ATTRIBUTE;
use crate::storage::preference_storage;
use crate::theme::{DisplayMode, StylePalette, SystemColorScheme, ThemeManager, ROLE_NAMES};

/// Display mode commands
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Show the active display mode
    Show(ThemeShowArgs),
    /// Switch between light and dark
    Toggle(ThemeToggleArgs),
    /// Set the display mode explicitly
    Set(ThemeSetArgs),
    /// Print the style palette of a display mode
    Palette(ThemePaletteArgs),
}

/// Show the active display mode
#[derive(Args, Debug)]
pub struct ThemeShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Switch between light and dark
#[derive(Args, Debug)]
pub struct ThemeToggleArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set the display mode explicitly
#[derive(Args, Debug)]
pub struct ThemeSetArgs {
    /// Display mode (light or dark)
    #[arg(value_name = "MODE")]
    mode: String,
}

/// Print the style palette of a display mode
#[derive(Args, Debug)]
pub struct ThemePaletteArgs {
    /// Display mode whose palette to print (defaults to the active one)
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable mode status
#[derive(Serialize, Debug)]
struct ThemeStatus {
    mode: DisplayMode,
    is_dark: bool,
    data_theme: Option<String>,
}

impl ThemeStatus {
    fn of(manager: &ThemeManager) -> Self {
        Self {
            mode: manager.mode(),
            is_dark: manager.is_dark(),
            data_theme: manager
                .root_attributes()
                .get(THEME_ATTRIBUTE)
                .map(str::to_string),
        }
    }

    fn print(&self, json: bool) -> CliResult<()> {
        if json {
            print_json(self)
        } else {
            println!("Display mode: {}", self.mode);
            Ok(())
        }
    }
}

/// Opens the persisted preference and resolves the active mode.
fn open_manager() -> ThemeManager {
    ThemeManager::init(preference_storage(), &SystemColorScheme)
}

fn parse_mode(value: &str) -> CliResult<DisplayMode> {
    value
        .parse()
        .map_err(|_| CliError::validation("Invalid display mode. Must be 'light' or 'dark'"))
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ThemeCommand::Show(args) => args.execute(),
            ThemeCommand::Toggle(args) => args.execute(),
            ThemeCommand::Set(args) => args.execute(),
            ThemeCommand::Palette(args) => args.execute(),
        }
    }
}

impl ThemeShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let manager = open_manager();
        ThemeStatus::of(&manager).print(self.json)
    }
}

impl ThemeToggleArgs {
    /// Execute toggle command
    pub fn execute(&self) -> CliResult<()> {
        let mut manager = open_manager();
        manager.toggle();
        ThemeStatus::of(&manager).print(self.json)
    }
}

impl ThemeSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mode = parse_mode(&self.mode)?;
        let mut manager = open_manager();
        manager.set_mode(mode);
        println!("Display mode set to {mode}.");
        Ok(())
    }
}

impl ThemePaletteArgs {
    /// Execute palette command
    pub fn execute(&self) -> CliResult<()> {
        let palette = match &self.mode {
            Some(value) => StylePalette::for_mode(parse_mode(value)?),
            None => open_manager().palette(),
        };

        if self.json {
            return print_json(palette);
        }

        println!("Palette: {}", palette.mode);
        println!();
        for name in ROLE_NAMES {
            if let Some(color) = palette.role(name) {
                println!("  {name:<28} {color}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("Light").unwrap(), DisplayMode::Light);
        assert_eq!(parse_mode("dark").unwrap(), DisplayMode::Dark);
        let err = parse_mode("auto").unwrap_err();
        assert_eq!(err.code, crate::cli::common::ExitCode::ValidationError);
    }
}
