//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration
//! in TOML format with platform-specific directory resolution.
//!
//! The display mode is not part of the config: it is owned by the theme
//! manager and lives in the preference storage under its own key.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{APP_NAME, CONFIG_DIR_ENV};
use crate::i18n::Language;

/// Page shown when the dashboard starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StartPage {
    /// User management table
    #[default]
    Users,
    /// Audit log table
    AuditLogs,
}

impl StartPage {
    /// Stable identifier used in the config file and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::AuditLogs => "audit-logs",
        }
    }
}

impl fmt::Display for StartPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartPage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "users" => Ok(Self::Users),
            "audit-logs" | "logs" => Ok(Self::AuditLogs),
            other => anyhow::bail!("Unknown start page '{other}'. Must be 'users' or 'audit-logs'"),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status bar
    #[serde(default = "default_show_help")]
    pub show_help_on_startup: bool,
    /// Interface language (also decides the text direction)
    #[serde(default)]
    pub language: Language,
    /// Page opened when the dashboard starts
    #[serde(default)]
    pub start_page: StartPage,
}

const fn default_show_help() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: default_show_help(),
            language: Language::default(),
            start_page: StartPage::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$MESHPANEL_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/MeshPanel/config.toml`
/// - macOS: `~/Library/Application Support/MeshPanel/config.toml`
/// - Windows: `%APPDATA%\MeshPanel\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `MESHPANEL_CONFIG_DIR` takes precedence over the platform directory:
    /// - Linux: `~/.config/MeshPanel/`
    /// - macOS: `~/Library/Application Support/MeshPanel/`
    /// - Windows: `%APPDATA%\MeshPanel\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}
