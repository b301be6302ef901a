//! Display mode state and style palettes.
//!
//! [`ThemeManager`] owns the active [`DisplayMode`], persists it, and hands
//! out the matching [`StylePalette`]. Presentation code never stores the
//! mode itself; it asks the manager or subscribes to changes.

pub mod manager;
pub mod palette;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use manager::{
    ColorSchemeSource, FixedColorScheme, RootAttributes, SubscriptionId, SystemColorScheme,
    ThemeManager,
};
pub use palette::{Rgba, StylePalette, DARK_PALETTE, LIGHT_PALETTE, ROLE_NAMES};

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Dark text on light surfaces
    #[default]
    Light,
    /// Light text on dark surfaces
    Dark,
}

impl DisplayMode {
    /// The persisted string form (`"light"` / `"dark"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Parses a persisted value. Only the exact strings written by
    /// [`DisplayMode::as_str`] are recognised.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = anyhow::Error;

    /// Lenient parsing for user input (case-insensitive, surrounding
    /// whitespace ignored).
    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::from_stored(s.trim().to_lowercase().as_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid display mode '{s}'. Must be 'light' or 'dark'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_involution() {
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
        assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_from_stored_is_strict() {
        assert_eq!(DisplayMode::from_stored("dark"), Some(DisplayMode::Dark));
        assert_eq!(DisplayMode::from_stored("light"), Some(DisplayMode::Light));
        assert_eq!(DisplayMode::from_stored("Dark"), None);
        assert_eq!(DisplayMode::from_stored("auto"), None);
        assert_eq!(DisplayMode::from_stored(""), None);
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!(" DARK ".parse::<DisplayMode>().unwrap(), DisplayMode::Dark);
        assert!("sepia".parse::<DisplayMode>().is_err());
    }
}
