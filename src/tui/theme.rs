//! Terminal colour theme derived from the active style palette.
//!
//! The TUI never caches colours across mode changes: [`Theme::from_palette`]
//! is a handful of field copies and runs once per frame.

use ratatui::style::Color;

use crate::models::Severity;
use crate::theme::{DisplayMode, Rgba, StylePalette};

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color.r, color.g, color.b)
    }
}

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components for both display
/// modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Mode the theme was derived for
    pub mode: DisplayMode,

    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights and the active filter
    pub accent: Color,
    /// Success state color
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Warning state color
    pub warning: Color,
    /// Informational state color
    pub info: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for placeholders and disabled items
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Surface color for tables and panels
    pub surface: Color,
    /// Selected row background color
    pub highlight_bg: Color,
    /// Border and separator color
    pub divider: Color,

    // State indicators
    /// Active/focused element color
    pub active: Color,
    /// Inactive/disabled element color
    pub inactive: Color,
}

impl Theme {
    /// Maps a style palette onto terminal colours.
    ///
    /// Translucent action colours are composited over the paper surface,
    /// since terminals have no alpha channel.
    #[must_use]
    pub fn from_palette(palette: &StylePalette) -> Self {
        let paper = palette.background.paper;
        Self {
            mode: palette.mode,

            primary: palette.primary.main.into(),
            accent: palette.secondary.main.into(),
            success: palette.success.main.into(),
            error: palette.error.main.into(),
            warning: palette.warning.main.into(),
            info: palette.info.main.into(),

            text: palette.text.primary.into(),
            text_secondary: palette.text.secondary.into(),
            text_muted: palette.text.disabled.into(),

            background: palette.background.default.into(),
            surface: paper.into(),
            highlight_bg: palette.action.selected.over(paper).into(),
            divider: palette.divider.into(),

            active: palette.primary.main.into(),
            inactive: palette.action.disabled.into(),
        }
    }

    /// Theme for an explicit mode.
    #[must_use]
    pub fn for_mode(mode: DisplayMode) -> Self {
        Self::from_palette(StylePalette::for_mode(mode))
    }

    /// Colour used for a severity chip.
    #[must_use]
    pub const fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    /// Colour used for a role chip.
    #[must_use]
    pub fn role_color(&self, role: &str) -> Color {
        match role.to_lowercase().as_str() {
            "admin" => self.error,
            "editor" => self.primary,
            _ => self.text_secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::for_mode(DisplayMode::Dark);
        assert_eq!(theme.mode, DisplayMode::Dark);
        assert_eq!(theme.background, Color::Rgb(0x0F, 0x17, 0x2A));
        assert_eq!(theme.text, Color::Rgb(0xF1, 0xF5, 0xF9));
        assert_eq!(theme.primary, Color::Rgb(0x5A, 0x9F, 0xDB));
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::for_mode(DisplayMode::Light);
        assert_eq!(theme.background, Color::Rgb(0xF8, 0xFA, 0xFC));
        assert_eq!(theme.text, Color::Rgb(0x1E, 0x29, 0x3B));
        assert_eq!(theme.surface, Color::Rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_highlight_is_blended_over_surface() {
        let theme = Theme::for_mode(DisplayMode::Light);
        // 8% of #0176D3 over white
        assert_eq!(theme.highlight_bg, Color::Rgb(235, 244, 251));
        assert_ne!(theme.highlight_bg, theme.surface);
    }

    #[test]
    fn test_modes_differ() {
        assert_ne!(
            Theme::for_mode(DisplayMode::Light),
            Theme::for_mode(DisplayMode::Dark)
        );
    }

    #[test]
    fn test_semantic_colors_present() {
        let theme = Theme::for_mode(DisplayMode::Dark);
        assert_ne!(theme.success, theme.error);
        assert_ne!(theme.primary, theme.accent);
        assert_ne!(theme.text, theme.text_muted);
        assert_eq!(theme.severity_color(Severity::Error), theme.error);
        assert_eq!(theme.role_color("Admin"), theme.error);
        assert_eq!(theme.role_color("Viewer"), theme.text_secondary);
    }
}
