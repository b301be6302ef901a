//! The two immutable style palettes.
//!
//! Palettes are authored once as `static` items and selected by
//! [`DisplayMode`]; nothing mutates them at runtime.

use serde::{Serialize, Serializer};
use std::fmt;

use super::DisplayMode;

/// An sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity in `0.0..=1.0`
    pub alpha: f32,
}

impl Rgba {
    /// Opaque colour from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            alpha: 1.0,
        }
    }

    /// Colour with explicit opacity.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Whether the colour has no transparency.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        (self.alpha - 1.0).abs() < f32::EPSILON
    }

    /// Composites this colour over an opaque `background`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn over(self, background: Self) -> Self {
        if self.is_opaque() {
            return self;
        }
        let alpha = self.alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha)).round() as u8
        };
        Self::rgba(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
            1.0,
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Main colour of a semantic role plus its tonal variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    /// Default tone
    pub main: Rgba,
    /// Lighter tone
    pub light: Rgba,
    /// Darker tone
    pub dark: Rgba,
    /// Foreground colour readable on `main`
    pub contrast_text: Rgba,
}

impl ColorSet {
    fn variant(&self, name: &str) -> Option<Rgba> {
        match name {
            "main" => Some(self.main),
            "light" => Some(self.light),
            "dark" => Some(self.dark),
            "contrastText" => Some(self.contrast_text),
            _ => None,
        }
    }
}

/// Surface colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundColors {
    /// Page background
    pub default: Rgba,
    /// Cards, tables and other raised surfaces
    pub paper: Rgba,
}

/// Text hierarchy colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextColors {
    /// Body text
    pub primary: Rgba,
    /// Labels and less important text
    pub secondary: Rgba,
    /// Disabled and placeholder text
    pub disabled: Rgba,
}

/// Interaction state colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionColors {
    /// Active icons
    pub active: Rgba,
    /// Hover overlay
    pub hover: Rgba,
    /// Selection overlay
    pub selected: Rgba,
    /// Disabled foreground
    pub disabled: Rgba,
    /// Disabled background
    pub disabled_background: Rgba,
}

/// Fixed mapping from semantic role names to colours.
#[derive(Debug, PartialEq, Serialize)]
pub struct StylePalette {
    /// Mode this palette belongs to
    pub mode: DisplayMode,
    /// Brand colour
    pub primary: ColorSet,
    /// Secondary accent
    pub secondary: ColorSet,
    /// Success states
    pub success: ColorSet,
    /// Warning states
    pub warning: ColorSet,
    /// Error states
    pub error: ColorSet,
    /// Informational states
    pub info: ColorSet,
    /// Surfaces
    pub background: BackgroundColors,
    /// Text hierarchy
    pub text: TextColors,
    /// Separator lines
    pub divider: Rgba,
    /// Interaction states
    pub action: ActionColors,
}

/// Palette used in light mode.
pub static LIGHT_PALETTE: StylePalette = StylePalette {
    mode: DisplayMode::Light,
    primary: ColorSet {
        main: Rgba::hex(0x0176D3),
        light: Rgba::hex(0x4A9CE8),
        dark: Rgba::hex(0x014486),
        contrast_text: Rgba::hex(0xFFFFFF),
    },
    secondary: ColorSet {
        main: Rgba::hex(0x5A67D8),
        light: Rgba::hex(0x818CF8),
        dark: Rgba::hex(0x3730A3),
        contrast_text: Rgba::hex(0xFFFFFF),
    },
    success: ColorSet {
        main: Rgba::hex(0x2E844A),
        light: Rgba::hex(0x4CAF6E),
        dark: Rgba::hex(0x1B5E20),
        contrast_text: Rgba::hex(0xFFFFFF),
    },
    warning: ColorSet {
        main: Rgba::hex(0xDD7A01),
        light: Rgba::hex(0xF5A623),
        dark: Rgba::hex(0xB65500),
        contrast_text: Rgba::hex(0xFFFFFF),
    },
    error: ColorSet {
        main: Rgba::hex(0xC23934),
        light: Rgba::hex(0xE57373),
        dark: Rgba::hex(0x8E0000),
        contrast_text: Rgba::hex(0xFFFFFF),
    },
    info: ColorSet {
        main: Rgba::hex(0x0694A2),
        light: Rgba::hex(0x4DB6AC),
        dark: Rgba::hex(0x006064),
        contrast_text: Rgba::hex(0xFFFFFF),
    },
    background: BackgroundColors {
        default: Rgba::hex(0xF8FAFC),
        paper: Rgba::hex(0xFFFFFF),
    },
    text: TextColors {
        primary: Rgba::hex(0x1E293B),
        secondary: Rgba::hex(0x64748B),
        disabled: Rgba::hex(0x94A3B8),
    },
    divider: Rgba::hex(0xE2E8F0),
    action: ActionColors {
        active: Rgba::hex(0x64748B),
        hover: Rgba::rgba(0, 0, 0, 0.04),
        selected: Rgba::rgba(1, 118, 211, 0.08),
        disabled: Rgba::hex(0xCBD5E1),
        disabled_background: Rgba::hex(0xF1F5F9),
    },
};

/// Palette used in dark mode.
pub static DARK_PALETTE: StylePalette = StylePalette {
    mode: DisplayMode::Dark,
    primary: ColorSet {
        main: Rgba::hex(0x5A9FDB),
        light: Rgba::hex(0x8ECAE6),
        dark: Rgba::hex(0x0176D3),
        contrast_text: Rgba::hex(0x0F172A),
    },
    secondary: ColorSet {
        main: Rgba::hex(0x7C86E2),
        light: Rgba::hex(0xA5B4FC),
        dark: Rgba::hex(0x5A67D8),
        contrast_text: Rgba::hex(0x0F172A),
    },
    success: ColorSet {
        main: Rgba::hex(0x4CAF6E),
        light: Rgba::hex(0x81C784),
        dark: Rgba::hex(0x2E844A),
        contrast_text: Rgba::hex(0x0F172A),
    },
    warning: ColorSet {
        main: Rgba::hex(0xF5A623),
        light: Rgba::hex(0xFFB74D),
        dark: Rgba::hex(0xDD7A01),
        contrast_text: Rgba::hex(0x0F172A),
    },
    error: ColorSet {
        main: Rgba::hex(0xE57373),
        light: Rgba::hex(0xEF9A9A),
        dark: Rgba::hex(0xC23934),
        contrast_text: Rgba::hex(0x0F172A),
    },
    info: ColorSet {
        main: Rgba::hex(0x4DB6AC),
        light: Rgba::hex(0x80CBC4),
        dark: Rgba::hex(0x0694A2),
        contrast_text: Rgba::hex(0x0F172A),
    },
    background: BackgroundColors {
        default: Rgba::hex(0x0F172A),
        paper: Rgba::hex(0x1E293B),
    },
    text: TextColors {
        primary: Rgba::hex(0xF1F5F9),
        secondary: Rgba::hex(0x94A3B8),
        disabled: Rgba::hex(0x64748B),
    },
    divider: Rgba::hex(0x334155),
    action: ActionColors {
        active: Rgba::hex(0x94A3B8),
        hover: Rgba::rgba(255, 255, 255, 0.08),
        selected: Rgba::rgba(90, 159, 219, 0.16),
        disabled: Rgba::hex(0x475569),
        disabled_background: Rgba::hex(0x1E293B),
    },
};

/// Every role name accepted by [`StylePalette::role`], in display order.
pub const ROLE_NAMES: [&str; 35] = [
    "primary.main",
    "primary.light",
    "primary.dark",
    "primary.contrastText",
    "secondary.main",
    "secondary.light",
    "secondary.dark",
    "secondary.contrastText",
    "success.main",
    "success.light",
    "success.dark",
    "success.contrastText",
    "warning.main",
    "warning.light",
    "warning.dark",
    "warning.contrastText",
    "error.main",
    "error.light",
    "error.dark",
    "error.contrastText",
    "info.main",
    "info.light",
    "info.dark",
    "info.contrastText",
    "background.default",
    "background.paper",
    "text.primary",
    "text.secondary",
    "text.disabled",
    "divider",
    "action.active",
    "action.hover",
    "action.selected",
    "action.disabled",
    "action.disabledBackground",
];

impl StylePalette {
    /// Returns the palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: DisplayMode) -> &'static Self {
        match mode {
            DisplayMode::Light => &LIGHT_PALETTE,
            DisplayMode::Dark => &DARK_PALETTE,
        }
    }

    /// Looks up a colour by its semantic role name.
    ///
    /// Accepts `primary` (the main tone), `primary.light`,
    /// `background.paper`, `text.secondary`, `divider`, `action.hover` and
    /// so on. Unknown roles yield `None`.
    #[must_use]
    pub fn role(&self, name: &str) -> Option<Rgba> {
        let (group, variant) = match name.split_once('.') {
            Some((group, variant)) => (group, Some(variant)),
            None => (name, None),
        };

        let color_set = match group {
            "primary" => Some(&self.primary),
            "secondary" => Some(&self.secondary),
            "success" => Some(&self.success),
            "warning" => Some(&self.warning),
            "error" => Some(&self.error),
            "info" => Some(&self.info),
            _ => None,
        };
        if let Some(set) = color_set {
            return set.variant(variant.unwrap_or("main"));
        }

        match (group, variant) {
            ("divider", None) => Some(self.divider),
            ("background", Some("default")) => Some(self.background.default),
            ("background", Some("paper")) => Some(self.background.paper),
            ("text", Some("primary")) => Some(self.text.primary),
            ("text", Some("secondary")) => Some(self.text.secondary),
            ("text", Some("disabled")) => Some(self.text.disabled),
            ("action", Some("active")) => Some(self.action.active),
            ("action", Some("hover")) => Some(self.action.hover),
            ("action", Some("selected")) => Some(self.action.selected),
            ("action", Some("disabled")) => Some(self.action.disabled),
            ("action", Some("disabledBackground")) => Some(self.action.disabled_background),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_constructor() {
        let c = Rgba::hex(0x0176D3);
        assert_eq!((c.r, c.g, c.b), (0x01, 0x76, 0xD3));
        assert!(c.is_opaque());
    }

    #[test]
    fn test_css_formatting() {
        assert_eq!(Rgba::hex(0x0176D3).to_string(), "#0176D3");
        assert_eq!(Rgba::rgba(0, 0, 0, 0.04).to_string(), "rgba(0, 0, 0, 0.04)");
    }

    #[test]
    fn test_over_blends_translucent_colours() {
        let white = Rgba::hex(0xFFFFFF);
        let half_black = Rgba::rgba(0, 0, 0, 0.5);
        let blended = half_black.over(white);
        assert!(blended.is_opaque());
        assert_eq!((blended.r, blended.g, blended.b), (128, 128, 128));

        let opaque = Rgba::hex(0x123456);
        assert_eq!(opaque.over(white), opaque);
    }

    #[test]
    fn test_for_mode_selects_matching_palette() {
        assert_eq!(StylePalette::for_mode(DisplayMode::Light).mode, DisplayMode::Light);
        assert_eq!(StylePalette::for_mode(DisplayMode::Dark).mode, DisplayMode::Dark);
        assert!(std::ptr::eq(
            StylePalette::for_mode(DisplayMode::Dark),
            &DARK_PALETTE
        ));
    }

    #[test]
    fn test_role_lookup() {
        let light = &LIGHT_PALETTE;
        assert_eq!(light.role("primary"), Some(Rgba::hex(0x0176D3)));
        assert_eq!(light.role("primary.dark"), Some(Rgba::hex(0x014486)));
        assert_eq!(light.role("error.contrastText"), Some(Rgba::hex(0xFFFFFF)));
        assert_eq!(light.role("background.default"), Some(Rgba::hex(0xF8FAFC)));
        assert_eq!(light.role("text.disabled"), Some(Rgba::hex(0x94A3B8)));
        assert_eq!(light.role("divider"), Some(Rgba::hex(0xE2E8F0)));
        assert_eq!(
            light.role("action.disabledBackground"),
            Some(Rgba::hex(0xF1F5F9))
        );
        assert_eq!(light.role("background"), None);
        assert_eq!(light.role("primary.unknown"), None);
        assert_eq!(light.role("accent"), None);
    }

    #[test]
    fn test_every_role_name_resolves() {
        for palette in [&LIGHT_PALETTE, &DARK_PALETTE] {
            for name in ROLE_NAMES {
                assert!(palette.role(name).is_some(), "role {name} missing");
            }
        }
    }

    #[test]
    fn test_palettes_contrast() {
        // Light mode: dark text on a light page, dark mode the reverse
        assert_eq!(LIGHT_PALETTE.background.default, Rgba::hex(0xF8FAFC));
        assert_eq!(LIGHT_PALETTE.text.primary, Rgba::hex(0x1E293B));
        assert_eq!(DARK_PALETTE.background.default, Rgba::hex(0x0F172A));
        assert_eq!(DARK_PALETTE.text.primary, Rgba::hex(0xF1F5F9));
        assert_ne!(LIGHT_PALETTE, DARK_PALETTE);
    }

    #[test]
    fn test_palette_serializes_css_strings() {
        let json = serde_json::to_value(&DARK_PALETTE).unwrap();
        assert_eq!(json["mode"], "dark");
        assert_eq!(json["primary"]["contrastText"], "#0F172A");
        assert_eq!(json["action"]["hover"], "rgba(255, 255, 255, 0.08)");
        assert_eq!(json["background"]["paper"], "#1E293B");
    }
}
