//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed storage keys.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "MeshPanel";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "meshpanel";

/// Environment variable overriding the platform config directory.
pub const CONFIG_DIR_ENV: &str = "MESHPANEL_CONFIG_DIR";

/// Storage key owning the persisted display mode.
pub const THEME_STORAGE_KEY: &str = "themeMode";

/// Root presentation attribute mirroring the active display mode.
pub const THEME_ATTRIBUTE: &str = "data-theme";
