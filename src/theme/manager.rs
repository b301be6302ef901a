//! Process-wide display mode manager.
//!
//! The application creates exactly one [`ThemeManager`] at startup and owns
//! it for the lifetime of the process. Every mode change (including the
//! initial resolution) is persisted best-effort, mirrored into the
//! `data-theme` root attribute and broadcast to subscribers.

use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, warn};

use super::{DisplayMode, StylePalette};
use crate::constants::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::storage::Storage;

/// Source of the environment's preferred colour scheme.
pub trait ColorSchemeSource {
    /// `Some(true)` if the environment prefers dark, `Some(false)` if it
    /// prefers light, `None` if it offers no signal.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Queries the desktop environment through the `dark-light` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(true),
            Ok(dark_light::Mode::Light) => Some(false),
            Ok(dark_light::Mode::Unspecified) => None,
            Err(e) => {
                debug!("Colour scheme detection failed: {e}");
                None
            }
        }
    }
}

/// A fixed answer, for tests and headless environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Attributes on the root presentation context.
///
/// Styling that is not driven by the manager directly (status lines,
/// exported snapshots) reads `data-theme` from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootAttributes {
    attributes: BTreeMap<String, String>,
}

impl RootAttributes {
    /// Value of the attribute `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets the attribute `name`.
    pub fn set(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// Handle returned by [`ThemeManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(DisplayMode, &'static StylePalette)>;

/// Owner of the active display mode.
pub struct ThemeManager {
    mode: DisplayMode,
    storage: Box<dyn Storage>,
    root: RootAttributes,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("mode", &self.mode)
            .field("root", &self.root)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl ThemeManager {
    /// Resolves the initial mode and applies it.
    ///
    /// Resolution order: the stored preference, then the environment's
    /// colour scheme, then [`DisplayMode::Light`].
    pub fn init(storage: Box<dyn Storage>, scheme: &dyn ColorSchemeSource) -> Self {
        let mode = Self::resolve_initial_mode(storage.as_ref(), scheme);
        let mut manager = Self {
            mode,
            storage,
            root: RootAttributes::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        manager.apply();
        info!("Display mode initialised to {mode}");
        manager
    }

    /// The resolution chain used by [`ThemeManager::init`], without side effects.
    #[must_use]
    pub fn resolve_initial_mode(
        storage: &dyn Storage,
        scheme: &dyn ColorSchemeSource,
    ) -> DisplayMode {
        if let Some(stored) = storage.get(THEME_STORAGE_KEY) {
            match DisplayMode::from_stored(&stored) {
                Some(mode) => return mode,
                None => debug!("Ignoring unrecognised stored display mode '{stored}'"),
            }
        }

        match scheme.prefers_dark() {
            Some(true) => DisplayMode::Dark,
            Some(false) | None => DisplayMode::Light,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Whether the dark mode is active.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Palette for the current mode.
    #[must_use]
    pub fn palette(&self) -> &'static StylePalette {
        StylePalette::for_mode(self.mode)
    }

    /// Flips between light and dark and returns the new mode.
    pub fn toggle(&mut self) -> DisplayMode {
        self.set_mode(self.mode.toggled())
    }

    /// Switches to `mode` and returns it.
    ///
    /// The value is persisted and mirrored even when it equals the current
    /// mode; subscribers are only notified on an actual change.
    pub fn set_mode(&mut self, mode: DisplayMode) -> DisplayMode {
        let changed = mode != self.mode;
        self.mode = mode;
        self.apply();

        if changed {
            debug!("Display mode changed to {mode}");
            self.notify();
        }

        self.mode
    }

    /// Registers a callback invoked after every mode change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(DisplayMode, &'static StylePalette) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Root presentation attributes (`data-theme` holds the mode).
    #[must_use]
    pub fn root_attributes(&self) -> &RootAttributes {
        &self.root
    }

    /// The storage the mode is persisted to.
    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    fn apply(&mut self) {
        let value = self.mode.as_str();

        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, value) {
            warn!("Failed to persist display mode '{value}': {e:#}");
        }

        self.root.set(THEME_ATTRIBUTE, value);
    }

    fn notify(&mut self) {
        let mode = self.mode;
        let palette = StylePalette::for_mode(mode);
        for (_, callback) in &mut self.subscribers {
            callback(mode, palette);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::theme::{DARK_PALETTE, LIGHT_PALETTE};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Storage whose writes always fail.
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("storage unavailable")
        }
    }

    fn manager_with(stored: Option<&str>, prefers_dark: Option<bool>) -> ThemeManager {
        let storage = match stored {
            Some(value) => MemoryStorage::with_entry(THEME_STORAGE_KEY, value),
            None => MemoryStorage::new(),
        };
        ThemeManager::init(Box::new(storage), &FixedColorScheme(prefers_dark))
    }

    #[test]
    fn test_init_prefers_stored_value() {
        assert_eq!(manager_with(Some("light"), Some(true)).mode(), DisplayMode::Light);
        assert_eq!(manager_with(Some("dark"), Some(false)).mode(), DisplayMode::Dark);
    }

    #[test]
    fn test_init_falls_back_to_environment() {
        assert_eq!(manager_with(None, Some(true)).mode(), DisplayMode::Dark);
        assert_eq!(manager_with(None, Some(false)).mode(), DisplayMode::Light);
    }

    #[test]
    fn test_init_defaults_to_light_without_signal() {
        assert_eq!(manager_with(None, None).mode(), DisplayMode::Light);
    }

    #[test]
    fn test_init_unrecognised_stored_value_is_absent() {
        assert_eq!(manager_with(Some("sepia"), Some(true)).mode(), DisplayMode::Dark);
        assert_eq!(manager_with(Some("DARK"), None).mode(), DisplayMode::Light);
    }

    #[test]
    fn test_init_persists_and_mirrors_resolved_mode() {
        let manager = manager_with(None, Some(true));
        assert_eq!(
            manager.storage().get(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );
        assert_eq!(manager.root_attributes().get(THEME_ATTRIBUTE), Some("dark"));
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mut manager = manager_with(Some("light"), None);

        assert_eq!(manager.toggle(), DisplayMode::Dark);
        assert_eq!(manager.mode(), DisplayMode::Dark);
        assert!(manager.is_dark());
        assert_eq!(
            manager.storage().get(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );
        assert_eq!(manager.root_attributes().get(THEME_ATTRIBUTE), Some("dark"));

        assert_eq!(manager.toggle(), DisplayMode::Light);
        assert_eq!(
            manager.storage().get(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_double_toggle_restores_mode() {
        for start in ["light", "dark"] {
            let mut manager = manager_with(Some(start), None);
            let original = manager.mode();
            manager.toggle();
            manager.toggle();
            assert_eq!(manager.mode(), original);
        }
    }

    #[test]
    fn test_palette_follows_mode() {
        let mut manager = manager_with(Some("light"), None);
        assert!(std::ptr::eq(manager.palette(), &LIGHT_PALETTE));

        manager.toggle();
        assert!(std::ptr::eq(manager.palette(), &DARK_PALETTE));
        assert_eq!(manager.palette().mode, manager.mode());
    }

    #[test]
    fn test_storage_failure_keeps_in_memory_mode() {
        let mut manager = ThemeManager::init(Box::new(BrokenStorage), &FixedColorScheme(None));
        assert_eq!(manager.mode(), DisplayMode::Light);

        assert_eq!(manager.toggle(), DisplayMode::Dark);
        assert_eq!(manager.mode(), DisplayMode::Dark);
        assert_eq!(manager.root_attributes().get(THEME_ATTRIBUTE), Some("dark"));
    }

    #[test]
    fn test_subscribers_notified_on_change() {
        let mut manager = manager_with(Some("light"), None);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = manager.subscribe(move |mode, palette| {
            sink.borrow_mut().push((mode, palette.mode));
        });

        manager.toggle();
        manager.toggle();
        assert_eq!(
            *seen.borrow(),
            vec![
                (DisplayMode::Dark, DisplayMode::Dark),
                (DisplayMode::Light, DisplayMode::Light)
            ]
        );

        assert!(manager.unsubscribe(id));
        assert!(!manager.unsubscribe(id));
        manager.toggle();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_set_mode_same_value_does_not_notify() {
        let mut manager = manager_with(Some("dark"), None);
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        manager.subscribe(move |_, _| *counter.borrow_mut() += 1);

        assert_eq!(manager.set_mode(DisplayMode::Dark), DisplayMode::Dark);
        assert_eq!(*count.borrow(), 0);

        manager.set_mode(DisplayMode::Light);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_system_scheme_does_not_panic() {
        // The answer depends on the host; only the call itself is checked
        let _ = SystemColorScheme.prefers_dark();
    }
}
