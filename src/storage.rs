//! Durable key/value preference storage.
//!
//! The theme manager only needs `get`/`set` on string values. The file
//! backend keeps a flat TOML table next to `config.toml`; the memory backend
//! serves tests and sessions where no config directory can be resolved.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;

/// Key/value persistence surface.
pub trait Storage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage. Values vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML-file storage.
///
/// The file is read once when opened; every `set` rewrites it atomically.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the default storage file (`storage.toml` in the config directory).
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Config::config_dir()?.join("storage.toml")))
    }

    /// Opens the storage file at `path`.
    ///
    /// A missing or unreadable file yields an empty store: stored preferences
    /// are a convenience and never block startup.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable storage file {}: {e:#}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            debug!("No storage file at {}", path.display());
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read storage file: {}", path.display()))?;

        toml::from_str(&content)
            .context(format!("Failed to parse storage file: {}", path.display()))
    }

    fn write_entries(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create storage directory: {}", dir.display()))?;
        }

        let content =
            toml::to_string_pretty(&self.entries).context("Failed to serialize storage")?;
        let temp_path = self.path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp storage file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp storage file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write_entries()
    }
}

/// Opens the default preference file, or a session-only memory store when
/// no config directory can be resolved.
#[must_use]
pub fn preference_storage() -> Box<dyn Storage> {
    storage_or_memory(FileStorage::open_default())
}

fn storage_or_memory(opened: Result<FileStorage>) -> Box<dyn Storage> {
    match opened {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!("Preferences will not persist: {e:#}");
            Box::new(MemoryStorage::new())
        }
    }
}
