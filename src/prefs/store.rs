//! Preference persistence
//!
//! [`PreferenceStore`] reads and writes the single [`Preferences`]
//! record through a [`KeyValueStore`] backend, the analog of the host
//! browser's key-value storage. A missing or unreadable record degrades
//! to defaults; a failed write is logged and swallowed. Nothing here
//! propagates a hard failure to the caller.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use super::Preferences;

/// Storage key for the preferences record
pub const PREFS_KEY: &str = "coastalAlertPreferences";

/// Errors internal to the persistence backends
///
/// These never escape [`PreferenceStore`]; they exist so backends can
/// report failures for logging.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Synchronous key-value persistence, the localStorage analog
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any prior value
    fn put(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// File-backed store: one `<key>.json` file per key under a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the user's config directory
    /// (`<config_dir>/coastwatch`), falling back to the working
    /// directory when the platform reports no config dir
    pub fn default_location() -> Self {
        let dir = dirs::config_dir()
            .map(|p| p.join("coastwatch"))
            .unwrap_or_else(|| PathBuf::from("./coastwatch_data"));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

/// Reads and writes the singleton preferences record
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Store backed by the default preferences file location
    pub fn default_location() -> Self {
        Self::new(FileStore::default_location())
    }

    /// Load the preferences record
    ///
    /// A missing key yields the default record; a record that parses
    /// but omits fields fills them in field-by-field via serde
    /// defaults; malformed JSON is logged and replaced wholesale with
    /// defaults. Never fails outward.
    pub fn load(&self) -> Preferences {
        match self.backend.get(PREFS_KEY) {
            None => Preferences::default(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!(error = %e, "Stored preferences unreadable, using defaults");
                    Preferences::default()
                }
            },
        }
    }

    /// Persist the full preferences record, overwriting any prior value
    ///
    /// Persistence failure is logged as a non-fatal warning. Field
    /// values are not validated here; that belongs to the caller.
    pub fn save(&self, prefs: &Preferences) {
        let raw = match serde_json::to_string(prefs) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Unable to serialize preferences");
                return;
            }
        };
        if let Err(e) = self.backend.put(PREFS_KEY, &raw) {
            tracing::warn!(error = %e, "Unable to save preferences");
        }
    }
}
