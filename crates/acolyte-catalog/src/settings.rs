//! Key-value settings persistence
//!
//! The page persists one small blob (the visited-demo list). It goes through
//! [`SettingsStore`] so the backing can be a JSON file on disk or, for tests
//! and `--memory` runs, a map in memory.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::SettingsError;

/// A durable string key-value store.
///
/// Calls are synchronous and expected to be fast. Implementations use
/// interior mutability so a store can be shared behind an `Arc`.
pub trait SettingsStore: Send + Sync + Debug {
    /// Reads a value, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Non-durable store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.write().insert(key.into(), value.into());
        store
    }
}

#[cfg(test)]
impl MemorySettingsStore {
    fn len(&self) -> usize {
        self.values.read().len()
    }

    fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that keeps every key in one JSON object on disk.
///
/// The file is read once on open. Each `set` rewrites the whole document to a
/// temporary file and renames it over the original.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileSettingsStore {
    /// Name of the settings document inside the data directory.
    pub const FILE_NAME: &'static str = "settings.json";

    /// Open (or create) the settings document in `dir`.
    ///
    /// A document that cannot be parsed is logged and treated as empty; it is
    /// replaced on the next write.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(Self::FILE_NAME);

        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(values) => {
                    debug!(path = %path.display(), keys = values.len(), "Loaded settings");
                    values
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Settings file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Path of the settings document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, values: &BTreeMap<String, String>) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(values)
            .map_err(|e| SettingsError::serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut values = self.values.write();
        values.insert(key.to_string(), value.to_string());
        self.write_document(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let store = MemorySettingsStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_with_entry() {
        let store = MemorySettingsStore::with_entry("k", "[]");
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = FileSettingsStore::open(dir.path()).unwrap();
            store.set("acolyte-visited-demos", r#"["a"]"#).unwrap();
            store.set("other", "x").unwrap();
        }

        let reopened = FileSettingsStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("acolyte-visited-demos").unwrap().as_deref(),
            Some(r#"["a"]"#)
        );
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
        assert!(!dir.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn test_file_store_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileSettingsStore::open(&nested).unwrap();
        assert_eq!(store.get("missing").unwrap(), None);
        store.set("k", "v").unwrap();
        assert!(nested.join(FileSettingsStore::FILE_NAME).exists());
    }

    #[test]
    fn test_file_store_corrupt_document_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FileSettingsStore::FILE_NAME), "{not json").unwrap();

        let store = FileSettingsStore::open(dir.path()).unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        let reopened = FileSettingsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }
}
