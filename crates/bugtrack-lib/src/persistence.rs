//! Key-value persistence for the bug collection.
//!
//! The whole collection is serialized as one JSON array and written to a
//! single fixed key. Reads fail soft; writes report their errors.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{BugTrackError, Result};
use crate::model::Bug;

/// Storage key holding the serialized bug collection.
pub const BUGS_STORAGE_KEY: &str = "bug-tracker-bugs";

/// A string-keyed get/set facility. No transactions, no versioning.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if `key` is empty or has characters outside
    /// `[A-Za-z0-9_-]`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(BugTrackError::Storage(format!("Invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BugTrackError::Io(e)),
        }
    }

    /// Writes a temp file, then renames it over the target.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// Reads and writes the bug collection under a fixed key.
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Adapter over `storage` using [`BUGS_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, BUGS_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Load the stored collection.
    ///
    /// Absent, unreadable or malformed data all yield an empty collection;
    /// the cause is logged, never returned.
    pub fn load(&self) -> Vec<Bug> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored bugs");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored bugs; starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Bug>>(&raw) {
            Ok(mut bugs) => {
                for bug in &mut bugs {
                    if bug.updated_at < bug.created_at {
                        bug.updated_at = bug.created_at;
                    }
                }
                debug!(key = %self.key, count = bugs.len(), "Loaded stored bugs");
                bugs
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored bugs are corrupt; starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with `bugs`.
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails, or the storage error if the
    /// write fails.
    pub fn save(&mut self, bugs: &[Bug]) -> Result<()> {
        let json = serde_json::to_string(bugs)?;
        self.storage.set(&self.key, &json).inspect_err(|e| {
            warn!(key = %self.key, error = %e, "Failed to persist bugs");
        })
    }
}
