//! Durable view preferences.
//!
//! Two string entries, `groupBy` and `sortBy`, hold the literal mode labels.
//! Reads never validate: whatever string is stored comes back as-is and the
//! engines degrade on it. Writes always store both entries together.

use crate::error::{BoardError, ErrorCode};
use crate::mode::{GroupChoice, SortChoice, ViewPreferences};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub const GROUP_BY_KEY: &str = "groupBy";
pub const SORT_BY_KEY: &str = "sortBy";

/// String key-value storage that survives between sessions.
pub trait KeyValueStore {
    /// Read a key; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, BoardError>;

    /// Write a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError>;

    /// Write several keys as one update where the medium allows it.
    ///
    /// # Errors
    ///
    /// Returns the first write error.
    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<(), BoardError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// In-process storage, lost when the process exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A flat JSON object on disk, e.g. `{"groupBy":"By User","sortBy":"title"}`.
///
/// A missing file reads as empty storage. A file that is not a JSON object of
/// strings is also treated as empty and gets replaced on the next write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, BoardError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(self.storage_error(ErrorCode::PreferencesReadFailed, err)),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "preferences file is corrupt; treating as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), BoardError> {
        let write_err = |err| self.storage_error(ErrorCode::PreferencesWriteFailed, err);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let serialized = serde_json::to_string_pretty(entries)
            .map_err(|err| write_err(io::Error::other(err)))?;

        // Write beside the target and rename so readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }

    fn storage_error(&self, code: ErrorCode, source: io::Error) -> BoardError {
        BoardError::Storage {
            path: self.path.clone(),
            code,
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError> {
        self.set_all(&[(key, value)])
    }

    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<(), BoardError> {
        let mut current = self.read_entries()?;
        for (key, value) in entries {
            current.insert((*key).to_string(), (*value).to_string());
        }
        self.write_entries(&current)
    }
}

/// Loads and saves [`ViewPreferences`] through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read both preferences, substituting the default for each missing entry.
    ///
    /// A read failure counts as a missing entry.
    pub fn load(&self) -> ViewPreferences {
        let group_by: GroupChoice = self.read(GROUP_BY_KEY).map_or_else(
            || ViewPreferences::DEFAULT_GROUP_BY.into(),
            |raw| GroupChoice::parse(&raw),
        );
        let sort_by: SortChoice = self.read(SORT_BY_KEY).map_or_else(
            || ViewPreferences::DEFAULT_SORT_BY.into(),
            |raw| SortChoice::parse(&raw),
        );
        debug!(group_by = %group_by, sort_by = %sort_by, "loaded view preferences");
        ViewPreferences { group_by, sort_by }
    }

    /// Write both preferences unconditionally.
    ///
    /// Failures are logged and otherwise ignored; the caller's in-memory
    /// preferences stay authoritative for the rest of the session.
    pub fn save(&mut self, prefs: &ViewPreferences) {
        let entries = [
            (GROUP_BY_KEY, prefs.group_by.as_label()),
            (SORT_BY_KEY, prefs.sort_by.as_label()),
        ];
        match self.store.set_all(&entries) {
            Ok(()) => debug!(
                group_by = %prefs.group_by,
                sort_by = %prefs.sort_by,
                "saved view preferences"
            ),
            Err(err) => error!(
                code = %err.error_code(),
                error = %err,
                "failed to persist view preferences"
            ),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "failed to read view preference; using default");
                None
            }
        }
    }
}
