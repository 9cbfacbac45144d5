pub mod board;
pub mod completions;
pub mod group;
pub mod prefs;
pub mod sort;

use crate::output::OutputMode;
use board_core::config::BoardConfig;
use board_core::error::BoardError;
use board_core::{FileStore, KeyValueStore, MemoryStore, ViewController};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings every command needs, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputMode,
    pub quiet: bool,
    pub config: BoardConfig,
    /// `None` keeps preferences in memory for this run only.
    pub prefs_path: Option<PathBuf>,
}

impl Context {
    /// Open the preference store and seed a controller from it.
    #[must_use]
    pub fn controller(&self) -> ViewController<PrefsBackend> {
        let backend = match &self.prefs_path {
            Some(path) => {
                debug!(path = %path.display(), "using file preference store");
                PrefsBackend::File(FileStore::new(path))
            }
            None => {
                debug!("using in-memory preference store");
                PrefsBackend::Memory(MemoryStore::new())
            }
        };
        ViewController::new(backend)
    }
}

/// The storage medium chosen at startup.
#[derive(Debug, Clone)]
pub enum PrefsBackend {
    File(FileStore),
    Memory(MemoryStore),
}

impl PrefsBackend {
    #[must_use]
    pub fn location(&self) -> Option<&Path> {
        match self {
            Self::File(store) => Some(store.path()),
            Self::Memory(_) => None,
        }
    }
}

impl KeyValueStore for PrefsBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BoardError> {
        match self {
            Self::File(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError> {
        match self {
            Self::File(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }

    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<(), BoardError> {
        match self {
            Self::File(store) => store.set_all(entries),
            Self::Memory(store) => store.set_all(entries),
        }
    }
}

/// Fold user spellings like `By User`, `by_user` or `BY-USER` into `by-user`.
#[must_use]
pub fn normalize_mode_arg(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '_'], "-")
}
