//! Small string key-value store used for the demo session.
//!
//! The file backend keeps every key in one JSON object and rewrites it on
//! each mutation. When the file is unavailable the store degrades to a
//! process-local map.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write store `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
enum Backend {
    File(PathBuf),
    Memory,
}

#[derive(Debug)]
pub struct KvStore {
    backend: Backend,
    items: BTreeMap<String, String>,
}

impl KvStore {
    pub fn in_memory() -> Self {
        KvStore {
            backend: Backend::Memory,
            items: BTreeMap::new(),
        }
    }

    /// Opens the file-backed store, falling back to memory on any read error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load_items(&path) {
            Ok(items) => {
                log::info!("storage: opened {} ({} keys)", path.display(), items.len());
                KvStore {
                    backend: Backend::File(path),
                    items,
                }
            }
            Err(e) => {
                log::warn!(
                    "storage: {} unavailable ({}), using in-memory store",
                    path.display(),
                    e
                );
                Self::in_memory()
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self.backend, Backend::File(_))
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`. On a failed write the previous value is kept.
    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        let previous = self.items.insert(key.to_string(), value.into());
        if let Err(e) = self.flush() {
            self.restore(key, previous);
            return Err(e);
        }
        Ok(())
    }

    pub fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if let Some(previous) = self.items.remove(key) {
            if let Err(e) = self.flush() {
                self.restore(key, Some(previous));
                return Err(e);
            }
        }
        Ok(())
    }

    fn restore(&mut self, key: &str, previous: Option<String>) {
        match previous {
            Some(value) => self.items.insert(key.to_string(), value),
            None => self.items.remove(key),
        };
    }

    fn load_items(path: &Path) -> io::Result<BTreeMap<String, String>> {
        match fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }

    fn flush(&self) -> Result<(), StorageError> {
        let Backend::File(path) = &self.backend else {
            return Ok(());
        };
        let serialized = serde_json::to_string_pretty(&self.items)?;
        fs::write(path, serialized).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })
    }
}
