//! Durable key-value storage backends.
//!
//! The store persists its whole collection under a single key, the same
//! way a browser keeps it in one `localStorage` slot. Backends:
//!
//! - [`FileStorage`] - one file per key inside a directory
//! - [`MemoryStorage`] - `HashMap` with an optional byte quota

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{DeskError, Result};

/// Synchronous string key-value slot storage.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `Storage` (or `Io`) if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the write fails or exceeds the backend quota.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backend cannot be modified.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

// ============================================================================
// File-backed storage
// ============================================================================

/// Directory of `<key>.json` files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageDir` if the path exists but is not a directory,
    /// or `Io` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if dir.exists() && !dir.is_dir() {
            return Err(DeskError::StorageDir(dir.to_path_buf()));
        }
        fs::create_dir_all(dir)?;
        tracing::debug!(dir = %dir.display(), "Opened file storage");
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Directory holding the key files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(DeskError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DeskError::Storage(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let tmp_path = path.with_extension("json.tmp");

        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.flush()?;
            drop(file);
            // Atomic rename
            fs::rename(&tmp_path, &path)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            DeskError::Storage(format!("failed to write {}: {e}", path.display()))
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DeskError::Storage(format!(
                "failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

// ============================================================================
// In-memory storage
// ============================================================================

/// `HashMap` storage with an optional total byte quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            values: HashMap::new(),
            quota: Some(bytes),
        }
    }

    /// Change the quota; `None` removes it.
    pub fn set_quota(&mut self, quota: Option<usize>) {
        self.quota = quota;
    }

    /// Bytes currently used by keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.values.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let existing = self.values.get(key).map_or(0, |v| key.len() + v.len());
            let needed = self.used_bytes() - existing + key.len() + value.len();
            if needed > quota {
                return Err(DeskError::Storage(format!(
                    "quota exceeded writing '{key}': {needed} bytes > {quota} bytes"
                )));
            }
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
