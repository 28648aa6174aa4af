//! File-Backed Storage
//!
//! Storage port implementation over a directory of JSON files, one
//! file per key (`<key>.json`). Production counterpart of
//! [`MemoryStorage`](crate::storage::MemoryStorage).

use std::fs;
use std::path::PathBuf;

use crate::storage::port::StoragePort;
use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_dir, ensure_prompt_helper_dir};

/// Storage port writing each key to `<dir>/<key>.json`.
///
/// Clones point at the same directory and therefore share data.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at an explicit directory (created lazily on
    /// first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the default data directory
    /// (~/.prompt-helper/), created if necessary
    pub fn default_location() -> AppResult<Self> {
        Ok(Self::new(ensure_prompt_helper_dir()?))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        ensure_dir(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
