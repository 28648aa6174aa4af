//! Storage Port
//!
//! The key-value seam between the model and whatever durable storage
//! the host provides. Stores read and write whole opaque blobs; the
//! consistency model across writers is last-writer-wins.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::utils::error::AppResult;

/// Durable key-value storage abstraction.
///
/// The built-in file port surfaces failures as `AppError::Io`;
/// implementations over other backends report theirs as
/// [`AppError::Storage`](crate::AppError::Storage).
pub trait StoragePort {
    /// Read the blob stored under `key`, None if absent
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write the blob under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Clones share the same backing map, so several stores can hand
/// around handles to one logical storage area.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
