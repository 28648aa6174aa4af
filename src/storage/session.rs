//! Session Snapshot Store
//!
//! "Resume where I left off": a single selection snapshot under its
//! own storage key, written and read as one blob.

use tracing::warn;

use crate::models::selection::SelectionSnapshot;
use crate::storage::port::StoragePort;
use crate::utils::error::AppResult;

/// Storage key holding the session snapshot
pub const SESSION_KEY: &str = "session";

/// Store for the single last-session snapshot
#[derive(Debug)]
pub struct SessionStore<S: StoragePort> {
    port: S,
}

impl<S: StoragePort> SessionStore<S> {
    pub fn new(port: S) -> Self {
        Self { port }
    }

    /// Persist the snapshot, replacing any previous one
    pub fn save(&mut self, snapshot: &SelectionSnapshot) -> AppResult<()> {
        let blob = serde_json::to_string(snapshot)?;
        self.port.set(SESSION_KEY, &blob)
    }

    /// Load the last snapshot. Absent or corrupt data yields None;
    /// a corrupt blob is logged, never propagated.
    pub fn load(&self) -> AppResult<Option<SelectionSnapshot>> {
        let Some(blob) = self.port.get(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&blob) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                warn!(error = %err, "corrupt session snapshot, ignoring");
                Ok(None)
            }
        }
    }

    /// Drop the stored snapshot
    pub fn clear(&mut self) -> AppResult<()> {
        self.port.remove(SESSION_KEY)
    }
}
