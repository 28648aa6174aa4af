//! Storage Layer
//!
//! Key-value port abstraction plus the stores built on top of it.

pub mod file;
pub mod port;
pub mod prompts;
pub mod session;

pub use file::FileStorage;
pub use port::{MemoryStorage, StoragePort};
pub use prompts::{PersistedPromptStore, SAVED_PROMPTS_KEY};
pub use session::{SessionStore, SESSION_KEY};
