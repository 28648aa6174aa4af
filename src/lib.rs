//! Prompt Helper - Core Library
//!
//! Building blocks for assembling LLM prompts from a catalog of
//! prompting techniques and fill-in templates. It includes:
//! - The built-in technique/template catalogs
//! - Selection state with template-technique linking
//! - Prompt assembly with field substitution and token estimation
//! - Persisted prompt storage and session resume
//! - Export rendering (text, Markdown, XML, JSON) and shareable
//!   configuration files
//! - URL query-string encoding of the browse state

pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use models::export::{ConfigurationExport, PromptExport};
pub use models::saved_prompt::{SavedPromptDraft, SavedPromptRecord, SavedPromptUpdate};
pub use models::selection::{FreeText, SelectionSnapshot, SelectionState};
pub use models::technique::{Category, Technique};
pub use models::template::{FieldSpec, FieldType, Template};
pub use services::assembler::EMPTY_PROMPT_PLACEHOLDER;
pub use services::catalog::{TechniqueCatalog, TemplateCatalog};
pub use services::export::ExportFormat;
pub use services::url_state::{BrowseState, ViewMode};
pub use state::AppState;
pub use storage::{FileStorage, MemoryStorage, StoragePort};
pub use utils::error::{AppError, AppResult};
