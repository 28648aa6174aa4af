//! Data Models
//!
//! Plain serde data structures shared across services and storage.

pub mod export;
pub mod saved_prompt;
pub mod selection;
pub mod technique;
pub mod template;

pub use export::{
    ConfigurationExport, ExportMetadata, ExportedTechnique, ExportedTemplate, PromptExport,
};
pub use saved_prompt::{SavedPromptDraft, SavedPromptRecord, SavedPromptUpdate};
pub use selection::{FreeText, SelectionSnapshot, SelectionState};
pub use technique::{Category, Technique};
pub use template::{FieldSpec, FieldType, Template};
