//! Business Logic Services

pub mod assembler;
pub mod catalog;
pub mod export;
pub mod linking;
pub mod url_state;

pub use catalog::{TechniqueCatalog, TemplateCatalog};
pub use export::ExportFormat;
pub use url_state::{BrowseState, ViewMode};
