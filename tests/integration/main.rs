//! Integration Tests
//!
//! End-to-end tests over the public API: selection and template
//! linking, prompt assembly, the persisted prompt store, export
//! rendering, and browse-state URL round trips.

// Selection state and template-technique linking tests
mod selection_test;

// Prompt assembly and token estimation tests
mod assembly_test;

// Saved prompt store and session resume tests
mod store_test;

// Export renderer and configuration sharing tests
mod export_test;

// Browse state query-string tests
mod url_state_test;
