//! Application State
//!
//! The explicit state object wiring catalogs, the live selection, the
//! browse state, and the stores over an injected storage port. Hosts
//! (a UI shell, tests) construct one of these instead of reaching
//! into the components directly.

use chrono::Utc;
use tracing::debug;

use crate::models::export::PromptExport;
use crate::models::saved_prompt::{SavedPromptDraft, SavedPromptRecord};
use crate::models::selection::{SelectionSnapshot, SelectionState};
use crate::services::catalog::{TechniqueCatalog, TemplateCatalog};
use crate::services::url_state::{self, BrowseState, ViewMode};
use crate::services::{assembler, export, linking};
use crate::storage::port::StoragePort;
use crate::storage::prompts::PersistedPromptStore;
use crate::storage::session::SessionStore;
use crate::utils::error::AppResult;

/// Application state over an injected storage port.
///
/// The port is cloned for the two stores; clones of the provided port
/// type must address the same logical storage area (both built-in
/// ports do).
pub struct AppState<S: StoragePort + Clone> {
    techniques: TechniqueCatalog,
    templates: TemplateCatalog,
    selection: SelectionState,
    browse: BrowseState,
    prompts: PersistedPromptStore<S>,
    session: SessionStore<S>,
}

impl<S: StoragePort + Clone> AppState<S> {
    /// State with the built-in catalogs
    pub fn new(port: S) -> AppResult<Self> {
        Self::with_catalogs(
            port,
            TechniqueCatalog::with_builtins(),
            TemplateCatalog::with_builtins(),
        )
    }

    /// State with caller-supplied catalogs
    pub fn with_catalogs(
        port: S,
        techniques: TechniqueCatalog,
        templates: TemplateCatalog,
    ) -> AppResult<Self> {
        let prompts = PersistedPromptStore::new(port.clone())?;
        let session = SessionStore::new(port);
        Ok(Self {
            techniques,
            templates,
            selection: SelectionState::new(),
            browse: BrowseState::default(),
            prompts,
            session,
        })
    }

    pub fn techniques(&self) -> &TechniqueCatalog {
        &self.techniques
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn prompts(&self) -> &PersistedPromptStore<S> {
        &self.prompts
    }

    pub fn prompts_mut(&mut self) -> &mut PersistedPromptStore<S> {
        &mut self.prompts
    }

    // ------------------------------------------------------------------
    // Selection operations
    // ------------------------------------------------------------------

    /// Add a technique to the selection. Returns whether a change
    /// occurred.
    pub fn select_technique(&mut self, id: &str) -> bool {
        self.selection.add_technique(id)
    }

    /// Remove a technique from the selection
    pub fn deselect_technique(&mut self, id: &str) -> bool {
        self.selection.remove_technique(id)
    }

    /// Add a template and auto-select its related techniques
    pub fn select_template(&mut self, id: &str) -> bool {
        if !self.selection.add_template(id) {
            return false;
        }
        linking::apply_on_add(&mut self.selection, &self.templates, id);
        true
    }

    /// Remove a template and auto-deselect techniques no other
    /// selected template still references
    pub fn deselect_template(&mut self, id: &str) -> bool {
        if !self.selection.remove_template(id) {
            return false;
        }
        linking::apply_on_remove(&mut self.selection, &self.templates, id);
        true
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.selection.set_field(name, value);
    }

    pub fn set_task_description(&mut self, value: &str) {
        self.selection.free_text.task_description = value.to_string();
    }

    pub fn set_base_prompt(&mut self, value: &str) {
        self.selection.free_text.base_prompt = value.to_string();
    }

    pub fn set_output_format(&mut self, value: &str) {
        self.selection.free_text.output_format = value.to_string();
    }

    /// Reset the selection and drop the persisted session snapshot
    pub fn clear(&mut self) -> AppResult<()> {
        self.selection.clear();
        self.session.clear()
    }

    // ------------------------------------------------------------------
    // Assembly
    // ------------------------------------------------------------------

    /// Assemble the prompt for the current selection
    pub fn assemble(&self) -> String {
        assembler::assemble(&self.selection, &self.templates)
    }

    /// Token estimate for the currently assembled prompt
    pub fn token_estimate(&self) -> usize {
        assembler::estimate_tokens(&self.assemble())
    }

    /// Advisory improvement suggestions for the current selection
    pub fn suggestions(&self) -> Vec<String> {
        assembler::suggestions(&self.selection, &self.techniques)
    }

    /// Labels of required template fields still missing a value,
    /// across all selected templates. Advisory: assembly works anyway.
    pub fn missing_required_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for id in self.selection.selected_templates() {
            if let Some(template) = self.templates.get(id) {
                for label in template.missing_required_fields(|name| self.selection.field(name)) {
                    if !missing.contains(&label) {
                        missing.push(label);
                    }
                }
            }
        }
        missing
    }

    // ------------------------------------------------------------------
    // Saved prompts
    // ------------------------------------------------------------------

    /// Snapshot the current state as a named saved prompt. Duplicate
    /// names are allowed; callers wanting to warn first use
    /// [`PersistedPromptStore::name_exists`].
    pub fn save_prompt(&mut self, name: &str) -> AppResult<String> {
        let snapshot = self.selection.snapshot();
        let draft = SavedPromptDraft {
            name: name.to_string(),
            prompt_text: self.assemble(),
            selected_techniques: snapshot.selected_techniques,
            base_prompt: snapshot.base_prompt,
            task_description: snapshot.task_description,
            output_format: snapshot.output_format,
            selected_templates: snapshot.selected_templates,
            template_fields: snapshot.template_fields,
        };
        self.prompts.save(draft)
    }

    /// Replace the current selection with a saved prompt's inputs.
    /// Returns false for an unknown id.
    pub fn load_prompt(&mut self, id: &str) -> bool {
        let Some(record) = self.prompts.get(id) else {
            return false;
        };
        let snapshot = record_snapshot(record);
        self.selection.restore(&snapshot);
        debug!(id = %id, "loaded saved prompt into selection");
        true
    }

    // ------------------------------------------------------------------
    // Session resume
    // ------------------------------------------------------------------

    /// Persist the current selection for resuming later
    pub fn save_session(&mut self) -> AppResult<()> {
        let mut snapshot = self.selection.snapshot();
        snapshot.timestamp = Some(Utc::now().to_rfc3339());
        snapshot.version = Some("1.0".to_string());
        self.session.save(&snapshot)
    }

    /// Restore the last persisted session, if any. Ok(false) when no
    /// usable snapshot exists.
    pub fn restore_session(&mut self) -> AppResult<bool> {
        match self.session.load()? {
            Some(snapshot) => {
                self.selection.restore(&snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ------------------------------------------------------------------
    // Export / import
    // ------------------------------------------------------------------

    /// Build the export envelope for the current state
    pub fn export_prompt(&self) -> PromptExport {
        export::build_export(
            &self.selection,
            &self.assemble(),
            &self.techniques,
            &self.templates,
            Utc::now(),
        )
    }

    /// Render the current state in one of the export formats
    pub fn render_export(&self, format: export::ExportFormat) -> AppResult<String> {
        format.render(&self.export_prompt())
    }

    /// Serialize the current selection as a shareable configuration
    pub fn export_configuration(&self) -> AppResult<String> {
        let envelope = export::export_configuration(self.selection.snapshot(), Utc::now());
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    /// Restore the selection from a configuration export
    pub fn import_configuration(&mut self, json: &str) -> AppResult<()> {
        let snapshot = export::import_configuration(json)?;
        self.selection.restore(&snapshot);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Browse state
    // ------------------------------------------------------------------

    pub fn browse(&self) -> &BrowseState {
        &self.browse
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.browse.search_term = term.to_string();
    }

    pub fn set_category_filter(&mut self, category: Option<&str>) {
        self.browse.category = category.map(str::to_string);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.browse.view = view;
    }

    /// Query string for the current browse state (for the address bar)
    pub fn location_query(&self) -> String {
        url_state::encode(&self.browse)
    }

    /// Replace the browse state from a query string (back/forward
    /// navigation, bookmarked URL)
    pub fn apply_location_query(&mut self, query: &str) {
        self.browse = url_state::decode(query);
    }

    /// Techniques matching the current search term and category filter
    pub fn visible_techniques(&self) -> Vec<&crate::models::technique::Technique> {
        self.techniques
            .all()
            .iter()
            .filter(|t| t.matches(&self.browse.search_term))
            .filter(|t| {
                self.browse
                    .category
                    .as_deref()
                    .map(|c| t.category_id == c)
                    .unwrap_or(true)
            })
            .collect()
    }
}

/// Selection snapshot form of a saved record
fn record_snapshot(record: &SavedPromptRecord) -> SelectionSnapshot {
    SelectionSnapshot {
        selected_techniques: record.selected_techniques.clone(),
        selected_templates: record.selected_templates.clone(),
        template_fields: record.template_fields.clone(),
        task_description: record.task_description.clone(),
        base_prompt: record.base_prompt.clone(),
        output_format: record.output_format.clone(),
        timestamp: None,
        version: None,
    }
}
