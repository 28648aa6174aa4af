//! Selection State Models
//!
//! The live, mutable set of chosen techniques/templates and entered
//! field values, plus its serializable snapshot form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-text inputs that feed prompt assembly
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeText {
    #[serde(default)]
    pub task_description: String,
    #[serde(default)]
    pub base_prompt: String,
    #[serde(default)]
    pub output_format: String,
}

/// The mutable selection state for one session.
///
/// Technique and template ids are ordered sets: insertion order is
/// display-relevant and duplicates are suppressed. Ids are not
/// validated against the catalogs here; stale ids are skipped at
/// lookup time.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_techniques: Vec<String>,
    selected_templates: Vec<String>,
    field_values: BTreeMap<String, String>,
    pub free_text: FreeText,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a technique id. Returns false if already present.
    pub fn add_technique(&mut self, id: &str) -> bool {
        if self.selected_techniques.iter().any(|t| t == id) {
            return false;
        }
        self.selected_techniques.push(id.to_string());
        true
    }

    /// Remove a technique id. Returns false if absent.
    pub fn remove_technique(&mut self, id: &str) -> bool {
        let before = self.selected_techniques.len();
        self.selected_techniques.retain(|t| t != id);
        self.selected_techniques.len() != before
    }

    pub fn has_technique(&self, id: &str) -> bool {
        self.selected_techniques.iter().any(|t| t == id)
    }

    pub fn selected_techniques(&self) -> &[String] {
        &self.selected_techniques
    }

    /// Add a template id without applying the linking rule.
    /// Callers that want auto-selection go through [`crate::AppState`].
    pub fn add_template(&mut self, id: &str) -> bool {
        if self.selected_templates.iter().any(|t| t == id) {
            return false;
        }
        self.selected_templates.push(id.to_string());
        true
    }

    /// Remove a template id without applying the linking rule.
    pub fn remove_template(&mut self, id: &str) -> bool {
        let before = self.selected_templates.len();
        self.selected_templates.retain(|t| t != id);
        self.selected_templates.len() != before
    }

    pub fn has_template(&self, id: &str) -> bool {
        self.selected_templates.iter().any(|t| t == id)
    }

    pub fn selected_templates(&self) -> &[String] {
        &self.selected_templates
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.field_values.insert(name.to_string(), value.to_string());
    }

    /// Current value of a field, empty string if never set
    pub fn get_field(&self, name: &str) -> &str {
        self.field_values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Value of a field if one has been entered
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_values.get(name).map(String::as_str)
    }

    pub fn field_values(&self) -> &BTreeMap<String, String> {
        &self.field_values
    }

    /// Reset every field to its initial empty value
    pub fn clear(&mut self) {
        self.selected_techniques.clear();
        self.selected_templates.clear();
        self.field_values.clear();
        self.free_text = FreeText::default();
    }

    /// Total state copy-out for persistence and export
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selected_techniques: self.selected_techniques.clone(),
            selected_templates: self.selected_templates.clone(),
            template_fields: self.field_values.clone(),
            task_description: self.free_text.task_description.clone(),
            base_prompt: self.free_text.base_prompt.clone(),
            output_format: self.free_text.output_format.clone(),
            timestamp: None,
            version: None,
        }
    }

    /// Total state copy-in. Never fails; missing keys in the snapshot
    /// fall back to defaults. Duplicate ids in the snapshot are
    /// collapsed to first occurrence.
    pub fn restore(&mut self, snapshot: &SelectionSnapshot) {
        self.clear();
        for id in &snapshot.selected_techniques {
            self.add_technique(id);
        }
        for id in &snapshot.selected_templates {
            self.add_template(id);
        }
        self.field_values = snapshot.template_fields.clone();
        self.free_text = FreeText {
            task_description: snapshot.task_description.clone(),
            base_prompt: snapshot.base_prompt.clone(),
            output_format: snapshot.output_format.clone(),
        };
    }
}

/// Serializable snapshot of [`SelectionState`].
///
/// Every field defaults so that blobs written by older versions (or
/// hand-edited ones with missing keys) restore without error. The
/// version string is written but never checked on read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    #[serde(default)]
    pub selected_techniques: Vec<String>,
    #[serde(default)]
    pub selected_templates: Vec<String>,
    #[serde(default)]
    pub template_fields: BTreeMap<String, String>,
    #[serde(default)]
    pub task_description: String,
    #[serde(default)]
    pub base_prompt: String,
    #[serde(default)]
    pub output_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
