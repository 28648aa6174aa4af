//! Saved Prompt Models
//!
//! Data structures for the durably persisted prompt records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A persisted snapshot of one assembled prompt plus the inputs that
/// produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPromptRecord {
    /// Unique id, generated at creation time. Records persisted by
    /// older versions may lack one; the store backfills it on load.
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// The assembled prompt text at save time
    #[serde(rename = "prompt")]
    pub prompt_text: String,
    #[serde(default, rename = "techniques")]
    pub selected_techniques: Vec<String>,
    #[serde(default)]
    pub base_prompt: String,
    #[serde(default)]
    pub task_description: String,
    #[serde(default)]
    pub output_format: String,
    #[serde(default, rename = "templates")]
    pub selected_templates: Vec<String>,
    #[serde(default)]
    pub template_fields: BTreeMap<String, String>,
    /// ISO-8601 creation/last-update time
    #[serde(default)]
    pub timestamp: String,
}

/// Request to create a new saved prompt (record minus id/timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPromptDraft {
    pub name: String,
    pub prompt_text: String,
    #[serde(default)]
    pub selected_techniques: Vec<String>,
    #[serde(default)]
    pub base_prompt: String,
    #[serde(default)]
    pub task_description: String,
    #[serde(default)]
    pub output_format: String,
    #[serde(default)]
    pub selected_templates: Vec<String>,
    #[serde(default)]
    pub template_fields: BTreeMap<String, String>,
}

/// Request to update an existing saved prompt (shallow merge)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPromptUpdate {
    pub name: Option<String>,
    pub prompt_text: Option<String>,
    pub selected_techniques: Option<Vec<String>>,
    pub base_prompt: Option<String>,
    pub task_description: Option<String>,
    pub output_format: Option<String>,
    pub selected_templates: Option<Vec<String>>,
    pub template_fields: Option<BTreeMap<String, String>>,
}

impl SavedPromptRecord {
    /// Apply a partial update in place. Timestamp refresh is the
    /// store's responsibility.
    pub fn apply_update(&mut self, update: SavedPromptUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(prompt_text) = update.prompt_text {
            self.prompt_text = prompt_text;
        }
        if let Some(techniques) = update.selected_techniques {
            self.selected_techniques = techniques;
        }
        if let Some(base_prompt) = update.base_prompt {
            self.base_prompt = base_prompt;
        }
        if let Some(task_description) = update.task_description {
            self.task_description = task_description;
        }
        if let Some(output_format) = update.output_format {
            self.output_format = output_format;
        }
        if let Some(templates) = update.selected_templates {
            self.selected_templates = templates;
        }
        if let Some(fields) = update.template_fields {
            self.template_fields = fields;
        }
    }
}
