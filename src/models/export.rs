//! Export Models
//!
//! Data structures for the prompt export/import formats.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::selection::SelectionSnapshot;

/// Technique reference carried in exports: id plus resolved metadata.
/// Name/description stay `None` for dangling ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedTechnique {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Template reference carried in exports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedTemplate {
    pub id: String,
    pub name: Option<String>,
}

/// Export metadata trailer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// ISO-8601 export time
    pub timestamp: String,
    /// Format version, written but never checked on read
    pub version: String,
    /// Crude size estimate: ceil(char_length / 4)
    pub token_estimate: usize,
}

/// Full prompt export: the assembled prompt plus everything that
/// produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptExport {
    pub prompt: String,
    pub techniques: Vec<ExportedTechnique>,
    pub base_prompt: String,
    pub task_description: String,
    pub output_format: String,
    pub templates: Vec<ExportedTemplate>,
    pub template_fields: BTreeMap<String, String>,
    pub metadata: ExportMetadata,
}

/// Shareable configuration envelope (selection state only, no
/// assembled prompt)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationExport {
    pub version: String,
    pub timestamp: String,
    pub configuration: SelectionSnapshot,
}
