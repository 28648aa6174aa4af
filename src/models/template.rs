//! Prompt Template Models
//!
//! Data structures for parametrized prompt skeletons.

use serde::{Deserialize, Serialize};

/// Input widget type of a template field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Select,
}

/// Declared input field of a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    /// Choices for `Select` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Example text shown in an empty field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// A parametrized prompt skeleton with `{field}` tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Template text containing zero or more `{field_name}` tokens
    pub body: String,
    pub fields: Vec<FieldSpec>,
    /// Technique ids auto-selected alongside this template.
    /// Best effort: ids without a catalog entry are tolerated.
    #[serde(default)]
    pub related_techniques: Vec<String>,
}

impl Template {
    /// Labels of required fields that have no value in `get_value`.
    /// Advisory only: assembly still succeeds with `[field]` markers.
    pub fn missing_required_fields<'a>(
        &'a self,
        mut get_value: impl FnMut(&str) -> Option<&'a str>,
    ) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| {
                field.required
                    && get_value(&field.name)
                        .map(|value| value.trim().is_empty())
                        .unwrap_or(true)
            })
            .map(|field| field.label.clone())
            .collect()
    }
}
