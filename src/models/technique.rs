//! Technique Taxonomy Models
//!
//! Data structures for the static prompt-engineering technique catalog.

use serde::{Deserialize, Serialize};

/// A category grouping related techniques
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A prompt-engineering technique with descriptive metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technique {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Alternative names the technique is known under
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Literature sources the entry was compiled from
    #[serde(default)]
    pub sources: Vec<String>,
    /// Ids of related techniques. Best effort: dangling ids are
    /// rendered as their raw id string, never treated as an error.
    #[serde(default)]
    pub related_techniques: Vec<String>,
    pub example: Option<String>,
    pub use_case: Option<String>,
    pub tips: Option<String>,
    pub common_mistakes: Option<String>,
    /// Id of the category this technique belongs to
    pub category_id: String,
}

impl Technique {
    /// Case-insensitive substring match over name, description, and aliases
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(&term))
    }
}
