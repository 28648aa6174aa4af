//! Bookmarkable Browse State
//!
//! Bidirectional mapping between the technique-browser state (search
//! term, category filter, view mode) and a URL query string. This is
//! the only externally observable protocol surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// How the technique list is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Cards,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Cards => write!(f, "cards"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cards" => Ok(ViewMode::Cards),
            "list" => Ok(ViewMode::List),
            _ => Err(()),
        }
    }
}

/// The technique-browser state carried in the URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    pub search_term: String,
    /// Active single-category filter, None when browsing all
    pub category: Option<String>,
    pub view: ViewMode,
}

/// Encode browse state as a query string with a leading `?`.
/// Neutral values are omitted; a fully neutral state encodes as the
/// empty string.
pub fn encode(state: &BrowseState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search_term.is_empty() {
        serializer.append_pair("q", &state.search_term);
    }
    if let Some(category) = &state.category {
        serializer.append_pair("category", category);
    }
    if state.view != ViewMode::Cards {
        serializer.append_pair("view", &state.view.to_string());
    }

    let query = serializer.finish();
    if query.is_empty() {
        String::new()
    } else {
        format!("?{query}")
    }
}

/// Decode a query string (with or without leading `?`) into browse
/// state. Absent keys default to the neutral value; unknown view
/// values are ignored rather than erroring.
pub fn decode(query: &str) -> BrowseState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = BrowseState::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "q" => state.search_term = value.into_owned(),
            "category" => {
                if !value.is_empty() {
                    state.category = Some(value.into_owned());
                }
            }
            "view" => {
                if let Ok(view) = value.parse::<ViewMode>() {
                    state.view = view;
                }
            }
            _ => {}
        }
    }

    state
}
