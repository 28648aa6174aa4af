//! Template Linking Rule
//!
//! Selecting a template pulls its related techniques into the
//! selection; removing a template drops the techniques no other
//! selected template still references.
//!
//! The rule does not track why a technique was selected. A manually
//! picked technique whose id coincides with an orphaned related id is
//! removed too.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::selection::SelectionState;
use crate::services::catalog::TemplateCatalog;

/// Auto-select the related techniques of a just-added template.
/// Returns the ids actually added (those not already selected).
pub fn apply_on_add(
    state: &mut SelectionState,
    templates: &TemplateCatalog,
    template_id: &str,
) -> Vec<String> {
    let mut added = Vec::new();
    for technique_id in templates.related_techniques(template_id) {
        if state.add_technique(technique_id) {
            added.push(technique_id.clone());
        }
    }
    if !added.is_empty() {
        debug!(template = template_id, ?added, "auto-selected related techniques");
    }
    added
}

/// Auto-deselect techniques orphaned by removing a template: each
/// related id of the removed template that no still-selected template
/// references. Returns the ids actually removed.
pub fn apply_on_remove(
    state: &mut SelectionState,
    templates: &TemplateCatalog,
    removed_template_id: &str,
) -> Vec<String> {
    let still_needed: BTreeSet<&String> = state
        .selected_templates()
        .iter()
        .flat_map(|id| templates.related_techniques(id))
        .collect();

    // Clone: the related-id slice borrows the catalog, not the state,
    // but the removal below needs &mut state.
    let candidates: Vec<String> = templates
        .related_techniques(removed_template_id)
        .to_vec();

    let mut removed = Vec::new();
    for technique_id in candidates {
        if !still_needed.contains(&technique_id) && state.remove_technique(&technique_id) {
            removed.push(technique_id);
        }
    }
    if !removed.is_empty() {
        debug!(
            template = removed_template_id,
            ?removed,
            "auto-deselected orphaned techniques"
        );
    }
    removed
}
