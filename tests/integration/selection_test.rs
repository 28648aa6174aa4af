//! Selection and Template Linking Integration Tests
//!
//! Tests for technique/template selection through the application
//! state, including the auto-select and auto-deselect linking rule.

use prompt_helper::{AppState, MemoryStorage};

fn app() -> AppState<MemoryStorage> {
    AppState::new(MemoryStorage::new()).unwrap()
}

// ============================================================================
// Technique Selection Tests
// ============================================================================

#[test]
fn test_select_technique_is_idempotent() {
    let mut app = app();
    assert!(app.select_technique("chain-of-thought"));
    assert!(!app.select_technique("chain-of-thought"));
    assert_eq!(app.selection().selected_techniques(), ["chain-of-thought"]);
}

#[test]
fn test_selection_keeps_insertion_order() {
    let mut app = app();
    app.select_technique("role-prompting");
    app.select_technique("chain-of-thought");
    app.select_technique("self-consistency");
    assert_eq!(
        app.selection().selected_techniques(),
        ["role-prompting", "chain-of-thought", "self-consistency"]
    );
}

#[test]
fn test_deselect_unknown_technique_is_noop() {
    let mut app = app();
    assert!(!app.deselect_technique("never-selected"));
}

// ============================================================================
// Template Linking Tests
// ============================================================================

#[test]
fn test_selecting_template_pulls_related_techniques() {
    let mut app = app();
    assert!(app.select_template("basic"));
    // The built-in data set relates "basic" to an id with no catalog
    // entry; linking still selects it.
    assert!(app.selection().has_technique("zero-shot-prompting"));
}

#[test]
fn test_deselecting_template_keeps_techniques_shared_with_others() {
    let mut app = app();
    app.select_template("basic");
    app.select_template("persona");
    // Both templates relate zero-shot-prompting

    app.deselect_template("basic");
    assert!(app.selection().has_technique("zero-shot-prompting"));

    app.deselect_template("persona");
    assert!(!app.selection().has_technique("zero-shot-prompting"));
}

#[test]
fn linking_can_drop_manually_added_technique() {
    // The linking rule tracks no provenance: a technique picked by
    // hand is removed along with the last template that relates it.
    let mut app = app();
    app.select_technique("zero-shot-prompting");
    app.select_template("basic");
    app.deselect_template("basic");
    assert!(!app.selection().has_technique("zero-shot-prompting"));
}

#[test]
fn test_reselecting_template_after_manual_deselect_relinks() {
    let mut app = app();
    app.select_template("step-by-step");
    assert!(app.selection().has_technique("chain-of-thought-prompting"));

    app.deselect_technique("chain-of-thought-prompting");
    app.deselect_template("step-by-step");
    app.select_template("step-by-step");
    assert!(app.selection().has_technique("chain-of-thought-prompting"));
}

#[test]
fn test_analysis_template_links_multiple_techniques() {
    let mut app = app();
    app.select_template("critical-analysis");
    assert!(app.selection().has_technique("chain-of-thought-prompting"));
    assert!(app.selection().has_technique("self-consistency"));

    app.select_template("text-analysis");
    app.deselect_template("critical-analysis");
    // text-analysis still needs chain-of-thought-prompting
    assert!(app.selection().has_technique("chain-of-thought-prompting"));
    assert!(!app.selection().has_technique("self-consistency"));
}

#[test]
fn test_selecting_unknown_template_selects_nothing_extra() {
    let mut app = app();
    assert!(app.select_template("no-such-template"));
    assert!(app.selection().selected_techniques().is_empty());
}

// ============================================================================
// Field and Free-Text Tests
// ============================================================================

#[test]
fn test_field_values_overwrite() {
    let mut app = app();
    app.set_field("role", "Entwickler");
    app.set_field("role", "Architekt");
    assert_eq!(app.selection().get_field("role"), "Architekt");
}

#[test]
fn test_clear_resets_selection_and_inputs() {
    let mut app = app();
    app.select_template("persona");
    app.set_field("role", "Entwickler");
    app.set_task_description("Review");
    app.clear().unwrap();

    assert!(app.selection().selected_techniques().is_empty());
    assert!(app.selection().selected_templates().is_empty());
    assert_eq!(app.selection().get_field("role"), "");
    assert_eq!(app.selection().free_text.task_description, "");
}

// ============================================================================
// Required Field Advisory Tests
// ============================================================================

#[test]
fn test_missing_required_fields_deduplicates_labels() {
    let mut app = app();
    app.select_template("basic");
    app.select_template("few-shot");
    // Both templates require an Aufgabenbeschreibung field

    let missing = app.missing_required_fields();
    let count = missing
        .iter()
        .filter(|l| l.as_str() == "Aufgabenbeschreibung")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_whitespace_only_value_counts_as_missing() {
    let mut app = app();
    app.select_template("persona");
    app.set_field("role", "   ");
    assert!(app
        .missing_required_fields()
        .contains(&"Rolle/Expertise".to_string()));
}
