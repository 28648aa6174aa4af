//! Prompt Assembly Integration Tests
//!
//! Assembly through the application state: free composition, template
//! substitution, token estimation, suggestions.

use prompt_helper::{AppState, MemoryStorage, EMPTY_PROMPT_PLACEHOLDER};

fn app() -> AppState<MemoryStorage> {
    AppState::new(MemoryStorage::new()).unwrap()
}

// ============================================================================
// Free Composition Tests
// ============================================================================

#[test]
fn test_fresh_state_assembles_placeholder() {
    let app = app();
    assert_eq!(app.assemble(), EMPTY_PROMPT_PLACEHOLDER);
    assert_eq!(app.token_estimate(), 0);
}

#[test]
fn test_free_composition_with_boilerplate_and_task() {
    let mut app = app();
    app.select_technique("chain-of-thought");
    app.set_task_description("Erkläre die Quicksort-Komplexität");

    let prompt = app.assemble();
    assert!(prompt.starts_with("Ich möchte, dass Sie dieses Problem Schritt für Schritt"));
    assert!(prompt.contains("Aufgabe: Erkläre die Quicksort-Komplexität"));
    assert!(app.token_estimate() > 0);
}

#[test]
fn test_task_only_composition() {
    let mut app = app();
    app.set_task_description("Translate");
    assert_eq!(app.assemble(), "Aufgabe: Translate\n\n");
}

#[test]
fn test_output_format_section_closes_with_single_newline() {
    let mut app = app();
    app.set_output_format("JSON");
    assert_eq!(app.assemble(), "Ausgabeformat: JSON\n");
}

// ============================================================================
// Template Mode Tests
// ============================================================================

#[test]
fn test_template_mode_overrides_free_composition() {
    let mut app = app();
    app.set_base_prompt("Du bist ein Tutor.");
    app.select_template("basic");
    app.set_field("task_description", "erkläre Closures");
    app.set_field("output_format", "Zwei Absätze");

    // With a template selected, the base prompt free text is not used
    let prompt = app.assemble();
    assert_eq!(prompt, "Bitte erkläre Closures.\n\nZwei Absätze");
}

#[test]
fn test_persona_template_substitution() {
    let mut app = app();
    app.select_template("persona");
    app.set_field("role", "Datenbankadministrator");
    app.set_field("experience", "12");
    app.set_field("task_description", "Optimiere diese Abfrage.");
    app.set_field("output_format", "");

    let prompt = app.assemble();
    assert!(prompt.starts_with(
        "Du bist ein/e Datenbankadministrator mit 12 Jahren Erfahrung. Optimiere diese Abfrage."
    ));
}

#[test]
fn test_unfilled_fields_render_as_markers() {
    let mut app = app();
    app.select_template("creative");

    let prompt = app.assemble();
    assert!(prompt.contains("[content_type]"));
    assert!(prompt.contains("[topic]"));
    assert!(prompt.contains("[characteristics]"));
}

#[test]
fn test_two_templates_render_in_selection_order() {
    let mut app = app();
    app.select_template("question-answering");
    app.select_template("basic");
    app.set_field("question", "Was ist Ownership?");
    app.set_field("context", "Rust");
    app.set_field("task_description", "fasse zusammen");
    app.set_field("output_format", "kurz");

    let prompt = app.assemble();
    let parts: Vec<&str> = prompt.split("\n\n---\n\n").collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].starts_with("Beantworte folgende Frage: Was ist Ownership?"));
    assert!(parts[1].starts_with("Bitte fasse zusammen."));
}

// ============================================================================
// Suggestion Tests
// ============================================================================

#[test]
fn test_suggestions_mention_missing_role() {
    let mut app = app();
    app.select_technique("basic-prompting");
    let hints = app.suggestions();
    assert!(hints.iter().any(|s| s.contains("Role Prompting")));
    assert!(hints.iter().any(|s| s.contains("Ausgabeformat")));
}

#[test]
fn test_no_selection_still_suggests_role_description() {
    let app = app();
    let hints = app.suggestions();
    assert!(hints.iter().any(|s| s.contains("Rollenbeschreibung")));
}
