//! Saved Prompt Store Integration Tests
//!
//! Persistence behavior over both storage ports: CRUD round trips,
//! reload, corrupt-data recovery, session resume.

use prompt_helper::storage::SAVED_PROMPTS_KEY;
use prompt_helper::{
    AppState, FileStorage, MemoryStorage, SavedPromptUpdate, StoragePort,
};

fn app() -> AppState<MemoryStorage> {
    AppState::new(MemoryStorage::new()).unwrap()
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[test]
fn test_save_assigns_unique_ids() {
    let mut app = app();
    app.set_task_description("eins");
    let first = app.save_prompt("Erster").unwrap();
    app.set_task_description("zwei");
    let second = app.save_prompt("Zweiter").unwrap();

    assert_ne!(first, second);
    assert_eq!(app.prompts().list().len(), 2);
}

#[test]
fn test_saved_record_captures_full_state() {
    let mut app = app();
    app.select_template("persona");
    app.set_field("role", "Lektor");
    app.set_task_description("Korrigiere den Text");

    let id = app.save_prompt("Lektorat").unwrap();
    let record = app.prompts().get(&id).unwrap();

    assert_eq!(record.name, "Lektorat");
    assert_eq!(record.selected_templates, vec!["persona"]);
    assert!(record.selected_techniques.contains(&"zero-shot-prompting".to_string()));
    assert_eq!(record.template_fields.get("role").map(String::as_str), Some("Lektor"));
    assert_eq!(record.task_description, "Korrigiere den Text");
    assert_eq!(record.prompt_text, app.assemble());
    assert!(!record.timestamp.is_empty());
}

#[test]
fn test_update_merges_and_refreshes_timestamp() {
    let mut app = app();
    app.set_task_description("X");
    let id = app.save_prompt("Alt").unwrap();
    let original_text = app.prompts().get(&id).unwrap().prompt_text.clone();

    let changed = app
        .prompts_mut()
        .update(
            &id,
            SavedPromptUpdate {
                name: Some("Neu".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(changed);

    let record = app.prompts().get(&id).unwrap();
    assert_eq!(record.name, "Neu");
    assert_eq!(record.prompt_text, original_text);
}

#[test]
fn test_update_unknown_id_returns_false() {
    let mut app = app();
    let changed = app
        .prompts_mut()
        .update("missing", SavedPromptUpdate::default())
        .unwrap();
    assert!(!changed);
}

#[test]
fn test_delete_removes_record() {
    let mut app = app();
    app.set_task_description("X");
    let id = app.save_prompt("Weg damit").unwrap();

    assert!(app.prompts_mut().delete(&id).unwrap());
    assert!(app.prompts().get(&id).is_none());
    assert!(!app.prompts_mut().delete(&id).unwrap());
}

#[test]
fn test_duplicate_names_are_allowed() {
    let mut app = app();
    app.set_task_description("X");
    app.save_prompt("Doppelt").unwrap();
    app.save_prompt("Doppelt").unwrap();

    assert_eq!(app.prompts().list().len(), 2);
    assert!(app.prompts().name_exists("Doppelt"));
    assert!(!app.prompts().name_exists("doppelt"));
}

// ============================================================================
// Reload and Recovery Tests
// ============================================================================

#[test]
fn test_saved_prompts_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let port = FileStorage::new(dir.path());

    let id = {
        let mut app = AppState::new(port.clone()).unwrap();
        app.set_task_description("persistiert");
        app.save_prompt("Bleibt").unwrap()
    };

    let reloaded = AppState::new(port).unwrap();
    let record = reloaded.prompts().get(&id).unwrap();
    assert_eq!(record.name, "Bleibt");
    assert_eq!(record.task_description, "persistiert");
}

#[test]
fn test_corrupt_store_starts_empty_instead_of_failing() {
    let mut port = MemoryStorage::new();
    port.set(SAVED_PROMPTS_KEY, "{definitely not an array").unwrap();

    let app = AppState::new(port).unwrap();
    assert!(app.prompts().list().is_empty());
}

#[test]
fn test_legacy_records_without_ids_get_backfilled() {
    let mut port = MemoryStorage::new();
    port.set(
        SAVED_PROMPTS_KEY,
        r#"[{"name": "alt", "prompt": "Aufgabe: X"}]"#,
    )
    .unwrap();

    let app = AppState::new(port).unwrap();
    let records = app.prompts().list();
    assert_eq!(records.len(), 1);
    assert!(!records[0].id.is_empty());
}

// ============================================================================
// Session Resume Tests
// ============================================================================

#[test]
fn test_session_snapshot_restores_in_new_instance() {
    let port = MemoryStorage::new();
    {
        let mut app = AppState::new(port.clone()).unwrap();
        app.select_technique("tree-of-thoughts");
        app.select_template("few-shot");
        app.set_field("examples", "A -> B");
        app.save_session().unwrap();
    }

    let mut resumed = AppState::new(port).unwrap();
    assert!(resumed.restore_session().unwrap());
    assert!(resumed.selection().has_technique("tree-of-thoughts"));
    assert!(resumed.selection().has_template("few-shot"));
    assert_eq!(resumed.selection().get_field("examples"), "A -> B");
}

#[test]
fn test_restore_without_session_returns_false() {
    let mut app = app();
    assert!(!app.restore_session().unwrap());
}

#[test]
fn test_load_saved_prompt_replaces_current_selection() {
    let mut app = app();
    app.select_technique("react-prompting");
    app.set_task_description("Plane die Reise");
    let id = app.save_prompt("Reise").unwrap();

    app.clear().unwrap();
    app.select_technique("self-critique");

    assert!(app.load_prompt(&id));
    assert_eq!(app.selection().selected_techniques(), ["react-prompting"]);
    assert!(!app.selection().has_technique("self-critique"));
    assert_eq!(app.selection().free_text.task_description, "Plane die Reise");
}
