//! Export Integration Tests
//!
//! Rendering the export envelope in every supported format through
//! the application state, plus configuration sharing between
//! instances.

use prompt_helper::services::ExportFormat;
use prompt_helper::{AppError, AppState, MemoryStorage, PromptExport};

fn app() -> AppState<MemoryStorage> {
    AppState::new(MemoryStorage::new()).unwrap()
}

fn populated_app() -> AppState<MemoryStorage> {
    let mut app = app();
    app.select_technique("chain-of-thought");
    app.select_technique("role-prompting");
    app.set_base_prompt("Du bist ein erfahrener Lektor.");
    app.set_task_description("Korrigiere den folgenden Absatz.");
    app.set_output_format("Markdown-Liste");
    app
}

// ============================================================================
// Envelope Tests
// ============================================================================

#[test]
fn test_export_envelope_resolves_technique_names() {
    let export = populated_app().export_prompt();
    assert_eq!(export.techniques.len(), 2);
    assert_eq!(
        export.techniques[0].name.as_deref(),
        Some("Chain-of-Thought (CoT) Prompting")
    );
    assert_eq!(export.metadata.version, "1.0");
    assert!(export.metadata.token_estimate > 0);
}

#[test]
fn test_export_keeps_dangling_technique_ids() {
    let mut app = app();
    app.select_template("basic");
    // "basic" relates an id with no catalog entry
    let export = app.export_prompt();
    let dangling = export
        .techniques
        .iter()
        .find(|t| t.id == "zero-shot-prompting")
        .unwrap();
    assert!(dangling.name.is_none());
}

// ============================================================================
// Format Tests
// ============================================================================

#[test]
fn test_text_export_has_all_sections() {
    let text = populated_app().render_export(ExportFormat::Text).unwrap();
    assert!(text.contains("ROLLE:\nDu bist ein erfahrener Lektor."));
    assert!(text.contains("AUFGABE:\nKorrigiere den folgenden Absatz."));
    assert!(text.contains("AUSGABEFORMAT:\nMarkdown-Liste"));
    assert!(text.contains("GENERIERTER PROMPT:"));
    assert!(text.contains("VERWENDETE TECHNIKEN: chain-of-thought, role-prompting"));
}

#[test]
fn test_markdown_export_fences_the_prompt() {
    let md = populated_app().render_export(ExportFormat::Markdown).unwrap();
    assert!(md.starts_with("# Prompt Export"));
    assert!(md.contains("## Generierter Prompt\n\n```\n"));
    assert!(md.contains("- **Verwendete Techniken:** chain-of-thought, role-prompting"));
}

#[test]
fn test_xml_export_wraps_content_in_cdata() {
    let xml = populated_app().render_export(ExportFormat::Xml).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<technik>chain-of-thought</technik>"));
    assert!(xml.contains("<rolle><![CDATA[Du bist ein erfahrener Lektor.]]></rolle>"));
    assert!(xml.trim_end().ends_with("</prompt>"));
}

#[test]
fn test_json_export_parses_back() {
    let json = populated_app().render_export(ExportFormat::Json).unwrap();
    let parsed: PromptExport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.task_description, "Korrigiere den folgenden Absatz.");
    assert_eq!(parsed.metadata.version, "1.0");
}

#[test]
fn test_format_extensions() {
    assert_eq!(ExportFormat::Text.extension(), "txt");
    assert_eq!(ExportFormat::Markdown.extension(), "md");
    assert_eq!(ExportFormat::Xml.extension(), "xml");
    assert_eq!(ExportFormat::Json.extension(), "json");
}

// ============================================================================
// Configuration Sharing Tests
// ============================================================================

#[test]
fn test_configuration_transfers_between_instances() {
    let mut sender = populated_app();
    sender.set_field("role", "Lektor");
    let json = sender.export_configuration().unwrap();

    let mut receiver = app();
    receiver.import_configuration(&json).unwrap();

    assert_eq!(
        receiver.selection().selected_techniques(),
        sender.selection().selected_techniques()
    );
    assert_eq!(receiver.selection().get_field("role"), "Lektor");
    assert_eq!(receiver.assemble(), sender.assemble());
}

#[test]
fn test_import_rejects_foreign_json() {
    let mut app = app();
    let err = app.import_configuration(r#"{"techniques": []}"#).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_import_rejects_malformed_json() {
    let mut app = app();
    assert!(app.import_configuration("not json at all").is_err());
}
