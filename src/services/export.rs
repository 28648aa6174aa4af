//! Export Renderers
//!
//! Turn a [`PromptExport`] into the supported file formats: plain
//! text, Markdown, a minimal custom XML, and JSON. Also the
//! configuration export/import envelope for sharing selection state.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::export::{
    ConfigurationExport, ExportMetadata, ExportedTechnique, ExportedTemplate, PromptExport,
};
use crate::models::selection::{SelectionSnapshot, SelectionState};
use crate::services::assembler;
use crate::services::catalog::{TechniqueCatalog, TemplateCatalog};
use crate::utils::error::{AppError, AppResult};

/// Format version written into prompt exports; never checked on read
const PROMPT_EXPORT_VERSION: &str = "1.0";

/// Format version written into configuration exports
const CONFIGURATION_EXPORT_VERSION: &str = "2.0";

/// The supported prompt export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
    Xml,
    Json,
}

impl ExportFormat {
    /// File extension for download/save dialogs
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Xml => "xml",
            ExportFormat::Json => "json",
        }
    }

    /// Render an export envelope in this format
    pub fn render(&self, export: &PromptExport) -> AppResult<String> {
        match self {
            ExportFormat::Text => Ok(render_text(export)),
            ExportFormat::Markdown => Ok(render_markdown(export)),
            ExportFormat::Xml => Ok(render_xml(export)),
            ExportFormat::Json => render_json(export),
        }
    }
}

/// Build the export envelope for the current state. Technique and
/// template names are resolved from the catalogs; dangling ids keep
/// `None` metadata instead of being dropped.
pub fn build_export(
    state: &SelectionState,
    prompt_text: &str,
    techniques: &TechniqueCatalog,
    templates: &TemplateCatalog,
    exported_at: DateTime<Utc>,
) -> PromptExport {
    PromptExport {
        prompt: prompt_text.to_string(),
        techniques: state
            .selected_techniques()
            .iter()
            .map(|id| ExportedTechnique {
                id: id.clone(),
                name: techniques.get(id).map(|t| t.name.clone()),
                description: techniques.get(id).map(|t| t.description.clone()),
            })
            .collect(),
        base_prompt: state.free_text.base_prompt.clone(),
        task_description: state.free_text.task_description.clone(),
        output_format: state.free_text.output_format.clone(),
        templates: state
            .selected_templates()
            .iter()
            .map(|id| ExportedTemplate {
                id: id.clone(),
                name: templates.get(id).map(|t| t.name.clone()),
            })
            .collect(),
        template_fields: state.field_values().clone(),
        metadata: ExportMetadata {
            timestamp: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: PROMPT_EXPORT_VERSION.to_string(),
            token_estimate: assembler::estimate_tokens(prompt_text),
        },
    }
}

/// Human-readable date for the metadata trailers. Falls back to the
/// raw timestamp string if it does not parse.
fn display_timestamp(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%d.%m.%Y, %H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

fn technique_id_list(export: &PromptExport) -> String {
    export
        .techniques
        .iter()
        .map(|t| t.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain text with literal section headers
pub fn render_text(export: &PromptExport) -> String {
    let mut out = String::new();

    if !export.base_prompt.trim().is_empty() {
        out.push_str(&format!("ROLLE:\n{}\n\n", export.base_prompt));
    }
    if !export.task_description.trim().is_empty() {
        out.push_str(&format!("AUFGABE:\n{}\n\n", export.task_description));
    }
    if !export.output_format.trim().is_empty() {
        out.push_str(&format!("AUSGABEFORMAT:\n{}\n\n", export.output_format));
    }

    out.push_str(&format!("GENERIERTER PROMPT:\n{}\n\n", export.prompt));

    out.push_str(&format!(
        "---\nERSTELLT AM: {}\n",
        display_timestamp(&export.metadata.timestamp)
    ));
    if !export.techniques.is_empty() {
        out.push_str(&format!(
            "VERWENDETE TECHNIKEN: {}\n",
            technique_id_list(export)
        ));
    }

    out
}

/// Markdown with a heading per section and the prompt in a fenced
/// code block
pub fn render_markdown(export: &PromptExport) -> String {
    let mut out = String::from("# Prompt Export\n\n");

    if !export.base_prompt.trim().is_empty() {
        out.push_str(&format!("## Rolle\n\n{}\n\n", export.base_prompt));
    }
    if !export.task_description.trim().is_empty() {
        out.push_str(&format!("## Aufgabe\n\n{}\n\n", export.task_description));
    }
    if !export.output_format.trim().is_empty() {
        out.push_str(&format!("## Ausgabeformat\n\n{}\n\n", export.output_format));
    }

    out.push_str(&format!(
        "## Generierter Prompt\n\n```\n{}\n```\n\n",
        export.prompt
    ));

    out.push_str("## Metadaten\n\n");
    out.push_str(&format!(
        "- **Erstellt am:** {}\n",
        display_timestamp(&export.metadata.timestamp)
    ));
    if !export.techniques.is_empty() {
        out.push_str(&format!(
            "- **Verwendete Techniken:** {}\n",
            technique_id_list(export)
        ));
    }

    out
}

/// Minimal custom XML: CDATA-wrapped sections, hand-escaped ids
pub fn render_xml(export: &PromptExport) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<prompt>\n");
    out.push_str("  <metadaten>\n");
    out.push_str(&format!(
        "    <erstellt_am>{}</erstellt_am>\n",
        export.metadata.timestamp
    ));
    if !export.techniques.is_empty() {
        out.push_str("    <verwendete_techniken>\n");
        for technique in &export.techniques {
            out.push_str(&format!(
                "      <technik>{}</technik>\n",
                escape_xml(&technique.id)
            ));
        }
        out.push_str("    </verwendete_techniken>\n");
    }
    out.push_str("  </metadaten>\n");

    if !export.base_prompt.trim().is_empty() {
        out.push_str(&format!(
            "  <rolle><![CDATA[{}]]></rolle>\n",
            export.base_prompt
        ));
    }
    if !export.task_description.trim().is_empty() {
        out.push_str(&format!(
            "  <aufgabe><![CDATA[{}]]></aufgabe>\n",
            export.task_description
        ));
    }
    if !export.output_format.trim().is_empty() {
        out.push_str(&format!(
            "  <ausgabeformat><![CDATA[{}]]></ausgabeformat>\n",
            export.output_format
        ));
    }

    out.push_str(&format!(
        "  <generierter_prompt><![CDATA[{}]]></generierter_prompt>\n",
        export.prompt
    ));
    out.push_str("</prompt>");

    out
}

/// Pretty-printed JSON of the full export envelope
pub fn render_json(export: &PromptExport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(export)?)
}

/// Escape the XML special characters `< > & " '`
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a selection snapshot in the shareable configuration envelope
pub fn export_configuration(
    snapshot: SelectionSnapshot,
    exported_at: DateTime<Utc>,
) -> ConfigurationExport {
    ConfigurationExport {
        version: CONFIGURATION_EXPORT_VERSION.to_string(),
        timestamp: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        configuration: snapshot,
    }
}

/// Parse a configuration export back into a selection snapshot.
/// Rejects blobs missing the version or configuration keys; the
/// version value itself is not checked.
pub fn import_configuration(json: &str) -> AppResult<SelectionSnapshot> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("version").is_none() || value.get("configuration").is_none() {
        return Err(AppError::validation("Invalid configuration format"));
    }
    let export: ConfigurationExport = serde_json::from_value(value)?;
    Ok(export.configuration)
}
