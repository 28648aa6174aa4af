//! Prompt Assembler
//!
//! Pure functions turning the selection state into the final prompt
//! string. Two mutually exclusive modes: template substitution when
//! any template is selected, free composition otherwise.
//!
//! The substitution language is deliberately minimal: literal
//! `{field}` token replacement, no conditionals or loops.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::selection::SelectionState;
use crate::services::catalog::{TechniqueCatalog, TemplateCatalog};

/// Shown instead of an empty result so the caller never renders a
/// blank prompt
pub const EMPTY_PROMPT_PLACEHOLDER: &str = "Ihr Prompt wird hier angezeigt. Wählen Sie Techniken aus und füllen Sie die Eingabefelder aus, um Ihren Prompt zu erstellen.";

/// Separator between the bodies of multiple selected templates
const TEMPLATE_SEPARATOR: &str = "\n\n---\n\n";

/// Canned boilerplate phrases contributed by specific techniques in
/// free-composition mode. Walked in this fixed order regardless of
/// selection order; selected ids without an entry contribute nothing.
/// The phrases are not derived from the technique records.
const TECHNIQUE_BOILERPLATE: &[(&str, &str)] = &[
    (
        "chain-of-thought",
        "Ich möchte, dass Sie dieses Problem Schritt für Schritt durchdenken und Ihren Denkprozess zeigen.",
    ),
    (
        "self-consistency",
        "Generieren Sie mehrere verschiedene Denkwege, um dieses Problem zu lösen, und wählen Sie dann die konsistenteste Antwort.",
    ),
    ("zero-shot-cot", "Denken wir Schritt für Schritt darüber nach."),
    (
        "tree-of-thoughts",
        "Erkunden Sie für dieses Problem mehrere mögliche Ansätze. Denken Sie für jeden Ansatz über die nächsten Schritte nach und bewerten Sie, ob der Ansatz wahrscheinlich erfolgreich sein wird.",
    ),
    (
        "react-prompting",
        "Lassen Sie uns dieses Problem aufschlüsseln:\n1. Gedanke: Überlegen, was wir tun müssen\n2. Aktion: Bestimmen, welche Informationen oder Schritte wir benötigen\n3. Beobachtung: Ergebnisse notieren\n\nWiederholen Sie diesen Prozess, bis wir eine Lösung erreichen.",
    ),
    (
        "self-correction",
        "Überprüfen Sie nach der Erstellung Ihrer ersten Antwort diese auf Fehler oder Verbesserungsmöglichkeiten, und stellen Sie dann eine überarbeitete Version bereit.",
    ),
    (
        "role-prompting",
        "Sie sind ein Experte mit tiefgreifendem Wissen und Erfahrung in diesem Bereich. Gehen Sie diese Aufgabe mit professionellen Erkenntnissen an.",
    ),
    (
        "few-shot-learning",
        "Hier sind einige Beispiele, die Ihren Ansatz leiten sollen:\n\nBeispiel 1: [Eingabe: Einfache Frage] [Ausgabe: Klare Antwort]\nBeispiel 2: [Eingabe: Komplexe Frage] [Ausgabe: Detaillierte Antwort]",
    ),
    (
        "one-shot-learning",
        "Hier ist ein Beispiel dafür, wie Sie dies angehen können: [Eingabe: Beispielfrage] [Ausgabe: Beispielantwort]",
    ),
    (
        "basic-prompting",
        "Bitte geben Sie eine direkte und klare Antwort auf die folgende Aufgabe.",
    ),
];

fn field_token() -> &'static Regex {
    static FIELD_TOKEN: OnceLock<Regex> = OnceLock::new();
    FIELD_TOKEN.get_or_init(|| Regex::new(r"\{([^{}]+)\}").unwrap())
}

/// Assemble the final prompt from the current selection state.
///
/// Pure and idempotent: identical state yields byte-identical output.
/// Never returns an empty string; an empty result is replaced by
/// [`EMPTY_PROMPT_PLACEHOLDER`].
pub fn assemble(state: &SelectionState, templates: &TemplateCatalog) -> String {
    let prompt = if state.selected_templates().is_empty() {
        assemble_free_composition(state)
    } else {
        assemble_from_templates(state, templates)
    };

    if prompt.trim().is_empty() {
        EMPTY_PROMPT_PLACEHOLDER.to_string()
    } else {
        prompt
    }
}

/// Template mode: substitute `{field}` tokens in each selected
/// template body (selection order, stale ids skipped) and join with
/// the separator line.
fn assemble_from_templates(state: &SelectionState, templates: &TemplateCatalog) -> String {
    let bodies: Vec<String> = state
        .selected_templates()
        .iter()
        .filter_map(|id| templates.get(id))
        .map(|template| substitute_fields(&template.body, state))
        .collect();
    bodies.join(TEMPLATE_SEPARATOR)
}

/// Replace every `{field}` token in `body`.
///
/// Precedence: an entered field value wins; the reserved names
/// `task_description` and `output_format` fall back to the free-text
/// inputs; anything else renders as the visible marker `[field]` so
/// missing data is not silently blank.
fn substitute_fields(body: &str, state: &SelectionState) -> String {
    field_token()
        .replace_all(body, |caps: &Captures| {
            let name = &caps[1];
            if let Some(value) = state.field(name) {
                value.to_string()
            } else {
                match name {
                    "task_description" => state.free_text.task_description.clone(),
                    "output_format" => state.free_text.output_format.clone(),
                    _ => format!("[{name}]"),
                }
            }
        })
        .into_owned()
}

/// Free-composition mode: technique boilerplate in table order, then
/// the free-text sections.
fn assemble_free_composition(state: &SelectionState) -> String {
    let mut prompt = String::new();

    for (technique_id, phrase) in TECHNIQUE_BOILERPLATE {
        if state.has_technique(technique_id) {
            prompt.push_str(phrase);
            prompt.push_str("\n\n");
        }
    }

    if !state.free_text.base_prompt.is_empty() {
        prompt.push_str(&state.free_text.base_prompt);
        prompt.push_str("\n\n");
    }
    if !state.free_text.task_description.is_empty() {
        prompt.push_str("Aufgabe: ");
        prompt.push_str(&state.free_text.task_description);
        prompt.push_str("\n\n");
    }
    if !state.free_text.output_format.is_empty() {
        prompt.push_str("Ausgabeformat: ");
        prompt.push_str(&state.free_text.output_format);
        prompt.push('\n');
    }

    prompt
}

/// Crude token count estimate: ~4 characters per token. The
/// empty-prompt placeholder counts as zero.
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() || text == EMPTY_PROMPT_PLACEHOLDER {
        return 0;
    }
    text.chars().count().div_ceil(4)
}

/// Advisory suggestions for improving the current selection.
/// Plain strings; the caller decides how (and whether) to show them.
pub fn suggestions(state: &SelectionState, techniques: &TechniqueCatalog) -> Vec<String> {
    let selected = state.selected_techniques();
    let mut suggestions = Vec::new();

    if state.has_technique("basic-prompting") && !state.has_technique("role-prompting") {
        suggestions.push(
            "Fügen Sie Role Prompting hinzu, um einen Expertenkontext für bessere Ergebnisse zu etablieren."
                .to_string(),
        );
    }

    if !state.has_technique("role-prompting") {
        suggestions.push(
            "Fügen Sie eine Rollenbeschreibung im Basis-Prompt hinzu (z.B. 'Sie sind ein Experte...')."
                .to_string(),
        );
    }

    if state.has_technique("few-shot-learning") && !state.has_technique("chain-of-thought") {
        suggestions.push(
            "Erwägen Sie, Chain-of-Thought hinzuzufügen, um das Denken in Ihren Beispielen zu zeigen."
                .to_string(),
        );
    }

    if state.has_technique("tree-of-thoughts") && !state.has_technique("self-consistency") {
        suggestions.push(
            "Self-Consistency funktioniert gut mit Tree-of-Thoughts, um die beste Lösung auszuwählen."
                .to_string(),
        );
    }

    if !selected.is_empty() {
        suggestions.push(
            "Geben Sie ein Ausgabeformat an, um konsistentere Ergebnisse zu erhalten.".to_string(),
        );
    }

    if suggestions.is_empty() {
        if selected.len() == 1 {
            let name = techniques.label(&selected[0]);
            suggestions.push(format!(
                "Versuchen Sie, komplementäre Techniken zu \"{name}\" hinzuzufügen, um bessere Ergebnisse zu erzielen."
            ));
        } else {
            suggestions.push(
                "Ihr Prompt sieht gut aus! Erwägen Sie, spezifischere Ausgabebeschränkungen hinzuzufügen, falls erforderlich."
                    .to_string(),
            );
        }
    }

    suggestions
}
