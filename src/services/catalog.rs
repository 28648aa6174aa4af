//! Technique and Template Catalogs
//!
//! Read-only lookup over the static taxonomy. Ships with the built-in
//! German data set; custom catalogs can be constructed from
//! caller-supplied vectors.

use crate::models::technique::{Category, Technique};
use crate::models::template::{FieldSpec, FieldType, Template};

/// Static lookup of technique records, grouped by category
#[derive(Debug, Clone)]
pub struct TechniqueCatalog {
    categories: Vec<Category>,
    techniques: Vec<Technique>,
}

impl TechniqueCatalog {
    pub fn new(categories: Vec<Category>, techniques: Vec<Technique>) -> Self {
        Self {
            categories,
            techniques,
        }
    }

    /// Catalog with the built-in technique taxonomy
    pub fn with_builtins() -> Self {
        Self::new(builtin_categories(), builtin_techniques())
    }

    pub fn get(&self, id: &str) -> Option<&Technique> {
        self.techniques.iter().find(|t| t.id == id)
    }

    /// All techniques in definition order
    pub fn all(&self) -> &[Technique] {
        &self.techniques
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn list_by_category(&self, category_id: &str) -> Vec<&Technique> {
        self.techniques
            .iter()
            .filter(|t| t.category_id == category_id)
            .collect()
    }

    /// Display label for a technique id. Dangling ids fall back to the
    /// raw id string rather than erroring.
    pub fn label(&self, id: &str) -> String {
        self.get(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Case-insensitive substring search over name, description, and
    /// aliases
    pub fn search(&self, term: &str) -> Vec<&Technique> {
        self.techniques.iter().filter(|t| t.matches(term)).collect()
    }
}

/// Static lookup of template records
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Catalog with the built-in templates
    pub fn with_builtins() -> Self {
        Self::new(builtin_templates())
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// All templates in definition order
    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    /// Related technique ids for a template; empty for unknown ids
    pub fn related_techniques(&self, id: &str) -> &[String] {
        self.get(id)
            .map(|t| t.related_techniques.as_slice())
            .unwrap_or(&[])
    }
}

fn category(id: &str, name: &str, description: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        category(
            "basic-concepts",
            "Grundkonzepte",
            "Grundlegende Prompt-Strukturen und konzeptuelle Rahmenwerke",
        ),
        category(
            "reasoning-frameworks",
            "Denkrahmen",
            "Techniken, die das Modell durch explizite Denkschritte führen",
        ),
        category(
            "self-improvement",
            "Selbstverbesserung",
            "Techniken, die das Modell anleiten, seine eigenen Ausgaben zu verfeinern",
        ),
        category(
            "agent-tool-use",
            "Agent & Tool Use",
            "Techniken für den Einsatz von KI-Agenten und externen Tools",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn technique(
    id: &str,
    name: &str,
    description: &str,
    category_id: &str,
    related: &[&str],
    sources: &[&str],
    use_case: &str,
    example: &str,
) -> Technique {
    Technique {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        aliases: Vec::new(),
        sources: sources.iter().map(|s| s.to_string()).collect(),
        related_techniques: related.iter().map(|s| s.to_string()).collect(),
        example: Some(example.to_string()),
        use_case: Some(use_case.to_string()),
        tips: None,
        common_mistakes: None,
        category_id: category_id.to_string(),
    }
}

fn builtin_techniques() -> Vec<Technique> {
    let mut techniques = vec![
        technique(
            "basic-prompting",
            "Basic Prompting",
            "Die einfachste Form, normalerweise Anweisung + Eingabe, ohne Beispiele oder komplexe Denkschritte.",
            "basic-concepts",
            &["instructed-prompting", "zero-shot-learning"],
            &["Vatsal & Dubey", "Schulhoff et al.", "Wei et al."],
            "Direkte Aufgaben mit klaren Anweisungen.",
            "Übersetze den folgenden englischen Text ins Französische: 'Hello, how are you?'",
        ),
        technique(
            "few-shot-learning",
            "Few-Shot Learning/Prompting",
            "Einige Beispiele im Prompt bereitstellen, um das Modell anzuleiten.",
            "basic-concepts",
            &["one-shot-learning", "zero-shot-learning", "in-context-learning"],
            &["Brown et al.", "Wei et al.", "Schulhoff et al."],
            "Aufgaben, bei denen eine kleine Anzahl von Beispielen die Absicht verdeutlichen kann.",
            "Klassifiziere die Stimmung der folgenden Restaurant-Bewertungen als positiv oder negativ.",
        ),
        technique(
            "zero-shot-learning",
            "Zero-Shot Learning/Prompting",
            "Das Modell bitten, eine Aufgabe ohne Beispiele auszuführen.",
            "basic-concepts",
            &["few-shot-learning", "one-shot-learning", "instructed-prompting"],
            &["Brown et al.", "Vatsal & Dubey", "Schulhoff et al."],
            "Allzweckaufgaben, bei denen keine Beispiele verfügbar sind.",
            "Fasse die Hauptpunkte des folgenden Artikels in 3 Stichpunkten zusammen: [Artikeltext]",
        ),
        technique(
            "chain-of-thought",
            "Chain-of-Thought (CoT) Prompting",
            "Schrittweises Denken vor der endgültigen Antwort hervorrufen.",
            "basic-concepts",
            &["zero-shot-cot", "few-shot-cot", "self-consistency"],
            &["Wei et al.", "Schulhoff et al."],
            "Komplexe Denk- oder mehrstufige Probleme.",
            "Denken wir Schritt für Schritt darüber nach...",
        ),
        technique(
            "role-prompting",
            "Role Prompting",
            "Dem Modell eine bestimmte Rolle oder Persona zuweisen.",
            "basic-concepts",
            &["instructed-prompting"],
            &["Nori et al."],
            "Aufgaben, die Fachkenntnisse oder einen bestimmten Ton/Stil erfordern.",
            "Du bist ein erfahrener Steuerberater...",
        ),
        technique(
            "instructed-prompting",
            "Instructed Prompting",
            "Klare und spezifische Anweisungen für das Modell.",
            "basic-concepts",
            &["basic-prompting", "role-prompting"],
            &["OpenAI Best Practices"],
            "Aufgaben mit spezifischen Anforderungen und Formaten.",
            "Folge diesen spezifischen Schritten: 1) Analysiere, 2) Bewerte, 3) Empfehle...",
        ),
        technique(
            "context-stuffing",
            "Context Stuffing",
            "Relevante Informationen in den Prompt einbetten.",
            "basic-concepts",
            &["few-shot-learning", "in-context-learning"],
            &["Practical Prompting"],
            "Bereitstellung spezifischer Informationen für bessere Antworten.",
            "Hier sind die relevanten Unternehmensdaten: [Daten]. Basierend auf diesen Informationen...",
        ),
        technique(
            "tree-of-thoughts",
            "Tree-of-Thoughts (ToT)",
            "Mehrere Denkpfade in einer Baumstruktur erforschen.",
            "reasoning-frameworks",
            &["chain-of-thought", "self-consistency"],
            &["Yao et al.", "Vatsal & Dubey"],
            "Komplexe Probleme mit mehreren möglichen Ansätzen.",
            "Lass uns verschiedene Ansätze für dieses Problem erkunden...",
        ),
        technique(
            "self-consistency",
            "Self-Consistency",
            "Mehrere Denkwege generieren und die konsistenteste Antwort wählen.",
            "reasoning-frameworks",
            &["chain-of-thought", "tree-of-thoughts"],
            &["Wang et al."],
            "Komplexe Denkprobleme, bei denen Konsistenz wichtig ist.",
            "Lass uns das Schritt für Schritt durchgehen...",
        ),
        technique(
            "few-shot-cot",
            "Few-Shot Chain-of-Thought",
            "CoT mit Beispielen für schrittweises Denken.",
            "reasoning-frameworks",
            &["chain-of-thought", "few-shot-learning"],
            &["Wei et al., 2022"],
            "Komplexe Probleme mit verfügbaren Denkbeispielen.",
            "Beispiel: Problem X → Schritt 1... Schritt 2... Antwort. Jetzt löse Problem Y...",
        ),
        technique(
            "self-correction",
            "Self-Correction",
            "Modell überprüft und überarbeitet seine eigene Ausgabe.",
            "self-improvement",
            &["self-critique", "self-evaluation"],
            &["Madaan et al., 2023"],
            "Fehlerreduzierung, schrittweise Verbesserung.",
            "Überprüfe nach dem Generieren deiner Antwort auf Fehler...",
        ),
        technique(
            "self-critique",
            "Self-Critique",
            "Modell bewertet kritisch seine eigene Ausgabe.",
            "self-improvement",
            &["self-correction", "constitutional-ai"],
            &["Constitutional AI"],
            "Qualitätsbewertung und Verbesserung der Ausgaben.",
            "Bewerte deine Antwort kritisch und identifiziere Verbesserungsmöglichkeiten...",
        ),
        technique(
            "tool-use",
            "Tool Use",
            "KI-Modell nutzt externe Tools und APIs.",
            "agent-tool-use",
            &["react-prompting", "plan-and-execute"],
            &["Function Calling", "ReAct"],
            "Aufgaben, die externe Ressourcen oder Berechnungen erfordern.",
            "Verwende das Wetter-Tool, um die aktuelle Temperatur zu ermitteln...",
        ),
        technique(
            "react-prompting",
            "ReAct (Reasoning + Acting)",
            "Kombination aus Denken und Handeln in einer Schleife.",
            "agent-tool-use",
            &["tool-use", "chain-of-thought"],
            &["Yao et al., 2022"],
            "Komplexe Aufgaben, die sowohl Denken als auch Aktionen erfordern.",
            "Thought: Ich muss das Wetter überprüfen. Action: weather_api('Berlin')...",
        ),
    ];

    // Alternative names the technique is commonly known under
    if let Some(basic) = techniques.iter_mut().find(|t| t.id == "basic-prompting") {
        basic.aliases = vec![
            "Standard Prompting".to_string(),
            "Vanilla Prompting".to_string(),
        ];
    }

    techniques
}

fn field(name: &str, field_type: FieldType, label: &str, required: bool) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        field_type,
        label: label.to_string(),
        required,
        options: None,
        placeholder: None,
    }
}

fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "basic".to_string(),
            name: "Basic Template".to_string(),
            description: "Grundlegende Prompt-Struktur für einfache Aufgaben".to_string(),
            body: "Bitte {task_description}.\n\n{output_format}".to_string(),
            fields: vec![
                field(
                    "task_description",
                    FieldType::Textarea,
                    "Aufgabenbeschreibung",
                    true,
                ),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Ausgabeformat (optional)",
                    false,
                ),
            ],
            related_techniques: vec!["zero-shot-prompting".to_string()],
        },
        Template {
            id: "persona".to_string(),
            name: "Persona Template".to_string(),
            description: "Expertenpersona mit Rolle und Erfahrung definieren".to_string(),
            body: "Du bist ein/e {role} mit {experience} Jahren Erfahrung. {task_description}\n\n{output_format}"
                .to_string(),
            fields: vec![
                FieldSpec {
                    name: "role".to_string(),
                    field_type: FieldType::Text,
                    label: "Rolle/Expertise".to_string(),
                    required: true,
                    options: None,
                    placeholder: Some("z.B. Softwareentwickler, Marketing-Experte".to_string()),
                },
                FieldSpec {
                    name: "experience".to_string(),
                    field_type: FieldType::Number,
                    label: "Jahre Erfahrung".to_string(),
                    required: true,
                    options: None,
                    placeholder: Some("5".to_string()),
                },
                field(
                    "task_description",
                    FieldType::Textarea,
                    "Aufgabenbeschreibung",
                    true,
                ),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Ausgabeformat (optional)",
                    false,
                ),
            ],
            related_techniques: vec!["zero-shot-prompting".to_string()],
        },
        Template {
            id: "few-shot".to_string(),
            name: "Few-Shot Template".to_string(),
            description: "Lernen durch Beispiele".to_string(),
            body: "Kontext: {context}\n\nBeispiele:\n{examples}\n\nAufgabe: {task_description}\n\n{output_format}"
                .to_string(),
            fields: vec![
                field("context", FieldType::Textarea, "Kontext/Hintergrund", true),
                field("examples", FieldType::Textarea, "Beispiele", true),
                field(
                    "task_description",
                    FieldType::Textarea,
                    "Aufgabenbeschreibung",
                    true,
                ),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Ausgabeformat (optional)",
                    false,
                ),
            ],
            related_techniques: vec!["few-shot-prompting".to_string()],
        },
        Template {
            id: "step-by-step".to_string(),
            name: "Step-by-Step Template".to_string(),
            description: "Aufgaben in Zwischenschritte unterteilen".to_string(),
            body: "Löse folgende Aufgabe Schritt für Schritt:\n\n{task_description}\n\n{steps}\n\n{output_format}"
                .to_string(),
            fields: vec![
                field(
                    "task_description",
                    FieldType::Textarea,
                    "Hauptaufgabe",
                    true,
                ),
                field("steps", FieldType::Textarea, "Zwischenschritte", false),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Ausgabeformat (optional)",
                    false,
                ),
            ],
            related_techniques: vec!["chain-of-thought-prompting".to_string()],
        },
        Template {
            id: "question-answering".to_string(),
            name: "Question-Answering Template".to_string(),
            description: "Spezifische Fragen beantworten".to_string(),
            body: "Beantworte folgende Frage: {question}\n\n{context}\n\n{output_format}".to_string(),
            fields: vec![
                field("question", FieldType::Textarea, "Frage", true),
                field("context", FieldType::Textarea, "Kontext (optional)", false),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Ausgabeformat (optional)",
                    false,
                ),
            ],
            related_techniques: vec!["zero-shot-prompting".to_string()],
        },
        Template {
            id: "text-analysis".to_string(),
            name: "Text-Analyse & Mindmap Template".to_string(),
            description: "Analysiert Texte und erstellt Mindmaps in Mermaid-Code".to_string(),
            body: "Analysiere den folgenden Text und erstelle eine Mindmap:\n\nText: {input_text}\n\nFokus: {analysis_focus}\n\nErstelle:\n1. Eine kurze Analyse der Hauptthemen\n2. Eine Mindmap in Mermaid-Code mit den Struktur-Anforderungen: {structure_requirements}\n3. Erklärung der Mindmap-Logik\n\n{output_format}"
                .to_string(),
            fields: vec![
                field(
                    "input_text",
                    FieldType::Textarea,
                    "Zu analysierender Text",
                    true,
                ),
                FieldSpec {
                    name: "analysis_focus".to_string(),
                    field_type: FieldType::Select,
                    label: "Analyse-Fokus".to_string(),
                    required: true,
                    options: Some(vec![
                        "Hauptthemen & Struktur".to_string(),
                        "Argumentationslinien".to_string(),
                        "Konzepte & Beziehungen".to_string(),
                        "Prozesse & Abläufe".to_string(),
                        "Kategorien & Hierarchien".to_string(),
                    ]),
                    placeholder: None,
                },
                field(
                    "structure_requirements",
                    FieldType::Textarea,
                    "Mindmap-Struktur Anforderungen",
                    true,
                ),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Zusätzliche Anforderungen (optional)",
                    false,
                ),
            ],
            related_techniques: vec![
                "chain-of-thought-prompting".to_string(),
                "self-refine-prompting".to_string(),
            ],
        },
        Template {
            id: "creative".to_string(),
            name: "Kreative Generierung Template".to_string(),
            description: "Kreative Inhalte mit charakteristischen Eigenschaften".to_string(),
            body: "Erstelle {content_type} über {topic} mit folgenden Eigenschaften:\n{characteristics}\n\n{output_format}"
                .to_string(),
            fields: vec![
                FieldSpec {
                    name: "content_type".to_string(),
                    field_type: FieldType::Select,
                    label: "Content-Typ".to_string(),
                    required: true,
                    options: Some(vec![
                        "Artikel".to_string(),
                        "Geschichte".to_string(),
                        "Gedicht".to_string(),
                        "Blogpost".to_string(),
                        "Marketing-Text".to_string(),
                        "Produktbeschreibung".to_string(),
                        "Social Media Post".to_string(),
                    ]),
                    placeholder: None,
                },
                field("topic", FieldType::Text, "Thema", true),
                field(
                    "characteristics",
                    FieldType::Textarea,
                    "Eigenschaften/Charakteristika",
                    true,
                ),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Ausgabeformat (optional)",
                    false,
                ),
            ],
            related_techniques: vec!["few-shot-prompting".to_string()],
        },
        Template {
            id: "interactive".to_string(),
            name: "Interaktiv/Mehrschrittig Template".to_string(),
            description: "Mehrschrittige Interaktionen mit if-else Requirements".to_string(),
            body: "Interaktive Aufgabe: {task_description}\n\nErster Schritt: {initial_step}\n\n{requirements}\n\n{output_format}"
                .to_string(),
            fields: vec![
                field(
                    "task_description",
                    FieldType::Textarea,
                    "Aufgabenbeschreibung",
                    true,
                ),
                field(
                    "initial_step",
                    FieldType::Textarea,
                    "Initialer Schritt",
                    true,
                ),
                field(
                    "requirements",
                    FieldType::Textarea,
                    "Bedingungen & Anforderungen",
                    false,
                ),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Ausgabeformat (optional)",
                    false,
                ),
            ],
            related_techniques: vec!["least-to-most-prompting".to_string()],
        },
        Template {
            id: "critical-analysis".to_string(),
            name: "Kritische Ideenbewertung Template".to_string(),
            description: "Bewertung von Ideen aus multiplen kritischen Perspektiven".to_string(),
            body: "Bewerte folgende Idee kritisch aus drei Perspektiven:\n\nIdee: {idea_description}\n\nKontext: {context}\n\n1. Was spricht dafür? {pro_focus}\n2. Welche logischen, ethischen oder praktischen Gegenargumente gibt es? {contra_focus}\n3. Welche Annahmen könnten falsch oder verkürzt sein? {assumptions_focus}\n\nZusätzliche kritische Frage: Welche Perspektive widerspricht meiner und warum?\n\n{critical_requirements}\n\nBitte keine Schmeicheleien – ich will differenzierte, ehrliche Kritik.\n\n{output_format}"
                .to_string(),
            fields: vec![
                field(
                    "idea_description",
                    FieldType::Textarea,
                    "Zu bewertende Idee",
                    true,
                ),
                field(
                    "context",
                    FieldType::Textarea,
                    "Kontext/Hintergrund",
                    false,
                ),
                field("pro_focus", FieldType::Text, "Pro-Fokus (optional)", false),
                field(
                    "contra_focus",
                    FieldType::Text,
                    "Contra-Fokus (optional)",
                    false,
                ),
                field(
                    "assumptions_focus",
                    FieldType::Text,
                    "Annahmen-Fokus (optional)",
                    false,
                ),
                field(
                    "critical_requirements",
                    FieldType::Textarea,
                    "Spezifische kritische Anforderungen",
                    false,
                ),
                field(
                    "output_format",
                    FieldType::Textarea,
                    "Ausgabeformat (optional)",
                    false,
                ),
            ],
            related_techniques: vec![
                "chain-of-thought-prompting".to_string(),
                "self-consistency".to_string(),
            ],
        },
    ]
}
