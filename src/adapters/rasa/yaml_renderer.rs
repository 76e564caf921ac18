//! Rasa 3.x YAML renderer.
//!
//! Builds the generated sections as plain text so the output layout stays
//! stable across runs and hand-authored preambles are never re-serialized.
//! Merged documents are parsed back with `serde_yaml` as a sanity check.

use std::borrow::Cow;

use crate::domain::document::DocumentKind;
use crate::domain::intent::{Corpus, SynonymSection};
use crate::domain::migration::DomainSection;
use crate::domain::response::ResponseStep;
use crate::domain::rules::RuleBook;
use crate::ports::{RenderError, SectionRenderer};

/// Renders sections in the Rasa 3.x training data and domain format.
#[derive(Debug, Clone, Default)]
pub struct RasaYamlRenderer;

impl RasaYamlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn push_examples<'a>(out: &mut String, examples: impl IntoIterator<Item = &'a String>) {
        out.push_str("  examples: |\n");
        for example in examples {
            out.push_str(&format!("    - {}\n", single_line(example)));
        }
        out.push('\n');
    }

    fn push_step(out: &mut String, step: &ResponseStep) {
        match (&step.text, &step.image) {
            (Some(text), image) => {
                out.push_str(&format!("  - text: {}\n", single_quoted(text)));
                if let Some(url) = image {
                    out.push_str(&format!("    image: {}\n", double_quoted(url)));
                }
            }
            (None, Some(url)) => {
                out.push_str(&format!("  - image: {}\n", double_quoted(url)));
            }
            (None, None) => {}
        }
    }
}

impl SectionRenderer for RasaYamlRenderer {
    fn render_synonyms(&self, synonyms: &[SynonymSection]) -> String {
        let mut out = String::from(DocumentKind::Synonyms.anchor());
        for section in synonyms {
            out.push_str(&format!("- synonym: {}\n", scalar(&section.value)));
            Self::push_examples(&mut out, &section.examples);
        }
        out
    }

    fn render_corpus(&self, corpus: &Corpus) -> String {
        let mut out = String::from(DocumentKind::Corpus.anchor());
        for section in corpus.sections() {
            out.push_str(&format!("- intent: {}\n", scalar(&section.intent)));
            Self::push_examples(&mut out, &section.examples);
        }
        out
    }

    fn render_domain(&self, domain: &DomainSection) -> String {
        let mut out = String::from(DocumentKind::Domain.anchor());
        for intent in domain.intents.iter() {
            out.push_str(&format!("- {}\n", scalar(intent)));
        }

        out.push_str("\nentities:\n");
        for entity in domain.entities.iter() {
            out.push_str(&format!("- {}\n", scalar(entity)));
        }

        out.push_str("\nresponses:\n");
        for block in &domain.responses {
            if block.is_empty() {
                out.push_str(&format!("  {}: []\n", scalar(block.id())));
                continue;
            }
            out.push_str(&format!("  {}:\n", scalar(block.id())));
            for step in block.steps() {
                Self::push_step(&mut out, step);
            }
        }
        out
    }

    fn render_rules(&self, rules: &RuleBook) -> String {
        let mut out = String::from(DocumentKind::Rules.anchor());
        for rule in rules.blocks() {
            out.push_str(&format!("\n- rule: {}\n", scalar(&rule.name())));
            out.push_str("  steps:\n");
            out.push_str(&format!("  - intent: {}\n", scalar(rule.trigger())));
            for action in rule.actions() {
                out.push_str(&format!("  - action: {}\n", scalar(action)));
            }
        }
        out
    }

    fn check_well_formed(&self, kind: DocumentKind, document: &str) -> Result<(), RenderError> {
        serde_yaml::from_str::<serde_yaml::Value>(document)
            .map(|_| ())
            .map_err(|e| RenderError::malformed(kind, e.to_string()))
    }
}

/// Identifier as a YAML scalar: plain when it reads back as the same string,
/// single-quoted otherwise (`time: morning`, `#tag`, `@home`, `true`, `42`).
fn scalar(text: &str) -> Cow<'_, str> {
    let reads_back = !text.is_empty()
        && !text.contains(['\n', '\r'])
        && matches!(
            serde_yaml::from_str::<serde_yaml::Value>(text),
            Ok(serde_yaml::Value::String(parsed)) if parsed == text
        );
    if reads_back {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(single_quoted(&single_line(text)))
    }
}

/// Single-quoted YAML scalar; embedded quotes are doubled.
fn single_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Double-quoted YAML scalar.
fn double_quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Block-scalar list items must stay on one line.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
