//! Generated NLU corpus and synonym sections.

/// Training examples for one namespaced intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSection {
    pub intent: String,
    pub examples: Vec<String>,
}

/// Synonym examples keyed by an entity value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymSection {
    pub value: String,
    pub examples: Vec<String>,
}

/// The generated region of the NLU corpus document, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sections: Vec<TrainingSection>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: TrainingSection) {
        self.sections.push(section);
    }

    /// Renames every section whose intent is exactly `from`.
    ///
    /// Returns the number of renamed sections.
    pub fn rename_intent(&mut self, from: &str, to: &str) -> usize {
        let mut renamed = 0;
        for section in self.sections.iter_mut().filter(|s| s.intent == from) {
            section.intent = to.to_string();
            renamed += 1;
        }
        renamed
    }

    pub fn sections(&self) -> &[TrainingSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
