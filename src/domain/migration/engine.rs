//! Transformation engine - owns every accumulator of one migration run.
//!
//! Phases feed the engine in order (entities, training intents, responses)
//! and [`TransformationEngine::finish`] hands back the generated sections.
//! Nothing here touches the filesystem.

use crate::domain::foundation::{DomainError, IdentifierList};
use crate::domain::grouping::{analyze_groups, NamespaceRegistry, NamingScheme};
use crate::domain::intent::{Corpus, EntityRecord, ResponsePayload, SynonymSection, TrainingPhrase, TrainingSection};
use crate::domain::response::{ResponseBlock, ResponseNormalizer};
use crate::domain::rules::{synthesize_rules, RuleBook};

/// Content of the generated region of the domain document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSection {
    pub intents: IdentifierList,
    pub entities: IdentifierList,
    pub responses: Vec<ResponseBlock>,
}

/// Everything a run generates, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSections {
    pub synonyms: Vec<SynonymSection>,
    pub corpus: Corpus,
    pub domain: DomainSection,
    pub rules: RuleBook,
}

/// What happened to one intent's responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseOutcome {
    /// Final intent identifier.
    pub intent: String,
    /// Namespaced identifier replaced by `intent`, when shortened.
    pub renamed_from: Option<String>,
    pub blocks: usize,
    /// Response id already produced by another intent; nothing was added.
    pub conflict: Option<String>,
}

#[derive(Debug)]
pub struct TransformationEngine {
    registry: NamespaceRegistry,
    normalizer: ResponseNormalizer,
    intents: IdentifierList,
    entities: IdentifierList,
    synonyms: Vec<SynonymSection>,
    corpus: Corpus,
    responses: Vec<ResponseBlock>,
    rules: RuleBook,
}

impl TransformationEngine {
    /// Creates an engine whose intents list is seeded with the registry groups.
    pub fn new(registry: NamespaceRegistry) -> Self {
        let normalizer = ResponseNormalizer::new(registry.scheme().namespace_separator);
        let intents = IdentifierList::seeded(registry.groups());
        Self {
            registry,
            normalizer,
            intents,
            entities: IdentifierList::new(),
            synonyms: Vec::new(),
            corpus: Corpus::new(),
            responses: Vec::new(),
            rules: RuleBook::new(),
        }
    }

    /// Analyzes `identifiers` for groups and builds the engine on the result.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::AmbiguousGroup` when the groups cannot form a
    /// registry.
    pub fn from_identifiers<I, S>(scheme: NamingScheme, identifiers: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = analyze_groups(&scheme, identifiers);
        let registry = NamespaceRegistry::new(scheme, groups)?;
        Ok(Self::new(registry))
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    /// Adds a synonym block for the entity and registers its canonical value.
    ///
    /// The block is keyed by the first entry's value and lists the synonyms
    /// of every entry. Returns `false` for an entity without entries.
    pub fn add_entity(&mut self, entity: &EntityRecord) -> bool {
        let Some(first) = entity.entries.first() else {
            return false;
        };

        let examples = entity
            .entries
            .iter()
            .flat_map(|entry| entry.synonyms.iter().cloned())
            .collect();

        self.entities.register(first.value.clone());
        self.synonyms.push(SynonymSection {
            value: first.value.clone(),
            examples,
        });
        true
    }

    /// Resolves the intent, registers it and adds its training examples.
    ///
    /// Returns the namespaced identifier.
    pub fn add_training_intent(&mut self, raw: &str, phrases: &[TrainingPhrase]) -> String {
        let intent = self.registry.resolve(raw);
        self.intents.register(intent.clone());
        self.corpus.push(TrainingSection {
            intent: intent.clone(),
            examples: phrases.iter().map(TrainingPhrase::text).collect(),
        });
        intent
    }

    /// Normalizes one intent's responses.
    ///
    /// When normalization shortens the intent, the short form is registered
    /// and corpus sections for the long form are renamed. Responses whose
    /// block ids are already taken (two groups shortening to the same leaf)
    /// are rejected as a whole and leave the engine untouched.
    pub fn add_responses<'a, I>(&mut self, raw: &str, payloads: I) -> ResponseOutcome
    where
        I: IntoIterator<Item = &'a ResponsePayload>,
    {
        let intent = self.registry.resolve(raw);
        let normalized = self.normalizer.normalize(&intent, payloads);

        let conflict = normalized
            .blocks
            .iter()
            .find(|block| self.responses.iter().any(|taken| taken.id() == block.id()))
            .map(|block| block.id().to_string());
        if conflict.is_some() {
            return ResponseOutcome {
                intent: normalized.intent,
                renamed_from: normalized.renamed_from,
                blocks: 0,
                conflict,
            };
        }

        if let Some(long) = &normalized.renamed_from {
            self.intents.register(normalized.intent.clone());
            self.corpus.rename_intent(long, &normalized.intent);
        }
        if let Some(rule) = normalized.rule {
            self.rules.insert(rule);
        }

        let blocks = normalized.blocks.len();
        self.responses.extend(normalized.blocks);

        ResponseOutcome {
            intent: normalized.intent,
            renamed_from: normalized.renamed_from,
            blocks,
            conflict: None,
        }
    }

    pub fn intents(&self) -> &IdentifierList {
        &self.intents
    }

    pub fn entities(&self) -> &IdentifierList {
        &self.entities
    }

    /// Completes the rule book and returns all generated sections.
    pub fn finish(self) -> GeneratedSections {
        let rules = synthesize_rules(self.rules, &self.intents);
        GeneratedSections {
            synonyms: self.synonyms,
            corpus: self.corpus,
            domain: DomainSection {
                intents: self.intents,
                entities: self.entities,
                responses: self.responses,
            },
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::{Button, EntityEntry};
    use crate::domain::response::ResponseStep;

    fn engine(identifiers: &[&str]) -> TransformationEngine {
        TransformationEngine::from_identifiers(NamingScheme::default(), identifiers.iter())
            .expect("registry")
    }

    fn phrases(texts: &[&str]) -> Vec<TrainingPhrase> {
        texts.iter().map(|t| TrainingPhrase::new([*t])).collect()
    }

    #[test]
    fn intents_are_seeded_with_groups() {
        let engine = engine(&["greet-hello", "greet-bye", "faq", "smalltalk"]);
        let seeded: Vec<&str> = engine.intents().iter().collect();
        assert_eq!(seeded, vec!["greet", "OTHER"]);
    }

    #[test]
    fn training_intents_are_namespaced() {
        let mut engine = engine(&["greet-hello", "greet-bye", "faq"]);

        assert_eq!(engine.add_training_intent("greet-hello", &phrases(&["hi"])), "greet/hello");
        assert_eq!(engine.add_training_intent("faq", &phrases(&["help"])), "faq");

        let sections = engine.finish();
        let intents: Vec<&str> = sections.domain.intents.iter().collect();
        assert_eq!(intents, vec!["greet", "faq"]);
        assert_eq!(sections.corpus.sections()[0].intent, "greet/hello");
        assert_eq!(sections.corpus.sections()[0].examples, vec!["hi".to_string()]);
    }

    #[test]
    fn multi_step_response_renames_corpus_and_registers_short_intent() {
        let mut engine = engine(&["greet-hello", "greet-bye", "faq"]);
        engine.add_training_intent("greet-hello", &phrases(&["hi"]));
        engine.add_training_intent("greet-bye", &phrases(&["bye"]));

        let payloads = [ResponsePayload::Buttons {
            items: vec![Button::new("Visit", "http://x")],
        }];
        let outcome = engine.add_responses("greet-hello", &payloads);

        assert_eq!(outcome.intent, "hello");
        assert_eq!(outcome.renamed_from.as_deref(), Some("greet/hello"));
        assert_eq!(outcome.blocks, 2);

        let sections = engine.finish();
        assert_eq!(sections.corpus.sections()[0].intent, "hello");
        assert_eq!(sections.corpus.sections()[1].intent, "greet/bye");
        assert!(sections.domain.intents.contains("hello"));

        let triggers: Vec<&str> = sections.rules.blocks().iter().map(|b| b.trigger()).collect();
        assert_eq!(triggers, vec!["hello", "greet"]);
        assert_eq!(
            sections.rules.blocks()[0].actions(),
            &["utter_hello", "utter_hello_1"]
        );
    }

    #[test]
    fn leaf_collision_between_groups_is_rejected() {
        let mut engine = engine(&["greet-hello", "greet-bye", "bye-hello", "bye-now"]);
        engine.add_training_intent("greet-hello", &phrases(&["hi"]));
        engine.add_training_intent("bye-hello", &phrases(&["bye then"]));

        let payloads = [ResponsePayload::Buttons {
            items: vec![Button::new("Visit", "http://x")],
        }];
        let first = engine.add_responses("greet-hello", &payloads);
        let second = engine.add_responses("bye-hello", &payloads);

        assert!(first.conflict.is_none());
        assert_eq!(second.conflict.as_deref(), Some("utter_hello"));
        assert_eq!(second.blocks, 0);

        let sections = engine.finish();
        let ids: Vec<&str> = sections.domain.responses.iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec!["utter_hello", "utter_hello_1"]);
        assert_eq!(sections.corpus.sections()[1].intent, "bye/hello");
        let hello_rules = sections
            .rules
            .blocks()
            .iter()
            .filter(|b| b.trigger() == "hello")
            .count();
        assert_eq!(hello_rules, 1);
    }

    #[test]
    fn plain_responses_keep_namespaced_block_ids() {
        let mut engine = engine(&["greet-hello", "greet-bye", "faq"]);
        let payloads = [ResponsePayload::Text {
            strings: vec!["Hi there".to_string()],
        }];
        engine.add_responses("greet-hello", &payloads);

        let sections = engine.finish();
        assert_eq!(sections.domain.responses[0].id(), "utter_greet/hello");
        assert_eq!(sections.domain.responses[0].steps(), &[ResponseStep::text("Hi there")]);
        assert_eq!(sections.rules.blocks()[0].actions(), &["utter_greet"]);
    }

    #[test]
    fn entity_registers_first_value_and_collects_all_synonyms() {
        let mut engine = engine(&[]);
        let entity = EntityRecord {
            name: "city".to_string(),
            entries: vec![
                EntityEntry {
                    value: "city".to_string(),
                    synonyms: vec!["NYC".to_string(), "Paris".to_string()],
                },
                EntityEntry {
                    value: "town".to_string(),
                    synonyms: vec!["Berlin".to_string()],
                },
            ],
        };

        assert!(engine.add_entity(&entity));
        let sections = engine.finish();

        assert_eq!(sections.domain.entities.as_slice(), &["city".to_string()]);
        assert_eq!(sections.synonyms[0].value, "city");
        assert_eq!(sections.synonyms[0].examples, vec!["NYC", "Paris", "Berlin"]);
    }

    #[test]
    fn empty_entity_is_skipped() {
        let mut engine = engine(&[]);
        let entity = EntityRecord {
            name: "empty".to_string(),
            entries: vec![],
        };
        assert!(!engine.add_entity(&entity));
        assert!(engine.finish().synonyms.is_empty());
    }

    #[test]
    fn ambiguous_groups_are_rejected() {
        let result = TransformationEngine::from_identifiers(
            NamingScheme::default(),
            ["OTHER-a", "OTHER-b", "x", "y"],
        );
        assert!(result.is_err());
    }
}
