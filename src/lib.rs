//! Intent Porter - Dialogflow to Rasa migration
//!
//! This crate converts a Dialogflow agent export (intents, training phrases,
//! responses and entity synonyms) into the four Rasa 3 documents: synonyms,
//! NLU corpus, domain and rules.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
