//! Rule synthesizer - default single-action rules for uncovered intents.

use super::{RuleBlock, RuleBook};
use crate::domain::foundation::IdentifierList;
use crate::domain::response::response_id;

/// Completes `book` with one `intent -> utter_<intent>` rule for every intent
/// that has no rule yet.
///
/// Blocks already in the book (multi-step rules from normalization) keep
/// their position ahead of the synthesized ones, which follow in intents
/// list order.
pub fn synthesize_rules(mut book: RuleBook, intents: &IdentifierList) -> RuleBook {
    for intent in intents.iter() {
        book.insert(RuleBlock::new(intent, vec![response_id(intent)]));
    }
    book
}
