//! Rules module - trigger/action rule blocks and their synthesis.

mod rule_block;
mod synthesizer;

pub use rule_block::{RuleBlock, RuleBook};
pub use synthesizer::synthesize_rules;
