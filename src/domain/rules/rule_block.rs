//! Rule blocks and the per-run rule book.

/// A direct trigger-to-actions mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    trigger: String,
    actions: Vec<String>,
}

impl RuleBlock {
    pub fn new(trigger: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            trigger: trigger.into(),
            actions,
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn push_action(&mut self, action: impl Into<String>) {
        self.actions.push(action.into());
    }

    /// Human-readable rule name, e.g. `Respond to greet`.
    pub fn name(&self) -> String {
        format!("Respond to {}", self.trigger)
    }
}

/// Ordered rule blocks with at most one block per trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBook {
    blocks: Vec<RuleBlock>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block unless its trigger is already covered.
    ///
    /// Returns `false` when the block was rejected.
    pub fn insert(&mut self, block: RuleBlock) -> bool {
        if self.covers(block.trigger()) {
            return false;
        }
        self.blocks.push(block);
        true
    }

    pub fn covers(&self, trigger: &str) -> bool {
        self.blocks.iter().any(|block| block.trigger() == trigger)
    }

    pub fn blocks(&self) -> &[RuleBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
