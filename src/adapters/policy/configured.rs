//! Non-interactive remediation: answers come from configuration.

use crate::ports::{Remediation, RemediationPolicy};

/// Fixed answers for unattended runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfiguredPolicy {
    on_malformed: Remediation,
    ignore_system_entities: bool,
}

impl ConfiguredPolicy {
    pub fn new(on_malformed: Remediation, ignore_system_entities: bool) -> Self {
        Self {
            on_malformed,
            ignore_system_entities,
        }
    }
}

impl Default for ConfiguredPolicy {
    /// Stops on malformed intents and leaves system entities out.
    fn default() -> Self {
        Self::new(Remediation::Abort, true)
    }
}

impl RemediationPolicy for ConfiguredPolicy {
    fn on_malformed(&self, _intent: &str) -> Remediation {
        self.on_malformed
    }

    fn ignore_system_entities(&self) -> bool {
        self.ignore_system_entities
    }
}
