//! RemediationPolicy port - decisions the migration cannot take on its own.

/// What to do with an intent whose response record has no usable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remediation {
    /// Remove the intent from the export and from this run.
    Delete,
    /// Migrate it anyway; it yields an empty response block.
    Keep,
    /// Stop the migration so the export can be fixed by hand.
    Abort,
}

/// Answers the questions raised while preparing a migration.
pub trait RemediationPolicy: Send + Sync {
    /// Decision for a malformed intent.
    fn on_malformed(&self, intent: &str) -> Remediation;

    /// Whether system entities (`sys.` prefix) are left out of the run.
    fn ignore_system_entities(&self) -> bool;
}
