//! Migration report - what a run produced, per document.

use std::fmt;

use crate::domain::document::DocumentKind;
use crate::ports::WrittenDocument;

/// Outcome of generating one target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Written(WrittenDocument),
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    pub kind: DocumentKind,
    pub outcome: DocumentOutcome,
}

/// Summary of a migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub language: String,
    /// Recognized groups, default group last.
    pub groups: Vec<String>,
    pub intents: usize,
    pub entities: usize,
    pub responses: usize,
    pub rules: usize,
    /// Malformed intents removed from the export.
    pub removed: Vec<String>,
    /// Malformed intents migrated anyway.
    pub kept_malformed: Vec<String>,
    /// Entity files without entries.
    pub skipped_entities: Vec<String>,
    /// Intents whose responses collided with another intent's response ids.
    pub conflicting_responses: Vec<String>,
    pub documents: Vec<DocumentReport>,
}

impl MigrationReport {
    /// True when every document was written.
    pub fn is_complete(&self) -> bool {
        self.documents
            .iter()
            .all(|doc| matches!(doc.outcome, DocumentOutcome::Written(_)))
    }

    pub fn failed_documents(&self) -> impl Iterator<Item = &DocumentReport> {
        self.documents
            .iter()
            .filter(|doc| matches!(doc.outcome, DocumentOutcome::Failed { .. }))
    }

    pub fn document(&self, kind: DocumentKind) -> Option<&DocumentReport> {
        self.documents.iter().find(|doc| doc.kind == kind)
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Language: {}", self.language)?;
        if self.groups.is_empty() {
            writeln!(f, "Groups: none")?;
        } else {
            writeln!(f, "Groups: {}", self.groups.join(", "))?;
        }
        writeln!(
            f,
            "Intents: {}, entities: {}, responses: {}, rules: {}",
            self.intents, self.entities, self.responses, self.rules
        )?;
        if !self.removed.is_empty() {
            writeln!(f, "Removed malformed intents: {}", self.removed.join(", "))?;
        }
        if !self.kept_malformed.is_empty() {
            writeln!(f, "Kept malformed intents: {}", self.kept_malformed.join(", "))?;
        }
        if !self.conflicting_responses.is_empty() {
            writeln!(
                f,
                "Responses skipped (id collision): {}",
                self.conflicting_responses.join(", ")
            )?;
        }
        for doc in &self.documents {
            match &doc.outcome {
                DocumentOutcome::Written(written) => writeln!(
                    f,
                    "  {:<8} {} ({} bytes)",
                    doc.kind,
                    written.path.display(),
                    written.bytes
                )?,
                DocumentOutcome::Failed { reason } => {
                    writeln!(f, "  {:<8} FAILED: {}", doc.kind, reason)?
                }
            }
        }
        Ok(())
    }
}
