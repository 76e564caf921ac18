//! SectionRenderer port - renders generated sections as target-format text.
//!
//! Every rendered section starts with the anchor of its document so the
//! merger can find it again on the next run.

use thiserror::Error;

use crate::domain::document::DocumentKind;
use crate::domain::intent::{Corpus, SynonymSection};
use crate::domain::migration::DomainSection;
use crate::domain::rules::RuleBook;

/// Errors that can occur when rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The merged document is not well-formed target text.
    #[error("Rendered {document} document is not well-formed: {reason}")]
    Malformed { document: String, reason: String },
}

impl RenderError {
    pub fn malformed(document: DocumentKind, reason: impl Into<String>) -> Self {
        Self::Malformed {
            document: document.to_string(),
            reason: reason.into(),
        }
    }
}

/// Turns generated sections into document text.
pub trait SectionRenderer: Send + Sync {
    fn render_synonyms(&self, synonyms: &[SynonymSection]) -> String;

    fn render_corpus(&self, corpus: &Corpus) -> String;

    fn render_domain(&self, domain: &DomainSection) -> String;

    fn render_rules(&self, rules: &RuleBook) -> String;

    /// Checks that a merged document still parses.
    fn check_well_formed(&self, kind: DocumentKind, document: &str) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_error_names_document() {
        let err = RenderError::malformed(DocumentKind::Rules, "bad indentation");
        assert_eq!(
            err.to_string(),
            "Rendered rules document is not well-formed: bad indentation"
        );
    }

    #[test]
    fn section_renderer_is_object_safe() {
        fn check<T: SectionRenderer + ?Sized>() {}
        check::<dyn SectionRenderer>();
    }
}
