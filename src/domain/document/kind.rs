//! Target document kinds and their merge strategies.

use std::fmt;

/// Header written at the top of every newly created target document.
pub const VERSION_HEADER: &str = "version: \"3.1\"\n";

/// How generated content lands in a target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// The document is regenerated from scratch.
    Overwrite,
    /// Everything from the anchor onwards is replaced.
    ReplaceFromAnchor,
}

/// The four documents produced by a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    Synonyms,
    Corpus,
    Domain,
    Rules,
}

impl DocumentKind {
    /// All kinds in generation order.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Synonyms,
        DocumentKind::Corpus,
        DocumentKind::Domain,
        DocumentKind::Rules,
    ];

    /// Marker where the generated region of the document starts.
    pub fn anchor(&self) -> &'static str {
        match self {
            DocumentKind::Synonyms | DocumentKind::Corpus => "nlu:\n",
            DocumentKind::Domain => "intents:\n",
            DocumentKind::Rules => "rules:\n",
        }
    }

    /// Path of the document relative to the target directory.
    pub fn relative_path(&self) -> &'static str {
        match self {
            DocumentKind::Synonyms => "data/synonyms.yml",
            DocumentKind::Corpus => "data/nlu.yml",
            DocumentKind::Domain => "domain.yml",
            DocumentKind::Rules => "data/rules.yml",
        }
    }

    pub fn merge_mode(&self) -> MergeMode {
        match self {
            DocumentKind::Synonyms => MergeMode::Overwrite,
            _ => MergeMode::ReplaceFromAnchor,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Synonyms => "synonyms",
            DocumentKind::Corpus => "corpus",
            DocumentKind::Domain => "domain",
            DocumentKind::Rules => "rules",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_synonyms_are_overwritten() {
        let overwritten: Vec<_> = DocumentKind::ALL
            .iter()
            .filter(|kind| kind.merge_mode() == MergeMode::Overwrite)
            .collect();
        assert_eq!(overwritten, vec![&DocumentKind::Synonyms]);
    }

    #[test]
    fn anchors_end_with_newline() {
        for kind in DocumentKind::ALL {
            assert!(kind.anchor().ends_with('\n'), "{} anchor", kind);
        }
    }

    #[test]
    fn paths_are_distinct() {
        let mut paths: Vec<_> = DocumentKind::ALL.iter().map(|k| k.relative_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
    }
}
