//! Document merger - splices a generated section into a target document.

use super::{AnchoredDocument, DocumentKind, MergeMode, VERSION_HEADER};

/// Merges `section` into the `existing` content of a `kind` document.
///
/// `section` must start with the document anchor. A missing document is
/// seeded with [`VERSION_HEADER`]. When the anchor is found, everything
/// before it is kept byte-for-byte and the rest is replaced; otherwise the
/// section is appended after the existing text.
pub fn merge(kind: DocumentKind, existing: Option<&str>, section: &str) -> String {
    if kind.merge_mode() == MergeMode::Overwrite {
        return format!("{}\n{}", VERSION_HEADER, section);
    }

    let base = existing.unwrap_or(VERSION_HEADER);
    let document = AnchoredDocument::parse(base, kind.anchor());

    let mut merged = String::with_capacity(document.preamble().len() + section.len() + 2);
    merged.push_str(document.preamble());
    if !document.has_anchor() && !base.is_empty() {
        if !base.ends_with('\n') {
            merged.push('\n');
        }
        merged.push('\n');
    }
    merged.push_str(section);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn missing_document_is_seeded_with_version_header() {
        let merged = merge(DocumentKind::Domain, None, "intents:\n- greet\n");
        assert_eq!(merged, "version: \"3.1\"\n\nintents:\n- greet\n");
    }

    #[test]
    fn generated_region_is_replaced() {
        let existing = "version: \"3.1\"\n# keep me\nnlu:\n- intent: old\n";
        let merged = merge(DocumentKind::Corpus, Some(existing), "nlu:\n- intent: new\n");
        assert_eq!(merged, "version: \"3.1\"\n# keep me\nnlu:\n- intent: new\n");
    }

    #[test]
    fn section_is_appended_when_anchor_absent() {
        let existing = "version: \"3.1\"\nstories:\n- story: s";
        let merged = merge(DocumentKind::Rules, Some(existing), "rules:\n");
        assert_eq!(merged, "version: \"3.1\"\nstories:\n- story: s\n\nrules:\n");
    }

    #[test]
    fn empty_existing_document_gets_bare_section() {
        let merged = merge(DocumentKind::Rules, Some(""), "rules:\n");
        assert_eq!(merged, "rules:\n");
    }

    #[test]
    fn merging_twice_is_stable() {
        let existing = "version: \"3.1\"\nslots: {}\nintents:\n- old\n";
        let once = merge(DocumentKind::Domain, Some(existing), "intents:\n- greet\n");
        let twice = merge(DocumentKind::Domain, Some(&once), "intents:\n- greet\n");
        assert_eq!(once, twice);
    }

    #[test]
    fn synonyms_are_always_overwritten() {
        let merged = merge(DocumentKind::Synonyms, Some("anything\nnlu:\n"), "nlu:\n- synonym: a\n");
        assert_eq!(merged, "version: \"3.1\"\n\nnlu:\n- synonym: a\n");
    }

    proptest! {
        #[test]
        fn preamble_survives_byte_for_byte(
            lines in prop::collection::vec("[a-z_ :#]{0,12}", 0..6),
            old in "[a-z\\- \n]{0,30}",
            new in "[a-z\\- \n]{0,30}",
        ) {
            let preamble: String = lines.iter().map(|l| format!("{}\n", l)).collect();
            prop_assume!(!AnchoredDocument::parse(&preamble, "intents:\n").has_anchor());

            let existing = format!("{}intents:\n{}", preamble, old);
            let section = format!("intents:\n{}", new);
            let merged = merge(DocumentKind::Domain, Some(&existing), &section);

            prop_assert!(merged.starts_with(&preamble));
            prop_assert_eq!(&merged[preamble.len()..], section.as_str());
        }
    }
}
