//! Ordered, prefix-deduplicated identifier accumulator.
//!
//! Used for both the intents list and the entities list of the domain
//! document. An identifier is only registered when no identifier already in
//! the list is a prefix of it, so a retrieval intent such as `faq/opening`
//! is represented by its group `faq` once the group has been registered.

/// Append-only list of identifiers with prefix deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierList {
    items: Vec<String>,
}

impl IdentifierList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list seeded by registering every given identifier in order.
    pub fn seeded<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for identifier in identifiers {
            list.register(identifier);
        }
        list
    }

    /// Registers an identifier.
    ///
    /// Returns `false` (and leaves the list untouched) when an already
    /// registered identifier is a prefix of the candidate.
    pub fn register(&mut self, identifier: impl Into<String>) -> bool {
        let identifier = identifier.into();
        if self.is_covered(&identifier) {
            return false;
        }
        self.items.push(identifier);
        true
    }

    /// Returns true if some registered identifier is a prefix of `identifier`.
    pub fn is_covered(&self, identifier: &str) -> bool {
        self.items
            .iter()
            .any(|existing| identifier.starts_with(existing.as_str()))
    }

    /// Returns true if `identifier` was registered verbatim.
    pub fn contains(&self, identifier: &str) -> bool {
        self.items.iter().any(|existing| existing == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_appends_in_order() {
        let mut list = IdentifierList::new();
        assert!(list.register("greet"));
        assert!(list.register("faq"));
        assert_eq!(list.as_slice(), &["greet".to_string(), "faq".to_string()]);
    }

    #[test]
    fn register_skips_identifier_covered_by_prefix() {
        let mut list = IdentifierList::seeded(["greet"]);
        assert!(!list.register("greet/hello"));
        assert!(!list.register("greet"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn shorter_identifier_is_not_covered_by_longer_one() {
        let mut list = IdentifierList::seeded(["greeting"]);
        assert!(list.register("greet"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn contains_matches_exact_identifiers_only() {
        let list = IdentifierList::seeded(["faq"]);
        assert!(list.contains("faq"));
        assert!(!list.contains("faq/hours"));
        assert!(list.is_covered("faq/hours"));
    }

    #[test]
    fn empty_list_covers_nothing() {
        let list = IdentifierList::new();
        assert!(list.is_empty());
        assert!(!list.is_covered("anything"));
    }
}
