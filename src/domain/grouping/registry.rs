//! Namespace registry and name resolution.
//!
//! Built once from [`RecognizedGroups`] and immutable afterwards. Resolves raw
//! intent identifiers into their namespaced form (`greet-hello` becomes
//! `greet/hello`) and shortens namespaced identifiers back to their leaf.

use super::{NamingScheme, RecognizedGroups};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Immutable set of recognized group prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRegistry {
    scheme: NamingScheme,
    prefixes: Vec<String>,
    default_recognized: bool,
}

impl NamespaceRegistry {
    /// Builds the registry, rejecting groups that could tie on a match.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::AmbiguousGroup` when two recognized groups would
    /// be equal-length prefixes of the same identifier. Distinct prefixes of
    /// equal length cannot both match, so this only happens for duplicates or
    /// for a prefix group spelled like the recognized default group.
    pub fn new(scheme: NamingScheme, groups: RecognizedGroups) -> Result<Self, DomainError> {
        for (index, prefix) in groups.prefixes.iter().enumerate() {
            if groups.prefixes[..index].contains(prefix) {
                return Err(ambiguous(prefix, "is recognized twice"));
            }
            if groups.includes_default && *prefix == scheme.default_group {
                return Err(ambiguous(prefix, "collides with the default group"));
            }
        }

        Ok(Self {
            scheme,
            prefixes: groups.prefixes,
            default_recognized: groups.includes_default,
        })
    }

    /// A registry with no groups; every identifier passes through unchanged.
    pub fn empty(scheme: NamingScheme) -> Self {
        Self {
            scheme,
            prefixes: Vec::new(),
            default_recognized: false,
        }
    }

    pub fn scheme(&self) -> &NamingScheme {
        &self.scheme
    }

    /// All recognized group names, the default group last when recognized.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str).chain(
            self.default_recognized
                .then_some(self.scheme.default_group.as_str()),
        )
    }

    pub fn is_default_recognized(&self) -> bool {
        self.default_recognized
    }

    /// Resolves a raw identifier into its namespaced form.
    ///
    /// The longest recognized prefix wins and the first occurrence of
    /// `<group><group_separator>`, wherever it is, is rewritten to
    /// `<group><namespace_separator>`. Without such an occurrence the
    /// identifier is left as is. Without a match the default group is prepended when
    /// recognized.
    pub fn resolve(&self, raw: &str) -> String {
        if self.is_namespaced(raw) {
            return raw.to_string();
        }

        let longest = self
            .prefixes
            .iter()
            .filter(|prefix| raw.starts_with(prefix.as_str()))
            .max_by_key(|prefix| prefix.len());

        match longest {
            Some(group) => raw.replacen(
                &format!("{}{}", group, self.scheme.group_separator),
                &format!("{}{}", group, self.scheme.namespace_separator),
                1,
            ),
            None if self.default_recognized => format!(
                "{}{}{}",
                self.scheme.default_group, self.scheme.namespace_separator, raw
            ),
            None => raw.to_string(),
        }
    }

    /// Returns true if the identifier already carries a recognized namespace.
    pub fn is_namespaced(&self, identifier: &str) -> bool {
        self.groups().any(|group| {
            identifier
                .strip_prefix(group)
                .is_some_and(|rest| rest.starts_with(self.scheme.namespace_separator))
        })
    }

    /// Strips everything up to and including the first namespace separator.
    pub fn shorten<'a>(&self, identifier: &'a str) -> &'a str {
        shorten(identifier, self.scheme.namespace_separator)
    }
}

/// Strips everything up to and including the first `separator`.
pub fn shorten(identifier: &str, separator: char) -> &str {
    identifier
        .split_once(separator)
        .map(|(_, leaf)| leaf)
        .unwrap_or(identifier)
}

fn ambiguous(prefix: &str, reason: &str) -> DomainError {
    DomainError::new(
        ErrorCode::AmbiguousGroup,
        format!("Group '{}' {}; rename the source intents", prefix, reason),
    )
    .with_detail("group", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grouping::analyze_groups;
    use proptest::prelude::*;

    fn registry(prefixes: &[&str], includes_default: bool) -> NamespaceRegistry {
        NamespaceRegistry::new(
            NamingScheme::default(),
            RecognizedGroups {
                prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
                includes_default,
            },
        )
        .unwrap()
    }

    #[test]
    fn grouped_identifier_is_namespaced() {
        let registry = registry(&["greet"], false);
        assert_eq!(registry.resolve("greet-hello"), "greet/hello");
    }

    #[test]
    fn ungrouped_identifier_passes_through_without_default_group() {
        let registry = registry(&["greet"], false);
        assert_eq!(registry.resolve("faq"), "faq");
    }

    #[test]
    fn ungrouped_identifier_gets_default_group() {
        let registry = registry(&["greet"], true);
        assert_eq!(registry.resolve("faq"), "OTHER/faq");
    }

    #[test]
    fn longest_matching_group_wins() {
        let registry = registry(&["shop", "shop-order"], false);
        assert_eq!(registry.resolve("shop-order-status"), "shop-order/status");
        assert_eq!(registry.resolve("shop-cart"), "shop/cart");
    }

    #[test]
    fn matched_group_without_separator_leaves_identifier_unchanged() {
        // "greeting" starts with "greet" but has no "greet-" to rewrite.
        let registry = registry(&["greet"], true);
        assert_eq!(registry.resolve("greeting"), "greeting");
    }

    #[test]
    fn example_scenario_from_file_names() {
        let ids = [
            "greet-hello",
            "greet-hello",
            "greet-hello",
            "greet-bye",
            "greet-bye",
            "faq",
        ];
        let scheme = NamingScheme::default();
        let groups = analyze_groups(&scheme, ids);
        let registry = NamespaceRegistry::new(scheme, groups).unwrap();

        assert_eq!(registry.groups().collect::<Vec<_>>(), vec!["greet"]);
        assert_eq!(registry.resolve("greet-hello"), "greet/hello");
        assert_eq!(registry.resolve("faq"), "faq");
    }

    #[test]
    fn groups_lists_default_group_last() {
        let registry = registry(&["greet", "faq"], true);
        assert_eq!(
            registry.groups().collect::<Vec<_>>(),
            vec!["greet", "faq", "OTHER"]
        );
    }

    #[test]
    fn first_group_separator_occurrence_is_rewritten() {
        // "greetings" starts with "greet"; the first "greet-" is further in.
        let registry = registry(&["greet"], true);
        assert_eq!(registry.resolve("greetings-greet-hi"), "greetings-greet/hi");
        assert_eq!(registry.resolve("greetings-greet/hi"), "greetings-greet/hi");
    }

    #[test]
    fn prefix_group_named_like_default_group_is_rejected() {
        let result = NamespaceRegistry::new(
            NamingScheme::default(),
            RecognizedGroups {
                prefixes: vec!["OTHER".to_string()],
                includes_default: true,
            },
        );
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::AmbiguousGroup);
        assert_eq!(err.details.get("group"), Some(&"OTHER".to_string()));
    }

    #[test]
    fn prefix_group_named_like_unrecognized_default_group_is_accepted() {
        let registry = registry(&["OTHER"], false);
        assert_eq!(registry.resolve("OTHER-x"), "OTHER/x");
    }

    #[test]
    fn duplicate_prefix_is_rejected() {
        let result = NamespaceRegistry::new(
            NamingScheme::default(),
            RecognizedGroups {
                prefixes: vec!["greet".to_string(), "greet".to_string()],
                includes_default: false,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn shorten_strips_through_first_separator() {
        assert_eq!(shorten("greet/hello", '/'), "hello");
        assert_eq!(shorten("a/b/c", '/'), "b/c");
        assert_eq!(shorten("info", '/'), "info");
    }

    #[test]
    fn empty_registry_is_identity() {
        let registry = NamespaceRegistry::empty(NamingScheme::default());
        assert_eq!(registry.resolve("greet-hello"), "greet-hello");
        assert_eq!(registry.groups().count(), 0);
    }

    proptest! {
        #[test]
        fn resolving_twice_yields_the_same_identifier(
            raw in "[a-d]{1,3}(-[a-z]{1,4}){0,2}",
            includes_default in any::<bool>(),
        ) {
            let registry = registry(&["a", "ab", "c-d"], includes_default);
            let once = registry.resolve(&raw);
            let twice = registry.resolve(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
