//! Naming scheme shared by the grouping analyzer and the name resolver.

use crate::domain::foundation::ValidationError;

/// Separators and markers used to derive namespaced intent identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    /// Group used for ungrouped intents when enough of them exist.
    pub default_group: String,
    /// Separator between the group prefix and the rest of a source name.
    pub group_separator: char,
    /// Separator between the group and the intent in a namespaced identifier.
    pub namespace_separator: char,
}

impl NamingScheme {
    /// Creates a validated naming scheme.
    pub fn new(
        default_group: impl Into<String>,
        group_separator: char,
        namespace_separator: char,
    ) -> Result<Self, ValidationError> {
        let scheme = Self {
            default_group: default_group.into(),
            group_separator,
            namespace_separator,
        };
        scheme.validate()?;
        Ok(scheme)
    }

    /// Checks that the scheme can produce unambiguous identifiers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_group.trim().is_empty() {
            return Err(ValidationError::empty_field("default_group"));
        }
        if self.group_separator == self.namespace_separator {
            return Err(ValidationError::invalid_format(
                "namespace_separator",
                "must differ from the group separator",
            ));
        }
        if self.group_separator.is_alphanumeric() || self.namespace_separator.is_alphanumeric() {
            return Err(ValidationError::invalid_format(
                "separators",
                "separators cannot be alphanumeric",
            ));
        }
        if self.default_group.contains(self.namespace_separator) {
            return Err(ValidationError::invalid_format(
                "default_group",
                "cannot contain the namespace separator",
            ));
        }
        Ok(())
    }
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            default_group: "OTHER".to_string(),
            group_separator: '-',
            namespace_separator: '/',
        }
    }
}
