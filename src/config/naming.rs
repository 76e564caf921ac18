//! Intent naming configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::grouping::NamingScheme;

/// Group discovery and namespacing settings
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    /// Group for intents that share no recognized prefix
    #[serde(default = "default_group")]
    pub default_group: String,

    /// Separator between group and leaf in source file names
    #[serde(default = "default_group_separator")]
    pub group_separator: char,

    /// Separator between group and leaf in generated identifiers
    #[serde(default = "default_namespace_separator")]
    pub namespace_separator: char,

    /// Name prefix of system entities
    #[serde(default = "default_system_prefix")]
    pub system_prefix: String,
}

impl NamingConfig {
    /// Builds the domain naming scheme.
    pub fn scheme(&self) -> Result<NamingScheme, ValidationError> {
        NamingScheme::new(
            self.default_group.clone(),
            self.group_separator,
            self.namespace_separator,
        )
        .map_err(|e| ValidationError::InvalidNaming(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scheme()?;
        if self.system_prefix.is_empty() {
            return Err(ValidationError::MissingRequired("naming.system_prefix"));
        }
        Ok(())
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_group: default_group(),
            group_separator: default_group_separator(),
            namespace_separator: default_namespace_separator(),
            system_prefix: default_system_prefix(),
        }
    }
}

fn default_group() -> String {
    "OTHER".to_string()
}

fn default_group_separator() -> char {
    '-'
}

fn default_namespace_separator() -> char {
    '/'
}

fn default_system_prefix() -> String {
    "sys.".to_string()
}
