//! Migration behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::Remediation;

/// Answer for intents whose response record has no text
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedAction {
    #[default]
    Ask,
    Keep,
    Delete,
    Abort,
}

impl MalformedAction {
    /// The fixed answer, `None` when the user is to be asked.
    pub fn remediation(&self) -> Option<Remediation> {
        match self {
            MalformedAction::Ask => None,
            MalformedAction::Keep => Some(Remediation::Keep),
            MalformedAction::Delete => Some(Remediation::Delete),
            MalformedAction::Abort => Some(Remediation::Abort),
        }
    }
}

impl std::str::FromStr for MalformedAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ask" => Ok(MalformedAction::Ask),
            "keep" => Ok(MalformedAction::Keep),
            "delete" => Ok(MalformedAction::Delete),
            "abort" => Ok(MalformedAction::Abort),
            other => Err(format!(
                "unknown action '{}', expected ask, keep, delete or abort",
                other
            )),
        }
    }
}

/// Migration run settings
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationConfig {
    /// Language override; the agent's own language is used when unset
    pub language: Option<String>,

    /// Leave system entities out; asked when unset and interactive
    pub ignore_system_entities: Option<bool>,

    /// What to do with intents without text responses
    #[serde(default)]
    pub on_malformed: MalformedAction,

    /// Whether prompts may be shown
    #[serde(default = "default_interactive")]
    pub interactive: bool,
}

impl MigrationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self
            .language
            .as_deref()
            .is_some_and(|language| language.trim().is_empty())
        {
            return Err(ValidationError::MissingRequired("migration.language"));
        }
        Ok(())
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            language: None,
            ignore_system_entities: None,
            on_malformed: MalformedAction::default(),
            interactive: default_interactive(),
        }
    }
}

fn default_interactive() -> bool {
    true
}
