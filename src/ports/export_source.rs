//! ExportSource port - read access to a conversational-agent export.
//!
//! The export is the only input of a migration. Implementations read the
//! agent's default language, its intents (training phrases and responses)
//! and its entities, and can drop an intent the remediation policy asked to
//! delete.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::intent::{EntityRecord, RawIntentRecord};

/// Errors raised while reading an export.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The export or one of its directories does not exist.
    #[error("Export not found: {path}")]
    NotFound { path: String },

    /// A record exists but cannot be decoded.
    #[error("Invalid record {path}: {reason}")]
    InvalidRecord { path: String, reason: String },

    /// IO error while reading or removing export files.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl SourceError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn invalid_record(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Read access to an agent export.
#[async_trait]
pub trait ExportSource: Send + Sync {
    /// Language declared by the agent itself, if any.
    async fn agent_language(&self) -> Result<Option<String>, SourceError>;

    /// All intents, ordered by identifier.
    ///
    /// Training phrases are loaded for `language` only; responses carry
    /// their own language tags. Unreadable records are skipped.
    async fn load_intents(&self, language: &str) -> Result<Vec<RawIntentRecord>, SourceError>;

    /// All entities with entries in `language`, ordered by name.
    ///
    /// Entities whose name starts with `skip_prefix` are left out.
    async fn load_entities(
        &self,
        language: &str,
        skip_prefix: Option<&str>,
    ) -> Result<Vec<EntityRecord>, SourceError>;

    /// Removes an intent's response record and its training phrases in
    /// `language` from the export.
    async fn remove_intent(&self, identifier: &str, language: &str) -> Result<(), SourceError>;

    /// Human-readable location of the export, for logs.
    fn location(&self) -> String;
}
