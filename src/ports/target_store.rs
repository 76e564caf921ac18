//! TargetStore port - reads and writes the generated target documents.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::document::DocumentKind;

/// Errors that can occur while accessing target documents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Permission denied accessing the document.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during a read or write.
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

impl StoreError {
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result of a successful document write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    pub path: PathBuf,
    pub bytes: usize,
    /// SHA-256 of the written content, lowercase hex.
    pub checksum: String,
}

/// Storage for the four target documents.
#[async_trait]
pub trait TargetStore: Send + Sync {
    /// Current content of the document, `None` when it does not exist yet.
    async fn read(&self, kind: DocumentKind) -> Result<Option<String>, StoreError>;

    /// Replaces the whole document.
    ///
    /// A failed write leaves the previous content in place.
    async fn write(&self, kind: DocumentKind, content: &str) -> Result<WrittenDocument, StoreError>;

    /// Where the document lives.
    fn location(&self, kind: DocumentKind) -> PathBuf;
}
