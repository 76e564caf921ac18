//! Filesystem storage for the generated Rasa documents.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::document::DocumentKind;
use crate::ports::{StoreError, TargetStore, WrittenDocument};

/// Target documents under a Rasa project directory.
///
/// Writes go to a sibling temporary file first and are renamed into place.
pub struct FsTargetStore {
    root: PathBuf,
}

impl FsTargetStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn map_io(path: &Path, e: std::io::Error) -> StoreError {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            StoreError::permission_denied(path.display().to_string())
        } else {
            StoreError::io(path.display().to_string(), e.to_string())
        }
    }

    fn checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl TargetStore for FsTargetStore {
    async fn read(&self, kind: DocumentKind) -> Result<Option<String>, StoreError> {
        let path = self.location(kind);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Target document does not exist yet");
                Ok(None)
            }
            Err(e) => Err(Self::map_io(&path, e)),
        }
    }

    async fn write(&self, kind: DocumentKind, content: &str) -> Result<WrittenDocument, StoreError> {
        let path = self.location(kind);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::map_io(parent, e))?;
        }

        let temp_path = path.with_extension("yml.tmp");
        fs::write(&temp_path, content)
            .await
            .map_err(|e| Self::map_io(&temp_path, e))?;

        if let Err(e) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(Self::map_io(&path, e));
        }

        Ok(WrittenDocument {
            path,
            bytes: content.len(),
            checksum: Self::checksum(content),
        })
    }

    fn location(&self, kind: DocumentKind) -> PathBuf {
        self.root.join(kind.relative_path())
    }
}
