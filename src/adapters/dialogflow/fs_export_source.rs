//! Filesystem adapter for Dialogflow agent exports.
//!
//! Layout: `{root}/agent.json`, `{root}/intents/*.json` and
//! `{root}/entities/*_entries_<lang>.json`.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use super::dto::{AgentDto, EntityEntryDto, IntentDto, UserSaysDto};
use crate::domain::intent::{EntityRecord, RawIntentRecord, TrainingPhrase};
use crate::ports::{ExportSource, SourceError};

static USERSAYS_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<intent>.+)_usersays_(?P<lang>[^.]+)\.json$").unwrap());

static ENTRIES_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<entity>.+)_entries_(?P<lang>[^.]+)\.json$").unwrap());

/// Reads a Dialogflow export unpacked on disk.
pub struct FsExportSource {
    root: PathBuf,
}

impl FsExportSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn intents_dir(&self) -> PathBuf {
        self.root.join("intents")
    }

    fn entities_dir(&self) -> PathBuf {
        self.root.join("entities")
    }

    fn response_path(&self, identifier: &str) -> PathBuf {
        self.intents_dir().join(format!("{}.json", identifier))
    }

    fn usersays_path(&self, identifier: &str, language: &str) -> PathBuf {
        self.intents_dir()
            .join(format!("{}_usersays_{}.json", identifier, language))
    }

    /// File names in `dir`, sorted.
    async fn list_files(dir: &Path) -> Result<Vec<String>, SourceError> {
        let mut entries = fs::read_dir(dir).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::not_found(dir.display().to_string())
            } else {
                SourceError::io(format!("Failed to list {}: {}", dir.display(), e))
            }
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SourceError::io(format!("Failed to list {}: {}", dir.display(), e)))?
        {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::not_found(path.display().to_string())
            } else {
                SourceError::io(format!("Failed to read {}: {}", path.display(), e))
            }
        })?;
        serde_json::from_str(&content)
            .map_err(|e| SourceError::invalid_record(path.display().to_string(), e.to_string()))
    }

    async fn remove_if_exists(path: &Path) -> Result<bool, SourceError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SourceError::io(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl ExportSource for FsExportSource {
    async fn agent_language(&self) -> Result<Option<String>, SourceError> {
        let agent: AgentDto = Self::read_json(&self.root.join("agent.json")).await?;
        Ok(agent.language.filter(|language| !language.is_empty()))
    }

    async fn load_intents(&self, language: &str) -> Result<Vec<RawIntentRecord>, SourceError> {
        let dir = self.intents_dir();
        let mut records: BTreeMap<String, RawIntentRecord> = BTreeMap::new();

        for name in Self::list_files(&dir).await? {
            let path = dir.join(&name);

            if let Some(captures) = USERSAYS_FILE.captures(&name) {
                if &captures["lang"] != language {
                    continue;
                }
                let identifier = captures["intent"].to_string();
                match Self::read_json::<Vec<UserSaysDto>>(&path).await {
                    Ok(examples) => {
                        let phrases = examples.into_iter().map(TrainingPhrase::from).collect();
                        records
                            .entry(identifier.clone())
                            .or_insert_with(|| RawIntentRecord::new(identifier))
                            .phrases = Some(phrases);
                    }
                    Err(e) => warn!(error = %e, "Skipping unreadable training phrases"),
                }
            } else if let Some(identifier) = name.strip_suffix(".json") {
                match Self::read_json::<IntentDto>(&path).await {
                    Ok(intent) => {
                        records
                            .entry(identifier.to_string())
                            .or_insert_with(|| RawIntentRecord::new(identifier))
                            .responses = Some(intent.into_payloads());
                    }
                    Err(e) => warn!(error = %e, "Skipping unreadable intent record"),
                }
            }
        }

        debug!(count = records.len(), dir = %dir.display(), "Loaded intents");
        Ok(records.into_values().collect())
    }

    async fn load_entities(
        &self,
        language: &str,
        skip_prefix: Option<&str>,
    ) -> Result<Vec<EntityRecord>, SourceError> {
        let dir = self.entities_dir();
        if !dir.exists() {
            debug!(dir = %dir.display(), "No entities directory");
            return Ok(Vec::new());
        }

        let mut entities = Vec::new();
        for name in Self::list_files(&dir).await? {
            let Some(captures) = ENTRIES_FILE.captures(&name) else {
                continue;
            };
            if &captures["lang"] != language {
                continue;
            }
            let entity = &captures["entity"];
            if skip_prefix.is_some_and(|prefix| entity.starts_with(prefix)) {
                debug!(entity, "Skipping system entity");
                continue;
            }

            match Self::read_json::<Vec<EntityEntryDto>>(&dir.join(&name)).await {
                Ok(entries) => entities.push(EntityRecord {
                    name: entity.to_string(),
                    entries: entries.into_iter().map(Into::into).collect(),
                }),
                Err(e) => warn!(error = %e, "Skipping unreadable entity"),
            }
        }

        Ok(entities)
    }

    async fn remove_intent(&self, identifier: &str, language: &str) -> Result<(), SourceError> {
        let response = Self::remove_if_exists(&self.response_path(identifier)).await?;
        let usersays = Self::remove_if_exists(&self.usersays_path(identifier, language)).await?;
        debug!(identifier, response, usersays, "Removed intent files");
        Ok(())
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
