//! Input and output locations

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the export is read from and where the Rasa project lives
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Unpacked Dialogflow export (contains `agent.json`)
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Rasa project directory
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,
}

impl PathsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("paths.source_dir"));
        }
        if self.target_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("paths.target_dir"));
        }
        if self.source_dir == self.target_dir {
            return Err(ValidationError::SameSourceAndTarget);
        }
        Ok(())
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            target_dir: default_target_dir(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("dialogflow")
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("rasa")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let paths = PathsConfig::default();
        assert_eq!(paths.source_dir, PathBuf::from("dialogflow"));
        assert_eq!(paths.target_dir, PathBuf::from("rasa"));
        assert!(paths.validate().is_ok());
    }

    #[test]
    fn same_directories_are_rejected() {
        let paths = PathsConfig {
            source_dir: "bot".into(),
            target_dir: "bot".into(),
        };
        assert_eq!(paths.validate(), Err(ValidationError::SameSourceAndTarget));
    }
}
