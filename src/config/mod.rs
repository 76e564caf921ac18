//! Migrator configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from built-in defaults, an optional
//! configuration file and environment variables with the `INTENT_PORTER`
//! prefix, nested values separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use intent_porter::config::MigratorConfig;
//!
//! let config = MigratorConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading export from {}", config.paths.source_dir.display());
//! ```

mod error;
mod logging;
mod migration;
mod naming;
mod paths;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use migration::{MalformedAction, MigrationConfig};
pub use naming::NamingConfig;
pub use paths::PathsConfig;

use serde::Deserialize;
use std::path::Path;

/// Root migrator configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MigratorConfig {
    /// Export and target locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Group discovery and namespacing
    #[serde(default)]
    pub naming: NamingConfig,

    /// Run behaviour (language, remediation, prompts)
    #[serde(default)]
    pub migration: MigrationConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MigratorConfig {
    /// Load configuration
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads `file` when given (any format the `config` crate supports)
    /// 3. Reads environment variables with `INTENT_PORTER` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `INTENT_PORTER__PATHS__SOURCE_DIR=export` -> `paths.source_dir = export`
    /// - `INTENT_PORTER__MIGRATION__ON_MALFORMED=delete` -> `migration.on_malformed = delete`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into the expected types.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("INTENT_PORTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any section is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.paths.validate()?;
        self.naming.validate()?;
        self.migration.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
