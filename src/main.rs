//! intent-porter - migrate a Dialogflow agent export into a Rasa project
//!
//! Usage: intent-porter [--source DIR] [--target DIR] [--language LANG]
//!
//! Settings come from the optional config file and `INTENT_PORTER__*`
//! environment variables; command line flags win over both.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intent_porter::adapters::{
    ConfiguredPolicy, FsExportSource, FsTargetStore, InteractivePolicy, RasaYamlRenderer,
};
use intent_porter::application::{MigrateAgentCommand, MigrateAgentHandler};
use intent_porter::config::{LoggingConfig, MalformedAction, MigratorConfig};
use intent_porter::ports::{Remediation, RemediationPolicy};

#[derive(Parser)]
#[command(name = "intent-porter")]
#[command(about = "Migrate a Dialogflow agent export into Rasa 3 training data")]
struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(long, short, env = "INTENT_PORTER_CONFIG")]
    config: Option<PathBuf>,

    /// Unpacked Dialogflow export directory
    #[arg(long)]
    source: Option<PathBuf>,

    /// Rasa project directory
    #[arg(long)]
    target: Option<PathBuf>,

    /// Language to migrate (defaults to the agent language)
    #[arg(long, short)]
    language: Option<String>,

    /// Never prompt; unanswered questions use their defaults
    #[arg(long)]
    non_interactive: bool,

    /// Leave system entities out of the synonyms document
    #[arg(long, conflicts_with = "include_system_entities")]
    ignore_system_entities: bool,

    /// Migrate system entities as well
    #[arg(long)]
    include_system_entities: bool,

    /// What to do with intents without text responses: ask, keep, delete, abort
    #[arg(long)]
    on_malformed: Option<MalformedAction>,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn apply(&self, config: &mut MigratorConfig) {
        if let Some(source) = &self.source {
            config.paths.source_dir = source.clone();
        }
        if let Some(target) = &self.target {
            config.paths.target_dir = target.clone();
        }
        if let Some(language) = &self.language {
            config.migration.language = Some(language.clone());
        }
        if self.non_interactive {
            config.migration.interactive = false;
        }
        if self.ignore_system_entities {
            config.migration.ignore_system_entities = Some(true);
        } else if self.include_system_entities {
            config.migration.ignore_system_entities = Some(false);
        }
        if let Some(action) = self.on_malformed {
            config.migration.on_malformed = action;
        }
        if self.log_json {
            config.logging.json = true;
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.as_str().into());

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!logging.json).then(tracing_subscriber::fmt::layer))
        .init();
}

fn build_policy(config: &MigratorConfig) -> Arc<dyn RemediationPolicy> {
    let migration = &config.migration;
    if migration.interactive {
        Arc::new(InteractivePolicy::new(
            migration.on_malformed.remediation(),
            migration.ignore_system_entities,
        ))
    } else {
        Arc::new(ConfiguredPolicy::new(
            migration.on_malformed.remediation().unwrap_or(Remediation::Abort),
            migration.ignore_system_entities.unwrap_or(true),
        ))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config =
        MigratorConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging);

    let scheme = config.naming.scheme()?;
    let handler = MigrateAgentHandler::new(
        Arc::new(FsExportSource::new(&config.paths.source_dir)),
        Arc::new(FsTargetStore::new(&config.paths.target_dir)),
        Arc::new(RasaYamlRenderer::new()),
        build_policy(&config),
        scheme,
        config.naming.system_prefix.clone(),
    );

    let report = handler
        .handle(MigrateAgentCommand {
            language: config.migration.language.clone(),
        })
        .await
        .with_context(|| {
            format!(
                "Migration of {} failed",
                config.paths.source_dir.display()
            )
        })?;

    print!("{}", report);

    if report.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
