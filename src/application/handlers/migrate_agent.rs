//! MigrateAgentHandler - Command handler for migrating one agent export.
//!
//! Runs the phases strictly in order: language, grouping, remediation,
//! synonyms, corpus, domain, rules. Groups are recognized before malformed
//! intents are removed, so a removed intent still counts towards its group.
//! Sections are generated in memory first and written afterwards, one
//! document at a time; a failing document does not prevent the others from
//! being written.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::report::{DocumentOutcome, DocumentReport, MigrationReport};
use crate::domain::document::{merge, DocumentKind};
use crate::domain::foundation::DomainError;
use crate::domain::grouping::NamingScheme;
use crate::domain::intent::RawIntentRecord;
use crate::domain::migration::{GeneratedSections, TransformationEngine};
use crate::ports::{
    ExportSource, Remediation, RemediationPolicy, SectionRenderer, SourceError, TargetStore,
};

/// Command to migrate the configured export.
#[derive(Debug, Clone, Default)]
pub struct MigrateAgentCommand {
    /// Language override; the agent's own language is used when `None`.
    pub language: Option<String>,
}

/// Error type for agent migration.
#[derive(Debug, thiserror::Error)]
pub enum MigrateAgentError {
    /// Neither the command nor the export names a language.
    #[error("No language configured and none declared by the agent")]
    LanguageMissing,

    /// The remediation policy stopped the run.
    #[error("Migration aborted at malformed intent '{intent}'")]
    Aborted { intent: String },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for migrating an agent export into target documents.
///
/// # Dependencies
///
/// - `ExportSource`: Read intents and entities, remove deleted intents
/// - `TargetStore`: Read and write target documents
/// - `SectionRenderer`: Render generated sections
/// - `RemediationPolicy`: Decide about malformed intents and system entities
pub struct MigrateAgentHandler {
    source: Arc<dyn ExportSource>,
    store: Arc<dyn TargetStore>,
    renderer: Arc<dyn SectionRenderer>,
    policy: Arc<dyn RemediationPolicy>,
    scheme: NamingScheme,
    system_prefix: String,
}

impl MigrateAgentHandler {
    pub fn new(
        source: Arc<dyn ExportSource>,
        store: Arc<dyn TargetStore>,
        renderer: Arc<dyn SectionRenderer>,
        policy: Arc<dyn RemediationPolicy>,
        scheme: NamingScheme,
        system_prefix: impl Into<String>,
    ) -> Self {
        Self {
            source,
            store,
            renderer,
            policy,
            scheme,
            system_prefix: system_prefix.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: MigrateAgentCommand,
    ) -> Result<MigrationReport, MigrateAgentError> {
        // 1. Language
        let language = self.resolve_language(cmd.language).await?;
        info!(language = %language, source = %self.source.location(), "Starting migration");

        let mut report = MigrationReport {
            language: language.clone(),
            ..MigrationReport::default()
        };

        // 2. Grouping, over every training-phrase record the export holds
        let records = self.source.load_intents(&language).await?;
        let mut engine = TransformationEngine::from_identifiers(
            self.scheme.clone(),
            records
                .iter()
                .filter(|record| record.phrases.is_some())
                .map(|record| record.identifier.as_str()),
        )?;
        report.groups = engine.registry().groups().map(str::to_string).collect();
        if report.groups.is_empty() {
            info!("No groups found");
        } else {
            info!(groups = ?report.groups, "Extracted groups");
        }

        // 3. Remediation
        let records = self.remediate(records, &language, &mut report).await?;

        // 4. Synonyms
        let skip_prefix = self
            .policy
            .ignore_system_entities()
            .then_some(self.system_prefix.as_str());
        for entity in self.source.load_entities(&language, skip_prefix).await? {
            if !engine.add_entity(&entity) {
                warn!(entity = %entity.name, "Skipping entity without entries");
                report.skipped_entities.push(entity.name);
            }
        }

        // 5. Corpus
        for record in &records {
            if let Some(phrases) = &record.phrases {
                engine.add_training_intent(&record.identifier, phrases);
            }
        }

        // 6. Domain
        for record in records.iter().filter(|record| record.responses.is_some()) {
            let outcome = engine.add_responses(&record.identifier, record.payloads_in(&language));
            if let Some(taken) = outcome.conflict {
                warn!(
                    intent = %record.identifier,
                    response = %taken,
                    "Response id already generated by another intent, responses skipped"
                );
                report.conflicting_responses.push(record.identifier.clone());
                continue;
            }
            if let Some(long) = &outcome.renamed_from {
                debug!(from = %long, to = %outcome.intent, "Intent split into steps, shortened");
            }
        }

        // 7. Rules, then write everything
        let sections = engine.finish();
        report.intents = sections.domain.intents.len();
        report.entities = sections.domain.entities.len();
        report.responses = sections.domain.responses.len();
        report.rules = sections.rules.len();

        for kind in DocumentKind::ALL {
            let outcome = self.write_document(kind, &sections).await;
            report.documents.push(DocumentReport { kind, outcome });
        }

        info!(
            intents = report.intents,
            entities = report.entities,
            responses = report.responses,
            rules = report.rules,
            complete = report.is_complete(),
            "Migration finished"
        );
        Ok(report)
    }

    async fn resolve_language(&self, requested: Option<String>) -> Result<String, MigrateAgentError> {
        if let Some(language) = requested {
            return Ok(language);
        }
        self.source
            .agent_language()
            .await?
            .ok_or(MigrateAgentError::LanguageMissing)
    }

    /// Applies the remediation policy to every malformed record.
    async fn remediate(
        &self,
        records: Vec<RawIntentRecord>,
        language: &str,
        report: &mut MigrationReport,
    ) -> Result<Vec<RawIntentRecord>, MigrateAgentError> {
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if !record.is_malformed() {
                kept.push(record);
                continue;
            }

            warn!(intent = %record.identifier, "Intent has no text response");
            match self.policy.on_malformed(&record.identifier) {
                Remediation::Delete => {
                    self.source.remove_intent(&record.identifier, language).await?;
                    info!(intent = %record.identifier, "Removed malformed intent");
                    report.removed.push(record.identifier);
                }
                Remediation::Keep => {
                    report.kept_malformed.push(record.identifier.clone());
                    kept.push(record);
                }
                Remediation::Abort => {
                    return Err(MigrateAgentError::Aborted {
                        intent: record.identifier,
                    });
                }
            }
        }
        Ok(kept)
    }

    fn render(&self, kind: DocumentKind, sections: &GeneratedSections) -> String {
        match kind {
            DocumentKind::Synonyms => self.renderer.render_synonyms(&sections.synonyms),
            DocumentKind::Corpus => self.renderer.render_corpus(&sections.corpus),
            DocumentKind::Domain => self.renderer.render_domain(&sections.domain),
            DocumentKind::Rules => self.renderer.render_rules(&sections.rules),
        }
    }

    async fn write_document(&self, kind: DocumentKind, sections: &GeneratedSections) -> DocumentOutcome {
        let section = self.render(kind, sections);

        let existing = match self.store.read(kind).await {
            Ok(existing) => existing,
            Err(e) => {
                warn!(document = %kind, error = %e, "Cannot read target document");
                return DocumentOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let merged = merge(kind, existing.as_deref(), &section);
        if let Err(e) = self.renderer.check_well_formed(kind, &merged) {
            warn!(document = %kind, error = %e, "Merged document rejected");
            return DocumentOutcome::Failed {
                reason: e.to_string(),
            };
        }

        match self.store.write(kind, &merged).await {
            Ok(written) => {
                info!(
                    document = %kind,
                    path = %written.path.display(),
                    bytes = written.bytes,
                    "Generated document"
                );
                DocumentOutcome::Written(written)
            }
            Err(e) => {
                warn!(document = %kind, error = %e, "Cannot write target document");
                DocumentOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
