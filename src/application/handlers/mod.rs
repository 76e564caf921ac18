//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

mod migrate_agent;
mod report;

pub use migrate_agent::{MigrateAgentCommand, MigrateAgentError, MigrateAgentHandler};
pub use report::{DocumentOutcome, DocumentReport, MigrationReport};
