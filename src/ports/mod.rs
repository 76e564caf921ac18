//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the transformation core and the outside world. Adapters implement these
//! ports.
//!
//! ## Input
//!
//! - `ExportSource` - Reads the agent export (language, intents, entities)
//!
//! ## Output
//!
//! - `SectionRenderer` - Renders generated sections as target-format text
//! - `TargetStore` - Reads and atomically writes target documents
//!
//! ## Decisions
//!
//! - `RemediationPolicy` - Answers questions formerly asked at the prompt

mod export_source;
mod remediation_policy;
mod section_renderer;
mod target_store;

pub use export_source::{ExportSource, SourceError};
pub use remediation_policy::{Remediation, RemediationPolicy};
pub use section_renderer::{RenderError, SectionRenderer};
pub use target_store::{StoreError, TargetStore, WrittenDocument};
