//! Migration module - the transformation engine and its generated sections.

mod engine;

pub use engine::{DomainSection, GeneratedSections, ResponseOutcome, TransformationEngine};
