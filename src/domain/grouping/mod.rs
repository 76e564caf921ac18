//! Grouping - implicit intent namespaces derived from source names.
//!
//! - `analyzer` - tallies name prefixes into recognized groups
//! - `registry` - resolves raw identifiers into namespaced identifiers

mod analyzer;
mod registry;
mod scheme;

pub use analyzer::{analyze_groups, RecognizedGroups};
pub use registry::{shorten, NamespaceRegistry};
pub use scheme::NamingScheme;
