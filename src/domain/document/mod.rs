//! Document module - target document kinds and anchored merging.

mod anchored;
mod kind;
mod merger;

pub use anchored::AnchoredDocument;
pub use kind::{DocumentKind, MergeMode, VERSION_HEADER};
pub use merger::merge;
