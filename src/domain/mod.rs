//! Domain layer containing the transformation core.
//!
//! Everything here is synchronous and free of I/O.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, state machine, identifier lists)
//! - `grouping` - Group discovery and name resolution
//! - `intent` - Source records and generated corpus sections
//! - `response` - Response blocks and the response normalizer
//! - `rules` - Rule blocks and rule synthesis
//! - `document` - Target documents and anchored merging
//! - `migration` - The transformation engine tying the phases together

pub mod document;
pub mod foundation;
pub mod grouping;
pub mod intent;
pub mod migration;
pub mod response;
pub mod rules;
