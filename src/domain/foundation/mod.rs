//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary, the state machine trait and the
//! identifier accumulator shared by the transformation components.

mod errors;
mod identifier_list;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use identifier_list::IdentifierList;
pub use state_machine::StateMachine;
