//! State machine trait for small lifecycle enums.
//!
//! The response normalizer walks a payload sequence through [`TurnState`]
//! and relies on this trait to keep its transition table in one place.
//!
//! [`TurnState`]: crate::domain::response::TurnState

use super::{DomainError, ErrorCode};

/// Trait for enums that represent state machines.
///
/// Implementors list their valid transitions and get a checked
/// `transition_to` for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for TurnState {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             NoTurn | InText | InMedia => vec![InText, InMedia],
///         }
///     }
/// }
///
/// let next = TurnState::NoTurn.transition_to(TurnState::InText)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if a transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs the transition, rejecting targets outside the table.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if the current state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
