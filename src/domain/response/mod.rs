//! Response module - normalized response blocks and the normalizer.
//!
//! - `block` - response identifiers, steps and blocks
//! - `turn_state` - the explicit turn state machine
//! - `normalizer` - flattens raw payloads into blocks and multi-step rules

mod block;
mod normalizer;
mod turn_state;

pub use block::{response_id, sub_response_id, ResponseBlock, ResponseStep, RESPONSE_PREFIX};
pub use normalizer::{button_markup, NormalizedResponse, ResponseNormalizer};
pub use turn_state::{Transition, TurnAction, TurnEvent, TurnState};
