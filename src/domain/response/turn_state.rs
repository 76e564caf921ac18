//! Turn state machine driving response normalization.
//!
//! | state \ event | Text            | Buttons                | Images               |
//! |---------------|-----------------|------------------------|----------------------|
//! | NoTurn        | EmitText/InText | OpenStep/InText        | AttachImages/InMedia |
//! | InText        | EmitText/InText | MergeButtons/InText    | AttachImages/InMedia |
//! | InMedia       | EmitText/InText | OpenStep/InText        | AttachImages/InMedia |

use crate::domain::foundation::StateMachine;

/// Where the normalizer stands within the current dialogue turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    /// Nothing emitted yet for this intent.
    #[default]
    NoTurn,
    /// The last payload left text that buttons may be merged into.
    InText,
    /// The last payload was media; buttons now start a new turn.
    InMedia,
}

/// Payload kinds that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Text,
    Buttons,
    Images,
}

/// What the normalizer must do for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Emit one text step per string into the current block.
    EmitText,
    /// Append button markup to the last text step of the current block.
    MergeButtons,
    /// Open a new sub-block and rule step holding the button markup.
    OpenStep,
    /// Attach image steps to the current block.
    AttachImages,
}

/// Result of feeding one event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: TurnAction,
    pub next: TurnState,
}

impl TurnState {
    /// Looks up the transition table.
    pub fn on(self, event: TurnEvent) -> Transition {
        use TurnAction::*;
        use TurnState::*;

        let (action, next) = match (self, event) {
            (_, TurnEvent::Text) => (EmitText, InText),
            (InText, TurnEvent::Buttons) => (MergeButtons, InText),
            (NoTurn | InMedia, TurnEvent::Buttons) => (OpenStep, InText),
            (_, TurnEvent::Images) => (AttachImages, InMedia),
        };
        Transition { action, next }
    }

    /// True when buttons would be merged into preceding text.
    pub fn saw_preceding_text(self) -> bool {
        self == TurnState::InText
    }
}

impl StateMachine for TurnState {
    fn valid_transitions(&self) -> Vec<Self> {
        // NoTurn is an entry state only.
        vec![TurnState::InText, TurnState::InMedia]
    }
}
