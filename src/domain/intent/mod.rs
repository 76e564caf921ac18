//! Intent module - source records and generated corpus sections.

mod corpus;
mod record;
mod text;

pub use corpus::{Corpus, SynonymSection, TrainingSection};
pub use record::{
    Button, EntityEntry, EntityRecord, LocalizedPayload, RawIntentRecord, ResponsePayload,
    TrainingPhrase,
};
pub use text::normalize_text;
