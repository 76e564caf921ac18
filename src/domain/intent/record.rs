//! Source records as read from an agent export.

/// One training example, stored as the ordered fragments of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingPhrase {
    fragments: Vec<String>,
}

impl TrainingPhrase {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// The example text: all fragments concatenated in order.
    pub fn text(&self) -> String {
        self.fragments.concat()
    }
}

/// A labelled button: `label` is shown, `url` is the link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub url: String,
}

impl Button {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Response payload kinds understood by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePayload {
    Text { strings: Vec<String> },
    Buttons { items: Vec<Button> },
    Images { urls: Vec<String> },
    Unknown,
}

/// A response payload tagged with the language it was authored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPayload {
    pub language: String,
    pub payload: ResponsePayload,
}

impl LocalizedPayload {
    pub fn new(language: impl Into<String>, payload: ResponsePayload) -> Self {
        Self {
            language: language.into(),
            payload,
        }
    }
}

/// An intent as exported: identifier, training phrases and responses.
///
/// `phrases` is `None` when the export has no training-phrase record for the
/// migration language; `responses` is `None` when there is no response
/// record at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIntentRecord {
    pub identifier: String,
    pub phrases: Option<Vec<TrainingPhrase>>,
    pub responses: Option<Vec<LocalizedPayload>>,
}

impl RawIntentRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            phrases: None,
            responses: None,
        }
    }

    pub fn with_phrases(mut self, phrases: Vec<TrainingPhrase>) -> Self {
        self.phrases = Some(phrases);
        self
    }

    pub fn with_responses(mut self, responses: Vec<LocalizedPayload>) -> Self {
        self.responses = Some(responses);
        self
    }

    /// Payloads authored in `language`, in export order.
    pub fn payloads_in<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a ResponsePayload> {
        self.responses
            .iter()
            .flatten()
            .filter(move |localized| localized.language == language)
            .map(|localized| &localized.payload)
    }

    /// True when a response record exists but carries no text payload with
    /// at least one string in any language. A list holding only empty
    /// strings still counts as text.
    pub fn is_malformed(&self) -> bool {
        match &self.responses {
            Some(responses) => !responses.iter().any(|localized| {
                matches!(
                    &localized.payload,
                    ResponsePayload::Text { strings } if !strings.is_empty()
                )
            }),
            None => false,
        }
    }
}

/// One canonical entity value and its alternate surface forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityEntry {
    pub value: String,
    pub synonyms: Vec<String>,
}

/// An exported entity with its entries for the migration language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub name: String,
    pub entries: Vec<EntityEntry>,
}
