//! Serde views of the Dialogflow export files.
//!
//! Only the fields the migration reads are modelled; everything else in the
//! export is ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::intent::{
    Button, EntityEntry, LocalizedPayload, ResponsePayload, TrainingPhrase,
};

/// `agent.json`
#[derive(Debug, Deserialize)]
pub struct AgentDto {
    #[serde(default)]
    pub language: Option<String>,
}

/// `intents/<name>.json`
#[derive(Debug, Deserialize)]
pub struct IntentDto {
    #[serde(default)]
    pub responses: Vec<ResponseDto>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseDto {
    #[serde(default)]
    pub messages: Vec<MessageDto>,
}

#[derive(Debug, Deserialize)]
pub struct MessageDto {
    #[serde(rename = "type", default)]
    pub kind: Value,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub speech: Option<Speech>,
    #[serde(default)]
    pub payload: Option<RichPayloadDto>,
}

/// `speech` is a single string in older exports and a list in newer ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Speech {
    One(String),
    Many(Vec<String>),
}

impl Speech {
    fn into_strings(self) -> Vec<String> {
        match self {
            Speech::One(s) if s.is_empty() => Vec::new(),
            Speech::One(s) => vec![s],
            Speech::Many(v) => v,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RichPayloadDto {
    #[serde(default)]
    pub buttons: Option<Vec<ButtonDto>>,
    #[serde(default)]
    pub images: Option<Vec<ImageDto>>,
}

#[derive(Debug, Deserialize)]
pub struct ButtonDto {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageDto {
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

/// One element of `intents/<name>_usersays_<lang>.json`.
#[derive(Debug, Deserialize)]
pub struct UserSaysDto {
    #[serde(default)]
    pub data: Vec<FragmentDto>,
}

#[derive(Debug, Deserialize)]
pub struct FragmentDto {
    #[serde(default)]
    pub text: String,
}

/// One element of `entities/<name>_entries_<lang>.json`.
#[derive(Debug, Deserialize)]
pub struct EntityEntryDto {
    pub value: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Text,
    Rich,
    Other,
}

/// The message type is `"0"` or `0` for text and `"4"` or `4` for custom
/// payloads, depending on the export version.
fn message_kind(kind: &Value) -> MessageKind {
    let code = match kind {
        Value::String(s) => s.parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    match code {
        Some(0) => MessageKind::Text,
        Some(4) => MessageKind::Rich,
        _ => MessageKind::Other,
    }
}

impl IntentDto {
    /// Payloads of the first response, tagged with their language.
    pub fn into_payloads(self) -> Vec<LocalizedPayload> {
        self.responses
            .into_iter()
            .next()
            .map(|response| {
                response
                    .messages
                    .into_iter()
                    .flat_map(MessageDto::into_payloads)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl MessageDto {
    fn into_payloads(self) -> Vec<LocalizedPayload> {
        let language = self.lang.unwrap_or_default();
        let payloads = match message_kind(&self.kind) {
            MessageKind::Text => vec![ResponsePayload::Text {
                strings: self.speech.map(Speech::into_strings).unwrap_or_default(),
            }],
            MessageKind::Rich => match self.payload {
                Some(rich) => rich.into_payloads(),
                None => vec![ResponsePayload::Unknown],
            },
            MessageKind::Other => vec![ResponsePayload::Unknown],
        };

        payloads
            .into_iter()
            .map(|payload| LocalizedPayload::new(language.clone(), payload))
            .collect()
    }
}

impl RichPayloadDto {
    /// Buttons first, then images.
    fn into_payloads(self) -> Vec<ResponsePayload> {
        let mut payloads = Vec::new();
        if let Some(buttons) = self.buttons {
            payloads.push(ResponsePayload::Buttons {
                items: buttons
                    .into_iter()
                    .map(|b| Button::new(b.text, b.value))
                    .collect(),
            });
        }
        if let Some(images) = self.images {
            payloads.push(ResponsePayload::Images {
                urls: images.into_iter().map(|i| i.image_url).collect(),
            });
        }
        if payloads.is_empty() {
            payloads.push(ResponsePayload::Unknown);
        }
        payloads
    }
}

impl From<UserSaysDto> for TrainingPhrase {
    fn from(dto: UserSaysDto) -> Self {
        TrainingPhrase::new(dto.data.into_iter().map(|fragment| fragment.text))
    }
}

impl From<EntityEntryDto> for EntityEntry {
    fn from(dto: EntityEntryDto) -> Self {
        EntityEntry {
            value: dto.value,
            synonyms: dto.synonyms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn intent(value: Value) -> IntentDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_message_accepts_string_and_numeric_type() {
        let dto = intent(json!({
            "responses": [{ "messages": [
                { "type": "0", "lang": "en", "speech": ["Hi", "Hello"] },
                { "type": 0, "lang": "en", "speech": "Hey" }
            ]}]
        }));

        let payloads = dto.into_payloads();
        assert_eq!(
            payloads,
            vec![
                LocalizedPayload::new(
                    "en",
                    ResponsePayload::Text {
                        strings: vec!["Hi".into(), "Hello".into()]
                    }
                ),
                LocalizedPayload::new("en", ResponsePayload::Text { strings: vec!["Hey".into()] }),
            ]
        );
    }

    #[test]
    fn empty_speech_string_carries_no_text() {
        let dto = intent(json!({
            "responses": [{ "messages": [
                { "type": "0", "lang": "en", "speech": "" },
                { "type": "0", "lang": "en", "speech": [""] }
            ]}]
        }));

        let payloads = dto.into_payloads();
        assert_eq!(payloads[0].payload, ResponsePayload::Text { strings: vec![] });
        assert_eq!(
            payloads[1].payload,
            ResponsePayload::Text {
                strings: vec![String::new()]
            }
        );
    }

    #[test]
    fn rich_payload_yields_buttons_then_images() {
        let dto = intent(json!({
            "responses": [{ "messages": [{
                "type": "4",
                "lang": "en",
                "payload": {
                    "images": [{ "imageUrl": "http://x/a.png" }],
                    "buttons": [{ "text": "Visit", "value": "http://x" }]
                }
            }]}]
        }));

        let payloads: Vec<_> = dto.into_payloads().into_iter().map(|p| p.payload).collect();
        assert_eq!(
            payloads,
            vec![
                ResponsePayload::Buttons {
                    items: vec![Button::new("Visit", "http://x")]
                },
                ResponsePayload::Images {
                    urls: vec!["http://x/a.png".into()]
                },
            ]
        );
    }

    #[test]
    fn other_message_types_are_unknown() {
        let dto = intent(json!({
            "responses": [{ "messages": [{ "type": "1", "lang": "en", "title": "card" }]}]
        }));
        assert_eq!(dto.into_payloads()[0].payload, ResponsePayload::Unknown);
    }

    #[test]
    fn only_first_response_is_used() {
        let dto = intent(json!({
            "responses": [
                { "messages": [{ "type": 0, "lang": "en", "speech": ["first"] }] },
                { "messages": [{ "type": 0, "lang": "en", "speech": ["second"] }] }
            ]
        }));
        assert_eq!(dto.into_payloads().len(), 1);
    }

    #[test]
    fn missing_responses_yield_no_payloads() {
        assert!(intent(json!({ "name": "x" })).into_payloads().is_empty());
    }

    #[test]
    fn usersays_fragments_become_phrase() {
        let dto: UserSaysDto = serde_json::from_value(json!({
            "data": [{ "text": "fly to " }, { "text": "Paris", "meta": "@sys.geo-city" }]
        }))
        .unwrap();
        assert_eq!(TrainingPhrase::from(dto).text(), "fly to Paris");
    }
}
