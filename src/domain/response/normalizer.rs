//! Response normalizer - flattens one intent's payloads into response blocks.
//!
//! Text payloads become text steps. Buttons that follow text in the same turn
//! are merged into that text as HTML links; buttons that open a turn get
//! their own sub-block (`utter_<intent>_<n>`) and a matching rule action.
//! Opening the first sub-block shortens the intent to its leaf name, since a
//! multi-step rule needs a plain intent rather than a retrieval intent.

use super::{response_id, sub_response_id, ResponseBlock, TurnAction, TurnEvent, TurnState};
use crate::domain::grouping::shorten;
use crate::domain::intent::{normalize_text, Button, ResponsePayload};
use crate::domain::rules::RuleBlock;

/// Outcome of normalizing one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedResponse {
    /// Final intent identifier (shortened when a sub-block was opened).
    pub intent: String,
    /// The namespaced identifier the intent had before shortening.
    pub renamed_from: Option<String>,
    /// Base block first, then sub-blocks in step order.
    pub blocks: Vec<ResponseBlock>,
    /// Multi-step rule, present only when a sub-block was opened.
    pub rule: Option<RuleBlock>,
}

/// Walks payloads through the [`TurnState`] machine.
#[derive(Debug, Clone, Copy)]
pub struct ResponseNormalizer {
    namespace_separator: char,
}

impl ResponseNormalizer {
    pub fn new(namespace_separator: char) -> Self {
        Self {
            namespace_separator,
        }
    }

    /// Normalizes the payloads of one intent.
    ///
    /// `intent` is the namespaced identifier; `payloads` must already be
    /// filtered to the migration language.
    pub fn normalize<'a, I>(&self, intent: &str, payloads: I) -> NormalizedResponse
    where
        I: IntoIterator<Item = &'a ResponsePayload>,
    {
        let mut run = Run {
            intent: intent.to_string(),
            renamed_from: None,
            blocks: vec![ResponseBlock::new(response_id(intent))],
            rule: None,
            step_counter: 0,
        };
        let mut state = TurnState::NoTurn;

        for payload in payloads {
            let transition = match payload {
                ResponsePayload::Text { strings } if !strings.is_empty() => {
                    let transition = state.on(TurnEvent::Text);
                    for string in strings {
                        run.current().push_text(normalize_text(string));
                    }
                    transition
                }
                ResponsePayload::Buttons { items } if !items.is_empty() => {
                    let transition = state.on(TurnEvent::Buttons);
                    if transition.action == TurnAction::MergeButtons {
                        run.current().append_to_last_text(&button_markup(items));
                    } else {
                        self.open_step(&mut run, items);
                    }
                    transition
                }
                ResponsePayload::Images { urls } if !urls.is_empty() => {
                    let transition = state.on(TurnEvent::Images);
                    for url in urls {
                        run.current().attach_image(url.as_str());
                    }
                    transition
                }
                // Unknown payloads and empty lists leave the turn untouched
                _ => continue,
            };
            state = transition.next;
        }

        NormalizedResponse {
            intent: run.intent,
            renamed_from: run.renamed_from,
            blocks: run.blocks,
            rule: run.rule,
        }
    }

    fn open_step(&self, run: &mut Run, items: &[Button]) {
        if run.step_counter == 0 {
            let short = shorten(&run.intent, self.namespace_separator).to_string();
            if short != run.intent {
                run.renamed_from = Some(std::mem::replace(&mut run.intent, short));
            }
            let base = response_id(&run.intent);
            run.blocks[0].rename(base.clone());
            run.rule = Some(RuleBlock::new(run.intent.clone(), vec![base]));
        }

        run.step_counter += 1;
        let sub_id = sub_response_id(run.blocks[0].id(), run.step_counter);

        let mut block = ResponseBlock::new(sub_id.clone());
        block.push_text(button_markup(items));
        run.blocks.push(block);

        if let Some(rule) = run.rule.as_mut() {
            rule.push_action(sub_id);
        }
    }
}

/// Mutable state for one normalization pass.
struct Run {
    intent: String,
    renamed_from: Option<String>,
    blocks: Vec<ResponseBlock>,
    rule: Option<RuleBlock>,
    step_counter: u32,
}

impl Run {
    fn current(&mut self) -> &mut ResponseBlock {
        // blocks always holds the base block
        let last = self.blocks.len() - 1;
        &mut self.blocks[last]
    }
}

/// Renders buttons as `<br><a href="URL">LABEL</a>` fragments.
pub fn button_markup(items: &[Button]) -> String {
    items
        .iter()
        .map(|button| {
            format!(
                "<br><a href=\"{}\">{}</a>",
                button.url,
                normalize_text(&button.label)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::response::ResponseStep;

    fn normalizer() -> ResponseNormalizer {
        ResponseNormalizer::new('/')
    }

    fn text(strings: &[&str]) -> ResponsePayload {
        ResponsePayload::Text {
            strings: strings.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn visit() -> ResponsePayload {
        ResponsePayload::Buttons {
            items: vec![Button::new("Visit", "http://x")],
        }
    }

    fn image(url: &str) -> ResponsePayload {
        ResponsePayload::Images {
            urls: vec![url.to_string()],
        }
    }

    #[test]
    fn text_then_buttons_merges_into_text_step() {
        let payloads = [text(&["Welcome"]), visit()];
        let result = normalizer().normalize("info", &payloads);

        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].id(), "utter_info");
        assert_eq!(
            result.blocks[0].steps(),
            &[ResponseStep::text("Welcome<br><a href=\"http://x\">Visit</a>")]
        );
        assert!(result.rule.is_none());
        assert!(result.renamed_from.is_none());
    }

    #[test]
    fn buttons_alone_open_sub_block_and_rule() {
        let payloads = [visit()];
        let result = normalizer().normalize("info", &payloads);

        assert_eq!(result.blocks.len(), 2);
        assert!(result.blocks[0].is_empty());
        assert_eq!(result.blocks[1].id(), "utter_info_1");
        assert_eq!(
            result.blocks[1].steps(),
            &[ResponseStep::text("<br><a href=\"http://x\">Visit</a>")]
        );
        assert_eq!(
            result.rule,
            Some(RuleBlock::new("info", vec!["utter_info".into(), "utter_info_1".into()]))
        );
    }

    #[test]
    fn buttons_then_text_creates_exactly_one_sub_block() {
        let payloads = [visit(), text(&["More"])];
        let result = normalizer().normalize("info", &payloads);

        assert_eq!(result.blocks.len(), 2);
        assert_eq!(result.blocks[1].id(), "utter_info_1");
        // Text following the buttons continues the sub-block's turn.
        assert_eq!(result.blocks[1].steps()[1], ResponseStep::text("More"));
        assert_eq!(result.rule.unwrap().actions().len(), 2);
    }

    #[test]
    fn grouped_intent_is_shortened_when_step_opens() {
        let payloads = [text(&["Hi"]), image("http://x/a.png"), visit()];
        let result = normalizer().normalize("greet/hello", &payloads);

        assert_eq!(result.intent, "hello");
        assert_eq!(result.renamed_from.as_deref(), Some("greet/hello"));
        assert_eq!(result.blocks[0].id(), "utter_hello");
        assert_eq!(result.blocks[1].id(), "utter_hello_1");
        assert_eq!(
            result.rule,
            Some(RuleBlock::new("hello", vec!["utter_hello".into(), "utter_hello_1".into()]))
        );
    }

    #[test]
    fn each_media_led_turn_adds_a_step() {
        let payloads = [visit(), image("http://x/a.png"), visit()];
        let result = normalizer().normalize("info", &payloads);

        let ids: Vec<&str> = result.blocks.iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec!["utter_info", "utter_info_1", "utter_info_2"]);
        assert_eq!(
            result.rule.unwrap().actions(),
            &["utter_info", "utter_info_1", "utter_info_2"]
        );
    }

    #[test]
    fn images_attach_to_current_block() {
        let payloads = [text(&["Look"]), image("http://x/a.png")];
        let result = normalizer().normalize("info", &payloads);

        assert_eq!(
            result.blocks[0].steps(),
            &[ResponseStep {
                text: Some("Look".into()),
                image: Some("http://x/a.png".into()),
            }]
        );
    }

    #[test]
    fn text_is_normalized_per_string() {
        let payloads = [text(&["\u{201C}Hi\u{201D}\nthere", "Second"])];
        let result = normalizer().normalize("info", &payloads);

        assert_eq!(
            result.blocks[0].steps(),
            &[ResponseStep::text("\"Hi\" there"), ResponseStep::text("Second")]
        );
    }

    #[test]
    fn unknown_and_empty_payloads_do_not_change_state() {
        let payloads = [
            text(&["Hello"]),
            ResponsePayload::Unknown,
            text(&[]),
            ResponsePayload::Images { urls: vec![] },
            visit(),
        ];
        let result = normalizer().normalize("info", &payloads);

        assert_eq!(result.blocks.len(), 1);
        assert!(result.blocks[0].steps()[0]
            .text
            .as_deref()
            .unwrap()
            .ends_with("Visit</a>"));
    }

    #[test]
    fn no_payloads_yield_empty_base_block() {
        let result = normalizer().normalize("OTHER/faq", std::iter::empty());
        assert_eq!(result.blocks, vec![ResponseBlock::new("utter_OTHER/faq")]);
        assert!(result.rule.is_none());
    }

    #[test]
    fn button_labels_are_normalized() {
        let markup = button_markup(&[Button::new("Say \u{201C}hi\u{201D}", "http://x")]);
        assert_eq!(markup, "<br><a href=\"http://x\">Say \"hi\"</a>");
    }
}
