//! Normalized response blocks.

/// Prefix of every response identifier.
pub const RESPONSE_PREFIX: &str = "utter_";

/// Response identifier for a namespaced intent: `utter_<intent>`.
pub fn response_id(intent: &str) -> String {
    format!("{}{}", RESPONSE_PREFIX, intent)
}

/// Identifier of the `step`-th sub-block of a response: `<base>_<step>`.
pub fn sub_response_id(base: &str, step: u32) -> String {
    format!("{}_{}", base, step)
}

/// One response variation: text, an image, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStep {
    pub text: Option<String>,
    pub image: Option<String>,
}

impl ResponseStep {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image: None,
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self {
            text: None,
            image: Some(url.into()),
        }
    }
}

/// An ordered list of response steps under one response identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBlock {
    id: String,
    steps: Vec<ResponseStep>,
}

impl ResponseBlock {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            steps: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn steps(&self) -> &[ResponseStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn rename(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.steps.push(ResponseStep::text(text));
    }

    /// Appends `suffix` to the most recent text step, or starts a new text
    /// step when the block holds no text yet.
    pub fn append_to_last_text(&mut self, suffix: &str) {
        match self.steps.iter_mut().rev().find(|step| step.text.is_some()) {
            Some(ResponseStep {
                text: Some(text), ..
            }) => text.push_str(suffix),
            _ => self.push_text(suffix),
        }
    }

    /// Attaches an image to the last step when it is a text step without an
    /// image; otherwise adds an image-only step.
    pub fn attach_image(&mut self, url: impl Into<String>) {
        match self.steps.last_mut() {
            Some(step) if step.text.is_some() && step.image.is_none() => {
                step.image = Some(url.into());
            }
            _ => self.steps.push(ResponseStep::image(url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_ids_follow_naming_convention() {
        assert_eq!(response_id("greet/hello"), "utter_greet/hello");
        assert_eq!(sub_response_id("utter_info", 2), "utter_info_2");
    }

    #[test]
    fn append_to_last_text_extends_latest_text_step() {
        let mut block = ResponseBlock::new("utter_info");
        block.push_text("First");
        block.push_text("Second");
        block.append_to_last_text("<br>");

        assert_eq!(block.steps()[0].text.as_deref(), Some("First"));
        assert_eq!(block.steps()[1].text.as_deref(), Some("Second<br>"));
    }

    #[test]
    fn append_to_last_text_starts_step_in_empty_block() {
        let mut block = ResponseBlock::new("utter_info_1");
        block.append_to_last_text("<br>");
        assert_eq!(block.steps(), &[ResponseStep::text("<br>")]);
    }

    #[test]
    fn attach_image_joins_preceding_text_step() {
        let mut block = ResponseBlock::new("utter_info");
        block.push_text("Look");
        block.attach_image("http://x/a.png");
        block.attach_image("http://x/b.png");

        assert_eq!(block.steps().len(), 2);
        assert_eq!(block.steps()[0].image.as_deref(), Some("http://x/a.png"));
        assert_eq!(block.steps()[1], ResponseStep::image("http://x/b.png"));
    }

    #[test]
    fn attach_image_on_empty_block_creates_image_step() {
        let mut block = ResponseBlock::new("utter_info");
        block.attach_image("http://x/a.png");
        assert_eq!(block.steps(), &[ResponseStep::image("http://x/a.png")]);
    }
}
