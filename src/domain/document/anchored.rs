//! Parsed view of a target document split at its anchor.

/// A document split into the hand-authored preamble and the generated region.
///
/// The anchor only counts when it starts a line, so an indented key or a
/// longer key ending in the anchor text never splits the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredDocument<'a> {
    preamble: &'a str,
    generated: Option<&'a str>,
}

impl<'a> AnchoredDocument<'a> {
    pub fn parse(text: &'a str, anchor: &str) -> Self {
        match find_line_start(text, anchor) {
            Some(index) => Self {
                preamble: &text[..index],
                generated: Some(&text[index..]),
            },
            None => Self {
                preamble: text,
                generated: None,
            },
        }
    }

    /// Text before the anchor, or the whole document when there is no anchor.
    pub fn preamble(&self) -> &'a str {
        self.preamble
    }

    /// The anchor and everything after it.
    pub fn generated(&self) -> Option<&'a str> {
        self.generated
    }

    pub fn has_anchor(&self) -> bool {
        self.generated.is_some()
    }
}

fn find_line_start(text: &str, anchor: &str) -> Option<usize> {
    if anchor.is_empty() {
        return None;
    }
    text.match_indices(anchor)
        .map(|(index, _)| index)
        .find(|&index| index == 0 || text[..index].ends_with('\n'))
}
