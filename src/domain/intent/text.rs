//! Text normalization applied to every response string and button label.

/// Replaces typographic double quotes with `"` and newlines with spaces.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\n' => ' ',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_curly_double_quotes() {
        assert_eq!(normalize_text("say \u{201C}hi\u{201D}"), "say \"hi\"");
    }

    #[test]
    fn converts_newlines_to_spaces() {
        assert_eq!(normalize_text("line one\nline two"), "line one line two");
    }

    #[test]
    fn leaves_single_quotes_alone() {
        assert_eq!(normalize_text("it's"), "it's");
    }
}
