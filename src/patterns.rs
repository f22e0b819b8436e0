//! Compiled regex patterns shared across the pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// A run of HTML whitespace. Excludes U+00A0, which decodes from `&nbsp;`
/// and must survive collapsing.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\r\x0C]+").expect("WHITESPACE_RUN regex"));

/// Text ending in sentence punctuation, optionally followed by a closing
/// quote or bracket.
pub static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?。！？…]["'”’»)\]]*\s*$"#).expect("SENTENCE_END regex")
});

/// Separators between a page title and its site name, in priority order.
pub const TITLE_SEPARATORS: [&str; 3] = [" | ", " - ", " :: "];

/// Collapse every whitespace run in `text` to a single space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> std::borrow::Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace_keeps_nbsp() {
        assert_eq!(collapse_whitespace("a \n\t b\u{a0}\u{a0}c"), "a b\u{a0}\u{a0}c");
    }

    #[test]
    fn test_sentence_end() {
        assert!(SENTENCE_END.is_match("It was over."));
        assert!(SENTENCE_END.is_match("\u{201c}Really?\u{201d} "));
        assert!(SENTENCE_END.is_match("(see above.)"));
        assert!(!SENTENCE_END.is_match("Read more"));
        assert!(!SENTENCE_END.is_match("v1.2 release"));
    }
}
