//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// An extracted article.
///
/// Created once at the end of a call; identical input and options always
/// produce an identical `Article`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article title, empty when no title source was found.
    pub title: String,

    /// Rendered HTML fragment of the content region.
    pub content: String,

    /// True when body-only output dropped at least one enclosing ancestor.
    pub truncated: bool,

    /// True when a leading headline was removed from `content`.
    pub headline_removed: bool,
}

impl Article {
    /// Content as plain text, with block boundaries as blank lines.
    ///
    /// ```rust
    /// use article_reader::Article;
    ///
    /// let article = Article {
    ///     content: "<p>One &amp; two</p><p>Three</p>".to_string(),
    ///     ..Article::default()
    /// };
    /// assert_eq!(article.text(), "One & two\n\nThree");
    /// ```
    #[must_use]
    pub fn text(&self) -> String {
        let mut document = crate::parser::parse(&self.content, None);
        crate::html_processing::decode_entities(&mut document);
        crate::render::to_text(&document, &[document.root()])
    }
}
