//! Tag-soup HTML parser.
//!
//! [`tokenizer`] lexes the text, [`tree_builder`] assembles the tree using
//! the recovery table in [`rules`]. Malformed markup never fails; the only
//! error is input bytes that cannot be decoded as text.

pub mod entities;
pub mod rules;
pub mod tokenizer;
pub mod tree_builder;

use url::Url;

use crate::dom::Document;
use crate::encoding;
use crate::error::Result;

use tree_builder::TreeBuilder;

/// Parse decoded text into a [`Document`].
///
/// `base_url` becomes the document's base URI when it parses as an
/// absolute URL; otherwise it is ignored.
///
/// ```rust
/// use article_reader::parser::parse;
///
/// let doc = parse("<div><p>Text<div>More</div>", Some("https://example.com/a/"));
/// assert_eq!(doc.text_content(doc.root()), "TextMore");
/// assert_eq!(doc.base_url().map(|u| u.as_str()), Some("https://example.com/a/"));
/// ```
#[must_use]
pub fn parse(text: &str, base_url: Option<&str>) -> Document {
    let mut doc = Document::new();
    doc.set_base_url(base_url.and_then(parse_base_url));

    let tokens = tokenizer::tokenize(text);
    let token_count = tokens.len();
    let mut builder = TreeBuilder::new(doc);
    for token in tokens {
        builder.feed(token);
    }
    let doc = builder.finish();

    tracing::debug!(tokens = token_count, nodes = doc.len(), "parsed document");
    doc
}

/// Detect the encoding of `bytes`, decode strictly, then [`parse`].
///
/// # Errors
///
/// Returns [`Error::ParseError`](crate::Error::ParseError) when the bytes
/// are malformed in the detected encoding.
pub fn parse_bytes(bytes: &[u8], base_url: Option<&str>) -> Result<Document> {
    let (text, encoding) = encoding::decode(bytes)?;
    let mut doc = parse(&text, base_url);
    doc.set_encoding(encoding);
    Ok(doc)
}

fn parse_base_url(value: &str) -> Option<Url> {
    match Url::parse(value.trim()) {
        Ok(url) if !url.cannot_be_a_base() => Some(url),
        Ok(_) | Err(_) => {
            tracing::warn!(base_url = value, "ignoring unusable base URL");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::tests::assert_well_formed;
    use crate::Error;

    #[test]
    fn test_parse_records_base_url() {
        let doc = parse("<p>x</p>", Some("https://example.com/news/"));
        assert_eq!(
            doc.base_url().map(Url::as_str),
            Some("https://example.com/news/")
        );
    }

    #[test]
    fn test_parse_ignores_invalid_base_url() {
        assert!(parse("<p>x</p>", Some("not a url")).base_url().is_none());
        assert!(parse("<p>x</p>", Some("mailto:a@b.c")).base_url().is_none());
    }

    #[test]
    fn test_parse_empty_input() {
        let doc = parse("", None);
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_parse_bytes_records_encoding() {
        let doc = parse_bytes(b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>", None)
            .expect("windows-1252 decodes");
        assert_eq!(doc.encoding().name(), "windows-1252");
        assert!(doc.text_content(doc.root()).contains("Café"));
        assert_well_formed(&doc);
    }

    #[test]
    fn test_parse_bytes_rejects_undecodable_input() {
        assert!(matches!(
            parse_bytes(b"<p>\xC3\x28</p>", None),
            Err(Error::ParseError(_))
        ));
    }
}
