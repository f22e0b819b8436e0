//! Character encoding detection and strict decoding.
//!
//! The charset is taken from a byte order mark, then from a
//! `<meta charset>` or `<meta http-equiv="Content-Type">` declaration near
//! the start of the document. Decoding never substitutes replacement
//! characters: bytes that are malformed in the detected encoding are a
//! [`Error::ParseError`].

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// How far into the document charset declarations are searched.
const PRESCAN_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#).expect("valid regex")
});

/// Detect the character encoding of `html`.
///
/// Looks, in order, for:
/// 1. a UTF-8 or UTF-16 byte order mark
/// 2. `<meta charset="...">`
/// 3. `<meta http-equiv="Content-Type" content="...; charset=...">`
///
/// and defaults to UTF-8. Declarations are only searched in the first
/// 1024 bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }
    declared_encoding(html).unwrap_or(UTF_8)
}

/// Encoding named by a meta declaration in the document head.
fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = &html[..html.len().min(PRESCAN_LEN)];
    let head_str = String::from_utf8_lossy(head);

    let label = extract_charset(&head_str).or_else(|| extract_content_type_charset(&head_str))?;
    let encoding = Encoding::for_label(label.as_bytes())?;
    // A document that could be read far enough to find an ASCII meta tag
    // cannot really be UTF-16.
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Some(UTF_8);
    }
    Some(encoding)
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode `html` to a `String` using the detected encoding.
///
/// A byte order mark is stripped. Malformed input fails rather than being
/// patched with U+FFFD.
///
/// # Errors
///
/// Returns [`Error::ParseError`] when the bytes are not valid in the
/// detected encoding.
///
/// # Examples
///
/// ```
/// use article_reader::encoding::decode;
///
/// let (text, encoding) = decode(b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>")?;
/// assert!(text.contains("Café"));
/// assert_eq!(encoding.name(), "windows-1252");
///
/// assert!(decode(b"<p>\xFF\xFE broken</p>").is_err());
/// # Ok::<(), article_reader::Error>(())
/// ```
pub fn decode(html: &[u8]) -> Result<(String, &'static Encoding)> {
    let (encoding, body) = match Encoding::for_bom(html) {
        Some((encoding, bom_len)) => (encoding, &html[bom_len..]),
        None => (declared_encoding(html).unwrap_or(UTF_8), html),
    };

    let decoded = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| Error::ParseError(format!("malformed {} input", encoding.name())))?;

    tracing::debug!(encoding = encoding.name(), bytes = html.len(), "decoded document");
    Ok((decoded.into_owned(), encoding))
}
