//! Tag catalogs shared by the parser, normalizer and extractor.
//!
//! Provides both arrays (for iteration) and `HashSets` (for O(1) lookup).

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Elements that never take children.
pub static VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose content is tokenized as raw text up to the matching end tag.
pub static RAW_TEXT_TAGS: [&str; 5] = ["script", "style", "textarea", "title", "xmp"];

/// Elements that introduce a paragraph-like content boundary.
pub static BLOCK_TAGS: [&str; 38] = [
    "address", "article", "aside", "blockquote", "body", "center", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hgroup", "hr", "html", "li", "main", "nav", "ol", "p", "pre",
    "section", "table", "td", "th", "ul",
];

/// Phrasing elements that a block start closes when still open.
pub static INLINE_TAGS: [&str; 24] = [
    "a", "abbr", "b", "bdi", "bdo", "big", "cite", "code", "del", "dfn", "em", "font", "i",
    "ins", "kbd", "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup",
];

/// Heading elements, outermost level first.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements removed outright by the normalizer, with their subtrees.
pub static NON_CONTENT_TAGS: [&str; 7] =
    ["script", "style", "noscript", "iframe", "object", "embed", "template"];

/// Elements whose text keeps its whitespace verbatim.
pub static PREFORMATTED_TAGS: [&str; 3] = ["pre", "textarea", "listing"];

/// Elements that are content even without text.
pub static MEDIA_TAGS: [&str; 6] = ["img", "picture", "video", "audio", "svg", "canvas"];

/// Attributes holding a URI reference.
pub static URI_ATTRIBUTES: [&str; 2] = ["href", "src"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `VOID_TAGS` as a `HashSet`
pub static VOID_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VOID_TAGS.into_iter().collect());

/// `RAW_TEXT_TAGS` as a `HashSet`
pub static RAW_TEXT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RAW_TEXT_TAGS.into_iter().collect());

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// `INLINE_TAGS` as a `HashSet`
pub static INLINE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INLINE_TAGS.into_iter().collect());

/// `NON_CONTENT_TAGS` as a `HashSet`
pub static NON_CONTENT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NON_CONTENT_TAGS.into_iter().collect());

/// `MEDIA_TAGS` as a `HashSet`
pub static MEDIA_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| MEDIA_TAGS.into_iter().collect());

// === Helper Functions ===

#[inline]
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_TAG_SET.contains(tag)
}

#[inline]
#[must_use]
pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_TAG_SET.contains(tag)
}

#[inline]
#[must_use]
pub fn is_block(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}

#[inline]
#[must_use]
pub fn is_inline(tag: &str) -> bool {
    INLINE_TAG_SET.contains(tag)
}

#[inline]
#[must_use]
pub fn is_heading(tag: &str) -> bool {
    HEADING_TAGS.contains(&tag)
}

#[inline]
#[must_use]
pub fn is_non_content(tag: &str) -> bool {
    NON_CONTENT_TAG_SET.contains(tag)
}

#[inline]
#[must_use]
pub fn is_preformatted(tag: &str) -> bool {
    PREFORMATTED_TAGS.contains(&tag)
}

#[inline]
#[must_use]
pub fn is_media(tag: &str) -> bool {
    MEDIA_TAG_SET.contains(tag)
}
