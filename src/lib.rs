//! # article-reader
//!
//! Readable-article extraction from tag-soup HTML.
//!
//! The engine parses arbitrary, possibly malformed markup into an arena tree,
//! normalizes it, scores block-level candidates, and returns the main article
//! region with a title. It performs no I/O: callers fetch the document and
//! decide what to do with failures.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_reader::read;
//!
//! let paragraph = "<p>The storm reached the coast before dawn, flooding the harbour road and closing the ferry terminal for the day.</p>";
//! let html = format!(
//!     r#"<html><head><title>Storm hits coast - Acme Times</title></head>
//!        <body><nav><a href="/">Home</a> <a href="/world">World</a></nav>
//!        <article><h1>Storm hits coast</h1>{}</article></body></html>"#,
//!     paragraph.repeat(3)
//! );
//!
//! let article = read(&html)?;
//! assert_eq!(article.title, "Storm hits coast");
//! assert!(article.content.starts_with("<article>"));
//! assert!(!article.content.contains("World"));
//! # Ok::<(), article_reader::Error>(())
//! ```
//!
//! ## Phases
//!
//! - **Parsing**: a forgiving tokenizer and a tree builder driven by an
//!   explicit implicit-closing table ([`parser`])
//! - **Normalization**: drop non-content elements, decode entities, resolve
//!   links, collapse whitespace ([`html_processing`])
//! - **Scoring and extraction**: candidate scores, sibling merging, cleanup and
//!   title selection ([`extractor`])
//! - **Rendering**: HTML fragment or plain text ([`render`])
//!
//! Every heuristic constant lives in [`ScoringConfig`], which can be loaded
//! from partial JSON.

mod cancel;
mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Arena document tree.
pub mod dom;

/// HTML tag classification tables.
pub mod tags;

/// Tag-soup tokenizer and tree builder.
pub mod parser;

/// Tree normalization before scoring.
pub mod html_processing;

/// Candidate scoring, region selection, cleanup and title extraction.
pub mod extractor;

/// Link density measurement for boilerplate detection.
pub mod link_density;

/// Character encoding detection and strict decoding.
pub mod encoding;

/// URL resolution against a document base.
pub mod url_utils;

/// HTML and plain-text serialization.
pub mod render;

/// Word-overlap scoring against labeled text.
pub mod evaluation;

// Public API - re-exports
pub use cancel::{CancelSignal, Deadline, Never};
pub use error::{Error, Result};
pub use options::{Options, ScoringConfig};
pub use result::Article;

/// Extracts the article from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use article_reader::{read, Error};
///
/// let nav = r#"<nav><a href="/">Home</a><a href="/a">About</a><a href="/c">Contact</a></nav>"#;
/// assert!(matches!(read(nav), Err(Error::ExtractionError { .. })));
/// ```
pub fn read(html: &str) -> Result<Article> {
    read_with_options(html, &Options::default())
}

/// Extracts the article from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use article_reader::{read_with_options, Options};
///
/// let paragraph = "<p>Crews worked through the night, clearing debris from the rail line, and trains resumed at noon.</p>";
/// let html = format!("<div><section><h1>Line reopens</h1>{}</section></div>", paragraph.repeat(3));
/// let options = Options {
///     no_headline: true,
///     ..Options::default()
/// };
/// let article = read_with_options(&html, &options)?;
/// assert!(article.headline_removed);
/// assert!(!article.content.contains("<h1>"));
/// # Ok::<(), article_reader::Error>(())
/// ```
pub fn read_with_options(html: &str, options: &Options) -> Result<Article> {
    extract::extract(html, options, &Never)
}

/// Extracts the article from raw bytes, detecting the character encoding
/// from a byte-order mark or a `<meta>` declaration (default UTF-8).
///
/// Decoding is strict: bytes that are malformed in the detected encoding
/// fail with [`Error::ParseError`].
///
/// # Example
///
/// ```rust
/// use article_reader::{read_bytes, Error};
///
/// let html = b"<meta charset=\"utf-8\"><p>caf\xE9</p>";
/// assert!(matches!(read_bytes(html), Err(Error::ParseError(_))));
/// ```
pub fn read_bytes(bytes: &[u8]) -> Result<Article> {
    read_bytes_with_options(bytes, &Options::default())
}

/// Combines [`read_bytes`] and [`read_with_options`].
pub fn read_bytes_with_options(bytes: &[u8], options: &Options) -> Result<Article> {
    extract::extract_bytes(bytes, options, &Never)
}

/// Extracts the article, polling `signal` between phases.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use article_reader::{read_with_cancel, Deadline, Error, Options};
///
/// let expired = Deadline::after(Duration::ZERO);
/// let result = read_with_cancel("<p>text</p>", &Options::default(), &expired);
/// assert!(matches!(result, Err(Error::Cancelled)));
/// ```
pub fn read_with_cancel(html: &str, options: &Options, signal: &dyn CancelSignal) -> Result<Article> {
    extract::extract(html, options, signal)
}

/// Runs [`read_with_cancel`] on the tokio blocking pool.
///
/// The call is one atomic unit of work; `signal` is still polled between
/// phases, so a `CancellationToken` can abandon it early.
#[cfg(feature = "tokio")]
pub async fn read_async<S>(html: String, options: Options, signal: S) -> Result<Article>
where
    S: CancelSignal + 'static,
{
    match tokio::task::spawn_blocking(move || extract::extract(&html, &options, &signal)).await {
        Ok(result) => result,
        Err(e) if e.is_cancelled() => Err(Error::Cancelled),
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}
