//! Extraction pipeline.
//!
//! parse -> normalize -> strip unlikely -> score -> select region -> title
//! -> cleanup -> headline removal -> render
//!
//! The cancellation signal is polled between phases. When unlikely-stripping
//! leaves no candidate above the floor, the pipeline reruns once on the
//! unstripped tree. The title is always read from the unstripped tree, so
//! headings inside page chrome still count as title references.

use crate::cancel::CancelSignal;
use crate::dom::Document;
use crate::error::{Error, Result};
use crate::extractor::{candidates, content, pruning, title};
use crate::html_processing;
use crate::options::Options;
use crate::parser;
use crate::render;
use crate::result::Article;

/// Fail with [`Error::Cancelled`] when `signal` has fired.
fn checkpoint(signal: &dyn CancelSignal, phase: &'static str) -> Result<()> {
    if signal.is_cancelled() {
        tracing::debug!(phase, "extraction cancelled");
        return Err(Error::Cancelled);
    }
    Ok(())
}

/// Extract an article from decoded text.
pub(crate) fn extract(html: &str, options: &Options, signal: &dyn CancelSignal) -> Result<Article> {
    checkpoint(signal, "parse")?;
    let document = parser::parse(html, options.base_url.as_deref());
    extract_document(document, options, signal)
}

/// Extract an article from bytes in any supported encoding.
pub(crate) fn extract_bytes(bytes: &[u8], options: &Options, signal: &dyn CancelSignal) -> Result<Article> {
    checkpoint(signal, "parse")?;
    let document = parser::parse_bytes(bytes, options.base_url.as_deref())?;
    extract_document(document, options, signal)
}

/// Run every phase after parsing.
pub(crate) fn extract_document(
    mut document: Document,
    options: &Options,
    signal: &dyn CancelSignal,
) -> Result<Article> {
    checkpoint(signal, "normalize")?;
    html_processing::normalize(&mut document);

    if !options.strip_unlikely {
        return extract_region(document, None, options, signal);
    }

    let mut stripped = document.clone();
    pruning::strip_unlikely(&mut stripped, &options.scoring);
    // Detaching keeps arena indices, so region members are valid in `document`.
    match extract_region(stripped, Some(&document), options, signal) {
        Err(Error::ExtractionError { best, .. }) => {
            tracing::warn!(best, "no content after stripping unlikely candidates, retrying without");
            extract_region(document, None, options, signal)
        }
        other => other,
    }
}

/// Score, select and render `document`. `title_source` overrides the tree the
/// title is read from.
fn extract_region(
    mut document: Document,
    title_source: Option<&Document>,
    options: &Options,
    signal: &dyn CancelSignal,
) -> Result<Article> {
    let config = &options.scoring;

    checkpoint(signal, "score")?;
    let scores = candidates::score_document(&document, document.root(), config);

    checkpoint(signal, "extract")?;
    let region = content::select_region(&document, &scores, config)?;
    let title = title::extract_title(
        title_source.unwrap_or(&document),
        &region.members,
        &options.title_hint_attribute,
    );
    pruning::clean_region(&mut document, &region.members, config);
    let headline_removed = options.no_headline && pruning::remove_headline(&mut document, &region.members);

    checkpoint(signal, "render")?;
    let (content, truncated) = if options.body_only {
        let truncated = region.parent(&document) != Some(document.root());
        (render::to_html(&document, &region.members), truncated)
    } else {
        (render::to_html_chain(&document, &region.members), false)
    };

    tracing::debug!(
        title_len = title.len(),
        content_len = content.len(),
        truncated,
        headline_removed,
        "extracted article"
    );

    Ok(Article {
        title,
        content,
        truncated,
        headline_removed,
    })
}
