//! Title extraction.
//!
//! Sources in priority order:
//! 1. an element carrying the title hint attribute
//! 2. the first `h1` inside the content region
//! 3. the `<title>` element, with a trailing site name split off
//!
//! Never fails: without any source the title is empty.

use crate::dom::{Document, NodeId};
use crate::patterns::{self, TITLE_SEPARATORS};

/// Longest prefix of each string compared when measuring overlap.
const MAX_COMPARE_CHARS: usize = 512;

/// Extract the article title.
#[must_use]
pub fn extract_title(doc: &Document, members: &[NodeId], hint_attribute: &str) -> String {
    if let Some(title) = hinted_title(doc, hint_attribute) {
        tracing::debug!(source = "hint", "extracted title");
        return title;
    }
    if let Some(title) = region_heading(doc, members) {
        tracing::debug!(source = "heading", "extracted title");
        return title;
    }
    if let Some(title) = document_title(doc) {
        tracing::debug!(source = "title", "extracted title");
        return title;
    }
    String::new()
}

fn clean(text: &str) -> Option<String> {
    let text = patterns::collapse_whitespace(text);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Value of the hint attribute on the first element carrying it, or that
/// element's text when the value is blank.
fn hinted_title(doc: &Document, attribute: &str) -> Option<String> {
    if attribute.is_empty() {
        return None;
    }
    let root = doc.root();
    let node = doc.descendants(root).find(|&n| doc.attr(n, attribute).is_some())?;
    doc.attr(node, attribute)
        .and_then(clean)
        .or_else(|| clean(&doc.text_content(node)))
}

fn region_heading(doc: &Document, members: &[NodeId]) -> Option<String> {
    members.iter().find_map(|&member| {
        let heading = if doc.is_tag(member, "h1") {
            Some(member)
        } else {
            doc.find_tag(member, "h1")
        }?;
        clean(&doc.text_content(heading))
    })
}

/// `<title>` text, cleaned against the document's main heading.
fn document_title(doc: &Document) -> Option<String> {
    let root = doc.root();
    let title = clean(&doc.text_content(doc.find_tag(root, "title")?))?;
    let reference = ["h1", "h2"]
        .into_iter()
        .filter_map(|level| doc.find_tag(root, level))
        .find_map(|heading| clean(&doc.text_content(heading)));
    Some(match reference {
        Some(heading) => strip_site_name(&title, &heading),
        None => title,
    })
}

/// Split `title` on the first separator it contains and drop the segment
/// sharing the least text with `heading`. Ties drop the later segment.
///
/// ```rust
/// use article_reader::extractor::title::strip_site_name;
///
/// assert_eq!(strip_site_name("Breaking News - Acme Times", "Breaking News"), "Breaking News");
/// assert_eq!(strip_site_name("Acme Times | Storm hits coast", "Storm hits the coast"), "Storm hits coast");
/// assert_eq!(strip_site_name("No separator here", "Anything"), "No separator here");
/// ```
#[must_use]
pub fn strip_site_name(title: &str, heading: &str) -> String {
    let Some(separator) = TITLE_SEPARATORS.into_iter().find(|sep| title.contains(sep)) else {
        return title.to_string();
    };
    let segments: Vec<&str> = title.split(separator).collect();
    let heading = heading.to_lowercase();

    let mut weakest = 0;
    let mut weakest_overlap = usize::MAX;
    for (i, segment) in segments.iter().enumerate() {
        let overlap = longest_common_substring(&segment.to_lowercase(), &heading);
        if overlap <= weakest_overlap {
            weakest = i;
            weakest_overlap = overlap;
        }
    }

    let kept: Vec<&str> = segments
        .iter()
        .enumerate()
        .filter(|&(i, segment)| i != weakest && !segment.trim().is_empty())
        .map(|(_, segment)| segment.trim())
        .collect();
    if kept.is_empty() {
        return title.to_string();
    }
    kept.join(separator)
}

/// Length in characters of the longest common substring of `a` and `b`.
fn longest_common_substring(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().take(MAX_COMPARE_CHARS).collect();
    let b: Vec<char> = b.chars().take(MAX_COMPARE_CHARS).collect();
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    let mut best = 0;
    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb { previous[j] + 1 } else { 0 };
            best = best.max(current[j + 1]);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    best
}
