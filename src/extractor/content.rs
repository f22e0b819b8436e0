//! Content region selection.
//!
//! The best candidate becomes the primary node. Its element siblings join
//! the region when they score at least `sibling_fraction` of the primary, or
//! when they are short plain-text paragraphs that read like prose. Sibling
//! scores are totals, so a container of good paragraphs qualifies through
//! the share its children pass up.

use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};
use crate::link_density;
use crate::options::ScoringConfig;
use crate::patterns::SENTENCE_END;
use crate::tags;

use super::candidates::{is_negative, Scores};

/// The selected article region.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Highest-scoring candidate.
    pub primary: NodeId,
    /// Total score of the primary candidate.
    pub score: f64,
    /// Region members in document order, the primary included. All members
    /// share the primary's parent.
    pub members: Vec<NodeId>,
}

impl Region {
    /// Common parent of the members, `None` when the primary is detached.
    #[must_use]
    pub fn parent(&self, doc: &Document) -> Option<NodeId> {
        doc.parent(self.primary)
    }
}

/// Pick the primary candidate and merge qualifying siblings.
///
/// Siblings denser in links than `config.link_density_cutoff`, or whose
/// class/id marks boilerplate, never merge.
///
/// # Errors
///
/// Returns [`Error::ExtractionError`] when there is no candidate or the best
/// total is below `config.min_score`.
pub fn select_region(doc: &Document, scores: &Scores, config: &ScoringConfig) -> Result<Region> {
    let Some(best) = scores.best() else {
        return Err(Error::ExtractionError {
            best: 0.0,
            floor: config.min_score,
        });
    };
    let score = best.total();
    if score < config.min_score {
        return Err(Error::ExtractionError {
            best: score,
            floor: config.min_score,
        });
    }

    let primary = best.node;
    let Some(parent) = doc.parent(primary) else {
        return Ok(Region {
            primary,
            score,
            members: vec![primary],
        });
    };

    let threshold = score * config.sibling_fraction;
    let members: Vec<NodeId> = doc
        .element_children(parent)
        .filter(|&sibling| {
            if sibling == primary {
                return true;
            }
            if is_negative(&doc.class_and_id(sibling), config) {
                return false;
            }
            (scores.total(sibling) >= threshold
                && link_density::link_density(doc, sibling) <= config.link_density_cutoff)
                || is_prose_sibling(doc, sibling, config)
        })
        .collect();

    tracing::debug!(
        primary = primary.index(),
        tag = doc.tag_name(primary).unwrap_or_default(),
        score,
        merged = members.len() - 1,
        "selected content region"
    );

    Ok(Region {
        primary,
        score,
        members,
    })
}

/// A low-scoring sibling that is plainly a paragraph of prose: inline-only
/// content, few links, and either long or ending a sentence.
fn is_prose_sibling(doc: &Document, id: NodeId, config: &ScoringConfig) -> bool {
    if !has_inline_content_only(doc, id) {
        return false;
    }
    let stats = link_density::text_stats(doc, id);
    let density = stats.link_density();
    if density >= config.link_density_cutoff {
        return false;
    }
    if stats.text_len >= config.sibling_min_text_len {
        return true;
    }
    density == 0.0 && stats.text_len > 0 && SENTENCE_END.is_match(&doc.text_content(id))
}

fn has_inline_content_only(doc: &Document, id: NodeId) -> bool {
    doc.descendants(id)
        .all(|node| doc.tag_name(node).is_none_or(|tag| !tags::is_block(tag)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::candidates::score_document;
    use crate::html_processing::normalize;
    use crate::parser::parse;

    const PARAGRAPH: &str = "Officials said the bridge, closed since March, would reopen next week after inspections, repairs and a final safety review.";

    fn region(html: &str) -> (Document, Result<Region>) {
        let mut doc = parse(html, None);
        normalize(&mut doc);
        let config = ScoringConfig::default();
        let scores = score_document(&doc, doc.root(), &config);
        let region = select_region(&doc, &scores, &config);
        (doc, region)
    }

    fn ids(doc: &Document, region: &Region) -> Vec<String> {
        region
            .members
            .iter()
            .map(|&m| doc.attr(m, "id").unwrap_or("?").to_string())
            .collect()
    }

    #[test]
    fn test_no_candidates_is_an_extraction_error() {
        let (_, region) = region("<nav><a href='/'>Home</a><a href='/a'>About</a></nav>");
        match region {
            Err(Error::ExtractionError { best, floor }) => {
                assert_eq!(best, 0.0);
                assert_eq!(floor, 2.5);
            }
            other => panic!("expected ExtractionError, got {other:?}"),
        }
    }

    #[test]
    fn test_below_floor_is_an_extraction_error() {
        let (_, region) = region("<div><a href='/'>Home</a> <a href='/a'>About</a></div>");
        assert!(matches!(region, Err(Error::ExtractionError { best, .. }) if best == 2.0));
    }

    #[test]
    fn test_nested_divs_reach_the_floor() {
        let (doc, region) = region("<div id=\"outer\"><p>Text<div>More</div>");
        let region = region.expect("region");
        assert_eq!(ids(&doc, &region), vec!["outer"]);
        assert!((region.score - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_high_scoring_sibling_is_merged() {
        let story = format!("<p>{PARAGRAPH}</p>").repeat(4);
        let (doc, region) = region(&format!(
            r#"<body><div id="a">{story}</div><div id="b">{story}</div><div id="c"><a href="/">x</a></div></body>"#
        ));
        let region = region.expect("region");
        assert_eq!(ids(&doc, &region), vec!["a", "b"]);
        assert_eq!(doc.attr(region.primary, "id"), Some("a"));
    }

    #[test]
    fn test_container_sibling_qualifies_through_propagated_score() {
        let story = format!("<p>{PARAGRAPH}</p>").repeat(4);
        let html = format!(
            r#"<body><div id="a" class="content">{story}</div><div id="b">{story}</div><div id="c"><p>Short note</p></div></body>"#
        );
        let mut doc = parse(&html, None);
        normalize(&mut doc);
        let config = ScoringConfig::default();
        let scores = score_document(&doc, doc.root(), &config);
        let region = select_region(&doc, &scores, &config).expect("region");

        // Primary: own 2 + 10 keyword bonus, plus four paragraphs of 5 at one
        // quarter each.
        assert!((region.score - 17.0).abs() < 1e-9);
        let threshold = region.score * config.sibling_fraction;
        let b = scores
            .iter()
            .find(|c| doc.attr(c.node, "id") == Some("b"))
            .expect("b scored");
        assert!(b.own < threshold);
        assert!(b.total() >= threshold);
        assert_eq!(ids(&doc, &region), vec!["a", "b"]);
    }

    #[test]
    fn test_short_sentence_sibling_is_merged() {
        let story = format!("<p>{PARAGRAPH}</p>").repeat(4);
        let (doc, region) = region(&format!(
            r#"<div id="w"><div id="a">{story}</div><span id="s">It ended there.</span><span id="t">Share this</span></div>"#
        ));
        let region = region.expect("region");
        assert_eq!(ids(&doc, &region), vec!["a", "s"]);
    }

    #[test]
    fn test_link_dense_sibling_is_not_merged() {
        let story = format!("<p>{PARAGRAPH}</p>").repeat(4);
        let links = "<a href='/1'>A fairly long related headline goes here</a> ".repeat(4);
        let (doc, region) = region(&format!(
            r#"<section><div id="a">{story}</div><span id="rel">{links}</span></section>"#
        ));
        let region = region.expect("region");
        assert_eq!(ids(&doc, &region), vec!["a"]);
    }

    #[test]
    fn test_negative_sibling_is_not_merged() {
        let story = format!("<p>{PARAGRAPH}</p>").repeat(4);
        let (doc, region) = region(&format!(
            r#"<section><div id="a">{story}</div><div id="comments">{story}</div></section>"#
        ));
        let region = region.expect("region");
        assert_eq!(ids(&doc, &region), vec!["a"]);
    }

    #[test]
    fn test_text_siblings_are_skipped() {
        let story = format!("<p>{PARAGRAPH}</p>").repeat(4);
        let (doc, region) = region(&format!("<section>loose text<div id=\"a\">{story}</div></section>"));
        let region = region.expect("region");
        assert_eq!(ids(&doc, &region), vec!["a"]);
    }
}
