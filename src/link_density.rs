//! Link density testing.
//!
//! Link density is the share of a node's text that sits inside anchors.
//! Navigation menus, share bars and related-link lists score close to 1.

use crate::dom::{Document, NodeId};
use crate::options::ScoringConfig;

/// Text measurements over a subtree, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Characters of text in the subtree.
    pub text_len: usize,
    /// Characters of text inside `<a>` elements.
    pub link_len: usize,
    /// Number of `<a>` elements.
    pub links: usize,
}

impl TextStats {
    /// Anchor text over total text, `0.0` for a node without text.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn link_density(&self) -> f64 {
        if self.text_len == 0 {
            return 0.0;
        }
        self.link_len as f64 / self.text_len as f64
    }
}

/// Collect [`TextStats`] for the subtree rooted at `id`.
#[must_use]
pub fn text_stats(doc: &Document, id: NodeId) -> TextStats {
    let mut stats = TextStats::default();
    let mut stack = vec![(id, doc.is_tag(id, "a"))];
    while let Some((node, in_link)) = stack.pop() {
        if let Some(text) = doc.text(node) {
            let len = text.chars().count();
            stats.text_len += len;
            if in_link {
                stats.link_len += len;
            }
            continue;
        }
        for &child in doc.children(node) {
            let is_link = doc.is_tag(child, "a");
            if is_link {
                stats.links += 1;
            }
            stack.push((child, in_link || is_link));
        }
    }
    if doc.is_tag(id, "a") {
        stats.links += 1;
    }
    stats
}

/// Link density of the subtree rooted at `id`.
#[must_use]
pub fn link_density(doc: &Document, id: NodeId) -> f64 {
    text_stats(doc, id).link_density()
}

/// Whether `id` is a short, link-dense block that cleanup should remove.
#[must_use]
pub fn is_link_heavy(doc: &Document, id: NodeId, config: &ScoringConfig) -> bool {
    let stats = text_stats(doc, id);
    stats.links > 0
        && stats.link_density() > config.link_density_cutoff
        && stats.text_len < config.cleanup_min_text_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn first(doc: &Document, tag: &str) -> NodeId {
        doc.find_tag(doc.root(), tag).expect("tag present")
    }

    #[test]
    fn test_text_stats_counts_link_text() {
        let doc = parse(r#"<div>plain <a href="/">link</a> text <a>two</a></div>"#, None);
        let stats = text_stats(&doc, first(&doc, "div"));
        assert_eq!(
            stats,
            TextStats {
                text_len: 19,
                link_len: 7,
                links: 2
            }
        );
    }

    #[test]
    fn test_link_density_of_anchor_itself_is_one() {
        let doc = parse("<a>all link <b>text</b></a>", None);
        assert!((link_density(&doc, first(&doc, "a")) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_link_density_without_text_is_zero() {
        let doc = parse(r#"<div><a href="/"><img src="x"></a></div>"#, None);
        assert_eq!(link_density(&doc, first(&doc, "div")), 0.0);
    }

    #[test]
    fn test_navigation_list_is_link_heavy() {
        let doc = parse(
            "<ul><li><a>Home</a></li><li><a>World</a></li><li><a>Sport</a></li></ul>",
            None,
        );
        assert!(is_link_heavy(&doc, first(&doc, "ul"), &ScoringConfig::default()));
    }

    #[test]
    fn test_prose_with_one_link_is_not_link_heavy() {
        let doc = parse(
            "<p>The committee published its findings on Tuesday, citing <a>the report</a>.</p>",
            None,
        );
        assert!(!is_link_heavy(&doc, first(&doc, "p"), &ScoringConfig::default()));
    }

    #[test]
    fn test_long_link_dense_block_is_kept() {
        let long = "a long linked headline that keeps going ".repeat(6);
        let doc = parse(&format!("<div><a>{long}</a></div>"), None);
        assert!(!is_link_heavy(&doc, first(&doc, "div"), &ScoringConfig::default()));
    }
}
