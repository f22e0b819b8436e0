//! Boilerplate pruning.
//!
//! - [`strip_unlikely`] runs before scoring and detaches page furniture by
//!   class/id.
//! - [`clean_region`] runs on the selected region and removes negative-keyword
//!   nodes, short link-dense blocks and blocks left empty.
//! - [`remove_headline`] drops the leading heading for `no_headline` output.

use crate::dom::{Document, NodeId};
use crate::link_density;
use crate::options::ScoringConfig;
use crate::tags;

use super::candidates::{is_negative, matches_any};

/// Elements never stripped as unlikely candidates.
const NEVER_UNLIKELY: [&str; 4] = ["html", "body", "article", "main"];

/// Block elements kept even when empty, since removing them would break
/// the surrounding structure.
const KEEP_WHEN_EMPTY: [&str; 3] = ["td", "th", "hr"];

/// What a cleanup pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupStats {
    /// Nodes matching a negative keyword and no positive keyword.
    pub negative: usize,
    /// Short blocks above the link-density cutoff.
    pub link_heavy: usize,
    /// Blocks with neither text nor media.
    pub empty: usize,
}

/// Detach elements whose class/id matches an unlikely keyword and no maybe
/// keyword. Returns the number of subtrees removed.
pub fn strip_unlikely(doc: &mut Document, config: &ScoringConfig) -> usize {
    let mut removed = Vec::new();
    let mut stack = vec![doc.root()];
    while let Some(id) = stack.pop() {
        for child in doc.element_children(id) {
            if is_unlikely(doc, child, config) {
                removed.push(child);
            } else {
                stack.push(child);
            }
        }
    }
    for &id in &removed {
        doc.detach(id);
    }
    tracing::debug!(removed = removed.len(), "stripped unlikely candidates");
    removed.len()
}

fn is_unlikely(doc: &Document, id: NodeId, config: &ScoringConfig) -> bool {
    if doc.tag_name(id).is_none_or(|tag| NEVER_UNLIKELY.contains(&tag)) {
        return false;
    }
    let class_and_id = doc.class_and_id(id);
    !class_and_id.is_empty()
        && matches_any(&class_and_id, &config.unlikely_keywords)
        && !matches_any(&class_and_id, &config.maybe_keywords)
}

/// Clean the descendants of every region member. Members themselves are
/// never removed.
pub fn clean_region(doc: &mut Document, members: &[NodeId], config: &ScoringConfig) -> CleanupStats {
    let mut stats = CleanupStats::default();
    for &member in members {
        remove_boilerplate(doc, member, config, &mut stats);
        stats.empty += remove_empty_blocks(doc, member);
    }
    tracing::debug!(
        negative = stats.negative,
        link_heavy = stats.link_heavy,
        empty = stats.empty,
        "cleaned content region"
    );
    stats
}

/// Pre-order pass removing negative-keyword nodes and link-heavy blocks.
/// A removed node's subtree is not visited.
fn remove_boilerplate(doc: &mut Document, member: NodeId, config: &ScoringConfig, stats: &mut CleanupStats) {
    let mut stack: Vec<NodeId> = doc.element_children(member).collect();
    while let Some(id) = stack.pop() {
        if is_negative(&doc.class_and_id(id), config) {
            doc.detach(id);
            stats.negative += 1;
            continue;
        }
        let is_block = doc.tag_name(id).is_some_and(tags::is_block);
        if is_block && link_density::is_link_heavy(doc, id, config) {
            doc.detach(id);
            stats.link_heavy += 1;
            continue;
        }
        stack.extend(doc.element_children(id));
    }
}

/// Post-order pass removing blocks with no text and no media. Returns the
/// number removed.
fn remove_empty_blocks(doc: &mut Document, member: NodeId) -> usize {
    let order: Vec<NodeId> = doc.descendants(member).collect();
    let mut removed = 0;
    for &id in order.iter().rev() {
        let Some(tag) = doc.tag_name(id) else {
            continue;
        };
        if !tags::is_block(tag) || KEEP_WHEN_EMPTY.contains(&tag) {
            continue;
        }
        if !has_content(doc, id) {
            doc.detach(id);
            removed += 1;
        }
    }
    removed
}

fn has_content(doc: &Document, id: NodeId) -> bool {
    doc.descendants(id).any(|node| match doc.text(node) {
        Some(text) => !text.trim().is_empty(),
        None => doc.tag_name(node).is_some_and(tags::is_media),
    })
}

/// Remove the first `h1` at or directly inside a region member, falling
/// back to `h2`. Returns whether a heading was removed.
pub fn remove_headline(doc: &mut Document, members: &[NodeId]) -> bool {
    for level in ["h1", "h2"] {
        let found = members.iter().find_map(|&member| {
            if doc.is_tag(member, level) {
                return Some(member);
            }
            doc.element_children(member).find(|&c| doc.is_tag(c, level))
        });
        if let Some(heading) = found {
            tracing::debug!(level, "removed headline");
            doc.detach(heading);
            return true;
        }
    }
    false
}
