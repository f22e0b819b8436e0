//! HTML normalization.
//!
//! Runs once on the freshly parsed tree, before scoring:
//! 1. [`strip_non_content`] detaches scripts, styles, embedded objects and comments
//! 2. [`decode_entities`] decodes character references in text and attribute values
//! 3. [`resolve_urls`] rewrites relative `href`/`src` against the base URI
//! 4. [`collapse_whitespace`] folds whitespace runs outside preformatted elements
//!
//! Paragraph structure stays in the tree; no line-break markers are inserted.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::dom::{Document, NodeData, NodeId};
use crate::parser::entities;
use crate::patterns;
use crate::tags::{self, URI_ATTRIBUTES};
use crate::url_utils;

/// Elements besides block-level ones at which whitespace-only text is dropped.
const STRUCTURAL_TAGS: [&str; 14] = [
    "head", "title", "meta", "link", "base", "tr", "tbody", "thead", "tfoot", "caption",
    "colgroup", "col", "select", "option",
];

/// Run every normalization step on `doc`.
pub fn normalize(doc: &mut Document) {
    let removed = strip_non_content(doc);
    decode_entities(doc);
    let resolved = resolve_urls(doc);
    collapse_whitespace(doc);
    tracing::debug!(removed, resolved, nodes = doc.len(), "normalized document");
}

/// Detach comments and non-content elements with their subtrees.
///
/// Returns the number of nodes detached.
pub fn strip_non_content(doc: &mut Document) -> usize {
    let mut removed = 0;
    let mut stack = vec![doc.root()];
    while let Some(id) = stack.pop() {
        let dropped: HashSet<NodeId> = doc
            .children(id)
            .iter()
            .copied()
            .filter(|&child| match doc.data(child) {
                NodeData::Comment(_) => true,
                NodeData::Element(el) => tags::is_non_content(&el.name),
                _ => false,
            })
            .collect();
        if !dropped.is_empty() {
            removed += dropped.len();
            doc.retain_children(id, |child| !dropped.contains(&child));
        }
        stack.extend(doc.element_children(id));
    }
    removed
}

/// Decode character references in every attached text node and attribute value.
pub fn decode_entities(doc: &mut Document) {
    let ids: Vec<NodeId> = doc.descendants(doc.root()).collect();
    for id in ids {
        match doc.data_mut(id) {
            NodeData::Text(text) => decode_in_place(text),
            NodeData::Element(el) => el.attrs.values_mut().for_each(decode_in_place),
            _ => {}
        }
    }
}

fn decode_in_place(value: &mut String) {
    let decoded = match entities::decode(value) {
        Cow::Owned(decoded) => Some(decoded),
        Cow::Borrowed(_) => None,
    };
    if let Some(decoded) = decoded {
        *value = decoded;
    }
}

/// Resolve relative URI attributes against the document's base URI.
///
/// Absolute, fragment-only and opaque-scheme values are left unchanged.
/// Returns the number of attributes rewritten.
pub fn resolve_urls(doc: &mut Document) -> usize {
    let Some(base) = doc.base_url().cloned() else {
        return 0;
    };
    let ids: Vec<NodeId> = doc.descendants(doc.root()).collect();
    let mut resolved = 0;
    for id in ids {
        for attr in URI_ATTRIBUTES {
            let Some(target) = doc.attr(id, attr).and_then(|v| url_utils::resolve(v, &base)) else {
                continue;
            };
            doc.set_attr(id, attr, target);
            resolved += 1;
        }
    }
    resolved
}

/// Collapse whitespace runs to one space outside preformatted elements.
///
/// Whitespace-only text next to a block boundary is detached.
pub fn collapse_whitespace(doc: &mut Document) {
    let mut stack = vec![(doc.root(), false)];
    let mut texts = Vec::new();
    while let Some((id, in_pre)) = stack.pop() {
        for &child in doc.children(id) {
            match doc.data(child) {
                NodeData::Text(_) if !in_pre => texts.push(child),
                NodeData::Element(el) => {
                    stack.push((child, in_pre || tags::is_preformatted(&el.name)));
                }
                _ => {}
            }
        }
    }

    for id in texts {
        let (empty, blank) = match doc.data_mut(id) {
            NodeData::Text(text) => {
                let collapsed = match patterns::collapse_whitespace(text) {
                    Cow::Owned(collapsed) => Some(collapsed),
                    Cow::Borrowed(_) => None,
                };
                if let Some(collapsed) = collapsed {
                    *text = collapsed;
                }
                (text.is_empty(), text == " ")
            }
            _ => continue,
        };
        if empty || (blank && at_block_boundary(doc, id)) {
            doc.detach(id);
        }
    }
}

/// Whether the whitespace-only text node `id` touches a block boundary.
fn at_block_boundary(doc: &Document, id: NodeId) -> bool {
    let Some(parent) = doc.parent(id) else {
        return false;
    };
    let siblings = doc.children(parent);
    let Some(pos) = siblings.iter().position(|&s| s == id) else {
        return false;
    };
    let prev = pos.checked_sub(1).map(|i| siblings[i]);
    let next = siblings.get(pos + 1).copied();
    is_boundary(doc, prev, parent) || is_boundary(doc, next, parent)
}

fn is_boundary(doc: &Document, neighbour: Option<NodeId>, parent: NodeId) -> bool {
    match neighbour {
        Some(node) => doc.tag_name(node).is_some_and(breaks_line),
        None => !doc.tag_name(parent).is_some_and(tags::is_inline),
    }
}

fn breaks_line(tag: &str) -> bool {
    tags::is_block(tag) || STRUCTURAL_TAGS.contains(&tag)
}
