//! Serialization of document subtrees.
//!
//! [`to_html`] writes subtrees as an HTML fragment, [`to_html_chain`] keeps
//! the single ancestor path from the document root down to a set of
//! siblings, and [`to_text`] writes plain text with blank lines between
//! blocks. All three walk the tree iteratively.

use std::collections::HashSet;

use crate::dom::{Document, NodeData, NodeId};
use crate::patterns;
use crate::tags;

enum Visit {
    Enter(NodeId),
    Exit(NodeId),
}

/// Serialize each of `roots`, in order, as HTML.
#[must_use]
pub fn to_html(doc: &Document, roots: &[NodeId]) -> String {
    let mut out = String::new();
    for &root in roots {
        write_html(doc, root, None, &mut out);
    }
    out
}

/// Serialize the ancestor chain from the document root down to `members`,
/// dropping every branch that leads elsewhere. `members` are written in full.
#[must_use]
pub fn to_html_chain(doc: &Document, members: &[NodeId]) -> String {
    let mut keep: HashSet<NodeId> = members.iter().copied().collect();
    for &member in members {
        keep.extend(doc.ancestors(member));
    }
    let members: HashSet<NodeId> = members.iter().copied().collect();
    let mut out = String::new();
    write_html(doc, doc.root(), Some((&keep, &members)), &mut out);
    out
}

/// Write `root`. With `chain`, children of non-member nodes are filtered to
/// the `keep` set.
fn write_html(
    doc: &Document,
    root: NodeId,
    chain: Option<(&HashSet<NodeId>, &HashSet<NodeId>)>,
    out: &mut String,
) {
    let mut stack = vec![Visit::Enter(root)];
    while let Some(visit) = stack.pop() {
        let id = match visit {
            Visit::Exit(id) => {
                if let Some(name) = doc.tag_name(id) {
                    out.push_str("</");
                    out.push_str(name);
                    out.push('>');
                }
                continue;
            }
            Visit::Enter(id) => id,
        };

        match doc.data(id) {
            NodeData::Document => {}
            NodeData::Doctype(value) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(value.trim());
                out.push('>');
                continue;
            }
            NodeData::Comment(value) => {
                out.push_str("<!--");
                out.push_str(value);
                out.push_str("-->");
                continue;
            }
            NodeData::Text(value) => {
                escape_text(value, out);
                continue;
            }
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.name);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');
                if tags::is_void(&el.name) {
                    continue;
                }
                stack.push(Visit::Exit(id));
            }
        }

        let children = doc.children(id);
        match chain {
            Some((keep, members)) if !members.contains(&id) => {
                stack.extend(
                    children
                        .iter()
                        .rev()
                        .filter(|&&c| keep.contains(&c))
                        .map(|&c| Visit::Enter(c)),
                );
            }
            _ => stack.extend(children.iter().rev().map(|&c| Visit::Enter(c))),
        }
    }
}

fn escape_text(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
}

/// Plain text of `roots`: one paragraph per block, separated by a blank
/// line. Whitespace is collapsed except inside preformatted elements.
#[must_use]
pub fn to_text(doc: &Document, roots: &[NodeId]) -> String {
    let mut writer = TextWriter::default();
    for &root in roots {
        let mut stack = vec![Visit::Enter(root)];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(id) => {
                    if let Some(text) = doc.text(id) {
                        writer.current.push_str(text);
                        continue;
                    }
                    if let Some(tag) = doc.tag_name(id) {
                        if tag == "br" {
                            writer.current.push('\n');
                        } else if tags::is_block(tag) || tags::is_preformatted(tag) {
                            writer.flush();
                            if tags::is_preformatted(tag) {
                                writer.pre_depth += 1;
                            }
                        }
                    }
                    stack.push(Visit::Exit(id));
                    stack.extend(doc.children(id).iter().rev().map(|&c| Visit::Enter(c)));
                }
                Visit::Exit(id) => {
                    let Some(tag) = doc.tag_name(id) else {
                        continue;
                    };
                    if tags::is_block(tag) || tags::is_preformatted(tag) {
                        writer.flush();
                        if tags::is_preformatted(tag) {
                            writer.pre_depth = writer.pre_depth.saturating_sub(1);
                        }
                    }
                }
            }
        }
        writer.flush();
    }
    writer.blocks.join("\n\n")
}

#[derive(Default)]
struct TextWriter {
    blocks: Vec<String>,
    current: String,
    pre_depth: usize,
}

impl TextWriter {
    fn flush(&mut self) {
        let block = std::mem::take(&mut self.current);
        let block = if self.pre_depth > 0 {
            block.trim_matches('\n').to_string()
        } else {
            block
                .split('\n')
                .map(|line| patterns::collapse_whitespace(line).trim().to_string())
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        };
        if !block.trim().is_empty() {
            self.blocks.push(block);
        }
    }
}
