//! Tree builder: turns the token stream into a [`Document`].
//!
//! Keeps a stack of open elements. Start tags first apply the implicit
//! closing table in [`rules`](super::rules), then insert a child under the
//! top of the stack. End tags pop down to the nearest matching open element
//! or are ignored. Everything still open at end of input is closed.

use crate::dom::{Document, Element, NodeData, NodeId};
use crate::tags;

use super::rules;
use super::tokenizer::Token;

/// Incremental tree builder.
pub struct TreeBuilder {
    doc: Document,
    open: Vec<NodeId>,
    html: Option<NodeId>,
    head: Option<NodeId>,
    body: Option<NodeId>,
}

impl TreeBuilder {
    /// Builder that inserts into `doc`'s root.
    #[must_use]
    pub fn new(doc: Document) -> Self {
        let root = doc.root();
        Self {
            doc,
            open: vec![root],
            html: None,
            head: None,
            body: None,
        }
    }

    fn current(&self) -> NodeId {
        // The root is never popped.
        self.open[self.open.len() - 1]
    }

    /// Process one token.
    pub fn feed(&mut self, token: Token) {
        match token {
            Token::Doctype(value) => {
                if self.open.len() == 1 {
                    let node = self.doc.create(NodeData::Doctype(value));
                    self.doc.append(self.doc.root(), node);
                }
            }
            Token::Comment(value) => {
                let node = self.doc.create(NodeData::Comment(value));
                self.doc.append(self.current(), node);
            }
            Token::Text(value) => self.insert_text(value),
            Token::StartTag { name, attrs, .. } => self.start_tag(name, attrs),
            Token::EndTag { name } => self.end_tag(&name),
        }
    }

    /// Close everything still open and return the document.
    #[must_use]
    pub fn finish(mut self) -> Document {
        self.open.truncate(1);
        self.doc
    }

    fn insert_text(&mut self, value: String) {
        let parent = self.current();
        if let Some(&last) = self.doc.children(parent).last() {
            if let NodeData::Text(existing) = self.doc.data_mut(last) {
                existing.push_str(&value);
                return;
            }
        }
        let node = self.doc.create(NodeData::Text(value));
        self.doc.append(parent, node);
    }

    fn start_tag(&mut self, name: String, attrs: Vec<(String, String)>) {
        // A repeated html/body start merges attributes; a second head is dropped.
        let existing = match name.as_str() {
            "html" => self.html,
            "body" => self.body,
            "head" if self.head.is_some() => return,
            _ => None,
        };
        if let Some(id) = existing {
            if let Some(el) = self.doc.element_mut(id) {
                for (key, value) in attrs {
                    el.attrs.entry(key).or_insert(value);
                }
            }
            return;
        }

        let to_close = {
            let names: Vec<&str> = self.open[1..]
                .iter()
                .map(|&id| self.doc.tag_name(id).unwrap_or_default())
                .collect();
            rules::elements_to_close(&names, &name)
        };
        self.open.truncate(self.open.len() - to_close);

        let mut element = Element::new(&name);
        for (key, value) in attrs {
            element.attrs.entry(key).or_insert(value);
        }
        let node = self.doc.create(NodeData::Element(element));
        self.doc.append(self.current(), node);

        match name.as_str() {
            "html" => self.html = Some(node),
            "head" => self.head = Some(node),
            "body" => self.body = Some(node),
            _ => {}
        }
        if !tags::is_void(&name) {
            self.open.push(node);
        }
    }

    fn end_tag(&mut self, name: &str) {
        // html/body stay open so trailing content lands inside the body.
        if tags::is_void(name) || name == "html" || name == "body" {
            return;
        }
        let position = self
            .open
            .iter()
            .skip(1)
            .rposition(|&id| self.doc.is_tag(id, name));
        if let Some(pos) = position {
            self.open.truncate(pos + 1);
        }
    }
}
