//! Implicit tag-closing table.
//!
//! Every recovery the tree builder performs on a start tag is listed in
//! [`TRANSITIONS`] and applied in table order. [`elements_to_close`] is a
//! pure function over tag names so the recovery behaviour can be tested
//! without building a tree.

use crate::tags::{self, HEADING_TAGS, INLINE_TAGS};

/// Which incoming start tags a transition applies to.
#[derive(Debug, Clone, Copy)]
pub enum TagMatch {
    /// Any block-level tag.
    Block,
    /// One of the listed tags.
    Tags(&'static [&'static str]),
}

impl TagMatch {
    #[must_use]
    pub fn matches(self, tag: &str) -> bool {
        match self {
            Self::Block => tags::is_block(tag),
            Self::Tags(list) => list.contains(&tag),
        }
    }
}

/// What happens to the stack of open elements.
#[derive(Debug, Clone, Copy)]
pub enum Recovery {
    /// Pop every element at the top of the stack that is in `closes`.
    CloseTopRun { closes: &'static [&'static str] },
    /// Pop down to and including the nearest open element in `closes`,
    /// unless an element in `boundaries` is met first.
    CloseNearest {
        closes: &'static [&'static str],
        boundaries: &'static [&'static str],
    },
}

/// One row of the closing table.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub on_start: TagMatch,
    pub recovery: Recovery,
}

/// Elements that stop a paragraph from being closed from outside.
const BUTTON_SCOPE: &[&str] = &["button", "caption", "html", "object", "table", "td", "th"];

/// Implicit closing rules, applied in order.
pub static TRANSITIONS: &[Transition] = &[
    // A block start closes inline elements left open above it.
    Transition {
        on_start: TagMatch::Block,
        recovery: Recovery::CloseTopRun { closes: &INLINE_TAGS },
    },
    // A block start closes an open paragraph.
    Transition {
        on_start: TagMatch::Block,
        recovery: Recovery::CloseNearest {
            closes: &["p"],
            boundaries: BUTTON_SCOPE,
        },
    },
    Transition {
        on_start: TagMatch::Tags(&HEADING_TAGS),
        recovery: Recovery::CloseTopRun {
            closes: &HEADING_TAGS,
        },
    },
    Transition {
        on_start: TagMatch::Tags(&["li"]),
        recovery: Recovery::CloseNearest {
            closes: &["li"],
            boundaries: &["ul", "ol", "menu", "table", "td", "th"],
        },
    },
    Transition {
        on_start: TagMatch::Tags(&["dt", "dd"]),
        recovery: Recovery::CloseNearest {
            closes: &["dt", "dd"],
            boundaries: &["dl", "table", "td", "th"],
        },
    },
    Transition {
        on_start: TagMatch::Tags(&["thead", "tbody", "tfoot"]),
        recovery: Recovery::CloseNearest {
            closes: &["thead", "tbody", "tfoot"],
            boundaries: &["table"],
        },
    },
    Transition {
        on_start: TagMatch::Tags(&["tr"]),
        recovery: Recovery::CloseNearest {
            closes: &["tr"],
            boundaries: &["table", "thead", "tbody", "tfoot"],
        },
    },
    Transition {
        on_start: TagMatch::Tags(&["td", "th"]),
        recovery: Recovery::CloseNearest {
            closes: &["td", "th"],
            boundaries: &["tr", "table"],
        },
    },
    Transition {
        on_start: TagMatch::Tags(&["option"]),
        recovery: Recovery::CloseNearest {
            closes: &["option"],
            boundaries: &["select", "datalist", "optgroup"],
        },
    },
    Transition {
        on_start: TagMatch::Tags(&["optgroup"]),
        recovery: Recovery::CloseNearest {
            closes: &["option", "optgroup"],
            boundaries: &["select"],
        },
    },
    // Anchors do not nest.
    Transition {
        on_start: TagMatch::Tags(&["a"]),
        recovery: Recovery::CloseNearest {
            closes: &["a"],
            boundaries: &["button", "table", "td", "th"],
        },
    },
];

/// How many elements to pop from the top of `open` before inserting
/// `incoming`. `open` lists the open element names, outermost first.
#[must_use]
pub fn elements_to_close(open: &[&str], incoming: &str) -> usize {
    let mut remaining = open.len();
    for transition in TRANSITIONS.iter().filter(|t| t.on_start.matches(incoming)) {
        match transition.recovery {
            Recovery::CloseTopRun { closes } => {
                while remaining > 0 && closes.contains(&open[remaining - 1]) {
                    remaining -= 1;
                }
            }
            Recovery::CloseNearest { closes, boundaries } => {
                for i in (0..remaining).rev() {
                    if closes.contains(&open[i]) {
                        remaining = i;
                        break;
                    }
                    if boundaries.contains(&open[i]) {
                        break;
                    }
                }
            }
        }
    }
    open.len() - remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p_closes_open_p() {
        assert_eq!(elements_to_close(&["body", "p"], "p"), 1);
    }

    #[test]
    fn test_li_closes_open_li_through_paragraph() {
        assert_eq!(elements_to_close(&["ul", "li", "p"], "li"), 2);
    }

    #[test]
    fn test_li_does_not_close_outer_list_item() {
        assert_eq!(elements_to_close(&["ul", "li", "ul"], "li"), 0);
    }

    #[test]
    fn test_block_start_closes_inline_run_then_paragraph() {
        assert_eq!(elements_to_close(&["div", "p", "b", "i"], "div"), 3);
    }

    #[test]
    fn test_inline_start_closes_nothing() {
        assert_eq!(elements_to_close(&["div", "p", "b"], "span"), 0);
    }

    #[test]
    fn test_table_cell_is_a_paragraph_boundary() {
        assert_eq!(elements_to_close(&["p", "table", "tr", "td"], "div"), 0);
    }

    #[test]
    fn test_new_row_closes_open_cell_and_row() {
        assert_eq!(elements_to_close(&["table", "tbody", "tr", "td"], "tr"), 2);
    }

    #[test]
    fn test_new_cell_closes_open_cell() {
        assert_eq!(elements_to_close(&["table", "tr", "td", "p"], "td"), 2);
    }

    #[test]
    fn test_heading_closes_open_heading() {
        assert_eq!(elements_to_close(&["body", "h1"], "h2"), 1);
    }

    #[test]
    fn test_anchors_do_not_nest() {
        assert_eq!(elements_to_close(&["p", "a", "em"], "a"), 2);
    }

    #[test]
    fn test_every_transition_names_lowercase_tags() {
        for transition in TRANSITIONS {
            let lists: Vec<&[&str]> = match transition.recovery {
                Recovery::CloseTopRun { closes } => vec![closes],
                Recovery::CloseNearest { closes, boundaries } => vec![closes, boundaries],
            };
            for tag in lists.into_iter().flatten() {
                assert_eq!(*tag, tag.to_ascii_lowercase());
            }
        }
    }
}
