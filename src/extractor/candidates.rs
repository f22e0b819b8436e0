//! Candidate scoring.
//!
//! Every element whose tag has a weight in [`ScoringConfig::tag_weights`] is
//! scored as
//!
//! ```text
//! own = max(0, base_weight + text_score * (1 - link_density) + keyword_bonus)
//! ```
//!
//! `text_score` only counts the candidate's own text: direct text plus
//! inline descendants, not text inside a nested candidate. `link_density`
//! covers the whole subtree. Each own score is then credited to the nearest
//! candidate ancestors: `parent_fraction` to the parent and
//! `grandparent_fraction` to the grandparent, so a container of good
//! paragraphs outscores any one of them.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};
use crate::link_density;
use crate::options::ScoringConfig;

/// A scored node with its separable weight contributions.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub node: NodeId,
    /// Per-tag base weight.
    pub base_weight: f64,
    /// Saturating score from own text length and comma count.
    pub text_score: f64,
    /// Subtree link density in `[0, 1]`.
    pub link_density: f64,
    /// Positive, negative or zero class/id adjustment.
    pub keyword_bonus: f64,
    /// Own score, never negative.
    pub own: f64,
    /// Score received from candidate descendants.
    pub propagated: f64,
}

impl Candidate {
    /// Own plus propagated score.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.own + self.propagated
    }

    /// Amount the link density took off the text score.
    #[must_use]
    pub fn link_penalty(&self) -> f64 {
        self.text_score * self.link_density
    }
}

/// All candidates of a document in pre-order.
#[derive(Debug, Clone, Default)]
pub struct Scores {
    candidates: Vec<Candidate>,
    index: HashMap<NodeId, usize>,
}

impl Scores {
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Candidate> {
        self.index.get(&id).map(|&i| &self.candidates[i])
    }

    /// Total score of `id`, `0.0` when it is not a candidate.
    #[must_use]
    pub fn total(&self, id: NodeId) -> f64 {
        self.get(id).map_or(0.0, Candidate::total)
    }

    /// Highest total. The earliest candidate in document order wins ties.
    #[must_use]
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates
            .iter()
            .fold(None, |best: Option<&Candidate>, c| match best {
                Some(b) if b.total() >= c.total() => Some(b),
                _ => Some(c),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}

/// Score every candidate under `root`.
#[must_use]
pub fn score_document(doc: &Document, root: NodeId, config: &ScoringConfig) -> Scores {
    let mut scores = Scores::default();

    for id in std::iter::once(root).chain(doc.descendants(root)) {
        let Some(tag) = doc.tag_name(id) else {
            continue;
        };
        let Some(base_weight) = config.tag_weight(tag) else {
            continue;
        };
        let text_score = text_score(&own_text(doc, id, config), config);
        let link_density = link_density::link_density(doc, id);
        let keyword_bonus = keyword_bonus(&doc.class_and_id(id), config);
        let own = (base_weight + text_score * (1.0 - link_density) + keyword_bonus).max(0.0);

        scores.index.insert(id, scores.candidates.len());
        scores.candidates.push(Candidate {
            node: id,
            base_weight,
            text_score,
            link_density,
            keyword_bonus,
            own,
            propagated: 0.0,
        });
    }

    for i in 0..scores.candidates.len() {
        let own = scores.candidates[i].own;
        let node = scores.candidates[i].node;
        let mut ancestors = doc
            .ancestors(node)
            .take_while(|&a| a != doc.root())
            .filter(|&a| doc.tag_name(a).is_some_and(|t| config.is_candidate_tag(t)));
        for fraction in [config.parent_fraction, config.grandparent_fraction] {
            let Some(ancestor) = ancestors.next() else {
                break;
            };
            if let Some(&j) = scores.index.get(&ancestor) {
                scores.candidates[j].propagated += own * fraction;
            }
        }
    }

    tracing::debug!(candidates = scores.len(), "scored candidates");
    scores
}

/// Text of `id` excluding text inside nested candidates.
fn own_text(doc: &Document, id: NodeId, config: &ScoringConfig) -> String {
    let mut out = String::new();
    let mut stack: Vec<NodeId> = doc.children(id).iter().rev().copied().collect();
    while let Some(node) = stack.pop() {
        if let Some(text) = doc.text(node) {
            out.push_str(text);
            continue;
        }
        if doc.tag_name(node).is_some_and(|t| config.is_candidate_tag(t)) {
            continue;
        }
        stack.extend(doc.children(node).iter().rev().copied());
    }
    out
}

/// `min(1 + commas + len / chars_per_point, cap)`, or zero for short text.
#[allow(clippy::cast_precision_loss)]
fn text_score(text: &str, config: &ScoringConfig) -> f64 {
    let text = text.trim();
    let len = text.chars().count();
    if len < config.min_text_len {
        return 0.0;
    }
    let commas = text.chars().filter(|&c| c == ',' || c == '，').count();
    let length_points = len.checked_div(config.chars_per_point).unwrap_or(0);
    ((1 + commas + length_points) as f64).min(config.text_score_cap)
}

fn keyword_bonus(class_and_id: &str, config: &ScoringConfig) -> f64 {
    if class_and_id.is_empty() {
        return 0.0;
    }
    let mut bonus = 0.0;
    if matches_any(class_and_id, &config.positive_keywords) {
        bonus += config.keyword_bonus;
    }
    if matches_any(class_and_id, &config.negative_keywords) {
        bonus -= config.keyword_bonus;
    }
    bonus
}

/// Whether a class/id string marks boilerplate: a negative keyword matches
/// and no positive keyword rescues it.
pub(crate) fn is_negative(class_and_id: &str, config: &ScoringConfig) -> bool {
    matches_any(class_and_id, &config.negative_keywords)
        && !matches_any(class_and_id, &config.positive_keywords)
}

/// Whether `haystack` contains any of `keywords` as a substring.
pub(crate) fn matches_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| !k.is_empty() && haystack.contains(k.as_str()))
}
