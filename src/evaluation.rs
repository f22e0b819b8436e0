//! Word-overlap evaluation against labeled text.
//!
//! Both texts are reduced to bags of lowercase alphanumeric words. A word
//! extracted three times but expected once counts one true positive and two
//! false positives, so repeated boilerplate is penalized.

use std::collections::HashMap;

/// Precision, recall and F1 of one extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Share of extracted words that were expected.
    pub precision: f64,
    /// Share of expected words that were extracted.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
}

impl Evaluation {
    fn new(precision: f64, recall: f64) -> Self {
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self { precision, recall, f1 }
    }

    /// All metrics 1.0.
    #[must_use]
    pub fn perfect() -> Self {
        Self::new(1.0, 1.0)
    }

    /// All metrics 0.0.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Compare extracted text with the expected text.
///
/// ```
/// use article_reader::evaluation::evaluate;
///
/// let score = evaluate("The quick brown fox", "the quick, brown fox jumps");
/// assert_eq!(score.precision, 1.0);
/// assert_eq!(score.recall, 0.8);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn evaluate(extracted: &str, expected: &str) -> Evaluation {
    let extracted = bag_of_words(extracted);
    let expected = bag_of_words(expected);
    let extracted_total: usize = extracted.values().sum();
    let expected_total: usize = expected.values().sum();

    match (extracted_total, expected_total) {
        (0, 0) => return Evaluation::perfect(),
        (0, _) | (_, 0) => return Evaluation::zero(),
        _ => {}
    }

    let true_positives: usize = extracted
        .iter()
        .map(|(word, &count)| count.min(expected.get(word).copied().unwrap_or(0)))
        .sum();

    Evaluation::new(
        true_positives as f64 / extracted_total as f64,
        true_positives as f64 / expected_total as f64,
    )
}

fn bag_of_words(text: &str) -> HashMap<String, usize> {
    let mut bag = HashMap::new();
    for word in text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
        *bag.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    bag
}
