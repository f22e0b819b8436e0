//! Configuration options for article extraction.
//!
//! `Options` shapes the output (body-only, headline removal, link resolution)
//! while `ScoringConfig` carries every heuristic constant used by the scorer
//! and the content extractor, so they can be tuned without touching the
//! tree-walking code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_reader::Options;
///
/// let options = Options {
///     body_only: false,
///     base_url: Some("https://example.com/news/".to_string()),
///     ..Options::default()
/// };
/// assert!(!options.no_headline);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Output only the merged content region, without enclosing page chrome.
    ///
    /// When false, the output keeps the single chain of ancestors from the
    /// document root down to the content region, with every sibling branch
    /// off that chain pruned.
    ///
    /// Default: `true`
    pub body_only: bool,

    /// Remove the leading headline from the content region.
    ///
    /// Useful when the caller renders `Article::title` separately.
    ///
    /// Default: `false`
    pub no_headline: bool,

    /// Address the document was fetched from, used to resolve relative
    /// `href`/`src` attributes. Unparseable values are ignored.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Attribute whose value, when present on any element, is taken as the
    /// article title ahead of every other title source.
    ///
    /// Default: `"data-article-title"`
    pub title_hint_attribute: String,

    /// Detach elements whose class/id looks like page furniture before
    /// scoring. Extraction retries once without stripping when it fails.
    ///
    /// Default: `true`
    pub strip_unlikely: bool,

    /// Heuristic constants for candidate scoring and cleanup.
    pub scoring: ScoringConfig,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            body_only: true,
            no_headline: false,
            base_url: None,
            title_hint_attribute: "data-article-title".to_string(),
            strip_unlikely: true,
            scoring: ScoringConfig::default(),
        }
    }
}

/// Heuristic constants for the candidate scorer and content extractor.
///
/// The defaults are checked against the labeled samples in
/// `tests/corpus_test.rs`.
///
/// Keywords match as plain substrings of the lowercased `class` and `id`
/// values joined by a space, not as whole tokens. `comment` matches
/// `comments` and `comment-list`, and `main` matches `main-content`. The
/// same holds for short keywords, so `nav` also matches `canvas`. Use a
/// longer keyword, such as `navbar`, when that matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Substrings of class/id that mark likely content.
    pub positive_keywords: Vec<String>,

    /// Substrings of class/id that mark boilerplate.
    pub negative_keywords: Vec<String>,

    /// Substrings of class/id that mark page furniture to strip before scoring.
    pub unlikely_keywords: Vec<String>,

    /// Substrings of class/id that rescue an element from unlikely-stripping.
    pub maybe_keywords: Vec<String>,

    /// Base weight per candidate tag. Only tags listed here are scored.
    pub tag_weights: BTreeMap<String, f64>,

    /// Amount added (positive keyword) or subtracted (negative keyword).
    ///
    /// Default: `10.0`
    pub keyword_bonus: f64,

    /// Link density above which a block counts as navigation.
    ///
    /// Default: `0.5`
    pub link_density_cutoff: f64,

    /// Fraction of a node's own score credited to its parent.
    ///
    /// Default: `0.25`
    pub parent_fraction: f64,

    /// Fraction of a node's own score credited to its grandparent.
    ///
    /// Default: `0.125`
    pub grandparent_fraction: f64,

    /// A sibling is merged when its score reaches this fraction of the
    /// primary candidate's score.
    ///
    /// Default: `0.2`
    pub sibling_fraction: f64,

    /// Own text shorter than this (in characters) earns no text score.
    ///
    /// Default: `25`
    pub min_text_len: usize,

    /// Characters of own text per text-score point.
    ///
    /// Default: `100`
    pub chars_per_point: usize,

    /// Saturating cap on the text score of a single node.
    ///
    /// Default: `10.0`
    pub text_score_cap: f64,

    /// Link-dense blocks shorter than this are removed from the region.
    ///
    /// Default: `200`
    pub cleanup_min_text_len: usize,

    /// Plain-text siblings at least this long are merged without punctuation.
    ///
    /// Default: `80`
    pub sibling_min_text_len: usize,

    /// Minimum total score of the primary candidate. A lone `div` needs at
    /// least one scored descendant to reach it.
    ///
    /// Default: `2.5`
    pub min_score: f64,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let tag_weights = [
            ("article", 5.0),
            ("main", 5.0),
            ("div", 2.0),
            ("section", 2.0),
            ("blockquote", 2.0),
            ("pre", 3.0),
            ("td", 1.0),
            ("p", 0.0),
        ]
        .into_iter()
        .map(|(tag, weight)| (tag.to_string(), weight))
        .collect();

        Self {
            positive_keywords: strings(&[
                "article", "body", "content", "entry", "hentry", "main", "page", "post",
                "text", "blog", "story",
            ]),
            negative_keywords: strings(&[
                "comment", "sidebar", "footer", "nav", "advert", "banner", "combx", "contact",
                "masthead", "meta", "promo", "related", "share", "shoutbox", "social",
                "sponsor", "widget", "outbrain", "taboola",
            ]),
            unlikely_keywords: strings(&[
                "combx", "comment", "community", "disqus", "extra", "foot", "header", "menu",
                "remark", "rss", "shoutbox", "sidebar", "sponsor", "ad-break", "agegate",
                "pagination", "pager", "popup", "cookie", "newsletter",
            ]),
            maybe_keywords: strings(&["and", "article", "body", "column", "main", "shadow"]),
            tag_weights,
            keyword_bonus: 10.0,
            link_density_cutoff: 0.5,
            parent_fraction: 0.25,
            grandparent_fraction: 0.125,
            sibling_fraction: 0.2,
            min_text_len: 25,
            chars_per_point: 100,
            text_score_cap: 10.0,
            cleanup_min_text_len: 200,
            sibling_min_text_len: 80,
            min_score: 2.5,
        }
    }
}

impl ScoringConfig {
    /// Load a configuration from JSON. Missing fields keep their defaults.
    ///
    /// ```rust
    /// use article_reader::ScoringConfig;
    ///
    /// let config = ScoringConfig::from_json(r#"{"min_score": 8.0}"#)?;
    /// assert_eq!(config.min_score, 8.0);
    /// assert_eq!(config.parent_fraction, 0.25);
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Base weight for `tag`, or `None` when the tag is not a candidate.
    #[must_use]
    pub fn tag_weight(&self, tag: &str) -> Option<f64> {
        self.tag_weights.get(tag).copied()
    }

    /// Whether `tag` is scored as a candidate block.
    #[must_use]
    pub fn is_candidate_tag(&self, tag: &str) -> bool {
        self.tag_weights.contains_key(tag)
    }
}
