//! Main content extraction.
//!
//! # Module Structure
//!
//! - `candidates`: Candidate scoring and score propagation
//! - `content`: Primary candidate selection and sibling merging
//! - `pruning`: Unlikely-candidate stripping and region cleanup
//! - `title`: Title extraction and site-name removal
//!
//! # Usage
//!
//! ```rust
//! use article_reader::extractor::{candidates, content, pruning};
//! use article_reader::{html_processing, parser, ScoringConfig};
//!
//! let paragraph = "<p>The river rose through the night, and by morning the lower town was under water again.</p>";
//! let html = format!("<nav><a href='/'>Home</a></nav><article>{}</article>", paragraph.repeat(3));
//!
//! let mut doc = parser::parse(&html, None);
//! html_processing::normalize(&mut doc);
//!
//! let config = ScoringConfig::default();
//! let scores = candidates::score_document(&doc, doc.root(), &config);
//! let region = content::select_region(&doc, &scores, &config)?;
//! pruning::clean_region(&mut doc, &region.members, &config);
//! assert_eq!(doc.tag_name(region.primary), Some("article"));
//! # Ok::<(), article_reader::Error>(())
//! ```

pub mod candidates;
pub mod content;
pub mod pruning;
pub mod title;

pub use candidates::{score_document, Candidate, Scores};
pub use content::{select_region, Region};
pub use pruning::CleanupStats;
pub use title::extract_title;
