//! Error types for article-reader.
//!
//! Malformed markup is always recovered, so the only failures are undecodable
//! input, a page with no content-like region, and cancellation.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input bytes could not be decoded as text.
    #[error("Document could not be decoded: {0}")]
    ParseError(String),

    /// No scored candidate reached the minimum score floor.
    #[error("No content candidate reached the score floor (best {best:.2}, floor {floor:.2})")]
    ExtractionError {
        /// Highest total score seen, `0.0` when nothing was scored.
        best: f64,
        /// Configured floor.
        floor: f64,
    },

    /// The cancellation signal fired between phases.
    #[error("Extraction cancelled")]
    Cancelled,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
