//! Error types for ru-page-lang.
//!
//! This module defines the errors raised inside the analysis pipeline.
//! None of them reach the caller of [`crate::analyze_website`]: the
//! orchestrator folds every variant into a failure-shaped result.

/// Error type for pipeline steps.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL does not parse or does not use http/https.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as given by the caller.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The transport failed (unreachable host, DNS failure, timeout).
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The decoder does not recognize the charset name.
    #[error("Encoding not recognized: '{0}'")]
    UnsupportedCharset(String),

    /// The decoded text could not be turned into a document tree.
    #[error("HTML parsing failed: {0}")]
    Parse(String),
}

/// Result type alias for pipeline steps.
pub type Result<T> = std::result::Result<T, Error>;
