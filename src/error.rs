//! Error types for article-extract.
//!
//! This module defines the error types returned by extraction operations.
//! Only a failure to fetch the seed page is surfaced to callers as an `Err`;
//! every other variant is recovered from locally and reported as a warning
//! on the [`ExtractionResult`](crate::ExtractionResult).

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network failure, timeout, non-success status or empty body.
    #[error("failed to fetch {url}: {reason}")]
    FetchFailure {
        /// URL that could not be retrieved.
        url: String,
        /// Transport or status description.
        reason: String,
    },

    /// Markup could not be turned into a document tree.
    #[error("HTML parsing failed: {0}")]
    ParseFailure(String),

    /// No candidate container passed the locator thresholds.
    #[error("No extractable content found")]
    NoContentLocated,

    /// A single metadata field was absent from every source.
    #[error("No {0} found in document")]
    NoMetadataFound(&'static str),

    /// The seed URL is not a valid absolute URL.
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn fetch(url: &url::Url, reason: impl std::fmt::Display) -> Self {
        Self::FetchFailure {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
