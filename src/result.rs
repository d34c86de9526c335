//! Result types for extraction output.
//!
//! This module defines the structured output of an article extraction:
//! the rendered content plus the metadata read from the seed page.

use serde::{Deserialize, Serialize};

use crate::options::OutputFormat;

/// Representative image of the article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedImage {
    /// Absolute image URL, or empty when none was found.
    pub url: String,

    /// Figure caption, alt text, or the article title, in that order.
    pub caption: String,
}

/// Result of extracting one (possibly paginated) article.
///
/// A plain record meant for direct JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Deduplicated content blocks joined by a blank line.
    pub content: String,

    /// Featured image and caption.
    pub featured_image: FeaturedImage,

    /// Publish date string exactly as found in the page, or empty.
    pub published_at: String,

    /// Text of the first `<h1>`, or empty.
    pub title: String,

    /// The seed URL.
    pub url: String,

    /// Format `content` was rendered in.
    pub format_used: OutputFormat,

    /// Number of distinct URLs the crawl visited.
    pub pages_visited: usize,

    /// Non-fatal issues encountered during extraction, such as:
    /// - pages skipped after a fetch or parse failure
    /// - pages with no located article body
    /// - metadata fields missing from every source
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ExtractionResult {
    /// Empty result for `url`; used when the seed page yields nothing.
    #[must_use]
    pub fn empty(url: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            content: String::new(),
            featured_image: FeaturedImage::default(),
            published_at: String::new(),
            title: String::new(),
            url: url.into(),
            format_used: format,
            pages_visited: 0,
            warnings: Vec::new(),
        }
    }
}
