//! Configuration options for article extraction.
//!
//! The `Options` struct controls crawl bounds, the fetch request, locator
//! thresholds, and the language-specific boilerplate and pagination tables.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractor::tags;
use crate::patterns;

/// Desktop browser user agent sent with every request by default.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Output format of the extracted content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Paragraphs, `##`/`###` headings, `- ` list items, `*`/`**` emphasis.
    #[default]
    Markdown,
    /// Whitespace-normalized text with all markup dropped.
    Text,
}

impl OutputFormat {
    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" | "plain" => Ok(Self::Text),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// What to do with a rendered node whose content matches a [`NoiseRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseAction {
    /// Render the whole node as an empty string.
    Drop,
    /// Delete the matched phrase and keep the remaining text.
    Strip,
}

/// One row of the boilerplate phrase table.
#[derive(Debug, Clone)]
pub struct NoiseRule {
    /// Pattern tested against a node's accumulated content.
    pub pattern: Regex,
    /// Action taken on a match.
    pub action: NoiseAction,
}

impl NoiseRule {
    #[must_use]
    pub fn new(pattern: Regex, action: NoiseAction) -> Self {
        Self { pattern, action }
    }
}

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_extract::{Options, OutputFormat};
///
/// let options = Options {
///     max_pages: 3,
///     format: OutputFormat::Text,
///     ..Options::default()
/// };
/// assert_eq!(options.page_limit(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of distinct URLs visited by one crawl.
    ///
    /// Values below 1 are treated as 1.
    ///
    /// Default: `5`
    pub max_pages: usize,

    /// Output format of `ExtractionResult::content`.
    ///
    /// Default: `OutputFormat::Markdown`
    pub format: OutputFormat,

    /// User agent sent with each request.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Per-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Overall wall-clock budget for the crawl.
    ///
    /// When exceeded, no further pages are dequeued; the page in flight
    /// still completes.
    ///
    /// Default: `None`
    pub time_budget: Option<Duration>,

    /// Tags rendered as content blocks.
    ///
    /// Default: `p h2 h3 h4 ul ol li em i strong b`
    pub allowed_tags: Vec<String>,

    /// Tags considered as article body candidates.
    ///
    /// Default: `article section div`
    pub candidate_tags: Vec<String>,

    /// Tags removed (with their subtree) from the located body before rendering.
    ///
    /// Default: `nav aside footer form button script style`
    pub strip_tags: Vec<String>,

    /// Minimum visible text length (characters) of a body candidate.
    ///
    /// Default: `500`
    pub min_text_length: usize,

    /// Minimum number of `<p>` descendants of a body candidate.
    ///
    /// Default: `3`
    pub min_paragraphs: usize,

    /// Score added per `<p>` descendant.
    ///
    /// Default: `200`
    pub paragraph_weight: i64,

    /// Score subtracted per `<a>` descendant.
    ///
    /// Default: `150`
    pub link_penalty: i64,

    /// Boilerplate phrase table applied by the renderer.
    ///
    /// Default: [`patterns::default_noise_rules`]
    pub noise_rules: Vec<NoiseRule>,

    /// Anchor-text patterns identifying pagination links.
    ///
    /// Default: [`patterns::default_pagination_patterns`]
    pub pagination_patterns: Vec<Regex>,
}

impl Options {
    /// Effective page limit (never below 1).
    #[must_use]
    pub fn page_limit(&self) -> usize {
        self.max_pages.max(1)
    }

    /// Whether `tag` is rendered as a content block.
    #[must_use]
    pub fn is_allowed_tag(&self, tag: &str) -> bool {
        self.allowed_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether `tag` is a body candidate.
    #[must_use]
    pub fn is_candidate_tag(&self, tag: &str) -> bool {
        self.candidate_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether `tag` is stripped from the body before rendering.
    #[must_use]
    pub fn is_strip_tag(&self, tag: &str) -> bool {
        self.strip_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

fn tag_list(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| (*t).to_string()).collect()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_pages: 5,
            format: OutputFormat::Markdown,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            time_budget: None,
            allowed_tags: tag_list(&tags::ALLOWED_TAGS),
            candidate_tags: tag_list(&tags::CANDIDATE_TAGS),
            strip_tags: tag_list(&tags::STRIP_TAGS),
            min_text_length: 500,
            min_paragraphs: 3,
            paragraph_weight: 200,
            link_penalty: 150,
            noise_rules: patterns::default_noise_rules(),
            pagination_patterns: patterns::default_pagination_patterns(),
        }
    }
}
