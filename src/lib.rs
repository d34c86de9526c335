//! # article-extract
//!
//! Main-content extraction for web articles.
//!
//! Given an article URL, this library fetches the page, locates the article
//! body among navigation, sidebars and other boilerplate, and renders it as
//! Markdown or plain text. "Next page" links are followed up to a page
//! limit, and blocks repeated across pages are kept once. The title,
//! publish date and featured image are read from the first page.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_extract::{extract_html, OutputFormat};
//!
//! let para = format!("<p>{}</p>", "Lorem ipsum dolor sit amet. ".repeat(8));
//! let html = format!(
//!     "<html><body><h1>My Article</h1><article>{para}{para}{para}</article></body></html>"
//! );
//!
//! let result = extract_html(&html, "https://example.com/story", OutputFormat::Markdown)?;
//! assert_eq!(result.title, "My Article");
//! assert_eq!(result.featured_image.caption, "My Article");
//! # Ok::<(), article_extract::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Body location**: scores `article`/`section`/`div` candidates by text
//!   length, paragraph count and link count
//! - **Metadata**: title, publish date (meta tags, then JSON-LD), featured
//!   image with caption
//! - **Boilerplate removal**: structural stripping plus a configurable
//!   phrase table
//! - **Pagination**: bounded crawl with cross-page block deduplication
//!
//! ## Collaborators
//!
//! Network access and HTML parsing sit behind the [`fetch::Fetcher`] and
//! [`dom::MarkupParser`] traits. [`ArticleExtractor::with_parts`] accepts
//! any implementation, closures included.
//!
//! Logging goes through `tracing`; no subscriber is installed.

mod error;
mod options;
mod patterns;
mod result;

/// DOM parsing adapter (html5ever via `dom_query`).
pub mod dom;

/// Owned element tree consumed by the extractor.
pub mod etree;

/// Page retrieval.
pub mod fetch;

/// Article body location, rendering and the pagination crawl.
pub mod extractor;

/// Metadata extraction (title, publish date, featured image).
pub mod metadata;

/// URL resolution helpers.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

use url::Url;

use crate::dom::{HtmlParser, MarkupParser};
use crate::extractor::{find_article_container, PaginationCrawler};
use crate::fetch::{FetchSettings, Fetcher, HttpFetcher};

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{NoiseAction, NoiseRule, Options, OutputFormat, DEFAULT_USER_AGENT};
pub use patterns::{default_noise_rules, default_pagination_patterns};
pub use result::{ExtractionResult, FeaturedImage};

/// Article extractor owning its options and collaborators.
///
/// # Example
///
/// ```rust
/// use article_extract::{ArticleExtractor, Error, Options};
/// use article_extract::dom::HtmlParser;
/// use article_extract::fetch::FetchSettings;
/// use url::Url;
///
/// let offline = |url: &Url, _: &FetchSettings| -> article_extract::Result<String> {
///     Err(Error::FetchFailure { url: url.to_string(), reason: "offline".into() })
/// };
/// let extractor = ArticleExtractor::with_parts(Options::default(), offline, HtmlParser);
///
/// // A seed that cannot be fetched is an error, not an empty result.
/// assert!(extractor.extract("https://example.com/story").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ArticleExtractor<F = HttpFetcher, P = HtmlParser> {
    options: Options,
    fetcher: F,
    parser: P,
}

impl ArticleExtractor {
    /// Extractor using the network and the HTML parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] when the HTTP client cannot be built.
    pub fn new(options: Options) -> Result<Self> {
        Ok(Self::with_parts(options, HttpFetcher::new()?, HtmlParser))
    }
}

impl<F, P> ArticleExtractor<F, P>
where
    F: Fetcher,
    P: MarkupParser,
{
    #[must_use]
    pub fn with_parts(options: Options, fetcher: F, parser: P) -> Self {
        Self {
            options,
            fetcher,
            parser,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Extract the article at `url`, following its pagination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for a malformed URL and
    /// [`Error::FetchFailure`] when the seed page cannot be fetched. Every
    /// later problem is reported in [`ExtractionResult::warnings`].
    pub fn extract(&self, url: &str) -> Result<ExtractionResult> {
        let seed = url_utils::parse_seed(url)?;
        tracing::info!(url = %seed, "extracting article");

        let settings = FetchSettings::from_options(&self.options);
        let markup = self.fetcher.fetch(&seed, &settings).inspect_err(|err| {
            tracing::warn!(url = %seed, error = %err, "seed fetch failed");
        })?;

        Ok(self.extract_markup(&seed, &markup))
    }

    /// Extract from already retrieved seed markup.
    ///
    /// Further pages, if any, are fetched through the fetcher. A seed that
    /// cannot be parsed yields an empty result with a warning.
    #[must_use]
    pub fn extract_markup(&self, url: &Url, markup: &str) -> ExtractionResult {
        let format = self.options.format;

        let doc = match self.parser.parse(markup, url) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "seed page could not be parsed");
                let mut result = ExtractionResult::empty(url.as_str(), format);
                result.pages_visited = 1;
                result.warnings.push(format!("skipped {url}: {err}"));
                return result;
            }
        };

        let body = find_article_container(&doc, &self.options);
        let metadata = metadata::extract_metadata(&doc, body);
        let report = PaginationCrawler::new(&self.fetcher, &self.parser, &self.options).crawl(&doc, format);

        let mut warnings = metadata.warnings;
        warnings.extend(report.warnings);

        ExtractionResult {
            content: report.content,
            featured_image: metadata.featured_image,
            published_at: metadata.published_at,
            title: metadata.title,
            url: url.to_string(),
            format_used: format,
            pages_visited: report.pages_visited,
            warnings,
        }
    }
}

/// Extract the article at `url`, visiting at most `max_pages` pages.
///
/// # Errors
///
/// Returns an error when the URL is invalid, the HTTP client cannot be
/// built, or the seed page cannot be fetched.
pub fn extract_article(url: &str, max_pages: usize, format: OutputFormat) -> Result<ExtractionResult> {
    let options = Options {
        max_pages,
        format,
        ..Options::default()
    };
    ArticleExtractor::new(options)?.extract(url)
}

fn offline_fetch(url: &Url, _settings: &FetchSettings) -> Result<String> {
    Err(Error::fetch(url, "offline extraction"))
}

/// Extract a single already retrieved page without network access.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `url` is not an absolute URL.
pub fn extract_html(html: &str, url: &str, format: OutputFormat) -> Result<ExtractionResult> {
    let seed = url_utils::parse_seed(url)?;
    let options = Options {
        max_pages: 1,
        format,
        ..Options::default()
    };
    let extractor = ArticleExtractor::with_parts(options, offline_fetch, HtmlParser);
    Ok(extractor.extract_markup(&seed, html))
}
