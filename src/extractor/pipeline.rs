//! Pagination crawler.
//!
//! Drives the per-page pipeline over a FIFO queue seeded with the article
//! URL:
//!
//! 1. fetch the page (skipped for the seed, whose document is handed in)
//! 2. parse it
//! 3. locate the article body and prune a working copy of it
//! 4. render every allow-listed descendant of the copy, in document order
//! 5. keep each non-empty block whose hash has not been seen before
//! 6. queue pagination links found anywhere in the unpruned page
//!
//! The crawl stops when the queue drains, the page limit is reached, or the
//! optional time budget runs out. Fetch and parse failures skip the page and
//! are reported as warnings; they never abort the crawl.

use std::collections::HashSet;
use std::time::Instant;

use regex::Regex;
use url::Url;

use crate::dom::MarkupParser;
use crate::error::{Error, Result};
use crate::etree::Document;
use crate::fetch::{FetchSettings, Fetcher};
use crate::options::{Options, OutputFormat};
use crate::patterns::normalize_text;
use crate::url_utils::resolve_link;

use super::handlers::NodeRenderer;
use super::locator::find_article_container;
use super::pruning::prune_unwanted_nodes;
use super::state::CrawlState;

/// Outcome of one crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Deduplicated blocks joined by a blank line.
    pub content: String,
    /// Distinct URLs dequeued, skipped pages included.
    pub pages_visited: usize,
    /// Skipped pages, pages without a located body, budget exhaustion.
    pub warnings: Vec<String>,
}

/// Bounded crawler over a paginated article.
#[derive(Debug)]
pub struct PaginationCrawler<'a, F, P> {
    fetcher: &'a F,
    parser: &'a P,
    options: &'a Options,
    renderer: NodeRenderer,
}

impl<'a, F, P> PaginationCrawler<'a, F, P>
where
    F: Fetcher,
    P: MarkupParser,
{
    #[must_use]
    pub fn new(fetcher: &'a F, parser: &'a P, options: &'a Options) -> Self {
        Self {
            fetcher,
            parser,
            options,
            renderer: NodeRenderer::from_options(options),
        }
    }

    /// Crawl from an already parsed seed page.
    ///
    /// The seed counts toward the page limit and is never fetched again.
    pub fn crawl(&self, seed: &Document, format: OutputFormat) -> CrawlReport {
        let started = Instant::now();
        let limit = self.options.page_limit();
        let settings = FetchSettings::from_options(self.options);
        let mut seed_url = seed.url().clone();
        seed_url.set_fragment(None);
        let mut state = CrawlState::new(seed_url.clone());
        let mut warnings = Vec::new();

        tracing::info!(url = %seed.url(), max_pages = limit, format = %format, "starting crawl");

        while state.visited_count() < limit {
            if let Some(budget) = self.options.time_budget {
                if started.elapsed() >= budget && state.visited_count() > 0 {
                    let msg = format!("time budget of {budget:?} exhausted with {} pages queued", state.pending());
                    tracing::warn!(pending = state.pending(), "{msg}");
                    warnings.push(msg);
                    break;
                }
            }

            let Some(url) = state.next_url() else {
                break;
            };
            state.mark_visited(url.clone());

            if url == seed_url {
                self.process_page(seed, format, &mut state, &mut warnings);
                continue;
            }

            match self.load(&url, &settings) {
                Ok(doc) => self.process_page(&doc, format, &mut state, &mut warnings),
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "skipping page");
                    warnings.push(format!("skipped {url}: {err}"));
                }
            }
        }

        let pages_visited = state.visited_count();
        let blocks = state.blocks().len();
        tracing::info!(url = %seed.url(), pages_visited, blocks, "crawl finished");

        CrawlReport {
            content: state.into_content(),
            pages_visited,
            warnings,
        }
    }

    fn load(&self, url: &Url, settings: &FetchSettings) -> Result<Document> {
        let markup = self.fetcher.fetch(url, settings)?;
        self.parser.parse(&markup, url)
    }

    /// Fold one page's blocks and pagination links into `state`.
    fn process_page(
        &self,
        doc: &Document,
        format: OutputFormat,
        state: &mut CrawlState,
        warnings: &mut Vec<String>,
    ) {
        let blocks = render_blocks(doc, &self.renderer, self.options, format);
        match &blocks {
            Some(blocks) => {
                let kept = blocks.iter().filter(|block| state.push_block(block)).count();
                tracing::debug!(url = %doc.url(), rendered = blocks.len(), kept, "extracted page");
            }
            None => {
                tracing::debug!(url = %doc.url(), "no article body located");
                warnings.push(format!("{}: {}", doc.url(), Error::NoContentLocated));
            }
        }

        for link in detect_pagination_links(doc, &self.options.pagination_patterns) {
            if state.enqueue(link.clone()) {
                tracing::debug!(from = %doc.url(), to = %link, "queued pagination link");
            }
        }
    }
}

/// Render the allow-listed blocks of one page, trimmed and non-empty.
///
/// Returns `None` when no article body is located. Blocks are not
/// deduplicated here.
#[must_use]
pub fn render_blocks(
    doc: &Document,
    renderer: &NodeRenderer,
    options: &Options,
    format: OutputFormat,
) -> Option<Vec<String>> {
    let body = find_article_container(doc, options)?;
    let (working, removed) = prune_unwanted_nodes(body, options);
    tracing::trace!(url = %doc.url(), removed, "pruned article body");

    let blocks = working
        .descendants()
        .filter(|el| options.is_allowed_tag(el.tag()))
        .map(|el| renderer.render(el, format).trim().to_string())
        .filter(|block| !block.is_empty())
        .collect();
    Some(blocks)
}

/// Pagination links of a page, in document order without duplicates.
///
/// Every `<a>` of the full page is considered. Its whitespace-normalized
/// text must match one of `patterns`, and its `href` must resolve to an
/// `http(s)` URL against the page URL.
#[must_use]
pub fn detect_pagination_links(doc: &Document, patterns: &[Regex]) -> Vec<Url> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in doc.elements_by_tag("a") {
        let text = normalize_text(&anchor.text_content());
        if text.is_empty() || !patterns.iter().any(|p| p.is_match(&text)) {
            continue;
        }
        let Some(url) = anchor.attr("href").and_then(|href| resolve_link(doc.url(), href)) else {
            continue;
        };
        if seen.insert(url.clone()) {
            links.push(url);
        }
    }

    links
}
