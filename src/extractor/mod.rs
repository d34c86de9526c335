//! Article body extraction.
//!
//! # Module Structure
//!
//! - `tags`: Tag lists and the Markdown transform table
//! - `locator`: Scores container elements and picks the article body
//! - `pruning`: Removes structural boilerplate from a copy of the body
//! - `handlers`: Renders one element as Markdown or plain text
//! - `state`: Crawl queue, visited set and deduplicated blocks
//! - `pipeline`: Bounded crawl over a paginated article
//!
//! # Usage
//!
//! ```rust
//! use article_extract::dom;
//! use article_extract::extractor::{find_article_container, render_blocks, NodeRenderer};
//! use article_extract::{Options, OutputFormat};
//! use url::Url;
//!
//! let para = format!("<p>{}</p>", "word ".repeat(60));
//! let html = format!("<article>{para}{para}<p>Closing words.</p></article>");
//! let url = Url::parse("https://example.com/a").unwrap();
//! let doc = dom::parse(&html, &url).unwrap();
//!
//! let options = Options::default();
//! assert!(find_article_container(&doc, &options).is_some());
//!
//! let renderer = NodeRenderer::from_options(&options);
//! let blocks = render_blocks(&doc, &renderer, &options, OutputFormat::Markdown).unwrap();
//! assert_eq!(blocks.len(), 3);
//! ```

pub mod handlers;
pub mod locator;
pub mod pipeline;
pub mod pruning;
pub mod state;
pub mod tags;

pub use handlers::NodeRenderer;
pub use locator::{find_article_container, CandidateScore};
pub use pipeline::{detect_pagination_links, render_blocks, CrawlReport, PaginationCrawler};
pub use pruning::prune_unwanted_nodes;
pub use state::CrawlState;
