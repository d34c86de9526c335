//! Crawl state.
//!
//! Everything that changes while pages are visited lives here: the visited
//! set, the FIFO queue of pending URLs, and the deduplicated content blocks.
//! A URL is queued at most once and visited at most once.

use std::collections::{HashSet, VecDeque};

use sha2::{Digest, Sha256};
use url::Url;

/// Mutable state of one crawl.
#[derive(Debug, Default)]
pub struct CrawlState {
    visited: HashSet<Url>,
    queued: HashSet<Url>,
    queue: VecDeque<Url>,
    seen_block_hashes: HashSet<String>,
    blocks: Vec<String>,
}

impl CrawlState {
    /// State with `seed` as the only queued URL.
    #[must_use]
    pub fn new(seed: Url) -> Self {
        let mut state = Self::default();
        state.enqueue(seed);
        state
    }

    /// Queue `url` unless it was already visited or queued.
    ///
    /// Returns `true` when the URL was added.
    pub fn enqueue(&mut self, url: Url) -> bool {
        if self.visited.contains(&url) || self.queued.contains(&url) {
            return false;
        }
        self.queued.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    /// Pop the next queued URL that has not been visited.
    pub fn next_url(&mut self) -> Option<Url> {
        while let Some(url) = self.queue.pop_front() {
            if !self.visited.contains(&url) {
                return Some(url);
            }
        }
        None
    }

    /// Record `url` as visited. Returns `false` if it already was.
    pub fn mark_visited(&mut self, url: Url) -> bool {
        self.visited.insert(url)
    }

    #[must_use]
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    /// Number of distinct URLs visited so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting in the queue.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Append a rendered block unless an identical one was already kept.
    ///
    /// Empty blocks are ignored. Returns `true` when the block was appended.
    pub fn push_block(&mut self, block: &str) -> bool {
        if block.is_empty() {
            return false;
        }
        if !self.seen_block_hashes.insert(block_hash(block)) {
            return false;
        }
        self.blocks.push(block.to_string());
        true
    }

    /// Blocks kept so far, in first-seen order.
    #[must_use]
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Final content: kept blocks joined by a blank line.
    #[must_use]
    pub fn into_content(self) -> String {
        self.blocks.join("\n\n")
    }
}

/// Hex SHA-256 digest identifying a block's exact text.
#[must_use]
pub fn block_hash(block: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(block.as_bytes());
    hex::encode(hasher.finalize())
}
