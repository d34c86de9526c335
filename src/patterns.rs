//! Compiled regex patterns for content extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! The boilerplate and pagination tables are only defaults: callers override
//! them through [`Options`](crate::Options).

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::options::{NoiseAction, NoiseRule};

// =============================================================================
// Boilerplate Phrase Patterns
// =============================================================================

/// Cross-reference prompts anywhere in a block ("baca juga", "see also").
pub static CROSS_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:baca|lihat|simak|see|read)\s+(?:juga|also)\b").unwrap()
});

/// Block that opens with a "baca:" teaser link.
pub static READ_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^baca\s*:").unwrap()
});

/// Bare advertisement marker at the start of a block.
pub static ADVERTISEMENT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:iklan|advertisement)\b").unwrap()
});

/// Default boilerplate table: every rule drops the whole node.
#[must_use]
pub fn default_noise_rules() -> Vec<NoiseRule> {
    [&*CROSS_REFERENCE, &*READ_PREFIX, &*ADVERTISEMENT_MARKER]
        .into_iter()
        .map(|pattern| NoiseRule::new(pattern.clone(), NoiseAction::Drop))
        .collect()
}

// =============================================================================
// Pagination Patterns
// =============================================================================

/// Anchor text of a "next page" link: the word, its Indonesian form, a chevron, or a page number.
pub static NEXT_PAGE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:next|selanjutnya|›|\d+)$").unwrap()
});

/// Default pagination anchor patterns.
#[must_use]
pub fn default_pagination_patterns() -> Vec<Regex> {
    vec![NEXT_PAGE_ANCHOR.clone()]
}

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Matches leading/trailing spaces on lines.
pub static LINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]+|[ \t]+$").unwrap()
});

/// Collapse whitespace runs to a single space without trimming.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").into_owned()
}

/// Collapse whitespace runs and trim both ends.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    collapse_whitespace(text).trim().to_string()
}
