//! Article body locator.
//!
//! Scores every container-like element and returns the one most likely to
//! be the article body:
//!
//! ```text
//! score = visible_text_len + paragraph_weight * <p> count - link_penalty * <a> count
//! ```
//!
//! Candidates with too little text or too few paragraphs are rejected
//! before scoring. A later candidate replaces the current best only on a
//! strictly higher score, so ties keep the first one in document order.

use crate::etree::{Document, Element};
use crate::Options;

/// Measurements of one body candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateScore {
    /// Characters of trimmed visible text.
    pub text_length: usize,
    /// `<p>` descendants.
    pub paragraphs: usize,
    /// `<a>` descendants.
    pub links: usize,
    /// Weighted score.
    pub score: i64,
}

fn as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Measure a candidate element.
#[must_use]
pub fn measure(element: &Element, options: &Options) -> CandidateScore {
    let text_length = element.visible_text().trim().chars().count();
    let paragraphs = element.count_by_tag("p");
    let links = element.count_by_tag("a");

    let score = as_i64(text_length)
        .saturating_add(options.paragraph_weight.saturating_mul(as_i64(paragraphs)))
        .saturating_sub(options.link_penalty.saturating_mul(as_i64(links)));

    CandidateScore {
        text_length,
        paragraphs,
        links,
        score,
    }
}

/// Whether a measured candidate passes the rejection thresholds.
#[must_use]
pub fn qualifies(candidate: &CandidateScore, options: &Options) -> bool {
    candidate.text_length >= options.min_text_length && candidate.paragraphs >= options.min_paragraphs
}

/// All qualifying candidates with their scores, in document order.
#[must_use]
pub fn score_candidates<'a>(doc: &'a Document, options: &Options) -> Vec<(&'a Element, CandidateScore)> {
    let root = doc.root();
    std::iter::once(root)
        .chain(root.descendants())
        .filter(|el| options.is_candidate_tag(el.tag()))
        .map(|el| (el, measure(el, options)))
        .filter(|(_, candidate)| qualifies(candidate, options))
        .collect()
}

/// Locate the article body, or `None` when no candidate qualifies.
#[must_use]
pub fn find_article_container<'a>(doc: &'a Document, options: &Options) -> Option<&'a Element> {
    let mut best: Option<(&Element, i64)> = None;

    for (element, candidate) in score_candidates(doc, options) {
        if best.is_none_or(|(_, best_score)| candidate.score > best_score) {
            best = Some((element, candidate.score));
        }
    }

    if let Some((element, score)) = best {
        tracing::debug!(url = %doc.url(), tag = element.tag(), score, "located article body");
    }
    best.map(|(element, _)| element)
}
