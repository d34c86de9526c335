//! Metadata extraction module.
//!
//! Reads the title, publish date and featured image of an article from its
//! seed page. Each field comes from a fixed priority list of sources; the
//! first non-empty hit wins and sources are never merged.
//!
//! | field | sources, in order |
//! |---|---|
//! | title | first `<h1>` |
//! | published date | `article:published_time`, `pubdate`, `publishdate`, `og:updated_time` meta, then JSON-LD `datePublished` / `dateCreated` |
//! | featured image | first usable `<img>` in the article body, then `og:image` |
//!
//! A missing field becomes an empty string plus a warning.

pub mod dom_extraction;
pub mod json_ld;
pub mod meta_tags;

use crate::error::{Error, Result};
use crate::etree::{Document, Element};
use crate::result::FeaturedImage;

pub use dom_extraction::{extract_featured_image, extract_title, image_caption};
pub use json_ld::{extract_json_ld_date, json_ld_blocks};
pub use meta_tags::{extract_meta_date, extract_og_image, meta_content, DATE_META_FIELDS};

/// Metadata of one article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub published_at: String,
    pub featured_image: FeaturedImage,
    /// One entry per field no source supplied.
    pub warnings: Vec<String>,
}

/// Title of the document.
///
/// # Errors
///
/// Returns [`Error::NoMetadataFound`] when the page has no non-empty `<h1>`.
pub fn title(doc: &Document) -> Result<String> {
    extract_title(doc).ok_or(Error::NoMetadataFound("title"))
}

/// Publish date string exactly as the page states it.
///
/// # Errors
///
/// Returns [`Error::NoMetadataFound`] when neither meta tags nor JSON-LD
/// carry a date.
pub fn published_date(doc: &Document) -> Result<String> {
    extract_meta_date(doc)
        .or_else(|| extract_json_ld_date(doc))
        .ok_or(Error::NoMetadataFound("published date"))
}

/// Extract all metadata from the seed page.
///
/// `body` is the located article body, if any; the featured image is only
/// searched inside it before falling back to `og:image`.
#[must_use]
pub fn extract_metadata(doc: &Document, body: Option<&Element>) -> Metadata {
    let mut warnings = Vec::new();
    let mut or_warn = |field: Result<String>| {
        field.unwrap_or_else(|err| {
            tracing::debug!(url = %doc.url(), "{err}");
            warnings.push(err.to_string());
            String::new()
        })
    };

    let title = or_warn(title(doc));
    let published_at = or_warn(published_date(doc));

    let featured_image = extract_featured_image(doc, body, &title);
    if featured_image.url.is_empty() {
        let err = Error::NoMetadataFound("featured image");
        tracing::debug!(url = %doc.url(), "{err}");
        warnings.push(err.to_string());
    }

    Metadata {
        title,
        published_at,
        featured_image,
        warnings,
    }
}
