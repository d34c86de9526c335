//! DOM Metadata Extraction
//!
//! Title from the first `<h1>`, and the featured image with its caption
//! from the located article body.

use crate::etree::{Document, Element};
use crate::patterns::normalize_text;
use crate::result::FeaturedImage;
use crate::url_utils::{absolutize, is_inline_data};

use super::meta_tags::extract_og_image;

/// Normalized text of the first `<h1>`, if non-empty.
#[must_use]
pub fn extract_title(doc: &Document) -> Option<String> {
    doc.elements_by_tag("h1")
        .next()
        .map(|h1| normalize_text(&h1.text_content()))
        .filter(|title| !title.is_empty())
}

/// Whether `src` can be used as a featured image source.
fn usable_src(src: &str) -> bool {
    !src.trim().is_empty() && !is_inline_data(src)
}

/// First image inside `body` with a usable `src`, with its ancestors from
/// the document root down to its parent.
fn first_body_image<'a>(doc: &'a Document, body: &'a Element) -> Option<(&'a Element, Vec<&'a Element>)> {
    doc.root().find_with_ancestors(|el, ancestors| {
        el.is("img")
            && el.attr("src").is_some_and(usable_src)
            && ancestors.iter().any(|a| std::ptr::eq(*a, body))
    })
}

/// Caption of an image: the nearest `<figure>` ancestor's first
/// `<figcaption>`, else the image's `alt` text.
#[must_use]
pub fn image_caption(image: &Element, ancestors: &[&Element]) -> String {
    let figure_caption = ancestors
        .iter()
        .rev()
        .find(|a| a.is("figure"))
        .and_then(|figure| figure.first_by_tag("figcaption"))
        .map(|caption| normalize_text(&caption.text_content()))
        .unwrap_or_default();

    if !figure_caption.is_empty() {
        return figure_caption;
    }
    normalize_text(image.attr("alt").unwrap_or_default())
}

/// Featured image of the article.
///
/// The first usable image inside `body` wins; its caption falls back to
/// `title` when neither a figure caption nor alt text exists. Without such
/// an image the `og:image` meta tag is used with `title` as caption. The
/// URL is empty when neither source exists.
#[must_use]
pub fn extract_featured_image(doc: &Document, body: Option<&Element>, title: &str) -> FeaturedImage {
    if let Some((image, ancestors)) = body.and_then(|body| first_body_image(doc, body)) {
        let src = image.attr("src").unwrap_or_default();
        let caption = image_caption(image, &ancestors);
        return FeaturedImage {
            url: absolutize(doc.url(), src),
            caption: if caption.is_empty() { title.to_string() } else { caption },
        };
    }

    FeaturedImage {
        url: extract_og_image(doc)
            .map(|src| absolutize(doc.url(), src))
            .unwrap_or_default(),
        caption: title.to_string(),
    }
}
