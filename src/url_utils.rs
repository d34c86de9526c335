//! URL Utility Functions
//!
//! Resolution of `href`/`src` values found in a page against that page's URL.

use url::Url;

use crate::error::{Error, Result};

/// Parse the seed URL of an extraction.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `url` is not an absolute URL.
pub fn parse_seed(url: &str) -> Result<Url> {
    let mut seed = Url::parse(url.trim()).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    seed.set_fragment(None);
    Ok(seed)
}

/// Resolve a link `href` into a crawlable URL.
///
/// Relative references are resolved against `base`. The fragment is
/// dropped so `page/2#top` and `page/2` are the same page. Only `http`
/// and `https` results are returned.
#[must_use]
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let mut url = base.join(href).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.set_fragment(None);
    Some(url)
}

/// Convert an image `src` to absolute form, keeping the input on failure.
#[must_use]
pub fn absolutize(base: &Url, src: &str) -> String {
    let src = src.trim();
    match base.join(src) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => src.to_string(),
    }
}

/// Whether an image source is an inline payload rather than a fetchable URL.
#[must_use]
pub fn is_inline_data(src: &str) -> bool {
    let src = src.trim_start();
    src.get(..5).is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:")) || src.contains("base64")
}
