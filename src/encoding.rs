//! Character encoding detection for fetched pages.
//!
//! Response bodies arrive as bytes. The charset is taken from, in order:
//! a byte-order mark, the `Content-Type` response header, a `<meta>`
//! declaration in the first kilobyte, and finally UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the body inspected for a `<meta>` declaration.
const SNIFF_LEN: usize = 1024;

/// `charset=` parameter of a `Content-Type` header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).unwrap()
});

/// `<meta charset=...>` or `<meta http-equiv=Content-Type content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).unwrap()
});

fn charset_from(re: &Regex, haystack: &str) -> Option<&'static Encoding> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Detect the encoding of an HTTP response body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return encoding;
    }

    if let Some(encoding) = content_type.and_then(|ct| charset_from(&HEADER_CHARSET_RE, ct)) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_LEN)]);
    charset_from(&META_CHARSET_RE, &head).unwrap_or(UTF_8)
}

/// Decode a response body to UTF-8.
///
/// Invalid sequences become U+FFFD rather than failing the page.
///
/// # Examples
///
/// ```
/// use article_extract::encoding::decode_body;
///
/// let body = b"<html><body>Caf\xE9</body></html>";
/// let html = decode_body(body, Some("text/html; charset=ISO-8859-1"));
/// assert!(html.contains("Café"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
