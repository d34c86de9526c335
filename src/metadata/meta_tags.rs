//! HTML Meta Tag Extraction
//!
//! Lookups over `<meta>` elements: the publish-date fields and the Open
//! Graph image.

use crate::etree::Document;

/// Publish-date meta fields as `(attribute, value)`, highest priority first.
pub const DATE_META_FIELDS: [(&str, &str); 4] = [
    ("property", "article:published_time"),
    ("name", "pubdate"),
    ("name", "publishdate"),
    ("property", "og:updated_time"),
];

/// Trimmed `content` of the first `<meta>` whose `attr` equals `value`
/// (case-insensitive) and whose content is non-empty.
#[must_use]
pub fn meta_content<'a>(doc: &'a Document, attr: &str, value: &str) -> Option<&'a str> {
    doc.elements_by_tag("meta")
        .filter(|meta| meta.attr(attr).is_some_and(|v| v.trim().eq_ignore_ascii_case(value)))
        .filter_map(|meta| meta.attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
}

/// Publish date from the meta fields in [`DATE_META_FIELDS`] order.
#[must_use]
pub fn extract_meta_date(doc: &Document) -> Option<String> {
    DATE_META_FIELDS
        .iter()
        .find_map(|(attr, value)| meta_content(doc, attr, value))
        .map(str::to_string)
}

/// Raw `og:image` URL.
#[must_use]
pub fn extract_og_image(doc: &Document) -> Option<&str> {
    meta_content(doc, "property", "og:image")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use url::Url;

    fn parse(html: &str) -> Document {
        let url = Url::parse("https://example.com/a").unwrap();
        dom::parse(html, &url).unwrap()
    }

    #[test]
    fn test_meta_date_priority() {
        let doc = parse(
            r#"<head>
                <meta property="og:updated_time" content="2024-03-05">
                <meta name="pubdate" content="2024-03-02">
                <meta property="article:published_time" content=" 2024-03-01T08:00:00+07:00 ">
            </head>"#,
        );
        assert_eq!(extract_meta_date(&doc).as_deref(), Some("2024-03-01T08:00:00+07:00"));
    }

    #[test]
    fn test_meta_date_skips_empty_content() {
        let doc = parse(
            r#"<head>
                <meta property="article:published_time" content="">
                <meta name="publishdate" content="2024-03-03">
            </head>"#,
        );
        assert_eq!(extract_meta_date(&doc).as_deref(), Some("2024-03-03"));
    }

    #[test]
    fn test_meta_date_absent() {
        let doc = parse(r#"<head><meta name="description" content="x"></head>"#);
        assert_eq!(extract_meta_date(&doc), None);
    }

    #[test]
    fn test_og_image() {
        let doc = parse(r#"<head><meta property="og:image" content="https://cdn.example.com/a.jpg"></head>"#);
        assert_eq!(extract_og_image(&doc), Some("https://cdn.example.com/a.jpg"));
        // `name` is not `property`.
        let doc = parse(r#"<head><meta name="og:image" content="https://cdn.example.com/a.jpg"></head>"#);
        assert_eq!(extract_og_image(&doc), None);
    }
}
