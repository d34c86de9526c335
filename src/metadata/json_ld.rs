//! JSON-LD Metadata Parsing
//!
//! Reads Schema.org objects from `<script type="application/ld+json">`
//! blocks. A block may hold a single object, an array of objects, or an
//! object whose `@graph` lists further objects; all three shapes are
//! flattened in document order. Blocks that are not valid JSON are skipped.

use serde_json::{Map, Value};

use crate::etree::Document;

const JSON_LD_TYPE: &str = "application/ld+json";

/// Parsed top-level values of every JSON-LD block, in document order.
#[must_use]
pub fn json_ld_blocks(doc: &Document) -> Vec<Value> {
    doc.elements_by_tag("script")
        .filter(|script| {
            script
                .attr("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case(JSON_LD_TYPE))
        })
        .filter_map(|script| {
            let raw = script.text_content();
            match serde_json::from_str::<Value>(raw.trim()) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::debug!(url = %doc.url(), error = %err, "ignoring malformed JSON-LD block");
                    None
                }
            }
        })
        .collect()
}

/// Flatten a JSON-LD value into its schema objects.
fn collect_objects<'a>(value: &'a Value, out: &mut Vec<&'a Map<String, Value>>) {
    match value {
        Value::Object(map) => {
            out.push(map);
            if let Some(graph) = map.get("@graph") {
                collect_objects(graph, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_objects(item, out);
            }
        }
        _ => {}
    }
}

fn non_empty_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Publish date from JSON-LD: the first object carrying a non-empty
/// `datePublished`, else `dateCreated`.
#[must_use]
pub fn extract_json_ld_date(doc: &Document) -> Option<String> {
    let blocks = json_ld_blocks(doc);
    let mut objects = Vec::new();
    for block in &blocks {
        collect_objects(block, &mut objects);
    }

    objects
        .into_iter()
        .find_map(|object| non_empty_str(object, "datePublished").or_else(|| non_empty_str(object, "dateCreated")))
        .map(str::to_string)
}
