//! DOM Parsing Adapter
//!
//! Turns raw markup into an [`etree::Document`](crate::etree::Document) using
//! the `dom_query` crate (html5ever), which tolerates tag soup the way a
//! browser does. The rest of the crate never touches `dom_query` types.

use dom_query::NodeRef;
use url::Url;

use crate::error::{Error, Result};
use crate::etree::{Document, Element, Node};

/// Deepest element level kept in the tree; the root is level 0.
///
/// Elements below this level are replaced by their text content, which
/// bounds every recursive pass over the converted tree.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Markup parser collaborator.
///
/// Implementations must absorb malformed markup and return a best-effort
/// tree; `Err` is reserved for input that yields no tree at all.
pub trait MarkupParser {
    /// Parse `markup` fetched from `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseFailure`] when no document tree can be built.
    fn parse(&self, markup: &str, url: &Url) -> Result<Document>;
}

/// HTML parser backed by `dom_query`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl MarkupParser for HtmlParser {
    fn parse(&self, markup: &str, url: &Url) -> Result<Document> {
        if markup.trim().is_empty() {
            return Err(Error::ParseFailure("empty markup".to_string()));
        }

        let document = dom_query::Document::from(markup);
        let html = document.select("html");
        let Some(root) = html.nodes().first() else {
            return Err(Error::ParseFailure("no root element".to_string()));
        };

        Ok(Document::new(convert_element(root, 0), url.clone()))
    }
}

/// Copy a `dom_query` element and its subtree into the owned tree.
///
/// Comments, doctypes and processing instructions are dropped. Children at
/// [`MAX_NESTING_DEPTH`] are flattened into a single text node.
fn convert_element(node: &NodeRef, depth: usize) -> Element {
    let tag = node
        .node_name()
        .map(|t| t.to_string())
        .unwrap_or_default();

    let mut element = Element::new(&tag);
    for attr in node.attrs().iter() {
        element = element.with_attr(&attr.name.local, &attr.value);
    }

    for child in node.children() {
        if child.is_element() && depth + 1 < MAX_NESTING_DEPTH {
            element.push(Node::Element(convert_element(&child, depth + 1)));
        } else if child.is_element() || child.is_text() {
            let text = child.text();
            if !text.is_empty() {
                element.push(Node::Text(text.to_string()));
            }
        }
    }

    element
}

/// Parse HTML with [`HtmlParser`].
///
/// # Errors
///
/// See [`MarkupParser::parse`].
#[inline]
pub fn parse(markup: &str, url: &Url) -> Result<Document> {
    HtmlParser.parse(markup, url)
}
