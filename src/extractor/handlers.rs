//! Node renderer.
//!
//! Turns one element into Markdown or plain text. In Markdown mode the
//! element is rendered bottom-up: text leaves are whitespace-collapsed,
//! children are concatenated and trimmed, the boilerplate table is checked
//! against the result, and the tag's transform from
//! [`MARKDOWN_TRANSFORMS`](super::tags::MARKDOWN_TRANSFORMS) wraps it.
//! In text mode the element's whole text content is normalized and checked
//! against the same table.
//!
//! Rendering never mutates the tree and never fails; anything unusable
//! renders as an empty string.

use std::borrow::Cow;

use crate::etree::{Element, Node};
use crate::options::{NoiseAction, NoiseRule, Options, OutputFormat};
use crate::patterns::{collapse_whitespace, normalize_text, LINE_WHITESPACE};

use super::tags::markdown_transform;

/// Renders elements with a fixed boilerplate table.
#[derive(Debug, Clone)]
pub struct NodeRenderer {
    noise_rules: Vec<NoiseRule>,
}

impl NodeRenderer {
    #[must_use]
    pub fn new(noise_rules: Vec<NoiseRule>) -> Self {
        Self { noise_rules }
    }

    /// Renderer using the boilerplate table of `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.noise_rules.clone())
    }

    /// Render `element` in `format`. The result is not trimmed.
    #[must_use]
    pub fn render(&self, element: &Element, format: OutputFormat) -> String {
        match format {
            OutputFormat::Markdown => self.to_markdown(element),
            OutputFormat::Text => self.to_text(element),
        }
    }

    /// Markdown rendering of `element`.
    ///
    /// A node whose trimmed content is empty, or whose content matches a
    /// dropping noise rule, renders as `""` without its transform.
    #[must_use]
    pub fn to_markdown(&self, element: &Element) -> String {
        let mut content = String::new();
        for child in element.children() {
            match child {
                Node::Text(text) => content.push_str(&collapse_whitespace(text)),
                Node::Element(el) => content.push_str(&self.to_markdown(el)),
            }
        }

        let content = LINE_WHITESPACE.replace_all(&content, "");
        let content = content.trim();
        if content.is_empty() {
            return String::new();
        }

        match self.filter_noise(content) {
            Some(kept) => markdown_transform(element.tag()).apply(&kept),
            None => String::new(),
        }
    }

    /// Plain-text rendering of `element`: whitespace-normalized text content.
    #[must_use]
    pub fn to_text(&self, element: &Element) -> String {
        let text = normalize_text(&element.text_content());
        if text.is_empty() {
            return text;
        }
        self.filter_noise(&text).map(Cow::into_owned).unwrap_or_default()
    }

    /// Apply the boilerplate table in order.
    ///
    /// Returns `None` when a rule drops the content or stripping leaves
    /// nothing behind.
    fn filter_noise<'c>(&self, content: &'c str) -> Option<Cow<'c, str>> {
        let mut current = Cow::Borrowed(content);
        for rule in &self.noise_rules {
            if !rule.pattern.is_match(&current) {
                continue;
            }
            match rule.action {
                NoiseAction::Drop => return None,
                NoiseAction::Strip => {
                    let stripped = rule.pattern.replace_all(&current, "").trim().to_string();
                    current = Cow::Owned(stripped);
                }
            }
        }

        if current.is_empty() {
            None
        } else {
            Some(current)
        }
    }
}

impl Default for NodeRenderer {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}
