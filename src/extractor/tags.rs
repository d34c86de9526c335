//! Tag lists and the Markdown transform table.
//!
//! The arrays are the defaults copied into [`Options`](crate::Options);
//! the transform table is fixed and maps each tag semantic to the text
//! wrapped around a node's rendered content.

use std::collections::HashMap;
use std::sync::LazyLock;

// === Tag Lists (defaults for Options) ===

/// Tags rendered as content blocks: p, h2-h4, ul, ol, li, em, i, strong, b
pub static ALLOWED_TAGS: [&str; 11] = ["p", "h2", "h3", "h4", "ul", "ol", "li", "em", "i", "strong", "b"];

/// Body container candidates: article, section, div
pub static CANDIDATE_TAGS: [&str; 3] = ["article", "section", "div"];

/// Structural boilerplate removed from the body before rendering.
pub static STRIP_TAGS: [&str; 7] = ["nav", "aside", "footer", "form", "button", "script", "style"];

// === Transform Table ===

/// Rendering semantic of a tag in Markdown mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagSemantic {
    Paragraph,
    Heading2,
    Heading3,
    ListItem,
    Emphasis,
    Strong,
    /// Containers and everything else: content unchanged.
    PassThrough,
}

/// Text placed around a node's trimmed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Transform {
    const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Wrap `content`.
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + content.len() + self.suffix.len());
        out.push_str(self.prefix);
        out.push_str(content);
        out.push_str(self.suffix);
        out
    }
}

/// Tag name to semantic. Tags not listed are [`TagSemantic::PassThrough`].
pub static TAG_SEMANTICS: LazyLock<HashMap<&'static str, TagSemantic>> = LazyLock::new(|| {
    HashMap::from([
        ("p", TagSemantic::Paragraph),
        ("h2", TagSemantic::Heading2),
        ("h3", TagSemantic::Heading3),
        ("li", TagSemantic::ListItem),
        ("em", TagSemantic::Emphasis),
        ("i", TagSemantic::Emphasis),
        ("strong", TagSemantic::Strong),
        ("b", TagSemantic::Strong),
    ])
});

/// Semantic to Markdown transform.
pub static MARKDOWN_TRANSFORMS: LazyLock<HashMap<TagSemantic, Transform>> = LazyLock::new(|| {
    HashMap::from([
        (TagSemantic::Paragraph, Transform::new("", "\n\n")),
        (TagSemantic::Heading2, Transform::new("\n## ", "\n\n")),
        (TagSemantic::Heading3, Transform::new("\n### ", "\n\n")),
        (TagSemantic::ListItem, Transform::new("- ", "\n")),
        (TagSemantic::Emphasis, Transform::new("*", "*")),
        (TagSemantic::Strong, Transform::new("**", "**")),
        (TagSemantic::PassThrough, Transform::new("", "")),
    ])
});

/// Semantic of a (lowercase) tag name.
#[inline]
#[must_use]
pub fn tag_semantic(tag: &str) -> TagSemantic {
    TAG_SEMANTICS.get(tag).copied().unwrap_or(TagSemantic::PassThrough)
}

/// Markdown transform for a (lowercase) tag name.
#[must_use]
pub fn markdown_transform(tag: &str) -> Transform {
    MARKDOWN_TRANSFORMS
        .get(&tag_semantic(tag))
        .copied()
        .unwrap_or(Transform::new("", ""))
}
