//! Element Tree (etree)
//!
//! Owned, read-only document tree consumed by the locator, renderer and
//! metadata extractor. A parsed page is converted once into this model by
//! [`dom::HtmlParser`](crate::dom::HtmlParser); after that nothing here
//! depends on the HTML parser.
//!
//! ## Nodes
//!
//! A [`Node`] is either an [`Element`] (tag, ordered attributes, ordered
//! children) or a text leaf. Text leaves never have children, and an
//! element's text content is the concatenation of its descendants' text in
//! document order:
//!
//! ```html
//! <p>Hello <em>big</em> world</p>   <!-- text_content() == "Hello big world" -->
//! ```
//!
//! The only mutation offered is [`Element::remove_descendants`], used on a
//! working copy of the located article body.

use url::Url;

/// Tags whose text is never shown to a reader.
pub const INVISIBLE_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Markup element.
    Element(Element),
    /// Text leaf, entities already decoded.
    Text(String),
}

impl Node {
    /// Whether this node is a text leaf.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(el) => el.text_content(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// A markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children. The tag is lowercased.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: append an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    /// Builder: append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder: append a text child.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the tag equals `name` (ASCII case-insensitive).
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.tag.eq_ignore_ascii_case(name)
    }

    /// Attribute value by name, first occurrence wins.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in source order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Child nodes in source order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Descendant elements in document (pre-)order, excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Descendant elements with the given tag, in document order.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |el| el.is(tag))
    }

    /// First descendant element with the given tag.
    #[must_use]
    pub fn first_by_tag(&self, tag: &str) -> Option<&Element> {
        self.descendants().find(|el| el.is(tag))
    }

    /// Number of descendant elements with the given tag.
    #[must_use]
    pub fn count_by_tag(&self, tag: &str) -> usize {
        self.elements_by_tag(tag).count()
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out, &[]);
        out
    }

    /// Text content excluding [`INVISIBLE_TAGS`] subtrees.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out, &INVISIBLE_TAGS);
        out
    }

    fn collect_text(&self, out: &mut String, skip: &[&str]) {
        let mut stack = vec![self.children.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Node::Text(text)) => out.push_str(text),
                Some(Node::Element(el)) => {
                    if !skip.iter().any(|t| el.is(t)) {
                        stack.push(el.children.iter());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Find the first descendant matching `pred`, together with its ancestor
    /// chain from `self` (inclusive) down to its parent.
    ///
    /// `pred` receives the candidate and its ancestors, nearest last.
    pub fn find_with_ancestors<'a, F>(&'a self, mut pred: F) -> Option<(&'a Element, Vec<&'a Element>)>
    where
        F: FnMut(&'a Element, &[&'a Element]) -> bool,
    {
        let mut ancestors: Vec<&'a Element> = vec![self];
        let mut stack = vec![self.children.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Node::Element(el)) => {
                    if pred(el, &ancestors) {
                        return Some((el, ancestors));
                    }
                    ancestors.push(el);
                    stack.push(el.children.iter());
                }
                Some(Node::Text(_)) => {}
                None => {
                    stack.pop();
                    ancestors.pop();
                }
            }
        }
        None
    }

    /// Remove every descendant element matching `pred`, subtree included.
    ///
    /// The relative order of the remaining nodes is unchanged. Returns the
    /// number of removed elements (nested matches inside a removed subtree
    /// are not counted).
    pub fn remove_descendants<F>(&mut self, pred: &F) -> usize
    where
        F: Fn(&Element) -> bool,
    {
        let before = self.children.len();
        self.children
            .retain(|node| !matches!(node, Node::Element(el) if pred(el)));
        let mut removed = before - self.children.len();
        for node in &mut self.children {
            if let Node::Element(el) = node {
                removed += el.remove_descendants(pred);
            }
        }
        removed
    }
}

/// Pre-order iterator over descendant elements. See [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Node::Element(el)) => {
                    self.stack.push(el.children.iter());
                    return Some(el);
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A parsed page: root element plus the URL it was fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
    url: Url,
}

impl Document {
    #[must_use]
    pub fn new(root: Element, url: Url) -> Self {
        Self { root, url }
    }

    /// Root element (normally `<html>`).
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// URL the page was fetched from.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// All elements with `tag` in document order, the root included.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        std::iter::once(&self.root)
            .filter(move |el| el.is(tag))
            .chain(self.root.elements_by_tag(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_text("Hello ")
            .with_child(Element::new("em").with_text("big"))
            .with_text(" world")
            .with_child(Element::new("script").with_text("var x;"))
            .with_child(
                Element::new("ul")
                    .with_child(Element::new("li").with_text("a"))
                    .with_child(Element::new("li").with_text("b")),
            )
    }

    #[test]
    fn text_content_concatenates_in_document_order() {
        assert_eq!(sample().text_content(), "Hello big worldvar x;ab");
        assert_eq!(sample().visible_text(), "Hello big worldab");
    }

    #[test]
    fn descendants_are_preorder() {
        let root = sample();
        let tags: Vec<&str> = root.descendants().map(Element::tag).collect();
        assert_eq!(tags, ["em", "script", "ul", "li", "li"]);
        assert_eq!(root.count_by_tag("li"), 2);
        assert!(root.first_by_tag("p").is_none());
    }

    #[test]
    fn attributes_lookup_is_case_insensitive() {
        let el = Element::new("IMG").with_attr("SRC", "/a.png").with_attr("alt", "A");
        assert_eq!(el.tag(), "img");
        assert_eq!(el.attr("src"), Some("/a.png"));
        assert_eq!(el.attr("alt"), Some("A"));
        assert_eq!(el.attr("title"), None);
    }

    #[test]
    fn find_with_ancestors_reports_chain() {
        let root = Element::new("body").with_child(
            Element::new("figure")
                .with_child(Element::new("img").with_attr("src", "x.jpg"))
                .with_child(Element::new("figcaption").with_text("Cap")),
        );

        let (img, ancestors) = root
            .find_with_ancestors(|el, _| el.is("img"))
            .unwrap();
        assert_eq!(img.attr("src"), Some("x.jpg"));
        let chain: Vec<&str> = ancestors.iter().map(|a| a.tag()).collect();
        assert_eq!(chain, ["body", "figure"]);
    }

    #[test]
    fn remove_descendants_keeps_sibling_order() {
        let mut root = Element::new("div")
            .with_child(Element::new("p").with_text("one"))
            .with_child(Element::new("nav").with_child(Element::new("p").with_text("menu")))
            .with_child(Element::new("p").with_text("two"))
            .with_child(Element::new("div").with_child(Element::new("script").with_text("x")));

        let removed = root.remove_descendants(&|el: &Element| el.is("nav") || el.is("script"));
        assert_eq!(removed, 2);
        assert_eq!(root.text_content(), "onetwo");
        let tags: Vec<&str> = root.descendants().map(Element::tag).collect();
        assert_eq!(tags, ["p", "p", "div"]);
    }

    #[test]
    fn text_nodes_have_no_children() {
        let node = Node::Text("x".to_string());
        assert!(node.is_text());
        assert!(node.as_element().is_none());
        assert_eq!(node.text_content(), "x");
    }
}
