//! Boilerplate pruning of the located article body.
//!
//! The parsed page is never modified: pruning clones the body subtree and
//! removes structural boilerplate (navigation, side content, footers, forms,
//! controls, scripts, styles) from the clone only.

use crate::etree::Element;
use crate::Options;

/// Clone `body` and remove every descendant whose tag is in
/// `options.strip_tags`, subtree included.
///
/// Returns the pruned working copy and the number of removed elements.
#[must_use]
pub fn prune_unwanted_nodes(body: &Element, options: &Options) -> (Element, usize) {
    let mut working = body.clone();
    let removed = working.remove_descendants(&|el: &Element| options.is_strip_tag(el.tag()));
    (working, removed)
}
