//! Nested link lists -> navigation trails.
//!
//! A trail mirrors a page's table of contents: each entry pairs a link title
//! with the anchor it jumps to, and nests like the list it came from.

use serde::Serialize;

use super::layout::OutlineLayout;
use crate::dom::MarkupTree;

/// One titled link in a trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkNode {
    pub title: String,
    /// Link target with its leading `#` run removed, so it compares equal to
    /// an anchor's `name` attribute.
    pub href: String,
    /// Present only when the link's item had a nested list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<LinkNode>>,
}

impl LinkNode {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            children: None,
        }
    }

    pub fn with_children(mut self, children: Vec<LinkNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Child links, empty when there are none.
    pub fn children(&self) -> &[LinkNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Strip the leading run of `#` characters from an href.
///
/// ```
/// use trailmap::outline::normalize_href;
///
/// assert_eq!(normalize_href("##how_to#1"), "how_to#1");
/// assert_eq!(normalize_href("plain"), "plain");
/// ```
pub fn normalize_href(href: &str) -> &str {
    href.trim_start_matches('#')
}

/// Extract trails from a list of links using the default layout.
pub fn extract_trails<T: MarkupTree>(tree: &T, list: T::Node) -> Vec<LinkNode> {
    extract_trails_with(&OutlineLayout::default(), tree, list)
}

/// Extract trails from a list of links.
///
/// Each direct list item contributes one node built from its first direct
/// link (title and href are empty when it has none) and, if present, its
/// first direct nested list.
pub fn extract_trails_with<T: MarkupTree>(
    layout: &OutlineLayout,
    tree: &T,
    list: T::Node,
) -> Vec<LinkNode> {
    tree.child_elements(list, &layout.item)
        .map(|item| {
            let link = tree.first_child_element(item, &layout.link);
            let title = link
                .map(|a| tree.text_content(a).trim().to_string())
                .unwrap_or_default();
            let href = link
                .and_then(|a| tree.attr(a, "href"))
                .map(normalize_href)
                .unwrap_or_default()
                .to_string();

            let node = LinkNode::new(title, href);
            match tree.first_child_element(item, &layout.list) {
                Some(nested) => node.with_children(extract_trails_with(layout, tree, nested)),
                None => node,
            }
        })
        .collect()
}

/// Every node of a trail forest, depth-first in document order.
pub fn flatten_trails(trails: &[LinkNode]) -> Vec<&LinkNode> {
    fn walk<'a>(nodes: &'a [LinkNode], out: &mut Vec<&'a LinkNode>) {
        for node in nodes {
            out.push(node);
            walk(node.children(), out);
        }
    }

    let mut out = Vec::new();
    walk(trails, &mut out);
    out
}

/// The chain of nodes from a root trail down to the first node whose href
/// equals `href` (after normalization), searching depth-first.
pub fn trail_path<'a>(trails: &'a [LinkNode], href: &str) -> Option<Vec<&'a LinkNode>> {
    let href = normalize_href(href);
    for node in trails {
        if node.href == href {
            return Some(vec![node]);
        }
        if let Some(mut path) = trail_path(node.children(), href) {
            path.insert(0, node);
            return Some(path);
        }
    }
    None
}
