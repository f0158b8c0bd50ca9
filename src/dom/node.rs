//! Read-only capability interface over a parsed markup tree.
//!
//! The outline extractors only ever talk to [`MarkupTree`]. [`ArenaDom`]
//! implements it, but any parser that can answer these few questions can
//! back the extractors.

use std::fmt;

use super::arena::{ArenaDom, NodeData, NodeId};

/// Coarse classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Document root, comments, doctypes.
    Other,
}

/// A parsed document the extractors can walk.
///
/// Lookups never fail: a missing attribute, child or sibling is `None`.
pub trait MarkupTree {
    /// Opaque node handle.
    type Node: Copy + Eq + fmt::Debug;

    fn root(&self) -> Self::Node;

    fn kind(&self, node: Self::Node) -> NodeKind;

    /// Lowercase local name of an element.
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    fn attr(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;

    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Character data of a text node.
    fn text(&self, node: Self::Node) -> Option<&str>;

    fn is_element(&self, node: Self::Node) -> bool {
        self.kind(node) == NodeKind::Element
    }

    fn is_text(&self, node: Self::Node) -> bool {
        self.kind(node) == NodeKind::Text
    }

    /// True if `node` is an element with the given tag.
    fn has_tag(&self, node: Self::Node, tag: &str) -> bool {
        self.tag_name(node)
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    /// Direct children of any kind, in document order.
    fn children(&self, node: Self::Node) -> ChildNodes<'_, Self> {
        ChildNodes {
            tree: self,
            next: self.first_child(node),
        }
    }

    /// Direct child elements with the given tag (`:scope > tag`).
    fn child_elements<'a>(&'a self, node: Self::Node, tag: &'a str) -> ChildElements<'a, Self> {
        ChildElements {
            children: self.children(node),
            tag,
        }
    }

    /// First direct child element with the given tag.
    fn first_child_element(&self, node: Self::Node, tag: &str) -> Option<Self::Node> {
        self.child_elements(node, tag).next()
    }

    /// Elements following `node` among its siblings.
    fn following_elements(&self, node: Self::Node) -> FollowingElements<'_, Self> {
        FollowingElements {
            tree: self,
            current: Some(node),
        }
    }

    /// All nodes below `node` in document order, excluding `node` itself.
    fn descendants(&self, node: Self::Node) -> Descendants<'_, Self> {
        Descendants {
            tree: self,
            root: node,
            next: self.first_child(node),
        }
    }

    /// Concatenated character data of `node` and everything below it.
    fn text_content(&self, node: Self::Node) -> String {
        match self.kind(node) {
            NodeKind::Text => self.text(node).unwrap_or_default().to_string(),
            _ => self
                .descendants(node)
                .filter_map(|n| self.text(n))
                .collect(),
        }
    }

    /// First element in the document satisfying `predicate`.
    fn find_element<F>(&self, predicate: F) -> Option<Self::Node>
    where
        F: Fn(Self::Node) -> bool,
    {
        self.descendants(self.root())
            .find(|&n| self.is_element(n) && predicate(n))
    }
}

/// Iterator over the children of a node.
pub struct ChildNodes<'a, T: MarkupTree + ?Sized> {
    tree: &'a T,
    next: Option<T::Node>,
}

impl<T: MarkupTree + ?Sized> Iterator for ChildNodes<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = self.tree.next_sibling(node);
        Some(node)
    }
}

/// Iterator over the child elements of a node with one tag.
pub struct ChildElements<'a, T: MarkupTree + ?Sized> {
    children: ChildNodes<'a, T>,
    tag: &'a str,
}

impl<T: MarkupTree + ?Sized> Iterator for ChildElements<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.children.tree;
        let tag = self.tag;
        self.children.find(|&n| tree.has_tag(n, tag))
    }
}

/// Iterator over the following sibling elements of a node.
pub struct FollowingElements<'a, T: MarkupTree + ?Sized> {
    tree: &'a T,
    current: Option<T::Node>,
}

impl<T: MarkupTree + ?Sized> Iterator for FollowingElements<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.tree.next_sibling(self.current?);
            self.current = next;
            let node = next?;
            if self.tree.is_element(node) {
                return Some(node);
            }
        }
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a, T: MarkupTree + ?Sized> {
    tree: &'a T,
    root: T::Node,
    next: Option<T::Node>,
}

impl<T: MarkupTree + ?Sized> Iterator for Descendants<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;

        self.next = self.tree.first_child(node).or_else(|| {
            let mut current = node;
            loop {
                if current == self.root {
                    return None;
                }
                if let Some(sibling) = self.tree.next_sibling(current) {
                    return Some(sibling);
                }
                current = self.tree.parent(current)?;
            }
        });

        Some(node)
    }
}

impl MarkupTree for ArenaDom {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.document()
    }

    fn kind(&self, node: NodeId) -> NodeKind {
        match self.get(node).map(|n| &n.data) {
            Some(NodeData::Element { .. }) => NodeKind::Element,
            Some(NodeData::Text(_)) => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element_name(node).map(|name| name.as_ref())
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get_attr(node, name)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.parent.get()
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.first_child.get()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.next_sibling.get()
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        ArenaDom::text(self, node)
    }
}
