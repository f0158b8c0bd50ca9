//! href -> section tree and entity tally.

use serde::Serialize;

use super::entity::{EntityCount, count_entities_with};
use super::layout::OutlineLayout;
use super::list_tree::{ListTreeNode, parse_list_tree_with};
use super::section::locate_section_with;
use crate::dom::MarkupTree;
use crate::error::Result;

/// The resolved view of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResult {
    pub tree_title: String,
    pub tree: Vec<ListTreeNode>,
    pub count: EntityCount,
}

/// Resolve a section using the default layout.
pub fn resolve_section<T: MarkupTree>(tree: &T, href: &str) -> Result<SectionResult> {
    resolve_section_with(&OutlineLayout::default(), tree, href)
}

/// Locate the section named `href`, then build its content tree and entity
/// count from the same list. Locator errors are returned unchanged.
pub fn resolve_section_with<T: MarkupTree>(
    layout: &OutlineLayout,
    tree: &T,
    href: &str,
) -> Result<SectionResult> {
    let _span = tracing::debug_span!("resolve_section", href).entered();

    let section = locate_section_with(layout, tree, href)?;
    let list_tree = parse_list_tree_with(layout, tree, section.list);
    let count = count_entities_with(layout, tree, section.list);

    tracing::debug!(
        items = list_tree.len(),
        entities = count.len(),
        "resolved section"
    );

    Ok(SectionResult {
        tree_title: section.title,
        tree: list_tree,
        count,
    })
}
