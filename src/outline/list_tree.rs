//! Nested list -> titled content tree.

use serde::Serialize;

use super::layout::OutlineLayout;
use crate::dom::MarkupTree;

/// One entry of a section's content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTreeNode {
    pub title: String,
    /// Present only when the item had a directly nested list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<ListTreeNode>>,
}

impl ListTreeNode {
    pub fn leaf(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            list: None,
        }
    }

    pub fn branch(title: impl Into<String>, list: Vec<ListTreeNode>) -> Self {
        Self {
            title: title.into(),
            list: Some(list),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .list
            .iter()
            .flatten()
            .map(ListTreeNode::node_count)
            .sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.list.is_none()
    }
}

/// Parse a list container into a content tree using the default layout.
pub fn parse_list_tree<T: MarkupTree>(tree: &T, list: T::Node) -> Vec<ListTreeNode> {
    parse_list_tree_with(&OutlineLayout::default(), tree, list)
}

/// Parse a list container into a content tree.
///
/// One node per direct list item; everything else under `list` is ignored.
/// An item's title depends on whether it has a nested list:
///
/// - with a nested list, the title is the item's *first* text fragment and
///   the nested list is parsed recursively. Only the first nested list is
///   kept.
/// - without one, the title is *all* fragments concatenated.
///
/// A fragment is the trimmed text content of a direct text or element child
/// other than the nested list. Whitespace-only text still counts as an
/// (empty) fragment, so `<li> <b>x</b></li>` titles a nested list with `""`.
pub fn parse_list_tree_with<T: MarkupTree>(
    layout: &OutlineLayout,
    tree: &T,
    list: T::Node,
) -> Vec<ListTreeNode> {
    tree.child_elements(list, &layout.item)
        .map(|item| parse_item(layout, tree, item))
        .collect()
}

fn parse_item<T: MarkupTree>(layout: &OutlineLayout, tree: &T, item: T::Node) -> ListTreeNode {
    let nested = tree.first_child_element(item, &layout.list);

    let fragments: Vec<String> = tree
        .children(item)
        .filter(|&n| tree.is_text(n) || tree.is_element(n))
        .filter(|&n| !tree.has_tag(n, &layout.list))
        .map(|n| tree.text_content(n).trim().to_string())
        .collect();

    tracing::trace!(fragments = fragments.len(), nested = nested.is_some(), "list item");

    match nested {
        Some(sublist) => {
            let title = fragments.into_iter().next().unwrap_or_default();
            ListTreeNode::branch(title, parse_list_tree_with(layout, tree, sublist))
        }
        None => ListTreeNode::leaf(fragments.concat()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn parse(html: &str) -> Vec<ListTreeNode> {
        let dom = parse_html(html);
        let ul = dom.find_by_tag("ul").expect("fixture has a list");
        parse_list_tree(&dom, ul)
    }

    #[test]
    fn test_nested_item() {
        let tree = parse("<ul><li>Intro<ul><li>Sub</li></ul></li></ul>");
        assert_eq!(
            tree,
            vec![ListTreeNode::branch("Intro", vec![ListTreeNode::leaf("Sub")])]
        );
    }

    #[test]
    fn test_leaf_concatenates_fragments() {
        let tree = parse("<ul><li> Stream <b>archive</b> (2024) </li></ul>");
        assert_eq!(tree, vec![ListTreeNode::leaf("Streamarchive(2024)")]);
    }

    #[test]
    fn test_branch_uses_first_fragment_only() {
        let tree = parse("<ul><li>Lead<b>bold</b><ul><li>x</li></ul>tail</li></ul>");
        assert_eq!(tree[0].title, "Lead");
        assert_eq!(tree[0].list.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_item_with_only_nested_list() {
        let tree = parse("<ul><li><ul><li>only</li></ul></li></ul>");
        assert_eq!(tree[0].title, "");
        assert_eq!(tree[0].list, Some(vec![ListTreeNode::leaf("only")]));
    }

    #[test]
    fn test_leading_whitespace_is_empty_first_fragment() {
        let tree = parse("<ul><li>\n  <b>Heading</b><ul><li>x</li></ul></li></ul>");
        assert_eq!(tree[0].title, "");
    }

    #[test]
    fn test_whitespace_between_elements_in_leaf() {
        let tree = parse("<ul><li><b>a</b> <b>b</b></li></ul>");
        assert_eq!(tree, vec![ListTreeNode::leaf("ab")]);
    }

    #[test]
    fn test_table_text_keeps_document_order() {
        // The parser moves stray table text in front of the table
        let tree =
            parse("<ul><li><table>Lead<tr><td>x</td></tr></table><ul><li>s</li></ul></li></ul>");
        assert_eq!(
            tree,
            vec![ListTreeNode::branch("Lead", vec![ListTreeNode::leaf("s")])]
        );

        let tree = parse("<ul><li>A<table>B<tr><td>x</td></tr></table></li></ul>");
        assert_eq!(tree, vec![ListTreeNode::leaf("ABx")]);
    }

    #[test]
    fn test_second_nested_list_ignored() {
        let tree = parse("<ul><li>A<ul><li>first</li></ul><ul><li>second</li></ul></li></ul>");
        assert_eq!(tree[0].list, Some(vec![ListTreeNode::leaf("first")]));
    }

    #[test]
    fn test_comments_are_not_fragments() {
        let tree = parse("<ul><li>A<!-- hidden -->B</li></ul>");
        assert_eq!(tree[0].title, "AB");
    }

    #[test]
    fn test_non_item_children_ignored() {
        let tree = parse("<ul><li>one</li><div>stray</div><li>two</li></ul>");
        let titles: Vec<_> = tree.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[test]
    fn test_deep_nesting() {
        let tree = parse("<ul><li>1<ul><li>2<ul><li>3<ul><li>4</li></ul></li></ul></li></ul></li></ul>");
        assert_eq!(tree[0].node_count(), 4);
        let mut node = &tree[0];
        let mut titles = vec![node.title.clone()];
        while let Some(list) = &node.list {
            node = &list[0];
            titles.push(node.title.clone());
        }
        assert_eq!(titles, vec!["1", "2", "3", "4"]);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_ordered_list_layout() {
        let dom = parse_html("<ol><li>a<ol><li>b</li></ol></li></ol>");
        let ol = dom.find_by_tag("ol").unwrap();
        let layout = OutlineLayout::new().with_list("ol");
        let tree = parse_list_tree_with(&layout, &dom, ol);
        assert_eq!(tree, vec![ListTreeNode::branch("a", vec![ListTreeNode::leaf("b")])]);
    }

    #[test]
    fn test_serialized_shape() {
        let tree = parse("<ul><li>Intro<ul><li>Sub</li></ul></li></ul>");
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"[{"title":"Intro","list":[{"title":"Sub"}]}]"#);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn item(lead: &str, words: &[String], nested: Option<&str>) -> String {
            let bold: String = words.iter().map(|w| format!("<b>{w}</b>")).collect();
            let nested = nested.map(|t| format!("<ul><li>{t}</li></ul>")).unwrap_or_default();
            format!("<ul><li>  {lead} {bold}{nested}</li></ul>")
        }

        proptest! {
            #[test]
            fn prop_leaf_title_is_all_fragments(
                lead in "[a-z]{1,8}",
                words in prop::collection::vec("[a-z0-9]{1,6}", 0..4),
            ) {
                let tree = parse(&item(&lead, &words, None));
                let expected = format!("{lead}{}", words.concat());
                prop_assert_eq!(tree, vec![ListTreeNode::leaf(expected)]);
            }

            #[test]
            fn prop_branch_title_is_first_fragment(
                lead in "[a-z]{1,8}",
                words in prop::collection::vec("[a-z0-9]{1,6}", 0..4),
                child in "[a-z]{1,8}",
            ) {
                let tree = parse(&item(&lead, &words, Some(&child)));
                prop_assert_eq!(
                    tree,
                    vec![ListTreeNode::branch(lead, vec![ListTreeNode::leaf(child)])]
                );
            }
        }
    }
}
