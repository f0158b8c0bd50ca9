//! Tally named participants from image captions.

use indexmap::IndexMap;

use super::layout::OutlineLayout;
use crate::dom::MarkupTree;

/// Occurrences per entity name, in order of first appearance.
pub type EntityCount = IndexMap<String, usize>;

/// Count entities below `list` using the default layout (`<img title>`).
pub fn count_entities<T: MarkupTree>(tree: &T, list: T::Node) -> EntityCount {
    count_entities_with(&OutlineLayout::default(), tree, list)
}

/// Count every entity element at any depth below `list`, keyed by its
/// caption attribute.
///
/// An element without the attribute counts under the empty-string key.
pub fn count_entities_with<T: MarkupTree>(
    layout: &OutlineLayout,
    tree: &T,
    list: T::Node,
) -> EntityCount {
    let mut count = EntityCount::new();
    for node in tree
        .descendants(list)
        .filter(|&n| tree.has_tag(n, &layout.entity))
    {
        let name = tree.attr(node, &layout.entity_attr).unwrap_or_default();
        *count.entry(name.to_string()).or_insert(0) += 1;
    }
    count
}

/// Entities sorted by descending count, ties kept in first-seen order.
pub fn ranked(count: &EntityCount) -> Vec<(&str, usize)> {
    let mut ranked: Vec<_> = count.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn count(html: &str) -> EntityCount {
        let dom = parse_html(html);
        let ul = dom.find_by_tag("ul").expect("fixture has a list");
        count_entities(&dom, ul)
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let result = count(r#"<ul><li><img title="A"><img title="B"></li><li><img title="A"></li></ul>"#);
        let pairs: Vec<_> = result.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        assert_eq!(pairs, vec![("A", 2), ("B", 1)]);
    }

    #[test]
    fn test_nested_images_counted() {
        let result = count(
            r#"<ul><li>x<ul><li><span><img title="deep"></span></li></ul></li></ul>"#,
        );
        assert_eq!(result.get("deep"), Some(&1));
    }

    #[test]
    fn test_missing_title_counts_as_empty() {
        let result = count(r#"<ul><li><img src="a.png"><img alt="b"></li></ul>"#);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(""), Some(&2));
    }

    #[test]
    fn test_no_images() {
        assert!(count("<ul><li>text only</li></ul>").is_empty());
    }

    #[test]
    fn test_images_outside_list_ignored() {
        let result = count(r#"<img title="outside"><ul><li><img title="in"></li></ul>"#);
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["in"]);
    }

    #[test]
    fn test_serialized_in_order() {
        let result = count(r#"<ul><li><img title="Z"><img title="A"><img title="Z"></li></ul>"#);
        assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"Z":2,"A":1}"#);
    }

    #[test]
    fn test_ranked() {
        let result = count(
            r#"<ul><li><img title="a"><img title="b"><img title="c"><img title="b"></li></ul>"#,
        );
        assert_eq!(ranked(&result), vec![("b", 2), ("a", 1), ("c", 1)]);
    }
}
