//! Locate a section's title and content list from its anchor name.

use super::layout::OutlineLayout;
use crate::dom::MarkupTree;
use crate::error::{Error, Result};

/// A located section: its display title and the list holding its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<N> {
    pub title: String,
    pub list: N,
}

/// Locate a section using the default layout.
pub fn locate_section<T: MarkupTree>(tree: &T, href: &str) -> Result<Section<T::Node>> {
    locate_section_with(&OutlineLayout::default(), tree, href)
}

/// Locate the section whose heading holds `<a name="{href}">`.
///
/// `href` must already be normalized (no leading `#`). The anchor's parent
/// is the heading; the title is the first subtitle heading among the
/// heading's following siblings, and the content list is the first list
/// among them. The two scans are independent, so a subtitle placed after
/// the list is still found.
///
/// Fails with [`Error::AnchorNotFound`] if no anchor has that name and with
/// [`Error::SectionListMissing`] if no list follows the heading. A missing
/// subtitle only yields an empty title.
pub fn locate_section_with<T: MarkupTree>(
    layout: &OutlineLayout,
    tree: &T,
    href: &str,
) -> Result<Section<T::Node>> {
    let heading = tree
        .find_element(|n| {
            tree.has_tag(n, &layout.link) && tree.attr(n, &layout.anchor_attr) == Some(href)
        })
        .and_then(|anchor| tree.parent(anchor))
        .filter(|&parent| tree.is_element(parent))
        .ok_or_else(|| Error::AnchorNotFound(href.to_string()))?;

    let title = tree
        .following_elements(heading)
        .find(|&n| tree.has_tag(n, &layout.subtitle))
        .map(|h| tree.text_content(h).trim().to_string())
        .unwrap_or_default();

    let list = tree
        .following_elements(heading)
        .find(|&n| tree.has_tag(n, &layout.list))
        .ok_or_else(|| Error::SectionListMissing(href.to_string()))?;

    tracing::debug!(href, title = %title, "located section");

    Ok(Section { title, list })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    const PAGE: &str = r#"
        <h3><a name="how_to"></a>How to enjoy</h3>
        <p>intro</p>
        <h4> Games </h4>
        <ul><li>Minecraft</li></ul>
        <h3><a name="no_list"></a>Empty</h3>
        <h4>Nothing here</h4>
    "#;

    #[test]
    fn test_locates_title_and_list() {
        let dom = parse_html(PAGE);
        let section = locate_section(&dom, "how_to").unwrap();
        assert_eq!(section.title, "Games");
        assert_eq!(dom.tag_name(section.list), Some("ul"));
        assert_eq!(dom.text_content(section.list), "Minecraft");
    }

    #[test]
    fn test_unknown_anchor() {
        let dom = parse_html(PAGE);
        let err = locate_section(&dom, "nowhere").unwrap_err();
        assert!(matches!(err, Error::AnchorNotFound(ref h) if h == "nowhere"));
    }

    #[test]
    fn test_href_with_hash_is_not_normalized_here() {
        let dom = parse_html(PAGE);
        assert!(matches!(
            locate_section(&dom, "#how_to"),
            Err(Error::AnchorNotFound(_))
        ));
    }

    #[test]
    fn test_missing_list() {
        let dom = parse_html(PAGE);
        let err = locate_section(&dom, "no_list").unwrap_err();
        assert!(matches!(err, Error::SectionListMissing(ref h) if h == "no_list"));
    }

    #[test]
    fn test_missing_subtitle_gives_empty_title() {
        let dom = parse_html(r#"<h3><a name="s"></a>S</h3><ul><li>x</li></ul>"#);
        let section = locate_section(&dom, "s").unwrap();
        assert_eq!(section.title, "");
    }

    #[test]
    fn test_subtitle_after_list_still_found() {
        let dom = parse_html(r#"<h3><a name="s"></a>S</h3><ul><li>x</li></ul><h4>Later</h4>"#);
        let section = locate_section(&dom, "s").unwrap();
        assert_eq!(section.title, "Later");
    }

    #[test]
    fn test_siblings_before_heading_ignored() {
        let dom = parse_html(r#"<div><ul><li>before</li></ul><h3><a name="s"></a></h3><ul><li>after</li></ul></div>"#);
        let section = locate_section(&dom, "s").unwrap();
        assert_eq!(dom.text_content(section.list), "after");
    }

    #[test]
    fn test_custom_layout() {
        let dom = parse_html(r#"<h2><a id="x" name="s"></a></h2><h5>Five</h5><ol><li>o</li></ol>"#);
        let layout = OutlineLayout::new().with_subtitle("h5").with_list("ol");
        let section = locate_section_with(&layout, &dom, "s").unwrap();
        assert_eq!(section.title, "Five");
        assert_eq!(dom.tag_name(section.list), Some("ol"));
    }
}
