//! Outline extraction: trails, section trees and entity counts.
//!
//! Every extractor is generic over [`MarkupTree`](crate::dom::MarkupTree)
//! and comes in two flavours: a plain function using the default
//! [`OutlineLayout`] and a `*_with` variant taking an explicit layout.
//! [`Outline`] bundles an owned document with a layout for convenience.
//!
//! ```
//! use trailmap::Outline;
//!
//! let html = r##"
//!     <div id="contents-index"></div>
//!     <ul><li><a href="#games">Games</a></li></ul>
//!     <h3><a name="games"></a>Games</h3>
//!     <h4>Favourites</h4>
//!     <ul><li>Apex<ul><li>Ranked <img title="Kanae"></li></ul></li></ul>
//! "##;
//!
//! let outline = Outline::parse(html);
//! let trails = outline.trails_at("#contents-index + ul").unwrap();
//! assert_eq!(trails[0].href, "games");
//!
//! let section = outline.resolve(&trails[0].href).unwrap();
//! assert_eq!(section.tree_title, "Favourites");
//! assert_eq!(section.tree[0].title, "Apex");
//! assert_eq!(section.count["Kanae"], 1);
//! ```

mod entity;
mod layout;
mod list_tree;
mod resolve;
mod section;
mod trail;

pub use entity::{EntityCount, count_entities, count_entities_with, ranked};
pub use layout::OutlineLayout;
pub use list_tree::{ListTreeNode, parse_list_tree, parse_list_tree_with};
pub use resolve::{SectionResult, resolve_section, resolve_section_with};
pub use section::{Section, locate_section, locate_section_with};
pub use trail::{
    LinkNode, extract_trails, extract_trails_with, flatten_trails, normalize_href, trail_path,
};

use std::path::Path;

use crate::dom::{ArenaDom, NodeId, parse_html, parse_html_bytes};
use crate::error::Result;

/// Selector for the table of contents list on wiki pages.
pub const DEFAULT_INDEX_SELECTOR: &str = "#contents-index + ul";

/// Selector for the entries nested under the index's `#details` link.
pub const DETAILS_INDEX_SELECTOR: &str = "#contents-index + ul > li > a[href='#details'] + ul";

/// A parsed outline page.
#[derive(Debug)]
pub struct Outline {
    dom: ArenaDom,
    layout: OutlineLayout,
}

impl Outline {
    /// Parse an HTML string.
    pub fn parse(html: &str) -> Self {
        Self::from_dom(parse_html(html))
    }

    /// Parse raw HTML bytes, honouring a declared `charset`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_dom(parse_html_bytes(bytes))
    }

    /// Read and parse an HTML file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read outline page");
        Ok(Self::from_bytes(&bytes))
    }

    pub fn from_dom(dom: ArenaDom) -> Self {
        Self {
            dom,
            layout: OutlineLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: OutlineLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn dom(&self) -> &ArenaDom {
        &self.dom
    }

    pub fn layout(&self) -> &OutlineLayout {
        &self.layout
    }

    /// The first list matching a CSS selector.
    pub fn index_list(&self, selector: &str) -> Result<NodeId> {
        self.dom.query_selector(selector)
    }

    /// Trails of the list at `list`.
    pub fn trails(&self, list: NodeId) -> Vec<LinkNode> {
        extract_trails_with(&self.layout, &self.dom, list)
    }

    /// Trails of the first list matching a CSS selector.
    pub fn trails_at(&self, selector: &str) -> Result<Vec<LinkNode>> {
        let list = self.index_list(selector)?;
        Ok(self.trails(list))
    }

    /// Content tree of the list at `list`.
    pub fn list_tree(&self, list: NodeId) -> Vec<ListTreeNode> {
        parse_list_tree_with(&self.layout, &self.dom, list)
    }

    /// Locate a section. A leading `#` on `href` is ignored.
    pub fn locate(&self, href: &str) -> Result<Section<NodeId>> {
        locate_section_with(&self.layout, &self.dom, normalize_href(href))
    }

    /// Resolve a section. A leading `#` on `href` is ignored.
    pub fn resolve(&self, href: &str) -> Result<SectionResult> {
        resolve_section_with(&self.layout, &self.dom, normalize_href(href))
    }
}
