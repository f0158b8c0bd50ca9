//! HTML document model.
//!
//! html5ever parses into an [`ArenaDom`], which the outline extractors read
//! through the [`MarkupTree`] trait. CSS selector queries are available for
//! locating entry points such as a page's table of contents.
//!
//! ```
//! use trailmap::dom::{parse_html, MarkupTree};
//!
//! let dom = parse_html("<ul><li>One</li><li>Two</li></ul>");
//! let ul = dom.find_by_tag("ul").unwrap();
//! assert_eq!(dom.child_elements(ul, "li").count(), 2);
//! ```

mod arena;
mod element_ref;
mod node;
mod select;
mod tree_sink;

pub use arena::{ArenaDom, Attribute, Node, NodeData, NodeId};
pub use element_ref::{ElementRef, OutlineSelectors};
pub use node::{ChildElements, ChildNodes, Descendants, FollowingElements, MarkupTree, NodeKind};
pub use select::Query;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::DomSink;

/// Parse an HTML document.
pub fn parse_html(html: &str) -> ArenaDom {
    parse_document(DomSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse raw HTML bytes, decoding them with the document's declared charset.
pub fn parse_html_bytes(bytes: &[u8]) -> ArenaDom {
    parse_html(&crate::util::decode_html(bytes))
}
