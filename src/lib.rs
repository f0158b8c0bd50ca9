//! # trailmap
//!
//! Extract navigation trails and section trees from HTML pages whose content
//! is organised as nested `<ul>/<li>` outlines, such as wiki profile pages.
//!
//! ## Features
//!
//! - Parse HTML (any declared charset) into an arena DOM via html5ever
//! - Turn a table of contents into a nested trail of `(title, href)` links
//! - Resolve an anchor to its section title, content tree and a tally of
//!   the participants captioned in its images
//! - Locate entry points with CSS selectors
//!
//! ## Quick Start
//!
//! ```no_run
//! use trailmap::Outline;
//!
//! let outline = Outline::open("page.html").unwrap();
//! let trails = outline.trails_at("#contents-index + ul").unwrap();
//!
//! for trail in &trails {
//!     let section = outline.resolve(&trail.href).unwrap();
//!     println!("{} > {}", trail.title, section.tree_title);
//!     println!("{}", serde_json::to_string_pretty(&section.count).unwrap());
//! }
//! ```
//!
//! ## Working with other parsers
//!
//! The extractors in [`outline`] only depend on the
//! [`MarkupTree`](dom::MarkupTree) trait. [`dom::ArenaDom`] is the bundled
//! implementation.

pub mod dom;
pub mod error;
pub mod outline;
pub mod util;

pub use dom::{ArenaDom, MarkupTree, parse_html};
pub use error::{Error, Result};
pub use outline::{
    EntityCount, LinkNode, ListTreeNode, Outline, OutlineLayout, Section, SectionResult,
    extract_trails, locate_section, parse_list_tree, resolve_section,
};
