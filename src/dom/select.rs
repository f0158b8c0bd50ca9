//! CSS selector queries over an [`ArenaDom`].

use selectors::context::{MatchingContext, SelectorCaches};
use selectors::parser::{ParseRelative, Selector, SelectorList};

use super::arena::{ArenaDom, NodeId};
use super::element_ref::{ElementRef, OutlineSelectors};
use super::node::MarkupTree;
use crate::error::{Error, Result};

/// A parsed, reusable selector list.
#[derive(Debug, Clone)]
pub struct Query {
    source: String,
    selectors: Vec<Selector<OutlineSelectors>>,
}

impl Query {
    /// Parse a comma-separated selector list.
    pub fn parse(source: &str) -> Result<Self> {
        let mut input = cssparser::ParserInput::new(source);
        let mut parser = cssparser::Parser::new(&mut input);
        let list = SelectorList::parse(&OutlineSelectors, &mut parser, ParseRelative::No)
            .map_err(|_| Error::InvalidSelector(source.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            selectors: list.slice().to_vec(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn matches(&self, elem: &ElementRef<'_>, caches: &mut SelectorCaches) -> bool {
        let mut context = MatchingContext::new(
            selectors::matching::MatchingMode::Normal,
            None,
            caches,
            selectors::context::QuirksMode::NoQuirks,
            selectors::matching::NeedsSelectorFlags::No,
            selectors::matching::MatchingForInvalidation::No,
        );
        self.selectors
            .iter()
            .any(|s| selectors::matching::matches_selector(s, 0, None, elem, &mut context))
    }
}

impl ArenaDom {
    /// All elements matching `query`, in document order.
    pub fn select(&self, query: &Query) -> Vec<NodeId> {
        let mut caches = SelectorCaches::default();
        self.descendants(self.document())
            .filter(|&id| self.is_element(id))
            .filter(|&id| query.matches(&ElementRef::new(self, id), &mut caches))
            .collect()
    }

    /// First element matching `query`, in document order.
    pub fn select_first(&self, query: &Query) -> Option<NodeId> {
        let mut caches = SelectorCaches::default();
        self.descendants(self.document())
            .filter(|&id| self.is_element(id))
            .find(|&id| query.matches(&ElementRef::new(self, id), &mut caches))
    }

    /// Parse `selector` and return its first match.
    ///
    /// Fails with [`Error::MissingElement`] when nothing matches.
    pub fn query_selector(&self, selector: &str) -> Result<NodeId> {
        let query = Query::parse(selector)?;
        self.select_first(&query)
            .ok_or_else(|| Error::MissingElement(selector.to_string()))
    }
}
