//! Markup conventions the extractors look for.

/// Tag and attribute names that describe an outline page.
///
/// The defaults match wiki pages built from `<ul>/<li>` outlines, with
/// `<a name>` jump targets inside section headings and `<h4>` subtitles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLayout {
    /// Nested list container.
    pub list: String,
    /// Entry inside a list.
    pub item: String,
    /// Link carrying a trail entry.
    pub link: String,
    /// Heading that titles a section.
    pub subtitle: String,
    /// Element whose caption names an entity.
    pub entity: String,
    /// Attribute holding the entity caption.
    pub entity_attr: String,
    /// Attribute naming a jump target.
    pub anchor_attr: String,
}

impl Default for OutlineLayout {
    fn default() -> Self {
        Self {
            list: "ul".to_string(),
            item: "li".to_string(),
            link: "a".to_string(),
            subtitle: "h4".to_string(),
            entity: "img".to_string(),
            entity_attr: "title".to_string(),
            anchor_attr: "name".to_string(),
        }
    }
}

impl OutlineLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, tag: impl Into<String>) -> Self {
        self.list = tag.into();
        self
    }

    pub fn with_item(mut self, tag: impl Into<String>) -> Self {
        self.item = tag.into();
        self
    }

    pub fn with_link(mut self, tag: impl Into<String>) -> Self {
        self.link = tag.into();
        self
    }

    pub fn with_subtitle(mut self, tag: impl Into<String>) -> Self {
        self.subtitle = tag.into();
        self
    }

    pub fn with_entity(mut self, tag: impl Into<String>, attr: impl Into<String>) -> Self {
        self.entity = tag.into();
        self.entity_attr = attr.into();
        self
    }

    pub fn with_anchor_attr(mut self, attr: impl Into<String>) -> Self {
        self.anchor_attr = attr.into();
        self
    }
}
