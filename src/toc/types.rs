use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::toc::level::HeadingLevel;

/// Namespace token used when none is configured
pub const DEFAULT_NAMESPACE: &str = "index";

/// Introductory label used when none is configured
pub const DEFAULT_INTRO_LABEL: &str = "What you will find in this article";

/// One heading found in the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    pub level: HeadingLevel,
    /// Byte range of `raw_block` within the source document
    pub span: Range<usize>,
    /// The exact matched text, tags included
    pub raw_block: String,
    /// Heading content with nested markup removed
    pub inner_text: String,
    pub slug: String,
}

impl HeadingMatch {
    pub fn to_entry(&self) -> TocEntry {
        TocEntry {
            level: self.level,
            display_text: self.inner_text.clone(),
            anchor: self.slug.clone(),
        }
    }
}

/// An item in the generated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub level: HeadingLevel,
    pub display_text: String,
    pub anchor: String,
}

/// Pre-localized strings supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocLabels {
    /// Prefix for every generated anchor
    pub index_namespace: String,
    /// Line shown above the listing
    pub intro_label: String,
}

impl Default for TocLabels {
    fn default() -> Self {
        Self {
            index_namespace: DEFAULT_NAMESPACE.to_string(),
            intro_label: DEFAULT_INTRO_LABEL.to_string(),
        }
    }
}

/// CSS classes used in generated markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocMarkup {
    /// Class of the paragraph holding the intro label
    pub title_class: String,
    /// Class of the ordered list
    pub list_class: String,
    /// Prefix of each item's class; the level tag is appended
    pub item_class_prefix: String,
    pub link_class: String,
    pub anchor_class: String,
}

impl Default for TocMarkup {
    fn default() -> Self {
        Self {
            title_class: "title-table-content".to_string(),
            list_class: "table-content".to_string(),
            item_class_prefix: "index-header-".to_string(),
            link_class: "index-header-link".to_string(),
            anchor_class: "index-anchor".to_string(),
        }
    }
}
