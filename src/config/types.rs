use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::toc::{HeadingLevel, HeadingSelection, TocLabels, TocMarkup};

/// Table of contents settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Prefix of every generated anchor id
    #[serde(default = "defaults::default_namespace")]
    pub namespace: String,

    /// Line shown above the listing, already localized
    #[serde(default = "defaults::default_intro_label")]
    pub intro_label: String,

    /// Levels used for documents whose front matter has no `toc` key
    #[serde(default = "defaults::default_levels")]
    pub default_levels: Vec<HeadingLevel>,

    /// Content types that get a table of contents; empty means all
    #[serde(default = "defaults::default_content_types")]
    pub content_types: Vec<String>,

    /// CSS classes of the generated markup
    #[serde(default)]
    pub markup: TocMarkup,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            namespace: defaults::default_namespace(),
            intro_label: defaults::default_intro_label(),
            default_levels: defaults::default_levels(),
            content_types: defaults::default_content_types(),
            markup: TocMarkup::default(),
        }
    }
}

impl TocConfig {
    pub fn labels(&self) -> TocLabels {
        TocLabels {
            index_namespace: self.namespace.clone(),
            intro_label: self.intro_label.clone(),
        }
    }

    pub fn default_selection(&self) -> HeadingSelection {
        self.default_levels.iter().copied().collect()
    }

    /// Whether a document of the given content type may be indexed
    pub fn accepts(&self, kind: Option<&str>) -> bool {
        if self.content_types.is_empty() {
            return true;
        }
        match kind {
            Some(kind) => self.content_types.iter().any(|t| t.eq_ignore_ascii_case(kind)),
            None => false,
        }
    }
}

/// Site configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the documents to index
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Directory receiving the processed documents
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Extensions of files run through the transform
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub toc: TocConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            extensions: defaults::default_extensions(),
            toc: TocConfig::default(),
        }
    }
}

impl Config {
    /// Whether a file extension marks an HTML document
    pub fn is_document_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.toc.namespace, "index");
        assert!(config.toc.default_selection().is_empty());
    }

    #[test]
    fn test_accepts_content_type() {
        let mut toc = TocConfig::default();
        assert!(toc.accepts(Some("post")));
        assert!(toc.accepts(Some("Post")));
        assert!(!toc.accepts(Some("page")));
        assert!(!toc.accepts(None));

        toc.content_types.clear();
        assert!(toc.accepts(None));
    }

    #[test]
    fn test_partial_markup() {
        let yaml = "toc:\n  markup:\n    list_class: toc\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.toc.markup.list_class, "toc");
        assert_eq!(config.toc.markup.anchor_class, "index-anchor");
    }

    #[test]
    fn test_is_document_extension() {
        let config = Config::default();
        assert!(config.is_document_extension("HTML"));
        assert!(!config.is_document_extension("css"));
    }
}
