use std::path::PathBuf;

use crate::toc::{HeadingLevel, DEFAULT_INTRO_LABEL, DEFAULT_NAMESPACE};

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("_site")
}

/// File extensions processed as HTML documents
pub fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

/// Default anchor namespace token
pub fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Default introductory label
pub fn default_intro_label() -> String {
    DEFAULT_INTRO_LABEL.to_string()
}

/// Nothing is indexed unless a document asks for it
pub fn default_levels() -> Vec<HeadingLevel> {
    Vec::new()
}

/// Only posts get a table of contents
pub fn default_content_types() -> Vec<String> {
    vec!["post".to_string()]
}
