//! Render hook: decides whether a document gets a table of contents and
//! applies the transform to its body.

use log::debug;

use crate::config::Config;
use crate::front_matter::{self, FrontMatter, TocSetting};
use crate::toc::{HeadingSelection, TocEntry, TocTransformer};

/// Outcome of rendering one document
#[derive(Debug, Clone)]
pub struct Rendered {
    pub front_matter: FrontMatter,
    /// Document body, with a table of contents when one was applied
    pub html: String,
    pub entries: Vec<TocEntry>,
}

impl Rendered {
    /// Whether a listing was added
    pub fn applied(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// The levels a document should be indexed with, if any
pub fn selection_for(front_matter: &FrontMatter, config: &Config) -> Option<HeadingSelection> {
    if !config.toc.accepts(front_matter.kind()) {
        debug!("Content type {:?} is not indexed", front_matter.kind());
        return None;
    }

    let selection = match front_matter.toc_setting() {
        TocSetting::Disabled => return None,
        TocSetting::Inherit => config.toc.default_selection(),
        TocSetting::Levels(levels) => levels,
    };

    if selection.is_empty() {
        None
    } else {
        Some(selection)
    }
}

/// Render a source document (front matter plus HTML body)
pub fn render_document(source: &str, config: &Config) -> Rendered {
    let (front_matter, body) = front_matter::split(source);

    match selection_for(&front_matter, config) {
        Some(selection) => {
            let transformer = TocTransformer::new(&selection, config.toc.labels())
                .with_markup(config.toc.markup.clone());
            let transformed = transformer.apply(body);
            Rendered {
                front_matter,
                html: transformed.html,
                entries: transformed.entries,
            }
        }
        None => Rendered {
            front_matter,
            html: body.to_string(),
            entries: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::HeadingLevel;

    fn config_with_defaults(levels: &[HeadingLevel]) -> Config {
        let mut config = Config::default();
        config.toc.default_levels = levels.to_vec();
        config
    }

    #[test]
    fn test_front_matter_levels() {
        let source = "---\nlayout: post\ntoc: [h3]\n---\n<h2>Two</h2><h3>Three</h3>";
        let rendered = render_document(source, &Config::default());

        assert!(rendered.applied());
        assert_eq!(rendered.entries.len(), 1);
        assert_eq!(rendered.entries[0].anchor, "index-three");
        assert!(rendered.html.contains("<h2>Two</h2>"));
        assert!(!rendered.html.contains("---"));
    }

    #[test]
    fn test_default_levels_apply_when_unset() {
        let source = "---\nlayout: post\n---\n<h2>Two</h2>";
        let rendered = render_document(source, &config_with_defaults(&[HeadingLevel::H2]));
        assert!(rendered.applied());

        // Nothing configured and nothing requested
        let rendered = render_document(source, &Config::default());
        assert!(!rendered.applied());
        assert_eq!(rendered.html, "<h2>Two</h2>");
    }

    #[test]
    fn test_toc_disabled() {
        let source = "---\nlayout: post\ntoc: false\n---\n<h2>Two</h2>";
        let rendered = render_document(source, &config_with_defaults(&[HeadingLevel::H2]));
        assert!(!rendered.applied());
        assert_eq!(rendered.html, "<h2>Two</h2>");
    }

    #[test]
    fn test_content_type_gate() {
        let page = "---\nlayout: page\ntoc: [h2]\n---\n<h2>Two</h2>";
        assert!(!render_document(page, &Config::default()).applied());

        let untyped = "<h2>Two</h2>";
        let mut config = config_with_defaults(&[HeadingLevel::H2]);
        assert!(!render_document(untyped, &config).applied());

        config.toc.content_types.clear();
        assert!(render_document(page, &config).applied());
        assert!(render_document(untyped, &config).applied());
    }

    #[test]
    fn test_config_labels_and_markup() {
        let mut config = config_with_defaults(&[HeadingLevel::H2]);
        config.toc.namespace = "sec".to_string();
        config.toc.intro_label = "Contents".to_string();
        config.toc.markup.list_class = "toc".to_string();

        let rendered = render_document("---\ntype: post\n---\n<h2>Hi</h2>", &config);
        assert!(rendered
            .html
            .starts_with("<p class='title-table-content'>Contents</p>\n<ol class='toc'>"));
        assert!(rendered.html.contains("id='sec-hi'"));
    }
}
