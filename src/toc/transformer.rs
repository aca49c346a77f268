use log::{debug, error};

use crate::toc::level::HeadingSelection;
use crate::toc::matcher::HeadingMatcher;
use crate::toc::render::{render_listing, render_replacement};
use crate::toc::types::{HeadingMatch, TocEntry, TocLabels, TocMarkup};

/// Result of transforming one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub html: String,
    pub entries: Vec<TocEntry>,
}

/// Table of contents transform for a fixed selection and label set.
///
/// Compiles the matching rule once; `transform` can then be called for any
/// number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct TocTransformer {
    matcher: Option<HeadingMatcher>,
    labels: TocLabels,
    markup: TocMarkup,
}

impl TocTransformer {
    pub fn new(selection: &HeadingSelection, labels: TocLabels) -> Self {
        let matcher = match HeadingMatcher::new(selection) {
            Ok(matcher) => matcher,
            Err(e) => {
                // Treated as an empty selection
                error!("Failed to compile heading pattern for {}: {}", selection, e);
                None
            }
        };

        Self {
            matcher,
            labels,
            markup: TocMarkup::default(),
        }
    }

    pub fn with_markup(mut self, markup: TocMarkup) -> Self {
        self.markup = markup;
        self
    }

    /// Find the selected headings of `html` in document order
    pub fn headings(&self, html: &str) -> Vec<HeadingMatch> {
        match &self.matcher {
            Some(matcher) => matcher.find_headings(html, &self.labels.index_namespace),
            None => Vec::new(),
        }
    }

    /// Rewrite `html`, returning the new document together with its entries
    pub fn apply(&self, html: &str) -> Transformed {
        let headings = self.headings(html);
        if headings.is_empty() {
            return Transformed {
                html: html.to_string(),
                entries: Vec::new(),
            };
        }
        debug!("Indexing {} heading(s)", headings.len());

        let listing = render_listing(&headings, &self.labels.intro_label, &self.markup);

        // Replace by span so repeated identical headings each keep their own block
        let mut out = String::with_capacity(listing.len() + html.len() + headings.len() * 64);
        out.push_str(&listing);
        let mut cursor = 0;
        for heading in &headings {
            out.push_str(&html[cursor..heading.span.start]);
            out.push_str(&render_replacement(heading, &self.markup));
            cursor = heading.span.end;
        }
        out.push_str(&html[cursor..]);

        Transformed {
            html: out,
            entries: headings.iter().map(HeadingMatch::to_entry).collect(),
        }
    }

    pub fn transform(&self, html: &str) -> String {
        self.apply(html).html
    }
}

/// Add a table of contents to `html` for the selected heading levels.
///
/// Returns the input unchanged when the selection is empty or no heading
/// matches. Running this on its own output is not supported.
pub fn transform(html: &str, selection: &HeadingSelection, labels: &TocLabels) -> String {
    if selection.is_empty() {
        return html.to_string();
    }
    TocTransformer::new(selection, labels.clone()).transform(html)
}

/// Table of contents entries `transform` would produce for `html`
pub fn extract_entries(
    html: &str,
    selection: &HeadingSelection,
    labels: &TocLabels,
) -> Vec<TocEntry> {
    TocTransformer::new(selection, labels.clone())
        .headings(html)
        .iter()
        .map(HeadingMatch::to_entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::level::HeadingLevel;

    fn select(levels: &[HeadingLevel]) -> HeadingSelection {
        levels.iter().copied().collect()
    }

    #[test]
    fn test_no_headings_is_unchanged() {
        let html = "<p>Just text</p><h1>Title</h1>";
        let selection = select(&HeadingLevel::ALL);
        assert_eq!(transform(html, &selection, &TocLabels::default()), html);
    }

    #[test]
    fn test_empty_selection_is_unchanged() {
        let html = "<h2>A</h2><h3>B</h3>";
        assert_eq!(transform(html, &HeadingSelection::new(), &TocLabels::default()), html);
        assert_eq!(transform("", &HeadingSelection::new(), &TocLabels::default()), "");
    }

    #[test]
    fn test_single_heading() {
        let html = "<p>before</p><h2>Intro</h2><p>after</p>";
        let out = transform(html, &select(&[HeadingLevel::H2]), &TocLabels::default());

        assert_eq!(out.matches("<li ").count(), 1);
        assert_eq!(out.matches("href='#index-intro'").count(), 1);
        assert_eq!(out.matches("id='index-intro'").count(), 1);
        assert!(out.contains("<span class='index-anchor' id='index-intro'></span><h2>Intro</h2>"));
        let intro = "<p class='title-table-content'>What you will find in this article</p>";
        assert!(out.starts_with(intro));
    }

    #[test]
    fn test_listing_follows_document_order() {
        let html = "<h2>A</h2><h3>B</h3><h2>C</h2>";
        let out = transform(
            html,
            &select(&[HeadingLevel::H2, HeadingLevel::H3]),
            &TocLabels::default(),
        );

        let a = out.find("href='#index-a'").unwrap();
        let b = out.find("href='#index-b'").unwrap();
        let c = out.find("href='#index-c'").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_unselected_level_passthrough() {
        let html = "<h2 class='x'>Main</h2>\n<h3 class='y'>Side <b>note</b></h3>";
        let out = transform(html, &select(&[HeadingLevel::H2]), &TocLabels::default());

        assert!(out.contains("<h3 class='y'>Side <b>note</b></h3>"));
        assert!(!out.contains("<h2 class='x'>"));
        assert!(!out.contains("index-side-note"));
    }

    #[test]
    fn test_concrete_scenario() {
        let html = "<h2>First Point</h2><p>text</p><h3>Sub Point</h3>";
        let out = transform(
            html,
            &select(&[HeadingLevel::H2, HeadingLevel::H3]),
            &TocLabels::default(),
        );

        let expected = concat!(
            "<p class='title-table-content'>What you will find in this article</p>\n",
            "<ol class='table-content'>\n",
            "<li class='index-header-h2'><a class='index-header-link' href='#index-first-point'>First Point</a></li>\n",
            "<li class='index-header-h3'><a class='index-header-link' href='#index-sub-point'>Sub Point</a></li>\n",
            "</ol>\n",
            "<span class='index-anchor' id='index-first-point'></span><h2>First Point</h2>",
            "<p>text</p>",
            "<span class='index-anchor' id='index-sub-point'></span><h3>Sub Point</h3>",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_duplicate_blocks_replaced_per_occurrence() {
        let html = "<h2>Same</h2><p>one</p><h2>Same</h2>";
        let transformer = TocTransformer::new(&select(&[HeadingLevel::H2]), TocLabels::default());
        let result = transformer.apply(html);

        assert_eq!(result.entries.len(), 2);
        // Duplicate text still shares one anchor id
        assert_eq!(result.entries[0].anchor, result.entries[1].anchor);
        assert_eq!(result.html.matches("<span class='index-anchor' id='index-same'>").count(), 2);
        let tail = "<p>one</p><span class='index-anchor' id='index-same'></span><h2>Same</h2>";
        assert!(result.html.ends_with(tail));
    }

    #[test]
    fn test_inline_markup_dropped_in_replacement() {
        let html = "<h2 id=\"keep\">Hello <a href=\"/x\">World</a></h2>";
        let out = transform(html, &select(&[HeadingLevel::H2]), &TocLabels::default());
        let tail = "<span class='index-anchor' id='index-hello-world'></span><h2>Hello World</h2>";
        assert!(out.ends_with(tail));
    }

    #[test]
    fn test_labels_are_used() {
        let labels = TocLabels {
            index_namespace: "indice".to_string(),
            intro_label: "O que você vai encontrar".to_string(),
        };
        let out = transform("<h4>Próximo passo</h4>", &select(&[HeadingLevel::H4]), &labels);
        assert!(out.contains("O que você vai encontrar"));
        assert!(out.contains("id='indice-proximo-passo'"));
    }

    #[test]
    fn test_extract_entries() {
        let entries = extract_entries(
            "<h5>Five</h5><h6>Six</h6>",
            &select(&[HeadingLevel::H6]),
            &TocLabels::default(),
        );
        assert_eq!(
            entries,
            vec![TocEntry {
                level: HeadingLevel::H6,
                display_text: "Six".to_string(),
                anchor: "index-six".to_string(),
            }]
        );
    }
}
