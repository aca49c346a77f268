//! Heading extraction by tag boundaries.
//!
//! This is a pattern scan over raw text, not an HTML parser. Unbalanced tags
//! or a heading nested inside another heading of the same level can make a
//! match span further than intended; such input produces garbled but
//! well-defined output.

use regex::Regex;

use crate::toc::level::{HeadingLevel, HeadingSelection};
use crate::toc::anchor::{generate_slug, strip_html_tags};
use crate::toc::types::HeadingMatch;

/// Compiled matching rule for one heading selection
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    regex: Regex,
    levels: Vec<HeadingLevel>,
}

impl HeadingMatcher {
    /// Compile a single rule covering every selected level.
    ///
    /// Each level gets its own branch with a capture group named after the
    /// tag, so a heading always closes with the tag it opened with.
    /// Returns `None` for an empty selection.
    pub fn new(selection: &HeadingSelection) -> Result<Option<Self>, regex::Error> {
        if selection.is_empty() {
            return Ok(None);
        }

        let levels: Vec<HeadingLevel> = selection.iter().collect();
        let branches: Vec<String> = levels
            .iter()
            .map(|level| {
                let tag = level.tag();
                format!(r"<{tag}\b[^>]*>(?P<{tag}>.*?)</{tag}\s*>")
            })
            .collect();
        let pattern = format!("(?is){}", branches.join("|"));

        Ok(Some(Self {
            regex: Regex::new(&pattern)?,
            levels,
        }))
    }

    /// Scan `html` for every non-overlapping heading, in document order
    pub fn find_headings(&self, html: &str, namespace: &str) -> Vec<HeadingMatch> {
        let mut headings = Vec::new();

        for caps in self.regex.captures_iter(html) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let found = self
                .levels
                .iter()
                .find_map(|level| caps.name(level.tag()).map(|inner| (*level, inner)));

            if let Some((level, inner)) = found {
                let inner_text = strip_html_tags(inner.as_str()).trim().to_string();
                let slug = generate_slug(&inner_text, namespace);
                headings.push(HeadingMatch {
                    level,
                    span: whole.range(),
                    raw_block: whole.as_str().to_string(),
                    inner_text,
                    slug,
                });
            }
        }

        headings
    }
}
