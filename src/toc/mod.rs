mod anchor;
mod level;
mod matcher;
mod render;
mod transformer;
mod types;

pub use self::anchor::{generate_slug, strip_html_tags};
pub use self::level::{HeadingLevel, HeadingSelection};
pub use self::matcher::HeadingMatcher;
pub use self::render::{render_listing, render_replacement};
pub use self::transformer::{extract_entries, transform, TocTransformer, Transformed};
pub use self::types::{
    HeadingMatch, TocEntry, TocLabels, TocMarkup, DEFAULT_INTRO_LABEL, DEFAULT_NAMESPACE,
};
