//! Table of contents generation for HTML articles.
//!
//! The core is [`toc::transform`]: given an HTML document and a set of
//! heading levels it prepends an ordered listing of those headings and puts
//! an anchor in front of each one. Around it sit the pieces a site tool
//! needs: configuration, front matter, a render hook and a directory builder.

pub mod builder;
pub mod cli;
pub mod config;
pub mod front_matter;
pub mod pipeline;
pub mod toc;
pub mod utils;

pub use config::{load_config, Config};
pub use pipeline::{render_document, Rendered};
pub use toc::{
    generate_slug, transform, HeadingLevel, HeadingSelection, TocEntry, TocLabels, TocTransformer,
};
