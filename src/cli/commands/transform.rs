use log::{debug, info};
use std::path::PathBuf;

use crate::cli::types::{Commands, OutputFormat};
use crate::config::{self, Config};
use crate::pipeline::render_document;
use crate::toc::{HeadingSelection, TocEntry, TocTransformer};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the transform command
pub fn handle_transform_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Transform {
        input,
        output,
        levels,
        namespace,
        intro_label,
        config: cfg_files,
        format,
    } = command
    {
        let mut config = config::load_config(PathBuf::from("."), cfg_files.clone())?;
        if let Some(namespace) = namespace {
            config.toc.namespace = namespace.clone();
        }
        if let Some(label) = intro_label {
            config.toc.intro_label = label.clone();
        }

        let source = fs::read_input(input.as_deref())?;
        let (html, entries) = transform_source(&source, levels.as_deref(), &config)?;
        info!("Table of contents has {} entries", entries.len());

        let rendered = render_output(html, &entries, *format)?;
        fs::write_output(output.as_deref(), &rendered)?;
    }

    Ok(())
}

/// Format the command's result: the document itself or its entries as JSON
fn render_output(html: String, entries: &[TocEntry], format: OutputFormat) -> BoxResult<String> {
    match format {
        OutputFormat::Html => Ok(html),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)? + "\n"),
    }
}

/// With explicit levels the whole input is treated as HTML; otherwise it
/// goes through the front matter pipeline
fn transform_source(
    source: &str,
    levels: Option<&str>,
    config: &Config,
) -> BoxResult<(String, Vec<TocEntry>)> {
    match levels {
        Some(list) => {
            let selection = HeadingSelection::parse_list(list)?;
            debug!("Indexing levels {}", selection);
            let transformed = TocTransformer::new(&selection, config.toc.labels())
                .with_markup(config.toc.markup.clone())
                .apply(source);
            Ok((transformed.html, transformed.entries))
        }
        None => {
            let rendered = render_document(source, config);
            Ok((rendered.html, rendered.entries))
        }
    }
}
