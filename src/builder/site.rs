use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::builder::types::{BuildReport, FileOutcome};
use crate::config::Config;
use crate::pipeline::render_document;
use crate::utils::error::{BoxResult, IndexError};
use crate::utils::fs;

/// Hidden entries and `_`-prefixed ones (config files, output dirs) are not content
fn is_content_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !(name.starts_with('.') || name.starts_with('_'))
}

/// Resolve a path for comparison, keeping it as given when it cannot be resolved
fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Collect every content file below the source directory.
///
/// Paths are compared in resolved form so the destination is skipped however
/// it is spelled (`public` vs `./public`), even when nested in the source.
fn collect_files(config: &Config) -> Vec<PathBuf> {
    let source = resolve(&config.source);
    let destination = resolve(&config.destination);
    let is_destination = |entry: &DirEntry| match entry.path().strip_prefix(&config.source) {
        Ok(relative) => source.join(relative).starts_with(&destination),
        Err(_) => false,
    };

    WalkDir::new(&config.source)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| is_content_entry(e) && !is_destination(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
        .collect()
}

fn process_file(config: &Config, source: &Path) -> BoxResult<FileOutcome> {
    let relative = source
        .strip_prefix(&config.source)
        .map_err(|e| IndexError::Generic(format!("Failed to get relative path: {}", e)))?;
    let target = config.destination.join(relative);

    let is_document = source
        .extension()
        .map(|ext| config.is_document_extension(&ext.to_string_lossy()))
        .unwrap_or(false);

    if !is_document {
        fs::copy_file(source, &target)?;
        return Ok(FileOutcome::Copied);
    }

    let content = fs::read_file(source)?;
    let rendered = render_document(&content, config);
    fs::write_file(&target, &rendered.html)?;

    if rendered.applied() {
        debug!("Indexed {} ({} entries)", relative.display(), rendered.entries.len());
        Ok(FileOutcome::Indexed)
    } else {
        Ok(FileOutcome::Unchanged)
    }
}

/// Process every file of `config.source` into `config.destination`
pub fn build_site(config: &Config) -> BoxResult<BuildReport> {
    if !config.source.is_dir() {
        return Err(IndexError::Config(format!(
            "Source directory does not exist: {}",
            config.source.display()
        ))
        .into());
    }

    fs::create_directory(&config.destination)?;

    let files = collect_files(config);
    info!("Found {} file(s) in {}", files.len(), config.source.display());

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| match process_file(config, path) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Failed to process {}: {}", path.display(), e);
                FileOutcome::Failed
            }
        })
        .collect();

    let mut report = BuildReport::default();
    for outcome in outcomes {
        match outcome {
            FileOutcome::Indexed => {
                report.processed += 1;
                report.indexed += 1;
            }
            FileOutcome::Unchanged => report.processed += 1,
            FileOutcome::Copied => report.copied += 1,
            FileOutcome::Failed => report.failed += 1,
        }
    }

    Ok(report)
}
