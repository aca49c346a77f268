use log::{info, warn};

use crate::config::Config;
use crate::utils::error::{BoxResult, IndexError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_source_directory(config)?;
    validate_namespace(config);
    validate_extensions(config);
    Ok(())
}

/// The source directory must exist
fn validate_source_directory(config: &Config) -> BoxResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(IndexError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        ))
        .into());
    }

    if !source.is_dir() {
        return Err(IndexError::Config(format!(
            "Source path is not a directory: {}",
            source.display()
        ))
        .into());
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Anchors stay usable with an odd namespace, so only warn
fn validate_namespace(config: &Config) {
    let namespace = &config.toc.namespace;
    if namespace.is_empty() {
        warn!("Empty toc namespace: anchors will start with '-'");
    } else if slug::slugify(namespace) != *namespace {
        warn!(
            "toc namespace '{}' is not URL-safe (suggested: '{}')",
            namespace,
            slug::slugify(namespace)
        );
    }
}

fn validate_extensions(config: &Config) {
    if config.extensions.is_empty() {
        warn!("No document extensions configured: build will only copy files");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_source_fails() {
        let config = Config {
            source: PathBuf::from("/definitely/not/here"),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_odd_namespace_only_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            source: dir.path().to_path_buf(),
            ..Config::default()
        };
        config.toc.namespace = "My Index".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
