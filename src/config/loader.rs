use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, IndexError};
use crate::utils::fs;

/// Configuration file names to look for, in priority order
const CONFIG_FILES: [&str; 4] = ["_config.yml", "_config.yaml", "_config.toml", "_config.json"];

/// Load configuration for a source directory.
///
/// Explicit files are merged in order; without them the first default
/// config file found in `source_dir` is used.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_file(&source_dir).into_iter().collect(),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let file_config = read_config_file(&path)?;
            merge_configs(&mut config, &file_config);
        }
    }

    if config.source == defaults::default_source() {
        config.source = source_dir.as_ref().to_path_buf();
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Read and parse one configuration file
fn read_config_file(config_path: &Path) -> BoxResult<Config> {
    if !config_path.exists() {
        return Err(IndexError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        ))
        .into());
    }

    let content = fs::read_file(config_path).map_err(|e| {
        IndexError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    // Assume YAML if no extension
    let parsed = match ext.as_str() {
        "" | "yml" | "yaml" => parse_yaml_config(&content),
        "toml" => parse_toml_config(&content),
        "json" => parse_json_config(&content),
        other => {
            return Err(IndexError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            ))
            .into())
        }
    };

    parsed.map_err(|msg| {
        IndexError::Config(format!(
            "Failed to parse configuration ({}): {}",
            config_path.display(),
            msg
        ))
        .into()
    })
}

fn parse_yaml_config(content: &str) -> Result<Config, String> {
    // An empty YAML document is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}

fn parse_toml_config(content: &str) -> Result<Config, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}

fn parse_json_config(content: &str) -> Result<Config, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}

/// Merge `source` into `target`, only overriding non-default values
fn merge_configs(target: &mut Config, source: &Config) {
    if source.source != defaults::default_source() {
        target.source = source.source.clone();
    }

    if source.destination != defaults::default_destination() {
        target.destination = source.destination.clone();
    }

    if source.extensions != defaults::default_extensions() {
        target.extensions = source.extensions.clone();
    }

    let (into, from) = (&mut target.toc, &source.toc);
    if from.namespace != defaults::default_namespace() {
        into.namespace = from.namespace.clone();
    }
    if from.intro_label != defaults::default_intro_label() {
        into.intro_label = from.intro_label.clone();
    }
    if from.default_levels != defaults::default_levels() {
        into.default_levels = from.default_levels.clone();
    }
    if from.content_types != defaults::default_content_types() {
        into.content_types = from.content_types.clone();
    }
    if from.markup != Default::default() {
        into.markup = from.markup.clone();
    }
}
