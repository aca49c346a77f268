use log::info;
use std::path::PathBuf;

use crate::builder;
use crate::cli::types::Commands;
use crate::config;
use crate::utils::error::{BoxResult, IndexError};

/// Handle the build command
pub fn handle_build_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Build {
        source,
        destination,
        config: cfg_files,
    } = command
    {
        let source_dir = source.clone().unwrap_or_else(|| PathBuf::from("."));
        let mut config = config::load_config(&source_dir, cfg_files.clone())?;

        // Command line arguments take precedence over config files
        if let Some(source) = source {
            config.source = source.clone();
        }
        if let Some(destination) = destination {
            config.destination = destination.clone();
        }

        info!(
            "Indexing {} into {}",
            config.source.display(),
            config.destination.display()
        );
        let report = builder::build_site(&config)?;
        info!("{}", report);

        if report.failed > 0 {
            return Err(IndexError::Generic(format!("{} file(s) failed", report.failed)).into());
        }
    }

    Ok(())
}
