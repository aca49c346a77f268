pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

use crate::cli::types::{Cli, Commands};

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = Cli::parse();

    logging::init_logging(cli.debug, cli.quiet);

    let result = match &cli.command {
        Commands::Transform { .. } => commands::handle_transform_command(&cli.command),
        Commands::Build { .. } => commands::handle_build_command(&cli.command),
        Commands::Slug { text, namespace } => commands::handle_slug_command(text, namespace),
        Commands::Levels => commands::handle_levels_command(),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    }
}
