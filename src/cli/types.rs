use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "content-index")]
#[command(about = "Adds a navigable table of contents to HTML articles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Output format of the transform command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The rewritten document
    Html,
    /// The table of contents entries as JSON
    Json,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Add a table of contents to a single document
    #[command(alias = "t")]
    Transform {
        /// Input file (reads stdin when absent or `-`)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (writes stdout when absent)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Heading levels to index, e.g. `h2,h3`; skips front matter handling
        #[arg(short, long, value_name = "LEVELS")]
        levels: Option<String>,

        /// Anchor namespace token
        #[arg(short, long, value_name = "TOKEN")]
        namespace: Option<String>,

        /// Label shown above the listing
        #[arg(short, long, value_name = "TEXT")]
        intro_label: Option<String>,

        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Index every document of a directory
    #[command(alias = "b")]
    Build {
        /// Source directory (defaults to ./)
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Destination directory (defaults to ./_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,
    },

    /// Print the anchor slug generated for a heading text
    Slug {
        /// Heading text
        text: String,

        /// Anchor namespace token
        #[arg(short, long, value_name = "TOKEN", default_value = crate::toc::DEFAULT_NAMESPACE)]
        namespace: String,
    },

    /// List the selectable heading levels
    Levels,
}
