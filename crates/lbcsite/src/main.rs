//! lbcsite CLI - builds the LBC-bench leaderboard site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "lbcsite")]
#[command(about = "Static site builder for the LBC-bench leaderboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Project root containing data, templates, and assets
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the datasets without building
    Check {
        /// Project root containing the data directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Build { root, output } => {
            commands::build::run(root, output)?;
        }
        Commands::Check { root } => {
            commands::check::run(root)?;
        }
    }

    Ok(())
}
