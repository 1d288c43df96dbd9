//!
//! This binary provides shell-facing preflight checks for REACT analysis
//! jobs, so a long regression run can fail on a bad output path before it
//! starts instead of hours in.

use clap::{Parser, Subcommand};
use react_core::check_can_write_file;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Core(#[from] react_core::Error),
}

/// Preflight utilities for REACT analysis runs.
#[derive(Parser)]
#[command(name = "react-util")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that an output file path can be written
    Check {
        /// Target file path
        path: PathBuf,

        /// Allow overwriting an existing file
        #[arg(short, long)]
        force: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            force,
            verbose,
        } => {
            let filter = if verbose { "debug" } else { "warn" };
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
                .init();

            check_can_write_file(&path, force)?;
            println!("ok: {} can be written", path.display());
        }
    }

    Ok(())
}
