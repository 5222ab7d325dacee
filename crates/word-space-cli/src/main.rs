//! Word-Space CLI
//!
//! Diagnostic tools for the word-space projection engine.
//!
//! # Commands
//!
//! - `inspect`: validate a vocabulary + embedding blob and report its shape
//! - `launch`: run the full projection pipeline and emit a session summary
//! - `probe`: launch, then run visibility and nearest-word queries from a
//!   viewer position
//!
//! The rendering layer is an external collaborator; this binary only drives
//! the engine and prints JSON to stdout for inspection or piping.

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, CliResult};

/// Word-Space CLI - projection engine diagnostics
#[derive(Parser)]
#[command(name = "word-space-cli")]
#[command(version = "0.1.0")]
#[command(about = "Diagnostic CLI for the word-space projection engine")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a vocabulary + embedding blob and report word count and dimensionality
    Inspect(commands::inspect::InspectArgs),
    /// Run the projection pipeline for a six-word axis file and emit a session summary
    Launch(commands::launch::LaunchArgs),
    /// Launch, then query visibility and nearest words from a viewer position
    Probe(commands::probe::ProbeArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Inspect(args) => commands::inspect::handle_inspect(args),
        Commands::Launch(args) => commands::launch::handle_launch(args),
        Commands::Probe(args) => commands::probe::handle_probe(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
