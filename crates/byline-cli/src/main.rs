//! Command line interface for extracting author affiliations from PLOS ONE
//! articles.
//!
//! # Usage
//!
//! ```bash
//! # Extract authors of two articles and print them as a table
//! byline extract 10.1371/journal.pone.0123456 10.1371/journal.pone.0234567
//!
//! # Read DOIs from a file and export the table
//! byline extract --input dois.txt --output authors.csv
//!
//! # Work from manuscripts saved on disk
//! byline extract --from-dir manuscripts/ < dois.txt
//!
//! # Show the effective configuration
//! byline config
//! ```
//!
//! Logging goes to stderr and is controlled with `-v` (repeatable) or
//! `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use byline::{
  batch::{Batch, BatchReport},
  error::BylineError,
  export::{self, ExportFormat},
  extract::Extractor,
  fetch::{DirectoryFetcher, HttpFetcher},
  record::Record,
  Config,
};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Extract author affiliations from PLOS ONE manuscripts")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to a configuration file. If not specified, the platform-specific
  /// config directory is checked and defaults are used when nothing is there.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the byline CLI application
///
/// # Errors
///
/// Returns [`CliError`] when configuration cannot be loaded, no identifiers
/// are given, or the export cannot be written. Individual articles that fail
/// to download are reported as warnings and do not fail the run.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config = Config::load(cli.config.as_deref())?;
  trace!("Effective configuration: {:?}", config);
  let interaction = Terminal::new(cli.accept_defaults);

  let result = match cli.command {
    Commands::Extract(extract_args) => extract(&interaction, &config, extract_args).await.map(|_| ()),
    Commands::Config => show_config(&interaction, &config),
  };

  if let Err(error) = result {
    interaction.reply(ResponseContent::Error(error))?;
    std::process::exit(1);
  }
  Ok(())
}
