//! Subcommands of the `byline` binary.

use super::*;

pub mod config;
pub mod extract;

pub use config::show_config;
pub use extract::{extract, ExtractArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Extract authors and affiliations for a list of DOIs
  Extract(ExtractArgs),

  /// Print the effective configuration as TOML
  Config,
}
