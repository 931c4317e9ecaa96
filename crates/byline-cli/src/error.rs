//! Errors surfaced by the `byline` binary.

use thiserror::Error;

use super::*;

/// Error type alias for the CLI.
pub type Result<T> = core::result::Result<T, CliError>;

/// Everything that can end a CLI invocation with a failure status.
///
/// Per-identifier fetch and parse problems are not here: they are reported
/// as warnings and the run still succeeds.
#[derive(Error, Debug)]
pub enum CliError {
  /// An error from the `byline` library, typically configuration or export.
  #[error(transparent)]
  Byline(#[from] BylineError),

  /// A prompt could not be shown or answered.
  #[error(transparent)]
  Interaction(#[from] dialoguer::Error),

  /// Reading the identifier list failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Neither arguments, an input file nor stdin supplied an identifier.
  #[error("No identifiers given. Pass DOIs as arguments, with --input, or on stdin.")]
  NoIdentifiers,
}
