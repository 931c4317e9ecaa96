//! Error types for the byline library.
//!
//! A single error enum covers every failure mode of a batch run:
//! - Fetching manuscripts (network, HTTP status, missing local files)
//! - Parsing manuscript XML
//! - Loading and saving configuration
//! - Writing exports
//!
//! Per-identifier failures (fetch or parse) never abort a batch. The
//! [`Batch`](crate::batch::Batch) orchestrator turns them into
//! [`Failure`](crate::batch::Failure) entries and keeps going. Errors only
//! surface to callers for configuration and export problems.
//!
//! # Examples
//!
//! ```no_run
//! use byline::{error::BylineError, fetch::{Fetcher, HttpFetcher}, Config};
//!
//! # async fn example() -> Result<(), BylineError> {
//! let fetcher = HttpFetcher::new(&Config::default())?;
//! match fetcher.fetch("10.1371/journal.pone.0000000").await {
//!   Err(BylineError::FetchStatus { status }) => println!("Server said {status}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(bytes) => println!("Fetched {} bytes", bytes.len()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`byline`](crate) crate.
pub type Result<T> = core::result::Result<T, BylineError>;

/// Errors that can occur while extracting author metadata.
#[derive(Error, Debug)]
pub enum BylineError {
  /// The identifier could not be turned into a request.
  ///
  /// This occurs when the endpoint template produces an invalid URL for the
  /// given identifier.
  #[error("Invalid identifier format")]
  InvalidIdentifier,

  /// A network request failed before any status was received.
  ///
  /// Covers DNS failures, refused connections, TLS errors and timeouts.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The server answered with a non-success status.
  #[error("Fetch failed with HTTP status {status}")]
  FetchStatus {
    /// The HTTP status code returned by the server.
    status: u16,
  },

  /// The requested manuscript does not exist in a local directory source.
  #[error("Manuscript not found")]
  NotFound,

  /// The manuscript could not be parsed as XML.
  #[error(transparent)]
  Xml(#[from] quick_xml::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// JSON export failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// CSV export failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// The configuration is unusable.
  #[error("{0}")]
  Config(String),
}
