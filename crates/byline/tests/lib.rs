use std::{error::Error, path::PathBuf};

use byline::{
  batch::{Batch, BatchReport},
  config::DedupPolicy,
  export::{self, ExportFormat},
  extract::Extractor,
  fetch::DirectoryFetcher,
  Config,
};
use tempfile::tempdir;

mod workflows;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

pub const FIRST_DOI: &str = "10.1371/journal.pone.0000001";
pub const SECOND_DOI: &str = "10.1371/journal.pone.0000002";
pub const CORRECTION_DOI: &str = "10.1371/journal.pone.0000003";
pub const MISSING_DOI: &str = "10.1371/journal.pone.0000404";

/// Directory holding the fixture manuscripts.
pub fn data_dir() -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data") }

/// A batch reading fixtures from disk.
pub fn fixture_batch(config: &Config) -> Batch {
  Batch::new(DirectoryFetcher::new(data_dir()), Extractor::new(config))
}

/// Runs newline-separated identifiers against the fixtures with `config`.
pub async fn run_fixtures(config: &Config, input: &str) -> BatchReport {
  fixture_batch(config).run_input(input).await
}
