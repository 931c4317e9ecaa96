//! Author and affiliation extraction for PLOS ONE manuscripts.
//!
//! `byline` turns a list of article DOIs into a flat table of author
//! records. For each article it fetches the JATS manuscript XML, reads the
//! title, resolves each author's affiliation, and marks first and
//! corresponding authors:
//!
//! - Manuscript retrieval over HTTP or from a local directory
//! - A small owned XML tree with descendant queries
//! - Batch-wide de-duplication of author names
//! - CSV and JSON export
//!
//! # Getting Started
//!
//! ```no_run
//! use byline::{batch::Batch, export, extract::Extractor, fetch::HttpFetcher, prelude::*, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::default();
//!   let mut batch = Batch::new(HttpFetcher::new(&config)?, Extractor::new(&config));
//!
//!   let report = batch.run_input("10.1371/journal.pone.0000001\n10.1371/journal.pone.0000002").await;
//!   for failure in &report.failures {
//!     eprintln!("skipped {}: {}", failure.identifier, failure.reason);
//!   }
//!
//!   export::write_csv(&report.records, std::io::stdout())?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`document`]: XML parsing into a queryable element tree
//! - [`extract`]: The per-document extraction rules
//! - [`batch`]: Sequential orchestration over many identifiers
//! - [`fetch`]: Manuscript sources
//! - [`identifier`]: Input splitting and DOI normalization
//! - [`export`]: Tabular output
//! - [`record`]: The output row type
//! - [`config`]: User configuration

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::{BTreeMap, HashMap, HashSet},
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod identifier;
pub mod record;

pub use crate::config::Config;
use crate::{
  config::{DedupPolicy, TextStyle},
  document::{Document, Element},
  error::*,
  extract::{Extraction, Extractor, SeenNames},
  fetch::Fetcher,
  record::{Record, Role},
};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use byline::prelude::*;
///
/// async fn first_bytes(fetcher: &impl Fetcher) -> Result<usize, BylineError> {
///   Ok(fetcher.fetch("10.1371/journal.pone.0000001").await?.len())
/// }
/// ```
pub mod prelude {
  pub use crate::{error::BylineError, fetch::Fetcher};
}
