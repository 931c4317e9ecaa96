//! Sequential orchestration of a batch run.
//!
//! A [`Batch`] owns the manuscript source, the [`Extractor`] and the
//! batch-wide [`SeenNames`]. Identifiers are processed one at a time, in the
//! order given:
//!
//! 1. fetch the manuscript,
//! 2. parse it,
//! 3. extract its records, updating the seen names.
//!
//! A failure in step 1 or 2 is logged at `warn` level, recorded in the
//! [`BatchReport`], and the run continues with the next identifier. An empty
//! report is a normal outcome, see [`BatchReport::is_empty`].

use super::*;

/// Drives fetch, parse and extraction over many identifiers.
pub struct Batch {
  /// Manuscript source
  fetcher:   Box<dyn Fetcher>,
  /// Extraction rules
  extractor: Extractor,
  /// Names emitted so far, across every run of this batch
  seen:      SeenNames,
}

/// Outcome of [`Batch::run`].
#[derive(Debug)]
pub struct BatchReport {
  /// Every emitted record, in identifier then author order
  pub records:     Vec<Record>,
  /// One entry per identifier that was fetched and parsed
  pub documents:   Vec<DocumentSummary>,
  /// One entry per identifier that could not be processed
  pub failures:    Vec<Failure>,
  /// When the run began
  pub started_at:  DateTime<Utc>,
  /// When the run ended
  pub finished_at: DateTime<Utc>,
}

/// What one processed article contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
  /// Identifier as requested
  pub identifier: String,
  /// Extracted title
  pub title:      String,
  /// Number of records emitted, after de-duplication
  pub records:    usize,
}

/// An identifier that produced no document.
#[derive(Debug)]
pub struct Failure {
  /// Identifier as requested
  pub identifier: String,
  /// Why it was skipped
  pub reason:     BylineError,
}

impl Batch {
  /// Creates a batch with an empty set of seen names.
  pub fn new(fetcher: impl Fetcher + 'static, extractor: Extractor) -> Self {
    Self { fetcher: Box::new(fetcher), extractor, seen: SeenNames::new() }
  }

  /// Names emitted so far.
  pub fn seen(&self) -> &SeenNames { &self.seen }

  /// Forgets every emitted name, so the next run starts fresh.
  pub fn reset(&mut self) { self.seen.clear() }

  /// Splits newline-separated input with
  /// [`parse_identifiers`](identifier::parse_identifiers) and runs it.
  pub async fn run_input(&mut self, input: &str) -> BatchReport {
    let identifiers = crate::identifier::parse_identifiers(input);
    self.run(&identifiers).await
  }

  /// Processes `identifiers` in order.
  ///
  /// Never fails as a whole: per-identifier problems become [`Failure`]s.
  pub async fn run(&mut self, identifiers: &[String]) -> BatchReport {
    let mut report = BatchReport::new();
    debug!("Starting batch of {} identifiers", identifiers.len());

    for identifier in identifiers {
      if !crate::identifier::is_doi(identifier) {
        debug!("{} does not look like a DOI, fetching anyway", identifier);
      }

      match self.process(identifier).await {
        Ok(Extraction { title, records }) => {
          debug!("{}: {} records", identifier, records.len());
          report.documents.push(DocumentSummary {
            identifier: identifier.clone(),
            title,
            records: records.len(),
          });
          report.records.extend(records);
        },
        Err(reason) => {
          warn!("Could not retrieve {}: {}", identifier, reason);
          report.failures.push(Failure { identifier: identifier.clone(), reason });
        },
      }
    }

    report.finished_at = Utc::now();
    report
  }

  /// Fetches, parses and extracts a single identifier.
  async fn process(&mut self, identifier: &str) -> Result<Extraction> {
    let data = self.fetcher.fetch(identifier).await?;
    let document = Document::parse(&data)?;
    Ok(self.extractor.extract(identifier, &document, &mut self.seen))
  }
}

impl BatchReport {
  /// An empty report stamped with the current time.
  fn new() -> Self {
    let now = Utc::now();
    Self {
      records:     Vec::new(),
      documents:   Vec::new(),
      failures:    Vec::new(),
      started_at:  now,
      finished_at: now,
    }
  }

  /// Whether the run produced no records at all.
  ///
  /// This is the "nothing extracted" outcome. It is not an error: every
  /// identifier may have failed, or every article may have lacked authors.
  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
