//! Splitting and normalizing the identifier list a user supplies.
//!
//! Input is one identifier per line. Users paste DOIs in several shapes, so
//! the common wrappers are removed before fetching:
//!
//! ```
//! use byline::identifier::parse_identifiers;
//!
//! let ids = parse_identifiers(
//!   "10.1371/journal.pone.0000001\n\n  https://doi.org/10.1371/journal.pone.0000002 \ndoi:10.1371/journal.pone.0000003",
//! );
//! assert_eq!(ids, vec![
//!   "10.1371/journal.pone.0000001",
//!   "10.1371/journal.pone.0000002",
//!   "10.1371/journal.pone.0000003",
//! ]);
//! ```

use super::*;

lazy_static! {
  /// A bare DOI: `10.` + registrant code + `/` + suffix.
  static ref DOI_PATTERN: Regex = Regex::new(r"^10\.\d{4,9}/\S+$").expect("valid DOI pattern");
  /// Wrappers commonly pasted around a DOI.
  static ref DOI_PREFIX: Regex =
    Regex::new(r"(?i)^(?:doi:\s*|https?://(?:dx\.)?doi\.org/)").expect("valid DOI prefix pattern");
}

/// Splits newline-separated input into normalized identifiers.
///
/// Each line is trimmed, blank lines are skipped, and DOI wrappers are
/// removed with [`normalize`]. Order and repeats are preserved.
pub fn parse_identifiers(input: &str) -> Vec<String> {
  input.lines().map(str::trim).filter(|line| !line.is_empty()).map(normalize).collect()
}

/// Removes a `doi:` or `https://doi.org/` wrapper from one identifier.
///
/// Anything that is not recognizably wrapped is returned trimmed and
/// otherwise unchanged.
pub fn normalize(identifier: &str) -> String {
  let identifier = identifier.trim();
  let stripped = DOI_PREFIX.replace(identifier, "");
  if stripped != identifier {
    trace!("Normalized identifier {} to {}", identifier, stripped);
  }
  stripped.into_owned()
}

/// Whether the identifier has the shape of a bare DOI.
pub fn is_doi(identifier: &str) -> bool { DOI_PATTERN.is_match(identifier) }
