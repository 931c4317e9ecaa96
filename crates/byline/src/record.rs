//! The output row of an extraction.

use super::*;

/// One author of one article, ready for tabular export.
///
/// Serialization uses the column names and order of the exported sheet:
/// `Title, Name, Order, Affiliation, DOI`. The [`Role`] is kept alongside for
/// presentation and is not exported, since it is already spelled out in the
/// name marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  /// Article title, or the missing placeholder
  #[serde(rename = "Title")]
  pub title:       String,
  /// Display name with its role marker appended, if any
  #[serde(rename = "Name")]
  pub name:        String,
  /// 1-based position in the article's author list
  #[serde(rename = "Order")]
  pub order:       usize,
  /// Resolved affiliation text, or the missing placeholder
  #[serde(rename = "Affiliation")]
  pub affiliation: String,
  /// Identifier the article was requested with
  #[serde(rename = "DOI")]
  pub doi:         String,
  /// Role that produced the name marker
  #[serde(skip)]
  pub role:        Option<Role>,
}

/// Author roles that get a marker appended to the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
  /// First position in the author list
  First,
  /// Has a corresponding-author cross-reference and is not first
  Corresponding,
}

impl Record {
  /// Whether this row belongs to an article's first author.
  pub fn is_first_author(&self) -> bool { self.role == Some(Role::First) }
}

impl Display for Role {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Role::First => write!(f, "first author"),
      Role::Corresponding => write!(f, "corresponding author"),
    }
  }
}
