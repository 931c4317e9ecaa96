//! Tabular export of extracted records.
//!
//! Columns are always `Title, Name, Order, Affiliation, DOI`, in that order,
//! with a header row even when there are no records.

use std::io::Write;

use super::*;

/// Column headers of every export.
pub const COLUMNS: [&str; 5] = ["Title", "Name", "Order", "Affiliation", "DOI"];

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
  /// Comma-separated values with a header row
  #[default]
  Csv,
  /// A pretty-printed JSON array of objects keyed by column name
  Json,
}

impl ExportFormat {
  /// Infers the format from a file extension, case-insensitively.
  pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
    let extension = path.as_ref().extension()?.to_str()?;
    Self::from_str(extension).ok()
  }
}

impl FromStr for ExportFormat {
  type Err = BylineError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "csv" => Ok(Self::Csv),
      "json" => Ok(Self::Json),
      other => Err(BylineError::Config(format!("Unsupported export format \"{other}\""))),
    }
  }
}

impl Display for ExportFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Csv => write!(f, "csv"),
      Self::Json => write!(f, "json"),
    }
  }
}

/// Writes `records` as CSV.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<()> {
  let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
  writer.write_record(COLUMNS)?;
  for record in records {
    writer.serialize(record)?;
  }
  writer.flush()?;
  Ok(())
}

/// Writes `records` as a JSON array.
pub fn write_json<W: Write>(records: &[Record], mut writer: W) -> Result<()> {
  serde_json::to_writer_pretty(&mut writer, records)?;
  writeln!(writer)?;
  Ok(())
}

/// Writes `records` in `format`.
pub fn write<W: Write>(records: &[Record], format: ExportFormat, writer: W) -> Result<()> {
  match format {
    ExportFormat::Csv => write_csv(records, writer),
    ExportFormat::Json => write_json(records, writer),
  }
}

/// Creates or truncates `path` and writes `records` to it.
pub fn write_file(records: &[Record], format: ExportFormat, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  debug!("Writing {} records as {} to {}", records.len(), format, path.display());
  let file = std::fs::File::create(path)?;
  write(records, format, std::io::BufWriter::new(file))
}
