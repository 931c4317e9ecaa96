//! Module for the "extract" command.

use std::io::{IsTerminal, Read};

use super::*;

/// Arguments that can be used for the [`Commands::Extract`]
#[derive(Args, Clone)]
pub struct ExtractArgs {
  /// Article DOIs, e.g. "10.1371/journal.pone.0123456"
  pub identifiers: Vec<String>,

  /// File with one DOI per line
  #[arg(long, short)]
  pub input: Option<PathBuf>,

  /// Read manuscripts from `<DIR>/<doi with / replaced by _>.xml` instead of
  /// downloading them
  #[arg(long, value_name = "DIR")]
  pub from_dir: Option<PathBuf>,

  /// Write the records to this file
  #[arg(long, short)]
  pub output: Option<PathBuf>,

  /// Export format (csv, json). Inferred from the output extension, csv
  /// when that fails
  #[arg(long)]
  pub format: Option<ExportFormat>,
}

/// Function for the [`Commands::Extract`] in the CLI.
pub async fn extract<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  extract_args: ExtractArgs,
) -> Result<BatchReport> {
  let ExtractArgs { identifiers, input, from_dir, output, format } = extract_args;

  let identifiers = gather_identifiers(identifiers, input)?;
  if identifiers.is_empty() {
    return Err(CliError::NoIdentifiers);
  }

  let extractor = Extractor::new(config);
  let mut batch = match from_dir {
    Some(dir) => {
      debug!("Reading manuscripts from {}", dir.display());
      Batch::new(DirectoryFetcher::new(dir), extractor)
    },
    None => Batch::new(HttpFetcher::new(config)?, extractor),
  };

  interaction.reply(ResponseContent::Info(&format!(
    "Extracting authors from {} article(s)",
    identifiers.len()
  )))?;
  let report = batch.run(&identifiers).await;

  for failure in &report.failures {
    interaction.reply(ResponseContent::Warning(&format!(
      "Could not retrieve DOI {}: {}",
      failure.identifier, failure.reason
    )))?;
  }

  if report.is_empty() {
    interaction.reply(ResponseContent::Warning("No author records were extracted."))?;
    return Ok(report);
  }

  interaction.reply(ResponseContent::Success(&format!(
    "Extracted {} author record(s) from {} article(s)",
    report.records.len(),
    report.documents.len()
  )))?;
  interaction.reply(ResponseContent::Records(&report.records))?;

  if let Some(path) = output {
    let format = format.or_else(|| ExportFormat::from_path(&path)).unwrap_or_default();
    if path.exists() && !interaction.confirm(&format!("{} exists. Overwrite?", path.display()))? {
      interaction.reply(ResponseContent::Info("Export skipped"))?;
    } else {
      export::write_file(&report.records, format, &path)?;
      interaction.reply(ResponseContent::Success(&format!(
        "Wrote {} export to {}",
        format,
        path.display()
      )))?;
    }
  }

  Ok(report)
}

/// Collects identifiers from arguments and the input file, falling back to
/// piped stdin when neither supplies any.
fn gather_identifiers(arguments: Vec<String>, input: Option<PathBuf>) -> Result<Vec<String>> {
  let mut text = arguments.join("\n");
  if let Some(path) = input {
    text.push('\n');
    text.push_str(&std::fs::read_to_string(path)?);
  }

  if text.trim().is_empty() && !std::io::stdin().is_terminal() {
    trace!("Reading identifiers from stdin");
    std::io::stdin().read_to_string(&mut text)?;
  }

  Ok(byline::identifier::parse_identifiers(&text))
}
