//! Terminal output and prompts.

use console::{measure_text_width, pad_str, truncate_str, Alignment};
use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "⚠️ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";

/// Widest a title cell may get before it is truncated
const TITLE_WIDTH: usize = 40;
/// Widest an affiliation cell may get before it is truncated
const AFFILIATION_WIDTH: usize = 60;

/// Something the CLI wants to tell the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// The extracted table
  Records(&'a [Record]),
  /// A completed step
  Success(&'a str),
  /// A skipped article or an empty result
  Warning(&'a str),
  /// A failure that ends the command
  Error(CliError),
  /// Progress and context
  Info(&'a str),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction on stdout/stderr with `dialoguer` prompts.
pub struct Terminal {
  /// Answer every prompt with its default instead of asking
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction. With `accept_defaults` every prompt is
  /// answered "yes" without being shown.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{} {}", style(PROMPT_PREFIX).cyan(), message))
        .default(false)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Records(records) => print!("{}", render_table(records)),
      ResponseContent::Success(message) =>
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(message).green()),
      ResponseContent::Warning(message) =>
        println!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow()),
      ResponseContent::Error(error) =>
        eprintln!("{} {}", style(ERROR_PREFIX).red(), style(error).red()),
      ResponseContent::Info(message) => println!("{} {}", style(INFO_PREFIX).blue(), message),
    }
    Ok(())
  }
}

/// Lays out records as an aligned table, first-author rows in bold.
pub fn render_table(records: &[Record]) -> String {
  let header = ["Title", "Name", "Order", "Affiliation", "DOI"].map(String::from);
  let rows: Vec<[String; 5]> = records
    .iter()
    .map(|record| {
      [
        truncate_str(&record.title, TITLE_WIDTH, "…").into_owned(),
        record.name.clone(),
        record.order.to_string(),
        truncate_str(&record.affiliation, AFFILIATION_WIDTH, "…").into_owned(),
        record.doi.clone(),
      ]
    })
    .collect();

  let mut widths = header.clone().map(|cell| measure_text_width(&cell));
  for row in &rows {
    for (width, cell) in widths.iter_mut().zip(row) {
      *width = (*width).max(measure_text_width(cell));
    }
  }

  let format_row = |row: &[String; 5]| -> String {
    row
      .iter()
      .zip(widths)
      .map(|(cell, width)| pad_str(cell, width, Alignment::Left, None).into_owned())
      .collect::<Vec<_>>()
      .join(" │ ")
      .trim_end()
      .to_string()
  };

  let mut table = String::new();
  table.push_str(&format!("{}\n", style(format_row(&header)).bold().underlined()));
  for (row, record) in rows.iter().zip(records) {
    let line = format_row(row);
    if record.is_first_author() {
      table.push_str(&format!("{}\n", style(line).bold()));
    } else {
      table.push_str(&format!("{line}\n"));
    }
  }
  table
}
