//! Module for the "config" command.

use super::*;

/// Function for the [`Commands::Config`] in the CLI.
pub fn show_config<I: UserInteraction>(interaction: &I, config: &Config) -> Result<()> {
  interaction.reply(ResponseContent::Info(&format!(
    "Default configuration path: {}",
    Config::default_path().display()
  )))?;
  println!("{}", config.to_toml()?);
  Ok(())
}
