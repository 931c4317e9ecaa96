//! User configuration.
//!
//! Configuration is a single TOML file. Every field has a default, so an
//! empty file (or no file at all) gives the stock PLOS ONE behavior.
//!
//! ```toml
//! endpoint_template = "https://journals.plos.org/plosone/article/file?id={identifier}&type=manuscript"
//! timeout_secs = 30
//! first_author_marker = "（第一作者）"
//! corresponding_marker = "（通訊作者）"
//! missing = "N/A"
//! dedup = "global"
//! text_style = "collapsed"
//!
//! [headers]
//! User-Agent = "byline"
//! ```

use super::*;

/// Manuscript download URL for PLOS ONE. `{identifier}` is replaced by the DOI.
pub const PLOS_ONE_ENDPOINT: &str =
  "https://journals.plos.org/plosone/article/file?id={identifier}&type=manuscript";

/// Runtime configuration for fetching and extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// URL template for manuscript downloads, with an `{identifier}` placeholder
  pub endpoint_template:    String,
  /// Per-request timeout for HTTP fetches, unbounded when absent
  pub timeout_secs:         Option<u64>,
  /// Suffix appended to the first author's name
  pub first_author_marker:  String,
  /// Suffix appended to a non-first corresponding author's name
  pub corresponding_marker: String,
  /// Placeholder for a missing title, name or affiliation
  pub missing:              String,
  /// Scope of author name de-duplication
  pub dedup:                DedupPolicy,
  /// How title and affiliation text is flattened
  pub text_style:           TextStyle,
  /// Extra HTTP headers sent with every fetch
  pub headers:              BTreeMap<String, String>,
}

/// How widely repeated author names are suppressed.
///
/// [`DedupPolicy::Global`] is the default: once a name has been emitted, the
/// same name is dropped from every later article in the batch, even when it
/// is a different person or a different affiliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupPolicy {
  /// Drop a name already emitted anywhere in the batch
  #[default]
  Global,
  /// Drop a name only when it repeats inside the same article
  PerDocument,
  /// Emit every author
  Off,
}

/// How the text of a title or affiliation element is flattened into a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
  /// Whitespace runs become one space, see [`Element::normalized_text`]
  #[default]
  Collapsed,
  /// Fragments trimmed and glued together, see [`Element::stripped_text`]
  Stripped,
}

impl TextStyle {
  /// Flattens the text beneath `element`.
  pub fn apply(self, element: &Element) -> String {
    match self {
      Self::Collapsed => element.normalized_text(),
      Self::Stripped => element.stripped_text(),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      endpoint_template:    PLOS_ONE_ENDPOINT.to_string(),
      timeout_secs:         Some(30),
      first_author_marker:  "（第一作者）".to_string(),
      corresponding_marker: "（通訊作者）".to_string(),
      missing:              "N/A".to_string(),
      dedup:                DedupPolicy::default(),
      text_style:           TextStyle::default(),
      headers:              BTreeMap::new(),
    }
  }
}

impl Config {
  /// Default location of the configuration file.
  ///
  /// - On Unix: `~/.config/byline/config.toml`
  /// - On macOS: `~/Library/Application Support/byline/config.toml`
  /// - On Windows: `%APPDATA%\byline\config.toml`
  /// - Fallback: `./byline/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("byline").join("config.toml")
  }

  /// Reads a configuration file. Missing keys take their defaults.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Self::from_str(&content)
  }

  /// Loads configuration for a run.
  ///
  /// An explicit path must exist. Without one, the file at
  /// [`Config::default_path`] is used when present, else the defaults.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::from_path(path),
      None => {
        let default_path = Self::default_path();
        if default_path.exists() {
          debug!("Loading configuration from {}", default_path.display());
          Self::from_path(default_path)
        } else {
          Ok(Self::default())
        }
      },
    }
  }

  /// Serializes this configuration as TOML.
  pub fn to_toml(&self) -> Result<String> { Ok(toml::to_string(self)?) }

  /// Sets the endpoint template.
  pub fn with_endpoint_template(mut self, template: impl Into<String>) -> Self {
    self.endpoint_template = template.into();
    self
  }

  /// Sets the de-duplication policy.
  pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
    self.dedup = dedup;
    self
  }

  /// Sets how title and affiliation text is flattened.
  pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
    self.text_style = text_style;
    self
  }

  /// Sets the first and corresponding author markers.
  pub fn with_markers(mut self, first: impl Into<String>, corresponding: impl Into<String>) -> Self {
    self.first_author_marker = first.into();
    self.corresponding_marker = corresponding.into();
    self
  }

  /// Checks the fields a fetch depends on.
  pub fn validate(&self) -> Result<()> {
    if !self.endpoint_template.contains("{identifier}") {
      return Err(BylineError::Config(format!(
        "endpoint_template must contain an {{identifier}} placeholder, got \"{}\"",
        self.endpoint_template
      )));
    }
    Ok(())
  }
}

impl FromStr for Config {
  type Err = BylineError;

  fn from_str(s: &str) -> Result<Self> {
    let config: Self = toml::from_str(s)?;
    config.validate()?;
    Ok(config)
  }
}
