//! Manuscript sources.
//!
//! A [`Fetcher`] turns an identifier into raw manuscript bytes or an error.
//! Any error is final for that identifier: the batch reports it and moves on.
//!
//! - [`HttpFetcher`] downloads from a URL template, PLOS ONE by default.
//! - [`DirectoryFetcher`] reads previously saved manuscripts from disk.

use std::time::Duration;

use reqwest::{Client, Url};
use url::form_urlencoded;

use super::*;

/// A source of manuscript XML.
#[async_trait]
pub trait Fetcher: Send + Sync {
  /// Retrieves the raw manuscript for `identifier`.
  ///
  /// # Errors
  ///
  /// Any error means the manuscript is unavailable. A non-success HTTP
  /// status is reported as [`BylineError::FetchStatus`].
  async fn fetch(&self, identifier: &str) -> Result<Vec<u8>>;
}

/// Downloads manuscripts over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  /// Shared connection pool
  client:            Client,
  /// URL with an `{identifier}` placeholder
  endpoint_template: String,
  /// Extra headers for every request
  headers:           BTreeMap<String, String>,
}

impl HttpFetcher {
  /// Creates a fetcher from the endpoint, headers and timeout of `config`.
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;
    let mut builder = Client::builder();
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(Self {
      client:            builder.build()?,
      endpoint_template: config.endpoint_template.clone(),
      headers:           config.headers.clone(),
    })
  }

  /// The download URL for `identifier`.
  ///
  /// The identifier is percent-encoded, so characters such as `&`, `#` or
  /// `?` inside a DOI stay part of the query value.
  ///
  /// ```
  /// # use byline::{fetch::HttpFetcher, Config};
  /// let fetcher = HttpFetcher::new(&Config::default())?;
  /// assert_eq!(
  ///   fetcher.url_for("10.1371/journal.pone.0123456")?.as_str(),
  ///   "https://journals.plos.org/plosone/article/file?id=10.1371%2Fjournal.pone.0123456&type=manuscript"
  /// );
  /// # Ok::<(), byline::error::BylineError>(())
  /// ```
  pub fn url_for(&self, identifier: &str) -> Result<Url> {
    let encoded: String = form_urlencoded::byte_serialize(identifier.as_bytes()).collect();
    Url::parse(&self.endpoint_template.replace("{identifier}", &encoded))
      .map_err(|_| BylineError::InvalidIdentifier)
  }
}

#[async_trait]
impl Fetcher for HttpFetcher {
  async fn fetch(&self, identifier: &str) -> Result<Vec<u8>> {
    let url = self.url_for(identifier)?;
    debug!("Fetching {} via: {}", identifier, url);

    let mut request = self.client.get(url);
    for (key, value) in &self.headers {
      request = request.header(key, value);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
      return Err(BylineError::FetchStatus { status: status.as_u16() });
    }

    let data = response.bytes().await?;
    trace!("{} response: {}", identifier, String::from_utf8_lossy(&data));
    Ok(data.to_vec())
  }
}

/// Reads manuscripts saved as `<dir>/<identifier>.xml`, with every `/` in the
/// identifier replaced by `_`.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
  /// Directory holding the manuscripts
  root: PathBuf,
}

impl DirectoryFetcher {
  /// Creates a fetcher over `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

  /// Where the manuscript for `identifier` is expected.
  ///
  /// ```
  /// # use byline::fetch::DirectoryFetcher;
  /// let fetcher = DirectoryFetcher::new("saved");
  /// assert!(fetcher
  ///   .path_for("10.1371/journal.pone.0123456")
  ///   .ends_with("10.1371_journal.pone.0123456.xml"));
  /// ```
  pub fn path_for(&self, identifier: &str) -> PathBuf {
    self.root.join(format!("{}.xml", identifier.replace('/', "_")))
  }
}

#[async_trait]
impl Fetcher for DirectoryFetcher {
  async fn fetch(&self, identifier: &str) -> Result<Vec<u8>> {
    let path = self.path_for(identifier);
    debug!("Reading {} from {}", identifier, path.display());
    tokio::fs::read(&path).await.map_err(|e| match e.kind() {
      std::io::ErrorKind::NotFound => BylineError::NotFound,
      _ => BylineError::Path(e),
    })
  }
}
