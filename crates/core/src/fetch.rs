//! Page fetching over HTTP and from local files.
//!
//! The pipeline only needs raw markup for a URL, so fetching sits behind the
//! [`Fetcher`] trait. [`HttpFetcher`] is the reqwest-backed implementation used
//! by the CLI; tests drive the pipeline with in-memory implementations.

use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{NewsletterError, Result};

/// Desktop Chrome user agent; some news sites serve stripped pages to unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 15, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Source of raw page markup.
pub trait Fetcher {
    /// Retrieves the markup served at `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches pages with a shared reqwest client.
///
/// Any transport failure, timeout or non-2xx status is an error; there are no retries.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(NewsletterError::HttpError)?;

        Ok(Self { client, config })
    }
}

#[cfg(feature = "fetch")]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed_url = Url::parse(url).map_err(|e| NewsletterError::InvalidUrl(format!("{}: {}", url, e)))?;
        let timeout = self.config.timeout;

        let response = self
            .client
            .get(parsed_url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| map_reqwest_error(e, timeout))?;

        let content = response.text().await.map_err(|e| map_reqwest_error(e, timeout))?;

        Ok(content)
    }
}

#[cfg(feature = "fetch")]
fn map_reqwest_error(e: reqwest::Error, timeout: u64) -> NewsletterError {
    if e.is_timeout() { NewsletterError::Timeout { timeout } } else { NewsletterError::HttpError(e) }
}

/// Reads a UTF-8 text file, such as the newsletter template.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        Err(NewsletterError::FileNotFound(PathBuf::from(path)))
    } else {
        fs::read_to_string(path).map_err(NewsletterError::from)
    }
}

/// Reads a newline-separated URL list, skipping blank lines.
pub fn read_url_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = read_text_file(path)?;
    Ok(parse_url_list(&content))
}

/// Splits a URL list into trimmed, non-empty lines.
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
