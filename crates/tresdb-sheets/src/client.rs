use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tresdb_core::AppConfig;

use crate::error::SheetError;
use crate::location::{resolve_location, SheetLocation};
use crate::rate_limit::retry_with_backoff;

/// Retrieves raw sheet text for a registry `source_location`.
///
/// Remote sheets are fetched over HTTP with retry on 429 and network
/// failures; local sheets are read from disk. The client knows nothing
/// about sheet contents.
pub struct SheetClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff.
    backoff_base_secs: u64,
    base_url: Option<String>,
    source_dir: PathBuf,
}

impl SheetClient {
    /// Creates a `SheetClient` with the given timeout, `User-Agent`, and
    /// retry policy. Relative locations resolve under `./data` until
    /// [`Self::with_source_dir`] or [`Self::with_base_url`] says otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SheetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
            base_url: None,
            source_dir: PathBuf::from("./data"),
        })
    }

    /// Builds a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SheetError> {
        Ok(Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )?
        .with_base_url(config.source_base_url.clone())
        .with_source_dir(config.source_dir.clone()))
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_source_dir(mut self, source_dir: PathBuf) -> Self {
        self.source_dir = source_dir;
        self
    }

    /// Resolves `location` and returns the sheet text.
    ///
    /// # Errors
    ///
    /// - [`SheetError::InvalidLocation`]: the location cannot be resolved.
    /// - [`SheetError::Io`]: a local sheet cannot be read.
    /// - Any error from [`Self::fetch_url`] for remote sheets.
    pub async fn fetch(&self, location: &str) -> Result<String, SheetError> {
        match resolve_location(location, self.base_url.as_deref(), &self.source_dir)? {
            SheetLocation::Remote(url) => self.fetch_url(&url).await,
            SheetLocation::Local(path) => read_local(&path).await,
        }
    }

    /// Downloads sheet text from `url`, retrying transient failures.
    ///
    /// # Errors
    ///
    /// - [`SheetError::RateLimited`]: HTTP 429 after all retries.
    /// - [`SheetError::NotFound`]: HTTP 404 (not retried).
    /// - [`SheetError::UnexpectedStatus`]: any other non-2xx status (not retried).
    /// - [`SheetError::Http`]: network or TLS failure after all retries.
    pub async fn fetch_url(&self, url: &str) -> Result<String, SheetError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let response = self.client.get(url).send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                let retry_after_secs = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);
                return Err(SheetError::RateLimited {
                    url: url.to_owned(),
                    retry_after_secs,
                });
            }

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(SheetError::NotFound {
                    url: url.to_owned(),
                });
            }

            if !status.is_success() {
                return Err(SheetError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            Ok(response.text().await?)
        })
        .await
    }
}

async fn read_local(path: &Path) -> Result<String, SheetError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SheetError::Io {
            path: path.display().to_string(),
            source: e,
        })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
