//! HTTP client for the TVmaze API
//!
//! A thin wrapper around `reqwest` that resolves API paths against a base
//! URL and maps non-success statuses to [`TvMazeError`]. Requests are sent
//! exactly once; there is no retry.

use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::error::{Result, TvMazeError};
use crate::types::TVMAZE_BASE_URL;

/// Default User-Agent identifying this library
const DEFAULT_USER_AGENT: &str = concat!("tvmaze-core/", env!("CARGO_PKG_VERSION"));

/// Configuration for the TVmaze HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL without trailing slash (default: [`TVMAZE_BASE_URL`])
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another base URL.
    ///
    /// Used to aim the client at a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the TVmaze API
pub struct TvMazeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL, trailing slashes removed
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for an API path such as `/search/shows?q=x`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the body of an API path
    ///
    /// # Errors
    /// - `TvMazeError::HttpError` - network or transport failure
    /// - `TvMazeError::NotFound` - server returned 404
    /// - `TvMazeError::Status` - any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TvMazeError::NotFound(url));
        }

        Err(TvMazeError::Status {
            status: status.as_u16(),
            url,
        })
    }
}
