//! Main TVmaze API
//!
//! This module combines the HTTP client with the payload parsers to provide
//! show search and episode listing. All operations are asynchronous and
//! issue exactly one request each.

use log::debug;

use crate::client::{ClientConfig, TvMazeClient};
use crate::error::Result;
use crate::parser::{parse_episodes, parse_show_results};
use crate::types::{Episode, Show};

/// High-level API for the TVmaze endpoints used by the show browser
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvMazeApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = TvMazeApi::new()?;
///
///     let shows = api.search_shows("batman").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct TvMazeApi {
    client: TvMazeClient,
}

impl TvMazeApi {
    /// Create a new API with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new API with custom client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(TvMazeClient::with_config(config)?))
    }

    /// Create a new API around an existing client.
    pub fn with_client(client: TvMazeClient) -> Self {
        Self { client }
    }

    /// Search shows matching a free-text term.
    ///
    /// The term is sent as-is; an empty term is a valid query and still
    /// issues a request.
    ///
    /// # Returns
    /// * `Ok(Vec<Show>)` in the order TVmaze ranked them
    /// * `Err(TvMazeError)` if the request fails or the payload is malformed
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeApi;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let api = TvMazeApi::new()?;
    /// for show in api.search_shows("the office").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let path = format!("/search/shows?q={}", urlencoding::encode(term));
        let body = self.client.fetch(&path).await?;

        let shows = parse_show_results(&body)?;
        debug!("search {term:?} returned {} shows", shows.len());
        Ok(shows)
    }

    /// List all episodes of a show.
    ///
    /// # Arguments
    /// * `show_id` - TVmaze id, as carried by a rendered card
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` in broadcast order
    /// * `Err(TvMazeError)` if the request fails or the payload is malformed
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeApi;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let api = TvMazeApi::new()?;
    /// for ep in api.list_episodes(1).await? {
    ///     println!("S{}E{} {}", ep.season, ep.number, ep.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_episodes(&self, show_id: u32) -> Result<Vec<Episode>> {
        let path = format!("/shows/{}/episodes", show_id);
        let body = self.client.fetch(&path).await?;

        let episodes = parse_episodes(&body)?;
        debug!("show {show_id} has {} episodes", episodes.len());
        Ok(episodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TvMazeError;

    #[test]
    fn test_api_creation() {
        let api = TvMazeApi::new();
        assert!(api.is_ok());
    }

    #[tokio::test]
    async fn test_search_unreachable_host_fails() {
        // Port 9 (discard) is not expected to serve HTTP
        let config = ClientConfig {
            timeout_secs: 2,
            ..ClientConfig::with_base_url("http://127.0.0.1:9")
        };
        let api = TvMazeApi::with_config(config).unwrap();

        let result = api.search_shows("batman").await;
        assert!(matches!(result, Err(TvMazeError::HttpError(_))));
    }
}
