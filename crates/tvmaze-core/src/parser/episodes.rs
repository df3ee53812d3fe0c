//! Episode list parser
//!
//! Parses the body of `/shows/{id}/episodes` into [`Episode`] records.

use serde::Deserialize;

use crate::error::Result;
use crate::types::Episode;

#[derive(Debug, Deserialize)]
struct WireEpisode {
    id: u32,
    name: String,
    season: u32,
    number: u32,
}

impl From<WireEpisode> for Episode {
    fn from(episode: WireEpisode) -> Self {
        Episode {
            id: episode.id,
            name: episode.name,
            season: episode.season.to_string(),
            number: episode.number.to_string(),
        }
    }
}

/// Parse an episode list from a `/shows/{id}/episodes` response body.
///
/// Episodes keep the upstream broadcast order.
///
/// # Returns
/// * `Ok(Vec<Episode>)` with one record per upstream episode
/// * `Err(TvMazeError::ParseError)` if the body is not a list of episodes
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>> {
    let episodes: Vec<WireEpisode> = serde_json::from_str(json)?;
    Ok(episodes.into_iter().map(Episode::from).collect())
}
