//! Show search results parser
//!
//! Parses the body of `/search/shows` into [`Show`] records.

use serde::Deserialize;

use crate::error::Result;
use crate::types::{Show, DEFAULT_IMAGE};

/// One entry of the search response. The relevance `score` is not used.
#[derive(Debug, Deserialize)]
struct SearchHit {
    show: WireShow,
}

#[derive(Debug, Deserialize)]
struct WireShow {
    id: u32,
    name: String,
    /// Null for shows without a synopsis
    summary: Option<String>,
    /// Null for shows without artwork
    image: Option<WireImage>,
}

#[derive(Debug, Deserialize)]
struct WireImage {
    medium: Option<String>,
}

/// Pick the image URL for a show, falling back to [`DEFAULT_IMAGE`].
///
/// # Examples
/// ```
/// use tvmaze_core::parser::image_or_default;
/// use tvmaze_core::DEFAULT_IMAGE;
///
/// assert_eq!(image_or_default(Some("https://img/1.jpg")), "https://img/1.jpg");
/// assert_eq!(image_or_default(Some("")), DEFAULT_IMAGE);
/// assert_eq!(image_or_default(None), DEFAULT_IMAGE);
/// ```
pub fn image_or_default(medium: Option<&str>) -> String {
    match medium {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_IMAGE.to_string(),
    }
}

impl From<WireShow> for Show {
    fn from(show: WireShow) -> Self {
        let image = image_or_default(show.image.as_ref().and_then(|i| i.medium.as_deref()));
        Show {
            id: show.id,
            name: show.name,
            summary: show.summary.unwrap_or_default(),
            image,
        }
    }
}

/// Parse show search results from a `/search/shows` response body.
///
/// Upstream order and length are preserved.
///
/// # Arguments
/// * `json` - Raw response body
///
/// # Returns
/// * `Ok(Vec<Show>)` with one record per search hit
/// * `Err(TvMazeError::ParseError)` if the body is not a list of search hits
pub fn parse_show_results(json: &str) -> Result<Vec<Show>> {
    let hits: Vec<SearchHit> = serde_json::from_str(json)?;
    Ok(hits.into_iter().map(|hit| Show::from(hit.show)).collect())
}
