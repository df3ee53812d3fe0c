//! Episode list rendering

use askama::Template;

use super::container::Container;
use super::element::Element;
use crate::error::Result;
use crate::types::Episode;

#[derive(Template)]
#[template(path = "partials/episode_list.html")]
struct EpisodeListTemplate {
    labels: Vec<String>,
}

/// Text shown for one episode, e.g. `Pilot (season 1, number 1)`.
pub fn episode_label(episode: &Episode) -> String {
    format!(
        "{} (season {}, number {})",
        episode.name, episode.season, episode.number
    )
}

/// Replace the contents of `container` with a list of the episodes and
/// make it visible.
///
/// This is the only renderer that turns a container visible. The list is
/// rendered before the container is touched.
///
/// # Errors
/// Returns `TvMazeError::RenderError` if the list fails to render.
pub fn render_episodes<C: Container>(container: &mut C, episodes: &[Episode]) -> Result<()> {
    let list = Element::render(&EpisodeListTemplate {
        labels: episodes.iter().map(episode_label).collect(),
    })?;

    container.clear();
    container.append(list);
    container.set_visible(true);
    Ok(())
}
