//! Tauri commands for the TVmaze show browser
//!
//! This module contains all Tauri commands that can be invoked from the frontend.

use log::warn;
use tauri::State;

use crate::WidgetState;
use tvmaze_core::{Episode, PageView, Show, TvMazeError};

/// Convert a core error into the string handed to the frontend.
fn report(action: &str, err: TvMazeError) -> String {
    warn!("{action} failed: {err}");
    err.to_string()
}

/// Search shows by term.
///
/// # Arguments
/// * `query` - Search term, may be empty
///
/// # Returns
/// * `Ok(Vec<Show>)` with matching shows
/// * `Err(String)` with error message if the request fails
#[tauri::command]
pub async fn search_shows(
    state: State<'_, WidgetState>,
    query: String,
) -> Result<Vec<Show>, String> {
    state
        .widget()
        .api()
        .search_shows(&query)
        .await
        .map_err(|e| report("search", e))
}

/// List all episodes of a show.
///
/// # Arguments
/// * `show_id` - TVmaze id of the show
///
/// # Returns
/// * `Ok(Vec<Episode>)` with all episodes
/// * `Err(String)` with error message if the request fails
#[tauri::command]
pub async fn list_episodes(
    state: State<'_, WidgetState>,
    show_id: u32,
) -> Result<Vec<Episode>, String> {
    state
        .widget()
        .api()
        .list_episodes(show_id)
        .await
        .map_err(|e| report("episode listing", e))
}

/// Handle the search form: fetch shows, hide episodes, render cards.
///
/// # Returns
/// * `Ok(PageView)` with the re-rendered page
/// * `Err(String)` if the request fails; the page is unchanged
#[tauri::command]
pub async fn submit_search(
    state: State<'_, WidgetState>,
    term: String,
) -> Result<PageView, String> {
    let widget = state.widget();
    widget
        .submit_search(&term)
        .await
        .map_err(|e| report("search", e))?;
    widget
        .snapshot()
        .await
        .map_err(|e| report("rendering", e))
}

/// Handle a card's "Episodes" button: fetch and show the episode list.
///
/// # Returns
/// * `Ok(PageView)` with the episode panel visible
/// * `Err(String)` if the request fails; the page is unchanged
#[tauri::command]
pub async fn show_episodes(
    state: State<'_, WidgetState>,
    show_id: u32,
) -> Result<PageView, String> {
    let widget = state.widget();
    widget
        .show_episodes(show_id)
        .await
        .map_err(|e| report("episode listing", e))?;
    widget
        .snapshot()
        .await
        .map_err(|e| report("rendering", e))
}

/// Current rendered page.
///
/// # Returns
/// * `Err(String)` if a container fails to render
#[tauri::command]
pub async fn page_view(state: State<'_, WidgetState>) -> Result<PageView, String> {
    state
        .widget()
        .snapshot()
        .await
        .map_err(|e| report("rendering", e))
}
