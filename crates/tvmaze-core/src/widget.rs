//! Show browser interaction flow
//!
//! [`ShowsWidget`] reacts to the two user actions of the page: submitting a
//! search and asking for a show's episodes. The episode panel starts hidden,
//! is hidden again on every successful search, and only becomes visible
//! once episodes have been fetched and rendered.
//!
//! A failed request leaves the page exactly as it was. The page lock is only
//! taken after the response arrived, so two handlers in flight interleave at
//! the network call and whichever completes last wins the display.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::api::TvMazeApi;
use crate::error::Result;
use crate::render::{
    render_episodes, render_shows, Container, HtmlContainer, SummaryMode, SHOW_ID_ATTR,
};

/// Id of the container holding show cards
pub const SHOWS_CONTAINER_ID: &str = "showsList";

/// Id of the container holding the episode list
pub const EPISODES_CONTAINER_ID: &str = "episodesArea";

/// The two containers the widget draws into
#[derive(Debug, Clone)]
pub struct Page<C: Container = HtmlContainer> {
    /// Show cards, replaced on every search
    pub shows: C,
    /// Episode list, replaced on every episode fetch
    pub episodes: C,
}

impl Page<HtmlContainer> {
    /// Empty page with a hidden episode panel
    pub fn new() -> Self {
        Self {
            shows: HtmlContainer::new(SHOWS_CONTAINER_ID),
            episodes: HtmlContainer::hidden(EPISODES_CONTAINER_ID),
        }
    }

    /// Ids of the rendered cards, one per card in display order
    pub fn show_ids(&self) -> Vec<u32> {
        self.shows
            .children()
            .iter()
            .filter_map(|card| card.attribute(SHOW_ID_ATTR)?.parse().ok())
            .collect()
    }

    /// Serializable snapshot of the page
    ///
    /// # Errors
    /// Returns `TvMazeError::RenderError` if a container fails to render.
    pub fn view(&self) -> Result<PageView> {
        Ok(PageView {
            shows_html: self.shows.outer_html()?,
            show_ids: self.show_ids(),
            episodes_html: self.episodes.outer_html()?,
            episodes_visible: self.episodes.is_visible(),
        })
    }
}

impl Default for Page<HtmlContainer> {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the rendered page handed to a frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Markup of the shows container
    pub shows_html: String,
    /// Ids of the rendered cards, in display order
    pub show_ids: Vec<u32>,
    /// Markup of the episodes container
    pub episodes_html: String,
    /// Whether the episode panel is shown
    pub episodes_visible: bool,
}

/// Rendering options for the widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// How show summaries are placed into cards (default: markup)
    pub summary_mode: SummaryMode,
}

/// Show search and episode listing bound to a page
pub struct ShowsWidget<C: Container = HtmlContainer> {
    api: TvMazeApi,
    page: Mutex<Page<C>>,
    config: WidgetConfig,
}

impl<C: Container> ShowsWidget<C> {
    /// Create a widget drawing into the given containers.
    pub fn with_page(api: TvMazeApi, page: Page<C>, config: WidgetConfig) -> Self {
        Self {
            api,
            page: Mutex::new(page),
            config,
        }
    }

    /// The API used for fetching
    pub fn api(&self) -> &TvMazeApi {
        &self.api
    }

    /// The page the widget draws into
    pub fn page(&self) -> &Mutex<Page<C>> {
        &self.page
    }

    /// Rendering options in effect
    pub fn config(&self) -> WidgetConfig {
        self.config
    }

    /// Handle a submitted search.
    ///
    /// On success the episode panel is hidden and the cards replace the
    /// previous ones. On failure nothing on the page changes.
    pub async fn submit_search(&self, term: &str) -> Result<()> {
        let shows = self.api.search_shows(term).await?;

        let mut page = self.page.lock().await;
        render_shows(&mut page.shows, &shows, self.config.summary_mode)?;
        page.episodes.set_visible(false);
        Ok(())
    }

    /// Handle an "Episodes" trigger for a card's show.
    ///
    /// On success the episode list is rendered and the panel shown. On
    /// failure nothing on the page changes.
    pub async fn show_episodes(&self, show_id: u32) -> Result<()> {
        let episodes = self.api.list_episodes(show_id).await?;

        let mut page = self.page.lock().await;
        render_episodes(&mut page.episodes, &episodes)
    }
}

impl ShowsWidget<HtmlContainer> {
    /// Create a widget talking to TVmaze with an empty page.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_api(TvMazeApi::new()?, WidgetConfig::default()))
    }

    /// Create a widget with an empty page around an existing API.
    pub fn with_api(api: TvMazeApi, config: WidgetConfig) -> Self {
        Self::with_page(api, Page::new(), config)
    }

    /// Current state of the page
    ///
    /// # Errors
    /// Returns `TvMazeError::RenderError` if a container fails to render.
    pub async fn snapshot(&self) -> Result<PageView> {
        self.page.lock().await.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Show, DEFAULT_IMAGE};

    #[test]
    fn test_new_page_view() {
        let view = Page::new().view().unwrap();
        assert_eq!(view.shows_html, r#"<div id="showsList"></div>"#);
        assert_eq!(
            view.episodes_html,
            r#"<div id="episodesArea" style="display: none"></div>"#
        );
        assert!(view.show_ids.is_empty());
        assert!(!view.episodes_visible);
    }

    #[test]
    fn test_show_ids_follow_rendered_cards() {
        let shows = [
            Show {
                id: 1,
                name: "Commented".to_string(),
                summary: "<p>Intro <!-- note".to_string(),
                image: DEFAULT_IMAGE.to_string(),
            },
            Show {
                id: 2,
                name: "Impostor".to_string(),
                summary: r#"<span data-show-id="666">"#.to_string(),
                image: DEFAULT_IMAGE.to_string(),
            },
            Show {
                id: 3,
                name: "Plain".to_string(),
                summary: "<p>ok</p>".to_string(),
                image: DEFAULT_IMAGE.to_string(),
            },
        ];

        let mut page = Page::new();
        render_shows(&mut page.shows, &shows, SummaryMode::Markup).unwrap();

        let view = page.view().unwrap();
        assert_eq!(page.shows.children().len(), 3);
        assert_eq!(view.show_ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_widget_config_default() {
        assert_eq!(WidgetConfig::default().summary_mode, SummaryMode::Markup);
    }

    #[tokio::test]
    async fn test_widget_starts_with_hidden_episodes() {
        let widget = ShowsWidget::new().unwrap();
        let view = widget.snapshot().await.unwrap();
        assert!(!view.episodes_visible);
        assert!(view.show_ids.is_empty());
    }

    #[test]
    fn test_page_view_serializes() {
        let json = serde_json::to_value(Page::new().view().unwrap()).unwrap();
        assert_eq!(json["episodes_visible"], serde_json::json!(false));
        assert_eq!(json["show_ids"], serde_json::json!([]));
    }
}
