//! TVmaze Show Browser Tauri Integration
//!
//! This crate provides Tauri commands for embedding the TVmaze show browser
//! into Tauri 2.0 applications.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tvmaze_tauri::WidgetState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(WidgetState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             tvmaze_tauri::commands::search_shows,
//!             tvmaze_tauri::commands::list_episodes,
//!             tvmaze_tauri::commands::submit_search,
//!             tvmaze_tauri::commands::show_episodes,
//!             tvmaze_tauri::commands::page_view,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `search_shows` - Search shows, returning records
//! - `list_episodes` - List a show's episodes, returning records
//! - `submit_search` - Search and re-render the page
//! - `show_episodes` - Fetch episodes and show the episode panel
//! - `page_view` - Current rendered page

pub mod commands;

use std::sync::Arc;

use tvmaze_core::{ShowsWidget, TvMazeApi, WidgetConfig};

/// Shared widget managed by Tauri.
///
/// Commands run concurrently; the widget serializes page updates itself,
/// so no outer lock is held across requests.
pub struct WidgetState {
    widget: Arc<ShowsWidget>,
}

impl WidgetState {
    /// Create a new WidgetState with default configuration.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new() -> Result<Self, String> {
        Self::with_config(WidgetConfig::default())
    }

    /// Create a new WidgetState with custom rendering options.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn with_config(config: WidgetConfig) -> Result<Self, String> {
        let api = TvMazeApi::new().map_err(|e| e.to_string())?;
        Ok(Self::from_widget(ShowsWidget::with_api(api, config)))
    }

    /// Wrap an already configured widget.
    pub fn from_widget(widget: ShowsWidget) -> Self {
        Self {
            widget: Arc::new(widget),
        }
    }

    /// Get a reference to the inner widget.
    pub fn widget(&self) -> &Arc<ShowsWidget> {
        &self.widget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvmaze_core::SummaryMode;

    #[test]
    fn test_state_creation() {
        let state = WidgetState::new();
        assert!(state.is_ok());
    }

    #[test]
    fn test_state_keeps_config() {
        let state = WidgetState::with_config(WidgetConfig {
            summary_mode: SummaryMode::PlainText,
        })
        .unwrap();
        assert_eq!(state.widget().config().summary_mode, SummaryMode::PlainText);
    }

    #[tokio::test]
    async fn test_state_starts_with_empty_page() {
        let state = WidgetState::new().unwrap();
        let view = state.widget().snapshot().await.unwrap();
        assert!(view.show_ids.is_empty());
        assert!(!view.episodes_visible);
    }
}
