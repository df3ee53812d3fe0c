//! TVmaze Show Browser Core Library
//!
//! This crate searches the TVmaze API for shows, lists their episodes and
//! renders both into page containers.
//!
//! # Features
//! - Search shows by free-text term
//! - List all episodes of a show
//! - Render show cards and episode lists as HTML
//! - Drive the search / episodes interaction over injected containers

pub mod api;
pub mod client;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;
pub mod widget;

// Re-export main types for convenience
pub use api::TvMazeApi;
pub use client::{ClientConfig, TvMazeClient};
pub use error::{Result, TvMazeError};
pub use render::{Container, HtmlContainer, SummaryMode};
pub use types::{Episode, Show, DEFAULT_IMAGE, TVMAZE_BASE_URL};
pub use widget::{Page, PageView, ShowsWidget, WidgetConfig};
