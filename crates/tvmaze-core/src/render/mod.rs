//! Rendering of shows and episodes into page containers
//!
//! Markup comes from the askama templates under `templates/partials/`.
//!
//! - `element`: rendered elements with recorded root attributes
//! - `container`: the [`Container`] capability and [`HtmlContainer`]
//! - `shows`: show cards
//! - `episodes`: episode list

pub mod container;
pub mod element;
pub mod episodes;
pub mod shows;

pub use container::{Container, HtmlContainer};
pub use element::Element;
pub use episodes::{episode_label, render_episodes};
pub use shows::{card_show_id, render_shows, show_card, SummaryMode, SHOW_ID_ATTR};
