//! Show card rendering
//!
//! Each show becomes a card carrying its id in `data-show-id`, so an
//! "Episodes" trigger inside the card can recover which show it belongs to.

use askama::Template;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use super::container::Container;
use super::element::Element;
use crate::error::Result;
use crate::types::Show;

/// Attribute holding the show id on every card
pub const SHOW_ID_ATTR: &str = "data-show-id";

/// How a show summary is placed into its card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryMode {
    /// Insert the upstream HTML unchanged
    #[default]
    Markup,
    /// Strip tags and insert escaped text. Use when summaries are untrusted.
    PlainText,
}

#[derive(Template)]
#[template(path = "partials/show_card.html")]
struct ShowCardTemplate<'a> {
    id: u32,
    name: &'a str,
    image: &'a str,
    summary: String,
    raw_summary: bool,
}

/// Build the card for one show.
///
/// # Errors
/// Returns `TvMazeError::RenderError` if the template fails to render.
pub fn show_card(show: &Show, mode: SummaryMode) -> Result<Element> {
    let (summary, raw_summary) = match mode {
        SummaryMode::Markup => (show.summary.clone(), true),
        SummaryMode::PlainText => (
            nanohtml2text::html2text(&show.summary).trim().to_string(),
            false,
        ),
    };

    let card = ShowCardTemplate {
        id: show.id,
        name: &show.name,
        image: &show.image,
        summary,
        raw_summary,
    };

    Ok(Element::render(&card)?.attr(SHOW_ID_ATTR, show.id.to_string()))
}

/// Replace the contents of `container` with one card per show.
///
/// Cards from earlier calls never survive; an empty slice leaves the
/// container empty. All cards are rendered before the container is
/// touched, so a render failure leaves it as it was.
///
/// # Errors
/// Returns `TvMazeError::RenderError` if a card fails to render.
pub fn render_shows<C: Container>(
    container: &mut C,
    shows: &[Show],
    mode: SummaryMode,
) -> Result<()> {
    let cards = shows
        .iter()
        .map(|show| show_card(show, mode))
        .collect::<Result<Vec<_>>>()?;

    container.clear();
    for card in cards {
        container.append(card);
    }
    Ok(())
}

/// Recover the show id from the markup of a single rendered card.
///
/// Returns the id carried by the outermost element with `data-show-id`, or
/// `None` if there is none or it is not a number.
///
/// # Examples
/// ```
/// use tvmaze_core::render::card_show_id;
///
/// assert_eq!(card_show_id(r#"<div data-show-id="975"></div>"#), Some(975));
/// assert_eq!(card_show_id("<div></div>"), None);
/// ```
pub fn card_show_id(markup: &str) -> Option<u32> {
    let fragment = Html::parse_fragment(markup);
    let selector = Selector::parse("[data-show-id]").ok()?;

    let card = fragment.select(&selector).next()?;
    card.value().attr(SHOW_ID_ATTR)?.trim().parse().ok()
}
