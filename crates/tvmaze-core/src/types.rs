//! Data types for the TVmaze show browser
//!
//! The records here are the normalized shapes handed to renderers and the
//! Tauri frontend. Upstream wire types live in `parser` and never leave it.

use serde::{Deserialize, Serialize};

/// Base URL of the TVmaze REST API
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Image used for shows that have no medium-resolution image upstream
pub const DEFAULT_IMAGE: &str = "http://www.foo.com/default_image.jpg";

/// A show returned by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// TVmaze show identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Summary as delivered by TVmaze, may contain HTML
    pub summary: String,
    /// Medium image URL, or [`DEFAULT_IMAGE`]
    pub image: String,
}

/// An episode of a show
///
/// `season` and `number` hold decimal text; they are only ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// TVmaze episode identifier
    pub id: u32,
    /// Episode title
    pub name: String,
    /// Season number as text
    pub season: String,
    /// Episode number within the season as text
    pub number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_serializes_exactly_four_fields() {
        let show = Show {
            id: 975,
            name: "Batman".to_string(),
            summary: "<p>Wham! Pow!</p>".to_string(),
            image: DEFAULT_IMAGE.to_string(),
        };

        let value = serde_json::to_value(&show).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["id", "image", "name", "summary"]);
    }

    #[test]
    fn test_episode_serializes_numbers_as_text() {
        let episode = Episode {
            id: 1,
            name: "Pilot".to_string(),
            season: "1".to_string(),
            number: "1".to_string(),
        };

        let json = serde_json::to_string(&episode).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Pilot","season":"1","number":"1"}"#
        );
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!TVMAZE_BASE_URL.ends_with('/'));
    }
}
