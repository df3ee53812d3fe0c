//! JSON payload parsers for TVmaze responses
//!
//! This module projects upstream payloads into the normalized records:
//! - `search`: Parse show search results
//! - `episodes`: Parse a show's episode list

pub mod episodes;
pub mod search;

// Re-export main parsing functions
pub use episodes::parse_episodes;
pub use search::{image_or_default, parse_show_results};
