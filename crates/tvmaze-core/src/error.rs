//! Error types for the TVmaze show browser
//!
//! Almost every failure in this library is an upstream request failure:
//! the request could not be sent, TVmaze answered with a non-success
//! status, or the payload did not have the expected shape. The remaining
//! variant covers a template that failed to render.
//! TvMazeError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for TVmaze operations
#[derive(Error, Debug)]
pub enum TvMazeError {
    /// HTTP request failed (network, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// TVmaze answered with a non-success status other than 404
    #[error("HTTP {status} from {url}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response body did not match the expected JSON shape
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// An HTML template failed to render
    #[error("Failed to render template: {0}")]
    RenderError(#[from] askama::Error),
}

impl From<serde_json::Error> for TvMazeError {
    fn from(err: serde_json::Error) -> Self {
        TvMazeError::ParseError(err.to_string())
    }
}

/// Serialize TvMazeError as a string for Tauri compatibility
impl Serialize for TvMazeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for TVmaze operations
pub type Result<T> = std::result::Result<T, TvMazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let error = TvMazeError::NotFound("https://api.tvmaze.com/shows/0/episodes".to_string());
        assert_eq!(
            error.to_string(),
            "Not found: https://api.tvmaze.com/shows/0/episodes"
        );
    }

    #[test]
    fn test_error_display_status() {
        let error = TvMazeError::Status {
            status: 503,
            url: "https://api.tvmaze.com/search/shows?q=x".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP 503 from https://api.tvmaze.com/search/shows?q=x"
        );
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = TvMazeError::ParseError("expected a sequence".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to parse API response: expected a sequence"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let error: TvMazeError = err.into();
        assert!(matches!(error, TvMazeError::ParseError(_)));
    }

    #[test]
    fn test_error_from_askama() {
        let error: TvMazeError = askama::Error::Fmt(std::fmt::Error).into();
        assert!(matches!(error, TvMazeError::RenderError(_)));
        assert!(error.to_string().starts_with("Failed to render template: "));
    }

    #[test]
    fn test_error_serialize() {
        let error = TvMazeError::ParseError("test error".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Failed to parse API response: test error\"");
    }

    #[test]
    fn test_error_serialize_status() {
        let error = TvMazeError::Status {
            status: 500,
            url: "/search/shows".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"HTTP 500 from /search/shows\"");
    }
}
