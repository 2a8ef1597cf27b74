//! Error types for Vigia GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// HTTP transport error (connection refused, timeout, bad URL)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Non-2xx response from a remote API, with the response body text
    #[snafu(display("API error {status}: {body}"))]
    Api { status: u16, body: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_keeps_body_text() {
        let err = Error::Api {
            status: 422,
            body: "nombre must not be blank".to_string(),
        };
        assert_eq!(err.to_string(), "API error 422: nombre must not be blank");
    }
}
