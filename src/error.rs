//! Error types for Pockit
//!
//! Defines the error enum covering the failure modes of repository
//! loading, configuration and app launching. Uses thiserror for ergonomic
//! error handling.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Pockit operations
pub type Result<T> = std::result::Result<T, PockitError>;

/// Error type for Pockit operations
#[derive(Error, Debug)]
pub enum PockitError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP errors
    #[error("Network error: {0}")]
    Network(String),

    /// Listing parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Repository URL could not be used
    #[error("Invalid repository URL: {0}")]
    InvalidUrl(String),

    /// A fetch did not settle in time
    #[error("Timed out after {limit:?} fetching {url}")]
    Timeout { url: String, limit: Duration },

    /// No menu option carries the requested label
    #[error("No app named '{0}' in the Apps menu")]
    UnknownApp(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),

    /// Anyhow errors (for more context)
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_names_url() {
        let err = PockitError::Timeout {
            url: "https://a.test/listing.json".to_string(),
            limit: Duration::from_secs(5),
        };
        assert_eq!(
            err.to_string(),
            "Timed out after 5s fetching https://a.test/listing.json"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{nope");
        let err: PockitError = parse.unwrap_err().into();
        assert!(matches!(err, PockitError::Json(_)));
    }
}
