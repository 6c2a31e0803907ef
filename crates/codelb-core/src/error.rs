//! Error types for codelb
//!
//! This module defines the error types used throughout the codelb crates.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use codelb_core::error::{LeaderboardError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to LeaderboardError
//!     let _file = std::fs::read_to_string("nonexistent.yml")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for codelb operations
///
/// Loading a leaderboard can fail at the transport (IO, network, HTTP
/// status) or at the parse step. Callers in the binary treat both as an
/// empty board rather than a fatal error.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus {
        /// The requested URL
        url: String,
        /// The status code returned by the server
        status: u16,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Source argument could not be interpreted
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl LeaderboardError {
    /// Whether this error happened while loading a board (fetch or parse)
    ///
    /// Load errors leave the rendered list empty instead of aborting.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Network(_) | Self::HttpStatus { .. } | Self::Yaml(_)
        )
    }
}

/// Convenience type alias for Results in codelb
///
/// # Example
///
/// ```
/// use codelb_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, LeaderboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = LeaderboardError::HttpStatus {
            url: "https://example.com/cceval.yml".to_string(),
            status: 404,
        };
        assert_eq!(
            error.to_string(),
            "HTTP 404 while fetching https://example.com/cceval.yml"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: LeaderboardError = io_error.into();
        assert!(matches!(error, LeaderboardError::Io(_)));
        assert!(error.is_load_error());
    }

    #[test]
    fn test_yaml_error_is_load_error() {
        let yaml_error = serde_yaml::from_str::<Vec<u32>>("{ not: [a list").unwrap_err();
        let error: LeaderboardError = yaml_error.into();
        assert!(error.is_load_error());
        assert!(!LeaderboardError::Config("bad".into()).is_load_error());
    }
}
