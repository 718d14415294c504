//! Error types for the txc CLI
//!
//! User-facing errors with clear, actionable messages.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The census pipeline failed (resolution, traversal, aggregation)
    #[error(transparent)]
    Census(#[from] txc_core::CensusError),

    /// The Entrez client failed outside the census pipeline
    #[error(transparent)]
    Entrez(#[from] txc_entrez::EntrezError),

    /// A flag or environment variable is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialization failed
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
