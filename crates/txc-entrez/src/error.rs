//! Error types for the Entrez client

use thiserror::Error;

/// Result type alias for Entrez operations
pub type Result<T> = std::result::Result<T, EntrezError>;

/// Error type for Entrez client operations
///
/// Transient kinds (connect/timeout/5xx) are retried inside the client;
/// everything else surfaces immediately.
#[derive(Error, Debug)]
pub enum EntrezError {
    /// HTTP transport failure
    #[error("Network request failed: {0}. Check your internet connection and the Entrez base URL.")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the Entrez endpoint
    #[error("Entrez returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Client configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EntrezError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the retry policy should try this failure again.
    ///
    /// 5xx statuses and network-level failures are retryable; 4xx statuses
    /// and configuration errors are not.
    pub fn is_transient(&self) -> bool {
        match self {
            EntrezError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            EntrezError::Status { status, .. } => *status >= 500,
            EntrezError::Config(_) => false,
        }
    }
}
