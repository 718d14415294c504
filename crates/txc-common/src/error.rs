//! Error types for txc

use thiserror::Error;

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, CommonError>;

/// Base error type for domain-value handling
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Invalid taxonomy identifier: '{0}' is not an all-digit value")]
    InvalidTaxonId(String),

    #[error("Invalid taxon name: name cannot be empty")]
    EmptyTaxonName,

    #[error("Configuration error: {0}")]
    Config(String),
}
