//! Error types for the census core

use thiserror::Error;

use txc_entrez::EntrezError;

/// Result type alias for census operations
pub type Result<T> = std::result::Result<T, CensusError>;

/// Error type for the census pipeline
///
/// Resolution failures are fatal and abort the run before any traversal
/// starts; everything downstream degrades per-item instead of erroring.
#[derive(Error, Debug)]
pub enum CensusError {
    /// The initial input matched nothing in the taxonomy directory.
    /// Carries the input verbatim, original casing and spacing included.
    #[error("'{input}' not found in the NCBI taxonomy database. Check the spelling and try again.")]
    NotFound { input: String },

    /// A directory lookup failed past the client's retry policy
    #[error(transparent)]
    Entrez(#[from] EntrezError),
}

impl CensusError {
    /// Create a not-found error preserving the user's input
    pub fn not_found(input: impl Into<String>) -> Self {
        Self::NotFound {
            input: input.into(),
        }
    }
}
