//! TXC Common Library
//!
//! Shared domain types, error handling, and logging for the txc workspace.
//!
//! # Overview
//!
//! This crate provides functionality used across all txc workspace members:
//!
//! - **Types**: the taxonomy domain values (`TaxonId`, `TaxonName`, `Rank`,
//!   `TaxonNode`)
//! - **Error Handling**: base error type for domain-value parsing
//! - **Logging**: centralized tracing initialization
//!
//! # Example
//!
//! ```
//! use txc_common::types::{Rank, TaxonId, TaxonName, TaxonNode};
//!
//! let node = TaxonNode {
//!     id: TaxonId::new(9606),
//!     name: TaxonName::new("Homo sapiens"),
//!     rank: Rank::parse("species"),
//! };
//! assert!(node.rank.is_species());
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{CommonError, Result};
pub use types::{Rank, TaxonId, TaxonName, TaxonNode};
