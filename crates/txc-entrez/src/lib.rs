//! TXC Entrez Client
//!
//! Typed client for the NCBI Entrez E-utilities, covering exactly the two
//! collaborator interfaces txc needs:
//!
//! - the **taxonomy directory** (esearch/efetch against `db=taxonomy`,
//!   including the `[next level]` children listing), and
//! - the **assembly counter** (esearch against `db=assembly`).
//!
//! Names stay opaque [`txc_common::TaxonName`] values throughout the
//! workspace; quoting and percent-encoding happen only here, at the
//! transport boundary. Malformed or empty XML payloads decode to zero
//! results rather than errors, and transient failures (connect/timeout/5xx)
//! are retried with a backed-off delay.
//!
//! # Example
//!
//! ```no_run
//! use txc_common::TaxonId;
//! use txc_entrez::{Database, EntrezClient, EntrezConfig};
//!
//! # async fn example() -> txc_entrez::Result<()> {
//! let config = EntrezConfig::from_env()?.with_email("someone@example.com");
//! let client = EntrezClient::new(config)?;
//! let record = client.fetch(TaxonId::new(9606), Database::Taxonomy).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod xml;

// Re-export commonly used types
pub use client::{Database, EntrezClient};
pub use config::EntrezConfig;
pub use error::{EntrezError, Result};
pub use xml::TaxonRecord;
