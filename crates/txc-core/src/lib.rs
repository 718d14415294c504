//! TXC Core
//!
//! The descendant-tree census engine: resolve a user-supplied taxon name or
//! id, expand the taxonomic tree breadth-first generation by generation,
//! extract the species-rank descendants, and count assembled genomes per
//! species.
//!
//! # Pipeline
//!
//! ```no_run
//! use txc_core::{count_genomes, extract_species, resolve, traverse, TraversalConfig};
//! use txc_entrez::{EntrezClient, EntrezConfig};
//!
//! # async fn example() -> txc_core::Result<()> {
//! let client = EntrezClient::new(EntrezConfig::from_env()?)?;
//!
//! let root = resolve(&client, "Apis").await?;
//! let result = traverse(&client, root.id, &TraversalConfig::default()).await;
//! let species = extract_species(&result);
//! let report = count_genomes(&client, &species, 3).await;
//! # Ok(())
//! # }
//! ```
//!
//! All accumulators are local to the traversal and returned in the
//! [`traverse::TraversalResult`]; nothing here holds process-wide mutable
//! state. Per-item lookup failures degrade to recorded outcomes (failed
//! taxa, failed counts) instead of aborting the remaining branches.

pub mod error;
pub mod lineage;
pub mod report;
pub mod resolve;
pub mod species;
pub mod traverse;

// Re-export commonly used types
pub use error::{CensusError, Result};
pub use lineage::lineage;
pub use report::{count_genomes, GenomeCount, GenomeReport, GenomeReportEntry};
pub use resolve::resolve;
pub use species::{extract_species, SpeciesSet};
pub use traverse::{
    traverse, Expansion, FailedTaxon, Generation, GenerationNode, TraversalConfig, TraversalResult,
};
