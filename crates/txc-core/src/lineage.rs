//! Ancestral lineage lookup
//!
//! The directory's efetch record already carries the ancestor chain, so the
//! root-to-taxon path costs the same lookups the resolver makes anyway.

use txc_common::types::TaxonName;
use txc_entrez::EntrezClient;

use crate::error::Result;
use crate::resolve::resolve;

/// Resolve `input` and return its lineage from the root down, the queried
/// taxon itself appended last.
pub async fn lineage(client: &EntrezClient, input: &str) -> Result<Vec<TaxonName>> {
    let record = resolve(client, input).await?;

    let mut path = record.lineage;
    path.push(record.name);
    Ok(path)
}
