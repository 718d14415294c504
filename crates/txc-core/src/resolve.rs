//! Name/identifier resolution
//!
//! Turns the user's input into a canonical taxonomy record before any
//! traversal starts. All-digit input is treated as a taxon id directly;
//! anything else is searched as a name and then round-tripped through efetch
//! so the caller always gets the directory's canonical name and rank, never
//! the user's spelling.

use tracing::debug;

use txc_common::types::{TaxonId, TaxonName};
use txc_entrez::{Database, EntrezClient, TaxonRecord};

use crate::error::{CensusError, Result};

/// Resolve user input to a canonical taxonomy record.
///
/// Fails with [`CensusError::NotFound`] (carrying the input verbatim) when
/// the directory returns zero matches for either the forward or the reverse
/// lookup; the census must not proceed on a partial identifier.
///
/// A name matching several taxa (e.g. "Mus" as both genus and species)
/// resolves to whichever match the directory lists first; the remaining
/// candidates are logged at debug level for diagnosis.
pub async fn resolve(client: &EntrezClient, input: &str) -> Result<TaxonRecord> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CensusError::not_found(input));
    }

    if let Ok(id) = trimmed.parse::<TaxonId>() {
        debug!(%id, "Input is all digits, treating it as a taxon id");
        return client
            .fetch(id, Database::Taxonomy)
            .await?
            .ok_or_else(|| CensusError::not_found(input));
    }

    let name = TaxonName::new(trimmed);
    let matches = client.search(&name, Database::Taxonomy).await?;

    let Some(&first) = matches.first() else {
        return Err(CensusError::not_found(input));
    };

    if matches.len() > 1 {
        debug!(
            input = %name,
            candidates = ?matches,
            "Name matched {} taxa, taking the first",
            matches.len()
        );
    }

    // Round-trip through efetch guards against partial name matches: the
    // record carries the canonical name, not the query string.
    client
        .fetch(first, Database::Taxonomy)
        .await?
        .ok_or_else(|| CensusError::not_found(input))
}
