//! Rank classification and species extraction

use std::collections::HashSet;

use serde::Serialize;

use txc_common::types::TaxonName;

use crate::traverse::TraversalResult;

/// The species-rank descendants, deduplicated, in discovery order.
///
/// A sequence rather than an unordered set so downstream reporting order is
/// stable and testable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpeciesSet(Vec<TaxonName>);

impl SpeciesSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxonName> {
        self.0.iter()
    }

    pub fn names(&self) -> &[TaxonName] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SpeciesSet {
    type Item = &'a TaxonName;
    type IntoIter = std::slice::Iter<'a, TaxonName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Extract every species-rank taxon from a traversal result.
///
/// Scans all generations in discovery order and includes a name the first
/// time its recorded rank equals species. The rank consulted is the one
/// fixed at first determination (the result's rank map), so a name seen
/// again with a stale rank neither duplicates nor reclassifies. Idempotent:
/// same input, same output, same order.
pub fn extract_species(result: &TraversalResult) -> SpeciesSet {
    let mut seen: HashSet<TaxonName> = HashSet::new();
    let mut species: Vec<TaxonName> = Vec::new();

    for generation in &result.generations {
        for entry in &generation.nodes {
            let name = &entry.node.name;
            let is_species = result
                .ranks
                .get(name)
                .map(|rank| rank.is_species())
                .unwrap_or_else(|| entry.node.rank.is_species());
            if is_species && seen.insert(name.clone()) {
                species.push(name.clone());
            }
        }
    }

    SpeciesSet(species)
}
