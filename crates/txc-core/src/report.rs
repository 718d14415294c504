//! Genome assembly aggregation

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{info, warn};

use txc_common::types::TaxonName;
use txc_entrez::EntrezClient;

use crate::species::SpeciesSet;

/// Assembly count outcome for one species
///
/// Zero is a valid, meaningful count ("species resolved, no assembled
/// genome yet"); a failed lookup is reported as failed, never coerced to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenomeCount {
    Counted(u64),
    Failed(String),
}

impl GenomeCount {
    pub fn is_failed(&self) -> bool {
        matches!(self, GenomeCount::Failed(_))
    }
}

/// One row of the final report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenomeReportEntry {
    pub species: TaxonName,
    pub count: GenomeCount,
}

/// Assembly counts per species, in species (discovery) order
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenomeReport {
    pub entries: Vec<GenomeReportEntry>,
}

impl GenomeReport {
    /// Number of species whose lookup permanently failed
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.count.is_failed()).count()
    }

    /// Sum of the successfully counted assemblies
    pub fn total_assemblies(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| match e.count {
                GenomeCount::Counted(n) => n,
                GenomeCount::Failed(_) => 0,
            })
            .sum()
    }
}

/// Count assembled genomes for every species in the set.
///
/// Each species is queried independently; a failure surfaces in that
/// species' entry while aggregation continues for the rest. Partial results
/// are a first-class outcome, so this never fails as a whole. Entry order
/// matches the species set regardless of completion order.
pub async fn count_genomes(
    client: &EntrezClient,
    species: &SpeciesSet,
    concurrency: usize,
) -> GenomeReport {
    let concurrency = concurrency.max(1);

    let entries: Vec<GenomeReportEntry> = stream::iter(species.iter().cloned())
        .map(|name| async move {
            match client.count_assemblies(&name).await {
                Ok(count) => {
                    info!("number of assembled genomes for {} is {}", name, count);
                    GenomeReportEntry {
                        species: name,
                        count: GenomeCount::Counted(count),
                    }
                },
                Err(e) => {
                    warn!(species = %name, error = %e, "Assembly count failed");
                    GenomeReportEntry {
                        species: name,
                        count: GenomeCount::Failed(e.to_string()),
                    }
                },
            }
        })
        .buffered(concurrency)
        .collect()
        .await;

    GenomeReport { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(name: &str, n: u64) -> GenomeReportEntry {
        GenomeReportEntry {
            species: TaxonName::new(name),
            count: GenomeCount::Counted(n),
        }
    }

    #[test]
    fn test_report_stats() {
        let report = GenomeReport {
            entries: vec![
                counted("A", 3),
                GenomeReportEntry {
                    species: TaxonName::new("B"),
                    count: GenomeCount::Failed("timeout".to_string()),
                },
                counted("C", 0),
            ],
        };

        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.total_assemblies(), 3);
    }

    #[test]
    fn test_zero_count_is_not_failed() {
        let entry = counted("No genomes yet", 0);
        assert!(!entry.count.is_failed());
    }

    #[test]
    fn test_report_serializes_failures_distinctly() {
        let report = GenomeReport {
            entries: vec![
                counted("A", 2),
                GenomeReportEntry {
                    species: TaxonName::new("B"),
                    count: GenomeCount::Failed("boom".to_string()),
                },
            ],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entries"][0]["count"]["counted"], 2);
        assert_eq!(json["entries"][1]["count"]["failed"], "boom");
    }
}
