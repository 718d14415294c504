//! Count command implementation
//!
//! The full census pipeline: resolve the input, walk the descendant tree,
//! extract species, count assembled genomes, and print the report.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde::Serialize;
use tracing::{debug, info};

use txc_core::{
    count_genomes, extract_species, resolve, traverse, FailedTaxon, GenomeCount, GenomeReport,
    SpeciesSet, TraversalConfig, TraversalResult,
};
use txc_entrez::TaxonRecord;

use crate::error::{CliError, Result};
use crate::progress::create_spinner;

/// Run the count command
#[allow(clippy::too_many_arguments)]
pub async fn run(
    taxon: Vec<String>,
    format: String,
    max_depth: Option<usize>,
    max_nodes: Option<usize>,
    concurrency: usize,
    email: Option<String>,
    entrez_url: String,
) -> Result<()> {
    let input = super::join_taxon_input(taxon)?;
    let client = super::build_client(email, &entrez_url)?;

    debug!(input = %input, format = %format, "Starting census");

    // Resolution failure is fatal: no traversal is attempted on a partial
    // identifier.
    let record = resolve(&client, &input).await?;
    info!(id = %record.id, name = %record.name, "Resolved root taxon");

    let mut config = TraversalConfig::default().with_concurrency(concurrency);
    if let Some(depth) = max_depth {
        config = config.with_max_depth(depth);
    }
    if let Some(nodes) = max_nodes {
        config = config.with_max_nodes(nodes);
    }

    let spinner = create_spinner(&format!("Walking descendants of {}...", record.name));
    let result = traverse(&client, record.id, &config).await;
    spinner.finish_and_clear();

    let species = extract_species(&result);
    let spinner = create_spinner(&format!(
        "Counting assembled genomes for {} species...",
        species.len()
    ));
    let report = count_genomes(&client, &species, concurrency).await;
    spinner.finish_and_clear();

    render(&format, &record, &result, &species, &report)
}

/// JSON shape of the final census output
#[derive(Debug, Serialize)]
struct CensusOutput<'a> {
    root: RootOutput<'a>,
    generations: usize,
    taxa_visited: usize,
    species: &'a GenomeReport,
    failed_taxa: &'a [FailedTaxon],
}

#[derive(Debug, Serialize)]
struct RootOutput<'a> {
    id: txc_common::TaxonId,
    name: &'a txc_common::TaxonName,
    rank: &'a txc_common::Rank,
}

fn render(
    format: &str,
    record: &TaxonRecord,
    result: &TraversalResult,
    species: &SpeciesSet,
    report: &GenomeReport,
) -> Result<()> {
    match format {
        "table" => render_table(record, result, species, report),
        "compact" => render_compact(report),
        "json" => render_json(record, result, report),
        other => Err(CliError::config(format!(
            "Unknown output format '{}'. Expected one of: table, compact, json.",
            other
        ))),
    }
}

fn render_table(
    record: &TaxonRecord,
    result: &TraversalResult,
    species: &SpeciesSet,
    report: &GenomeReport,
) -> Result<()> {
    println!(
        "{} {} [taxid {}] (rank {})",
        "Root:".green().bold(),
        record.name,
        record.id,
        record.rank
    );
    println!(
        "Visited {} taxa across {} generations; {} species found",
        result.node_count(),
        result.depth(),
        species.len()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Species", "Assemblies"]);
    for entry in &report.entries {
        let count_cell = match &entry.count {
            GenomeCount::Counted(n) => Cell::new(n.to_string()),
            GenomeCount::Failed(reason) => Cell::new(format!("FAILED ({})", reason)),
        };
        table.add_row(vec![Cell::new(entry.species.as_str()), count_cell]);
    }
    println!("{}", table);

    println!(
        "{} assembled genomes across {} species",
        report.total_assemblies(),
        report.entries.len() - report.failed_count()
    );
    if report.failed_count() > 0 {
        println!(
            "{} {} species could not be counted",
            "Warning:".yellow().bold(),
            report.failed_count()
        );
    }

    render_failed_taxa(&result.failed);
    Ok(())
}

fn render_compact(report: &GenomeReport) -> Result<()> {
    for entry in &report.entries {
        match &entry.count {
            GenomeCount::Counted(n) => println!("{}\t{}", entry.species, n),
            GenomeCount::Failed(_) => println!("{}\tfailed", entry.species),
        }
    }
    Ok(())
}

fn render_json(record: &TaxonRecord, result: &TraversalResult, report: &GenomeReport) -> Result<()> {
    let output = CensusOutput {
        root: RootOutput {
            id: record.id,
            name: &record.name,
            rank: &record.rank,
        },
        generations: result.depth(),
        taxa_visited: result.node_count(),
        species: report,
        failed_taxa: &result.failed,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Every permanently failed taxon appears in the output, flagged, never
/// silently absent.
fn render_failed_taxa(failed: &[FailedTaxon]) {
    if failed.is_empty() {
        return;
    }
    println!();
    println!(
        "{} {} taxa could not be resolved during traversal:",
        "Warning:".yellow().bold(),
        failed.len()
    );
    for taxon in failed {
        println!("  taxid {}: {}", taxon.id, taxon.error);
    }
}
