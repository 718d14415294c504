//! TXC CLI Library
//!
//! Command-line interface for the taxon census:
//!
//! - **Genome census**: resolve a taxon, walk its descendants, count
//!   assembled genomes per species (`txc count`)
//! - **Lineage**: print a taxon's ancestral path (`txc lineage`)

pub mod commands;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};

/// txc - assembled-genome census over a taxon's descendants
#[derive(Parser, Debug)]
#[command(name = "txc")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Contact email sent to NCBI with every request (required by their
    /// usage policy)
    #[arg(long, env = "TXC_EMAIL", global = true)]
    pub email: Option<String>,

    /// Entrez E-utilities base URL
    #[arg(
        long,
        env = "TXC_ENTREZ_URL",
        default_value = txc_entrez::config::DEFAULT_BASE_URL,
        global = true
    )]
    pub entrez_url: String,

    /// Generate markdown documentation for the CLI
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count assembled genomes per species below a taxon
    Count {
        /// Taxon name or numeric taxid; multi-word names may be given as
        /// separate arguments ("txc count Canis lupus")
        #[arg(required = true)]
        taxon: Vec<String>,

        /// Output format (table, compact, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Stop expanding below this generation depth (unbounded when omitted)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Stop discovering after this many taxa (unbounded when omitted)
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Concurrent Entrez lookups within a generation
        #[arg(long, default_value = "3")]
        concurrency: usize,
    },

    /// Show the ancestral lineage of a taxon, root first
    Lineage {
        /// Taxon name or numeric taxid
        #[arg(required = true)]
        taxon: Vec<String>,
    },
}
