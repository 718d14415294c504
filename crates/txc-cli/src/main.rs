//! txc CLI - Main entry point

use clap::Parser;
use std::process;
use tracing::error;

use txc_cli::{Cli, Commands};
use txc_common::logging::{init_logging, LogConfig, LogLevel};

#[tokio::main]
async fn main() {
    // Load .env if present (TXC_EMAIL, TXC_ENTREZ_URL, LOG_*)
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle markdown help generation
    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Ensure a command is provided
    if cli.command.is_none() {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    }

    // Logging: console only, warnings by default so the report stays
    // readable; --verbose raises to debug; LOG_* env variables win otherwise.
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    } else if std::env::var("LOG_LEVEL").is_err() {
        log_config.level = LogLevel::Warn;
    }
    log_config.log_file_prefix = "txc".to_string();

    // Initialize logging (ignore errors, the CLI should work without it)
    let _ = init_logging(&log_config);

    // Execute command
    let result = execute_command(cli).await;

    // Handle result
    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> txc_cli::Result<()> {
    // Command is guaranteed to exist at this point (checked in main)
    let Some(command) = cli.command else {
        unreachable!("Command should have been validated in main");
    };

    match command {
        Commands::Count {
            taxon,
            format,
            max_depth,
            max_nodes,
            concurrency,
        } => {
            txc_cli::commands::count::run(
                taxon,
                format,
                max_depth,
                max_nodes,
                concurrency,
                cli.email,
                cli.entrez_url,
            )
            .await
        }

        Commands::Lineage { taxon } => {
            txc_cli::commands::lineage::run(taxon, cli.email, cli.entrez_url).await
        }
    }
}
