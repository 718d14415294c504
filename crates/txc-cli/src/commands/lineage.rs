//! Lineage command implementation

use tracing::debug;

use txc_core::lineage;

use crate::error::Result;

/// Run the lineage command: print the ancestral path root-first as an
/// indented tree.
pub async fn run(taxon: Vec<String>, email: Option<String>, entrez_url: String) -> Result<()> {
    let input = super::join_taxon_input(taxon)?;
    let client = super::build_client(email, &entrez_url)?;

    debug!(input = %input, "Looking up lineage");
    let path = lineage(&client, &input).await?;

    for (depth, name) in path.iter().enumerate() {
        println!("{}{}", branch_prefix(depth), name);
    }

    Ok(())
}

/// Indentation for one lineage level: the root is flush left, every
/// descendant gets one more tab before its branch marker.
fn branch_prefix(depth: usize) -> String {
    if depth == 0 {
        String::new()
    } else {
        format!("{}+---", "\t".repeat(depth - 1))
    }
}
