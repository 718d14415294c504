//! CLI command implementations

pub mod count;
pub mod lineage;

use txc_entrez::{EntrezClient, EntrezConfig};

use crate::error::{CliError, Result};

/// Build the Entrez client from CLI-level settings.
///
/// The contact email is mandatory: NCBI asks for it on every request and the
/// reference tool refuses to run without one.
pub(crate) fn build_client(email: Option<String>, entrez_url: &str) -> Result<EntrezClient> {
    let email = email.filter(|e| !e.trim().is_empty()).ok_or_else(|| {
        CliError::config(
            "A contact email is required. Pass --email or set TXC_EMAIL; NCBI requires it for E-utilities access.",
        )
    })?;

    // Env settings (timeout, retry policy) still apply; the flag values win
    // for the URL and email.
    let config = EntrezConfig::from_env()?
        .with_base_url(entrez_url)
        .with_email(email);

    Ok(EntrezClient::new(config)?)
}

/// Join the multi-word taxon arguments into the single opaque input string.
pub(crate) fn join_taxon_input(taxon: Vec<String>) -> Result<String> {
    let input = taxon.join(" ");
    if input.trim().is_empty() {
        return Err(CliError::config("Taxon input cannot be empty"));
    }
    Ok(input)
}
