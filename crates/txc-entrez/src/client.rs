//! HTTP client for the Entrez E-utilities
//!
//! One reused `reqwest::Client` (and its connection pool) backs every call
//! against both the taxonomy directory and the assembly counter. Each
//! operation is a single blocking request/response; transient failures are
//! retried with a backed-off delay before surfacing.

use std::time::Duration;

use tracing::{debug, warn};

use txc_common::types::{TaxonId, TaxonName};

use crate::config::{EntrezConfig, TOOL_NAME};
use crate::error::{EntrezError, Result};
use crate::xml::{self, TaxonRecord};

/// Logical Entrez collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    /// The taxonomy directory (names, ranks, children)
    Taxonomy,
    /// The genome assembly records collection
    Assembly,
}

impl Database {
    pub fn as_str(self) -> &'static str {
        match self {
            Database::Taxonomy => "taxonomy",
            Database::Assembly => "assembly",
        }
    }
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entrez E-utilities client
#[derive(Debug)]
pub struct EntrezClient {
    client: reqwest::Client,
    config: EntrezConfig,
}

impl EntrezClient {
    /// Create a new client from a configuration
    pub fn new(config: EntrezConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// The active configuration
    pub fn config(&self) -> &EntrezConfig {
        &self.config
    }

    /// List every id matching a term in the given collection.
    ///
    /// The term is the opaque taxon name; quoting and percent-encoding are
    /// applied here and nowhere else.
    pub async fn search(&self, term: &TaxonName, db: Database) -> Result<Vec<TaxonId>> {
        let url = self.esearch_url(&quoted_term(term), db);
        let body = self.get_with_retry(&url).await?;
        Ok(decode_ids(&body))
    }

    /// List the ids of a taxon's immediate children.
    ///
    /// Uses the taxonomy directory's `[next level]` field qualifier; this is
    /// a distinct operation from [`EntrezClient::search`], not a flag on it.
    pub async fn search_children(&self, name: &TaxonName) -> Result<Vec<TaxonId>> {
        let term = format!("{}%5Bnext%20level%5D", quoted_term(name));
        let url = self.esearch_url(&term, Database::Taxonomy);
        let body = self.get_with_retry(&url).await?;
        Ok(decode_ids(&body))
    }

    /// Fetch the record for a single id.
    ///
    /// Returns `Ok(None)` when the response carries no usable record, which
    /// is how the directory reports an unknown id.
    pub async fn fetch(&self, id: TaxonId, db: Database) -> Result<Option<TaxonRecord>> {
        let url = format!(
            "{}/efetch.fcgi?db={}&id={}&format=xml&tool={}&email={}",
            self.config.base_url,
            db.as_str(),
            id,
            TOOL_NAME,
            urlencoding::encode(&self.config.email),
        );
        let body = self.get_with_retry(&url).await?;
        Ok(xml::decode_taxa(&body)
            .taxa
            .into_iter()
            .next()
            .and_then(TaxonRecord::from_xml))
    }

    /// Count assembly records whose organism matches a species name.
    ///
    /// Zero is a meaningful result ("species resolved, no assembled genome
    /// yet"), distinct from a lookup failure which surfaces as an error.
    pub async fn count_assemblies(&self, name: &TaxonName) -> Result<u64> {
        let url = self.esearch_url(&quoted_term(name), Database::Assembly);
        let body = self.get_with_retry(&url).await?;
        let result = xml::decode_esearch(&body);
        Ok(result
            .count
            .unwrap_or(result.id_list.ids.len() as u64))
    }

    fn esearch_url(&self, term: &str, db: Database) -> String {
        format!(
            "{}/esearch.fcgi?db={}&term={}&format=xml&RetMax={}&tool={}&email={}",
            self.config.base_url,
            db.as_str(),
            term,
            self.config.ret_max,
            TOOL_NAME,
            urlencoding::encode(&self.config.email),
        )
    }

    /// Perform a GET with the configured retry policy.
    ///
    /// Only transient failures (connect/timeout/5xx) are retried; the delay
    /// grows linearly with the attempt number.
    async fn get_with_retry(&self, url: &str) -> Result<String> {
        let max_attempts = self.config.max_retries.max(1);

        for attempt in 1..=max_attempts {
            debug!("GET attempt {}/{} for: {}", attempt, max_attempts, url);

            match self.get_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_attempts && e.is_transient() => {
                    let delay = self.config.retry_delay_secs * attempt as u64;
                    warn!(
                        "Request attempt {}/{} failed: {}. Retrying in {}s...",
                        attempt, max_attempts, e, delay
                    );
                    tokio::time::sleep(Duration::from_secs(delay)).await;
                },
                Err(e) => return Err(e),
            }
        }

        unreachable!("Retry loop should always return")
    }

    async fn get_once(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EntrezError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Quote and percent-encode a name for use as an esearch term.
///
/// "Homo sapiens" becomes `%22Homo%20sapiens%22`; the quotes keep multi-word
/// names a single phrase on the directory side.
fn quoted_term(name: &TaxonName) -> String {
    format!("%22{}%22", urlencoding::encode(name.as_str()))
}

fn decode_ids(body: &str) -> Vec<TaxonId> {
    xml::decode_esearch(body)
        .id_list
        .ids
        .iter()
        .filter_map(|raw| raw.parse().ok())
        .collect()
}
