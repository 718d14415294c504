//! Entrez XML payload models
//!
//! Serde models for the two E-utilities payloads txc consumes:
//! esearch (`<eSearchResult>`) and taxonomy efetch (`<TaxaSet>`).
//!
//! Decoding is deliberately lenient: a malformed or empty document decodes
//! to zero results, never an error. The directory reports "nothing found"
//! with an empty `<IdList>` as well as with error documents, and the two
//! must behave identically downstream.

use serde::Deserialize;
use tracing::warn;

use txc_common::types::{Rank, TaxonId, TaxonName, TaxonNode};

/// esearch response body
///
/// ```text
/// <eSearchResult>
///   <Count>2</Count>
///   <IdList><Id>9606</Id><Id>63221</Id></IdList>
/// </eSearchResult>
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct ESearchResult {
    /// Total matches reported by the directory; authoritative even when the
    /// id list is truncated at RetMax
    pub count: Option<u64>,
    pub id_list: IdList,
}

/// `<IdList>` block of an esearch response
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct IdList {
    #[serde(rename = "Id", default)]
    pub ids: Vec<String>,
}

/// Taxonomy efetch response body (`<TaxaSet>` with one `<Taxon>` per id)
#[derive(Debug, Default, Deserialize)]
pub struct TaxaSet {
    #[serde(rename = "Taxon", default)]
    pub taxa: Vec<TaxonXml>,
}

/// One `<Taxon>` record as it appears on the wire
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TaxonXml {
    #[serde(rename = "TaxId")]
    pub tax_id: String,
    #[serde(rename = "ScientificName")]
    pub scientific_name: String,
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "LineageEx")]
    pub lineage_ex: LineageEx,
}

/// `<LineageEx>` block: the ancestor chain in root-to-parent document order
#[derive(Debug, Default, Deserialize)]
pub struct LineageEx {
    #[serde(rename = "Taxon", default)]
    pub ancestors: Vec<LineageTaxonXml>,
}

/// Abbreviated `<Taxon>` entry inside `<LineageEx>`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LineageTaxonXml {
    #[serde(rename = "TaxId")]
    pub tax_id: String,
    #[serde(rename = "ScientificName")]
    pub scientific_name: String,
    #[serde(rename = "Rank")]
    pub rank: String,
}

/// A fully decoded taxonomy record
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonRecord {
    pub id: TaxonId,
    pub name: TaxonName,
    pub rank: Rank,
    /// Ancestor names from the root down to the immediate parent
    pub lineage: Vec<TaxonName>,
}

impl TaxonRecord {
    /// Convert a wire record into a typed record.
    ///
    /// Returns `None` (with a warning) when the record lacks a parseable id
    /// or a scientific name; such records count as "nothing found".
    pub fn from_xml(xml: TaxonXml) -> Option<Self> {
        let id: TaxonId = match xml.tax_id.parse() {
            Ok(id) => id,
            Err(_) => {
                warn!(tax_id = %xml.tax_id, "Discarding taxon record with unparseable TaxId");
                return None;
            },
        };
        if xml.scientific_name.is_empty() {
            warn!(%id, "Discarding taxon record without a scientific name");
            return None;
        }
        Some(Self {
            id,
            name: TaxonName::new(xml.scientific_name),
            rank: Rank::parse(&xml.rank),
            lineage: xml
                .lineage_ex
                .ancestors
                .into_iter()
                .map(|a| TaxonName::new(a.scientific_name))
                .collect(),
        })
    }

    /// The traversal-facing view of this record
    pub fn to_node(&self) -> TaxonNode {
        TaxonNode {
            id: self.id,
            name: self.name.clone(),
            rank: self.rank.clone(),
        }
    }
}

/// Decode an esearch response, treating malformed XML as zero results
pub fn decode_esearch(body: &str) -> ESearchResult {
    match quick_xml::de::from_str(body) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Failed to decode esearch response, treating as empty");
            ESearchResult::default()
        },
    }
}

/// Decode a taxonomy efetch response, treating malformed XML as zero records
pub fn decode_taxa(body: &str) -> TaxaSet {
    match quick_xml::de::from_str(body) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Failed to decode efetch response, treating as empty");
            TaxaSet::default()
        },
    }
}
