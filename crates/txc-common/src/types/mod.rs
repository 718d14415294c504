//! Taxonomy domain types used across txc
//!
//! These are the value types the traversal engine, classifier, and reporting
//! layers exchange. They deliberately carry no transport concerns: a
//! [`TaxonName`] is opaque text everywhere inside the system, and percent
//! encoding happens only at the Entrez client boundary.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CommonError;

/// Stable numeric identifier for a node in the taxonomy directory.
///
/// Opaque and immutable once obtained; the traversal engine guarantees a
/// given id is visited in exactly one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonId(u32);

impl TaxonId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TaxonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaxonId {
    type Err = CommonError;

    /// Accepts all-digit input only; this is also the rule the resolver uses
    /// to decide whether user input is an id or a name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommonError::InvalidTaxonId(s.to_string()));
        }
        s.parse::<u32>()
            .map(TaxonId)
            .map_err(|_| CommonError::InvalidTaxonId(s.to_string()))
    }
}

/// Scientific name of a taxon, treated as opaque text.
///
/// Names may contain whitespace ("Homo sapiens") and are never tokenized;
/// equality and hashing are on the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonName(String);

impl TaxonName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaxonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaxonName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Taxonomic rank of a taxon.
///
/// Only the exact literal "species" is semantically significant to txc; every
/// other rank ("genus", "subspecies", "species group", "no rank", ...) is
/// carried verbatim but treated identically as non-species.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Rank {
    Species,
    Other(String),
}

impl Rank {
    /// Classify a rank literal. Comparison is exact string equality, so
    /// "subspecies" and "species group" stay non-species.
    pub fn parse(literal: &str) -> Self {
        if literal == "species" {
            Rank::Species
        } else {
            Rank::Other(literal.to_string())
        }
    }

    pub fn is_species(&self) -> bool {
        matches!(self, Rank::Species)
    }

    /// The original rank literal as the directory reported it.
    pub fn as_str(&self) -> &str {
        match self {
            Rank::Species => "species",
            Rank::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Rank {
    fn from(s: String) -> Self {
        Rank::parse(&s)
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A visited node of the taxonomy tree.
///
/// Produced once, the first time the node is seen during traversal, and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonNode {
    /// Directory identifier
    pub id: TaxonId,
    /// Canonical scientific name
    pub name: TaxonName,
    /// Rank as first determined for this node
    pub rank: Rank,
}

impl std::fmt::Display for TaxonNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] ({})", self.name, self.id, self.rank)
    }
}
