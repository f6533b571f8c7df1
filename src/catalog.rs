//! Catalog snapshot seam.
//!
//! The matching core never talks to storage. Whatever backs the brand
//! catalog (a relational table, a CSV import, an in-memory fixture) hands
//! the resolver an immutable [`CatalogSnapshot`] materialized before the
//! call; concurrent catalog mutation is the collaborator's problem and is
//! never observable mid-resolution.

use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// One row of the brand-presence catalog: where a brand can be found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandRecord {
    /// Mall or store the brand has a counter in.
    pub location: String,
    /// Floor label, e.g. `"B1"` or `"3F"`.
    pub floor: String,
    /// Brand name; the matching candidate.
    pub name: String,
    /// Merchandise category, when the source row carries one.
    #[serde(default)]
    pub category: Option<String>,
}

/// Immutable candidate snapshot taken from the catalog collaborator.
///
/// Distinct brand names are captured in first-occurrence order; duplicate
/// rows for the same brand (one per location/floor) are expected and do not
/// affect matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSnapshot {
    records: Vec<BrandRecord>,
    names: Vec<String>,
}

impl CatalogSnapshot {
    /// Build a snapshot from already-materialized rows.
    pub fn from_records(records: Vec<BrandRecord>) -> Self {
        let mut names: Vec<String> = Vec::new();
        for record in &records {
            if !names.iter().any(|n| n == &record.name) {
                names.push(record.name.clone());
            }
        }
        Self { records, names }
    }

    /// Build a snapshot from a JSON array of [`BrandRecord`]s, the shape the
    /// import tooling emits.
    pub fn from_json_str(payload: &str) -> Result<Self, MatchError> {
        let records: Vec<BrandRecord> = serde_json::from_str(payload)?;
        Ok(Self::from_records(records))
    }

    /// The distinct brand names, the candidate set consumed by the resolver.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All rows in the snapshot.
    pub fn records(&self) -> &[BrandRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose brand name matched one of the accepted query tokens.
    pub fn filter<S: AsRef<str>>(&self, matched_names: &[S]) -> Vec<&BrandRecord> {
        self.records
            .iter()
            .filter(|record| matched_names.iter().any(|n| n.as_ref() == record.name))
            .collect()
    }
}
