use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Best candidate for a single query token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestMatch {
    /// Candidate name exactly as it appears in the catalog.
    pub name: String,
    /// Edit distance between the lower-cased token and candidate; 0 for
    /// containment matches.
    pub distance: usize,
}

/// Outcome for one query token, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenMatch {
    /// The token as tokenized from the query.
    pub token: String,
    /// Nearest candidate, or `None` when the candidate set was empty.
    pub best: Option<BestMatch>,
    /// Whether the best match passed the acceptance policy.
    pub accepted: bool,
}

/// A single "did you mean" correction surfaced for the whole query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// The query token that was corrected.
    pub input: String,
    /// The catalog name it was corrected to.
    pub name: String,
    /// How many edits the correction needed.
    pub distance: usize,
}

/// Result of resolving one raw query against a candidate snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryResolution {
    /// Per-token outcomes, one per query token in input order.
    pub token_matches: Vec<TokenMatch>,
    /// Accepted catalog names across all tokens, first occurrence first,
    /// deduplicated. This is the set used for downstream record filtering.
    pub matched_names: Vec<String>,
    /// The cheapest accepted correction (distance > 0) across the query,
    /// if any token actually needed correcting.
    pub suggestion: Option<Suggestion>,
}

/// Errors produced by the lookup layer.
///
/// Matching itself never fails: an empty candidate set and a rejected
/// correction are ordinary return values, not errors.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Acceptance policy with nonsensical bounds.
    #[error("invalid match policy: {0}")]
    InvalidPolicy(String),
    /// Catalog snapshot payload failed to parse.
    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),
}
