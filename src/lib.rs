//! # Brand Match (`brandmatch`)
//!
//! ## Purpose
//!
//! `brandmatch` is the approximate string-matching core of a brand/location
//! lookup service. It turns a free-form, possibly misspelled, multi-brand
//! query into per-token matches against a catalog of known brand names, and
//! surfaces a single confidence-ranked "did you mean" correction.
//!
//! Everything around it (HTTP routing, the relational catalog, generative
//! text) is an external collaborator. The core consumes a materialized,
//! immutable candidate snapshot and exposes pure functions over it.
//!
//! ## Core Types
//!
//! - [`tokenize`]: splits a raw query into brand tokens on comma-class
//!   separators (ASCII, full-width, and CJK enumeration commas).
//! - [`levenshtein`]: classic edit distance with the textbook DP recurrence.
//! - [`find_best_match`]: minimum-distance scan with a containment
//!   short-circuit; first qualifying candidate wins ties.
//! - [`MatchPolicy`]: the acceptance gate, an absolute distance cap plus a
//!   length-proportional cap, applied outside the distance scan.
//! - [`Resolver`]: the per-query pipeline; produces a [`QueryResolution`]
//!   with per-token outcomes, the accepted name set, and an optional
//!   [`Suggestion`].
//! - [`CatalogSnapshot`]: the read-only candidate seam fed by whatever
//!   storage the surrounding service uses.
//!
//! ## Example Usage
//!
//! ```
//! use brandmatch::{BrandRecord, CatalogSnapshot, MatchPolicy, Resolver};
//!
//! let catalog = CatalogSnapshot::from_records(vec![
//!     BrandRecord {
//!         location: "Banqiao".into(),
//!         floor: "1F".into(),
//!         name: "Nike".into(),
//!         category: Some("sports".into()),
//!     },
//!     BrandRecord {
//!         location: "Banqiao".into(),
//!         floor: "2F".into(),
//!         name: "UNIQLO".into(),
//!         category: None,
//!     },
//! ]);
//!
//! let resolver = Resolver::new(MatchPolicy::default()).expect("valid policy");
//! let resolution = resolver.resolve("Nikee, uniqlo", catalog.names());
//!
//! assert_eq!(resolution.matched_names, vec!["Nike".to_string(), "UNIQLO".to_string()]);
//! let suggestion = resolution.suggestion.expect("Nikee is one edit from Nike");
//! assert_eq!(suggestion.name, "Nike");
//!
//! // Rows for the matched brands, for downstream filtering.
//! let rows = catalog.filter(&resolution.matched_names);
//! assert_eq!(rows.len(), 2);
//! ```
//!
//! ## Concurrency
//!
//! Every entry point is a pure computation over its arguments: no shared
//! mutable state, no I/O, no blocking. Resolvers and snapshots can be shared
//! across threads and invoked concurrently without coordination.
//!
//! ## Observability
//!
//! Resolution emits `tracing` events at `debug`/`trace` level. Install a
//! [`MatchMetrics`] implementation via [`set_match_metrics`] to record
//! per-query latency and hit counts; this is typically done once during
//! service startup.

pub mod catalog;
pub mod distance;
pub mod engine;
pub mod metrics;
pub mod policy;
pub mod token;
pub mod types;

pub use crate::catalog::{BrandRecord, CatalogSnapshot};
pub use crate::distance::levenshtein;
pub use crate::engine::{find_best_match, Resolver};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::policy::MatchPolicy;
pub use crate::token::{tokenize, Token};
pub use crate::types::{BestMatch, MatchError, QueryResolution, Suggestion, TokenMatch};
