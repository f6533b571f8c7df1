//! Best-match scan and query resolution.

use std::time::Instant;

use tracing::{debug, trace};

use crate::distance::levenshtein;
use crate::metrics::metrics_recorder;
use crate::policy::MatchPolicy;
use crate::token::tokenize;
use crate::types::{BestMatch, MatchError, QueryResolution, Suggestion, TokenMatch};


/// Find the candidate nearest to `input`.
///
/// Both sides are lower-cased, so matching is case-insensitive. A candidate
/// that contains the input as a substring scores distance 0 and ends the
/// scan; otherwise the candidate with the minimum Levenshtein distance wins,
/// ties breaking to the first qualifying candidate in iteration order.
///
/// Returns `None` only for an empty candidate set. No acceptance policy is
/// applied here; gate the result through [`MatchPolicy::accepts`] before
/// surfacing it.
pub fn find_best_match<S: AsRef<str>>(input: &str, candidates: &[S]) -> Option<BestMatch> {
    let needle = input.to_lowercase();
    let mut best: Option<BestMatch> = None;

    for candidate in candidates {
        let name = candidate.as_ref();
        let haystack = name.to_lowercase();
        // An empty needle is trivially contained everywhere; fall through to
        // the distance metric so it scores the candidate's length instead.
        let distance = if !needle.is_empty() && haystack.contains(&needle) {
            0
        } else {
            levenshtein(&needle, &haystack)
        };

        let improved = match best {
            Some(ref current) => distance < current.distance,
            None => true,
        };
        if improved {
            best = Some(BestMatch {
                name: name.to_string(),
                distance,
            });
            if distance == 0 {
                break;
            }
        }
    }

    best
}

/// Resolves raw brand queries against a candidate snapshot.
///
/// Stateless apart from the acceptance policy; a single `Resolver` can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    policy: MatchPolicy,
}

impl Resolver {
    /// Construct a resolver with an explicit, validated policy.
    pub fn new(policy: MatchPolicy) -> Result<Self, MatchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Resolve one raw query against an immutable candidate snapshot.
    ///
    /// The query is tokenized, each token is matched independently, and each
    /// best match is gated through the policy. Accepted names accumulate
    /// into [`QueryResolution::matched_names`]; the cheapest accepted
    /// correction (distance > 0, earlier token winning ties) becomes the
    /// single "did you mean" [`Suggestion`].
    pub fn resolve<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> QueryResolution {
        let start = Instant::now();
        let tokens = tokenize(query);
        debug!(query, token_count = tokens.len(), "resolving brand query");

        let mut token_matches = Vec::with_capacity(tokens.len());
        let mut matched_names: Vec<String> = Vec::new();
        let mut suggestion: Option<Suggestion> = None;

        for token in &tokens {
            let best = find_best_match(&token.text, candidates);
            let accepted = best
                .as_ref()
                .is_some_and(|b| self.policy.accepts(token.text.chars().count(), b.distance));

            if let Some(b) = &best {
                trace!(
                    token = %token.text,
                    matched = %b.name,
                    distance = b.distance,
                    accepted,
                    "token scored"
                );
                if accepted {
                    if !matched_names.iter().any(|n| n == &b.name) {
                        matched_names.push(b.name.clone());
                    }
                    let cheaper = suggestion
                        .as_ref()
                        .is_none_or(|current| b.distance < current.distance);
                    if b.distance > 0 && cheaper {
                        suggestion = Some(Suggestion {
                            input: token.text.clone(),
                            name: b.name.clone(),
                            distance: b.distance,
                        });
                    }
                }
            }

            token_matches.push(TokenMatch {
                token: token.text.clone(),
                best,
                accepted,
            });
        }

        if let Some(s) = &suggestion {
            debug!(input = %s.input, suggestion = %s.name, distance = s.distance, "correction surfaced");
        }
        if let Some(recorder) = metrics_recorder() {
            recorder.record_resolve(start.elapsed(), token_matches.len(), matched_names.len());
        }

        QueryResolution {
            token_matches,
            matched_names,
            suggestion,
        }
    }
}
