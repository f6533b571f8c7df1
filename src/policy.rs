//! Acceptance policy for fuzzy corrections.
//!
//! Scanning the catalog always produces *some* nearest name; whether that
//! name is close enough to present as a correction is a separate decision.
//! [`MatchPolicy`] keeps that decision out of the distance scan so it stays
//! independently testable, and replaces the assorted threshold variants that
//! accumulated in earlier revisions of the service with one two-clause rule.

use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Decides whether a proposed correction is close enough to surface.
///
/// A candidate at edit distance `d` from an input token of `len` characters
/// is accepted when both clauses hold:
///
/// - `d <= max_distance`: an absolute cap, so long inputs cannot drift to
///   wildly different names;
/// - `d <= ceil(length_fraction * len)`: a length-proportional cap, so a
///   one- or two-character token cannot be "corrected" into an unrelated
///   brand.
///
/// With the defaults (`max_distance = 3`, `length_fraction = 0.5`) a
/// 2-character token tolerates one edit, a 4-character token two, and
/// anything from 6 characters up saturates at three.
///
/// `MatchPolicy` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs; absent fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchPolicy {
    /// Absolute edit-distance cap regardless of input length.
    #[serde(default = "MatchPolicy::default_max_distance")]
    pub max_distance: usize,
    /// Fraction of the input token length (in characters) tolerated as
    /// edits, rounded up. Must be in `(0.0, 1.0]`.
    #[serde(default = "MatchPolicy::default_length_fraction")]
    pub length_fraction: f32,
}

impl MatchPolicy {
    pub(crate) fn default_max_distance() -> usize {
        3
    }

    pub(crate) fn default_length_fraction() -> f32 {
        0.5
    }

    /// Validate the policy.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(self.length_fraction > 0.0 && self.length_fraction <= 1.0) {
            return Err(MatchError::InvalidPolicy(
                "length_fraction must be in (0.0, 1.0]".into(),
            ));
        }
        Ok(())
    }

    /// Whether a correction at `distance` edits is acceptable for an input
    /// token of `input_len` characters.
    pub fn accepts(&self, input_len: usize, distance: usize) -> bool {
        let proportional = (self.length_fraction * input_len as f32).ceil() as usize;
        distance <= self.max_distance && distance <= proportional
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            max_distance: Self::default_max_distance(),
            length_fraction: Self::default_length_fraction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        let policy = MatchPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.max_distance, 3);
        assert_eq!(policy.length_fraction, 0.5);
    }

    #[test]
    fn length_fraction_outside_unit_interval_rejected() {
        for fraction in [0.0, -0.5, 1.5, f32::NAN] {
            let policy = MatchPolicy {
                length_fraction: fraction,
                ..MatchPolicy::default()
            };
            let err = policy.validate().expect_err("policy should be invalid");
            match err {
                MatchError::InvalidPolicy(msg) => assert!(msg.contains("length_fraction")),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn boundary_vectors() {
        let policy = MatchPolicy::default();
        // Length 4: ceil(0.5 * 4) = 2.
        assert!(policy.accepts(4, 2));
        assert!(!policy.accepts(4, 3));
        // Length 2: a single edit at most.
        assert!(policy.accepts(2, 1));
        assert!(!policy.accepts(2, 2));
        // Length 10: the absolute cap binds before ceil(5.0) would.
        assert!(policy.accepts(10, 3));
        assert!(!policy.accepts(10, 4));
    }

    #[test]
    fn zero_distance_always_accepted() {
        let policy = MatchPolicy::default();
        for len in 0..8 {
            assert!(policy.accepts(len, 0));
        }
    }

    #[test]
    fn absent_fields_deserialize_to_defaults() {
        let policy: MatchPolicy = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(policy, MatchPolicy::default());

        let policy: MatchPolicy =
            serde_json::from_str(r#"{"max_distance": 2}"#).expect("partial object parses");
        assert_eq!(policy.max_distance, 2);
        assert_eq!(policy.length_fraction, 0.5);
    }
}
