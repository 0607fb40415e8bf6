use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::IdentityRecord;

/// The identity fields the scorer can compare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Face,
    Name,
    Email,
    Phone,
    Location,
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchField::Face => "face",
            MatchField::Name => "name",
            MatchField::Email => "email",
            MatchField::Phone => "phone",
            MatchField::Location => "location",
        };
        f.write_str(name)
    }
}

/// Coarse confidence bucket derived from the overall confidence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Bucket a confidence value using explicit cutoffs (`high` and `medium`
    /// are inclusive lower bounds).
    pub fn from_confidence(confidence: f64, high: f64, medium: f64) -> Self {
        if confidence >= high {
            ConfidenceTier::High
        } else if confidence >= medium {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

/// One record scored against one set of search parameters.
///
/// Created once per scoring pass and immutable thereafter. The record is an
/// owned snapshot; the engine never mutates source data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub record: IdentityRecord,
    /// Weighted confidence over the fields compared, in [0, 1].
    pub overall_confidence: f64,
    /// Per-field similarity scores, only for fields present on both sides.
    pub match_breakdown: BTreeMap<MatchField, f64>,
    /// Breakdown fields whose score exceeded that field's declaration
    /// threshold. Explainability only; independent of the search threshold.
    pub matched_fields: Vec<MatchField>,
    pub confidence_tier: ConfidenceTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_buckets_at_default_cutoffs() {
        assert_eq!(
            ConfidenceTier::from_confidence(0.95, 0.8, 0.6),
            ConfidenceTier::High
        );
        assert_eq!(
            ConfidenceTier::from_confidence(0.8, 0.8, 0.6),
            ConfidenceTier::High
        );
        assert_eq!(
            ConfidenceTier::from_confidence(0.79, 0.8, 0.6),
            ConfidenceTier::Medium
        );
        assert_eq!(
            ConfidenceTier::from_confidence(0.6, 0.8, 0.6),
            ConfidenceTier::Medium
        );
        assert_eq!(
            ConfidenceTier::from_confidence(0.59, 0.8, 0.6),
            ConfidenceTier::Low
        );
    }

    #[test]
    fn match_field_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchField::Location).unwrap(),
            "\"location\""
        );
        assert_eq!(MatchField::Face.to_string(), "face");
    }
}
