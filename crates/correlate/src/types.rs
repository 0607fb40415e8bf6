use records::MatchResult;
use serde::{Deserialize, Serialize};

/// How a cluster of matches was linked together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationType {
    /// A related record shares an exact email or exact normalized phone
    /// with the primary.
    Exact,
    /// A related match declares at least one of the same matched fields as
    /// the primary.
    Partial,
    /// Linked on name similarity alone.
    Fuzzy,
}

/// A cluster linking one primary match to related matches from other
/// source groups that likely describe the same real-world identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrelatedMatch {
    pub primary: MatchResult,
    /// At least one related match, each from a different source group than
    /// the primary.
    pub related: Vec<MatchResult>,
    /// Mean of the primary confidence, the average related confidence, and
    /// the saturating source-diversity signal; in [0, 1].
    pub correlation_score: f64,
    pub correlation_type: CorrelationType,
    /// Human-readable field mismatches between the primary and each related
    /// record, deduplicated.
    pub discrepancies: Vec<String>,
}
