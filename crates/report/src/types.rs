use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use records::{IdentityRecord, SearchParameters};
use serde::{Deserialize, Serialize};

/// One likely same-identity cluster detected by the report's own
/// cross-source pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrossSourceMatch {
    pub primary_record: IdentityRecord,
    /// Records from other source groups sharing an exact identifier or a
    /// near-exact name with the primary.
    pub related_records: Vec<IdentityRecord>,
    /// Blend of the primary's confidence and the mean related confidence.
    pub confidence: f64,
    pub discrepancies: Vec<String>,
}

/// Narrative quality-assurance report over one search's match results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QaReport {
    pub id: String,
    /// Echo of the parameters that produced the results.
    pub parameters: SearchParameters,
    pub total_matches: usize,
    pub matches_by_group: BTreeMap<String, usize>,
    pub high_confidence_matches: usize,
    pub cross_source_matches: Vec<CrossSourceMatch>,
    pub generated_at: DateTime<Utc>,
    pub summary: String,
    pub recommendations: Vec<String>,
}
