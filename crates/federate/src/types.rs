use std::collections::BTreeMap;

use correlate::CorrelatedMatch;
use records::MatchResult;
use serde::{Deserialize, Serialize};

/// Terminal state of one source group's search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Completed,
    Error,
    Timeout,
}

/// One source group's contribution to a multi-source search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceOutcome {
    /// Threshold-filtered, confidence-ordered matches. Always empty unless
    /// the status is `completed`.
    pub matches: Vec<MatchResult>,
    /// Wall-clock time this group's search took, including failed and
    /// timed-out attempts.
    pub search_time_ms: u64,
    pub status: SourceStatus,
}

/// Summary counters over one multi-source search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSummary {
    pub total_sources: usize,
    pub successful_searches: usize,
    pub failed_searches: usize,
    pub high_confidence_matches: usize,
    pub cross_source_matches: usize,
    /// Estimated distinct real-world identities: one per correlation
    /// cluster plus every uncorrelated match.
    pub unique_identities: usize,
    /// Mean per-source duration; failed and timed-out groups count too,
    /// since their time was really spent.
    pub average_response_time_ms: f64,
}

/// Top-level output of a multi-source search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateSearchResult {
    pub search_id: String,
    pub total_matches: usize,
    /// Per-group outcomes, keyed by source group name.
    pub source_outcomes: BTreeMap<String, SourceOutcome>,
    /// Cross-source correlation clusters, strongest first.
    pub correlated: Vec<CorrelatedMatch>,
    pub summary: SearchSummary,
}
