use thiserror::Error;

/// Engine-level failures of a multi-source search.
///
/// These are fail-fast programmer-error contracts. Per-source runtime
/// failures are never surfaced this way — they become
/// [`SourceStatus`](crate::types::SourceStatus) values in the aggregate
/// result.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FederateError {
    /// Malformed search parameters.
    #[error(transparent)]
    Parameters(#[from] records::ParameterError),
    /// The effective source set is empty: no groups registered, or the
    /// caller's group selection matched nothing.
    #[error("no record sources available for this search")]
    NoSources,
    /// Orchestrator configuration is inconsistent.
    #[error("invalid federate config: {0}")]
    InvalidConfig(String),
    /// Scoring configuration was rejected.
    #[error(transparent)]
    Scoring(#[from] matcher::MatchError),
    /// Correlation configuration was rejected.
    #[error(transparent)]
    Correlate(#[from] correlate::CorrelateError),
}
