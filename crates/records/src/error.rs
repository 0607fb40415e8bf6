use thiserror::Error;

/// Validation errors for identity records entering the engine.
///
/// All variants are contract violations on the ingestion side and fail fast;
/// the scoring pipeline itself never raises them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record id must not be empty")]
    EmptyId,
    #[error("record {id} has an empty source group")]
    EmptySourceGroup { id: String },
    #[error("record {id} has an invalid email: {email}")]
    InvalidEmail { id: String, email: String },
    #[error("record {id} has an empty face embedding")]
    EmptyEmbedding { id: String },
    #[error("record {id} already exists in source group {group}")]
    DuplicateId { group: String, id: String },
}

/// Validation errors for caller-supplied search parameters.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParameterError {
    #[error("confidence threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
}

/// Failures reported by a record source provider.
///
/// A provider failure never aborts a multi-source search; the orchestrator
/// records it as that source's outcome and proceeds with siblings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("unknown source group: {0}")]
    UnknownGroup(String),
    #[error("source unavailable: {0}")]
    Unavailable(String),
}
