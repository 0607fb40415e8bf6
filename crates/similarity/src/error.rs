use thiserror::Error;

/// Errors surfaced by the similarity functions.
///
/// Only vector comparison can fail; every text comparator treats missing or
/// malformed input as "no information" and scores 0.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimilarityError {
    /// The two embedding vectors have different dimensions. Fatal to the
    /// single comparison only; callers score the field 0 and continue.
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}
