use thiserror::Error;

/// Errors surfaced by embedding providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmbeddingError {
    /// The provider could not produce a vector for the given image. The
    /// search continues without the face field; this is never fatal to a
    /// query.
    #[error("embedding failed: {0}")]
    EmbeddingFailed(String),
    /// An empty image payload is a contract violation at the seam.
    #[error("empty image payload")]
    EmptyImage,
    /// Provider configuration is inconsistent.
    #[error("invalid embedding config: {0}")]
    InvalidConfig(String),
}
