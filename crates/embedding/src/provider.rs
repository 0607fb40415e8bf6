use async_trait::async_trait;

use crate::error::EmbeddingError;

/// External collaborator turning raw image bytes into a fixed-length
/// feature vector.
///
/// Implementations are expected to return vectors of a stable dimension for
/// the lifetime of the provider; the match scorer treats a dimension
/// mismatch against a record's stored embedding as a zero-information
/// comparison, not an abort.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, image: &[u8]) -> Result<Vec<f32>, EmbeddingError>;
}
