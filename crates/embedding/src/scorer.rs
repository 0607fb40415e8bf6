use similarity::{cosine_similarity, SimilarityError};

/// Compares a query embedding against a candidate record's embedding.
///
/// The seam exists so deployments can swap in a model-specific distance
/// (Euclidean-derived, learned metrics) without touching the scorer. Any
/// implementation must be deterministic: the same pair of vectors must
/// always produce the same score.
pub trait FaceScorer: Send + Sync {
    fn score(&self, query: &[f32], candidate: &[f32]) -> Result<f64, SimilarityError>;
}

/// Reference scorer: cosine similarity mapped into `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineFaceScorer;

impl FaceScorer for CosineFaceScorer {
    fn score(&self, query: &[f32], candidate: &[f32]) -> Result<f64, SimilarityError> {
        cosine_similarity(query, candidate)
    }
}
