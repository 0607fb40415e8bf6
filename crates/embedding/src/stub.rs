use std::hash::{DefaultHasher, Hash, Hasher};

use async_trait::async_trait;

use crate::config::EmbeddingConfig;
use crate::error::EmbeddingError;
use crate::normalize::l2_normalize_in_place;
use crate::provider::EmbeddingProvider;

/// Deterministic stand-in for a real face embedding backend.
///
/// Generates sinusoid values derived from a hash of the image bytes, so the
/// same bytes always produce the same vector with minimal CPU cost. Useful
/// for tests, demos, and environments without a recognition model.
#[derive(Debug, Clone, Default)]
pub struct StubEmbeddingProvider {
    cfg: EmbeddingConfig,
}

impl StubEmbeddingProvider {
    pub fn new(cfg: EmbeddingConfig) -> Result<Self, EmbeddingError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    async fn embed(&self, image: &[u8]) -> Result<Vec<f32>, EmbeddingError> {
        if image.is_empty() {
            return Err(EmbeddingError::EmptyImage);
        }

        let mut hasher = DefaultHasher::new();
        image.hash(&mut hasher);
        let h = hasher.finish();

        let mut v = vec![0f32; self.cfg.dim];
        for (idx, value) in v.iter_mut().enumerate() {
            *value = ((h >> (idx % 32)) as f32 * 0.0001).sin();
        }
        if self.cfg.normalize {
            l2_normalize_in_place(&mut v);
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> StubEmbeddingProvider {
        StubEmbeddingProvider::new(EmbeddingConfig::default()).expect("valid config")
    }

    #[tokio::test]
    async fn embedding_has_configured_dimension() {
        let v = provider().embed(b"portrait bytes").await.unwrap();
        assert_eq!(v.len(), 128);
    }

    #[tokio::test]
    async fn same_bytes_same_vector() {
        let p = provider();
        let a = p.embed(b"same image").await.unwrap();
        let b = p.embed(b"same image").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn different_bytes_different_vector() {
        let p = provider();
        let a = p.embed(b"image one").await.unwrap();
        let b = p.embed(b"image two").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn empty_image_rejected() {
        let err = provider().embed(b"").await.expect_err("empty payload");
        assert_eq!(err, EmbeddingError::EmptyImage);
    }

    #[tokio::test]
    async fn normalized_output_has_unit_norm() {
        let v = provider().embed(b"portrait").await.unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4, "norm was {norm}");
    }

    #[tokio::test]
    async fn custom_dimension_respected() {
        let p = StubEmbeddingProvider::new(EmbeddingConfig {
            dim: 16,
            normalize: false,
        })
        .unwrap();
        let v = p.embed(b"portrait").await.unwrap();
        assert_eq!(v.len(), 16);
        for (i, &x) in v.iter().enumerate() {
            assert!((-1.0..=1.0).contains(&x), "value {x} at {i} out of range");
        }
    }

    #[test]
    fn zero_dim_config_rejected() {
        let err = StubEmbeddingProvider::new(EmbeddingConfig {
            dim: 0,
            normalize: true,
        })
        .expect_err("zero dim");
        assert!(matches!(err, EmbeddingError::InvalidConfig(_)));
    }
}
