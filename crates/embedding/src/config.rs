use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;

/// Configuration for embedding providers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    /// Output vector dimension. 128 matches the nominal face template size.
    #[serde(default = "EmbeddingConfig::default_dim")]
    pub dim: usize,
    /// Whether vectors are l2-normalized before being returned.
    #[serde(default = "EmbeddingConfig::default_normalize")]
    pub normalize: bool,
}

impl EmbeddingConfig {
    pub(crate) fn default_dim() -> usize {
        128
    }

    pub(crate) fn default_normalize() -> bool {
        true
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.dim == 0 {
            return Err(EmbeddingError::InvalidConfig(
                "embedding dim must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dim: Self::default_dim(),
            normalize: Self::default_normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = EmbeddingConfig::default();
        assert_eq!(cfg.dim, 128);
        assert!(cfg.normalize);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_dim_rejected() {
        let cfg = EmbeddingConfig {
            dim: 0,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        assert!(err.to_string().contains("dim"));
    }
}
