use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables for the correlation pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CorrelateConfig {
    /// Name similarity above which two records are considered correlated
    /// (strict: the score must exceed this value).
    #[serde(default = "CorrelateConfig::default_name_threshold")]
    pub name_threshold: f64,
    /// Number of distinct source groups at which the diversity signal of
    /// the correlation score saturates.
    #[serde(default = "CorrelateConfig::default_diversity_target")]
    pub diversity_target: usize,
}

impl CorrelateConfig {
    pub(crate) fn default_name_threshold() -> f64 {
        0.8
    }

    pub(crate) fn default_diversity_target() -> usize {
        3
    }

    pub fn validate(&self) -> Result<(), CorrelateError> {
        if !(0.0..=1.0).contains(&self.name_threshold) {
            return Err(CorrelateError::InvalidConfig(
                "name_threshold must be within [0, 1]".into(),
            ));
        }
        if self.diversity_target == 0 {
            return Err(CorrelateError::InvalidConfig(
                "diversity_target must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CorrelateConfig {
    fn default() -> Self {
        Self {
            name_threshold: Self::default_name_threshold(),
            diversity_target: Self::default_diversity_target(),
        }
    }
}

/// Errors produced by the correlation layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CorrelateError {
    #[error("invalid correlate config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = CorrelateConfig::default();
        assert_eq!(cfg.name_threshold, 0.8);
        assert_eq!(cfg.diversity_target, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let cfg = CorrelateConfig {
            name_threshold: 1.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_diversity_target_rejected() {
        let cfg = CorrelateConfig {
            diversity_target: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
