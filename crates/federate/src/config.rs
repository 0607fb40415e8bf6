use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FederateError;

/// Orchestration tunables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FederateConfig {
    /// Deadline for one source group's search. On expiry the group is
    /// marked `timeout`, its in-flight work is abandoned, and its partial
    /// results are discarded.
    #[serde(default = "FederateConfig::default_per_source_timeout_ms")]
    pub per_source_timeout_ms: u64,
    /// Maximum number of source searches in flight at once.
    #[serde(default = "FederateConfig::default_max_concurrency")]
    pub max_concurrency: usize,
}

impl FederateConfig {
    pub(crate) fn default_per_source_timeout_ms() -> u64 {
        10_000
    }

    pub(crate) fn default_max_concurrency() -> usize {
        4
    }

    pub fn per_source_timeout(&self) -> Duration {
        Duration::from_millis(self.per_source_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), FederateError> {
        if self.per_source_timeout_ms == 0 {
            return Err(FederateError::InvalidConfig(
                "per_source_timeout_ms must be >= 1".into(),
            ));
        }
        if self.max_concurrency == 0 {
            return Err(FederateError::InvalidConfig(
                "max_concurrency must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for FederateConfig {
    fn default() -> Self {
        Self {
            per_source_timeout_ms: Self::default_per_source_timeout_ms(),
            max_concurrency: Self::default_max_concurrency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = FederateConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.per_source_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.max_concurrency, 4);
    }

    #[test]
    fn zero_timeout_rejected() {
        let cfg = FederateConfig {
            per_source_timeout_ms: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_concurrency_rejected() {
        let cfg = FederateConfig {
            max_concurrency: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
