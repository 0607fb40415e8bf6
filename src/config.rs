//! YAML configuration file support for the idlink engine.
//!
//! Every tunable of the engine — scoring weights and thresholds, tier
//! cutoffs, orchestration deadlines and concurrency, correlation
//! thresholds, embedding dimensions — can be defined in a single YAML file
//! and loaded at runtime. Omitted fields fall back to the production
//! defaults, so a minimal file only names what it changes.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # idlink engine configuration
//! version: "1.0"
//! name: "staging"
//!
//! scoring:
//!   weights:
//!     face: 0.40
//!     name: 0.25
//!     email: 0.15
//!     phone: 0.10
//!     location: 0.10
//!   thresholds:
//!     face: 0.70
//!     name: 0.60
//!     email: 0.80
//!     phone: 0.80
//!     location: 0.70
//!   tiers:
//!     high: 0.8
//!     medium: 0.6
//!
//! federate:
//!   per_source_timeout_ms: 10000
//!   max_concurrency: 4
//!
//! correlate:
//!   name_threshold: 0.8
//!   diversity_target: 3
//!
//! embedding:
//!   dim: 128
//!   normalize: true
//! ```

use std::fs;
use std::path::Path;

use correlate::CorrelateConfig;
use embedding::EmbeddingConfig;
use federate::FederateConfig;
use matcher::ScoringConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading engine configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the whole engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Configuration format version.
    #[serde(default = "EngineConfig::default_version")]
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Match scoring: weights, declaration thresholds, tier cutoffs.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Multi-source orchestration.
    #[serde(default)]
    pub federate: FederateConfig,

    /// Cross-source correlation.
    #[serde(default)]
    pub correlate: CorrelateConfig,

    /// Embedding provider expectations.
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

impl EngineConfig {
    pub(crate) fn default_version() -> String {
        "1.0".to_string()
    }

    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.scoring
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.federate
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.correlate
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.embedding
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            name: None,
            scoring: ScoringConfig::default(),
            federate: FederateConfig::default(),
            correlate: CorrelateConfig::default(),
            embedding: EmbeddingConfig::default(),
        }
    }
}
