use serde::{Deserialize, Serialize};
use similarity::LocationWeights;
use thiserror::Error;

/// Relative weight of each identity field in the overall confidence.
///
/// Fields absent from a comparison contribute neither their weight nor a
/// score, so the values here only express the *relative* trust placed in
/// each channel when it is available. Face evidence dominates; location is
/// the weakest signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FieldWeights {
    #[serde(default = "FieldWeights::default_face")]
    pub face: f64,
    #[serde(default = "FieldWeights::default_name")]
    pub name: f64,
    #[serde(default = "FieldWeights::default_email")]
    pub email: f64,
    #[serde(default = "FieldWeights::default_phone")]
    pub phone: f64,
    #[serde(default = "FieldWeights::default_location")]
    pub location: f64,
}

impl FieldWeights {
    pub(crate) fn default_face() -> f64 {
        0.40
    }
    pub(crate) fn default_name() -> f64 {
        0.25
    }
    pub(crate) fn default_email() -> f64 {
        0.15
    }
    pub(crate) fn default_phone() -> f64 {
        0.10
    }
    pub(crate) fn default_location() -> f64 {
        0.10
    }

    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("face", self.face),
            ("name", self.name),
            ("email", self.email),
            ("phone", self.phone),
            ("location", self.location),
        ]
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            face: Self::default_face(),
            name: Self::default_name(),
            email: Self::default_email(),
            phone: Self::default_phone(),
            location: Self::default_location(),
        }
    }
}

/// Per-field declaration thresholds: a field joins `matched_fields` when its
/// similarity strictly exceeds its threshold. Explainability only — these
/// are independent of the caller's overall confidence threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FieldThresholds {
    #[serde(default = "FieldThresholds::default_face")]
    pub face: f64,
    #[serde(default = "FieldThresholds::default_name")]
    pub name: f64,
    #[serde(default = "FieldThresholds::default_email")]
    pub email: f64,
    #[serde(default = "FieldThresholds::default_phone")]
    pub phone: f64,
    #[serde(default = "FieldThresholds::default_location")]
    pub location: f64,
}

impl FieldThresholds {
    pub(crate) fn default_face() -> f64 {
        0.70
    }
    pub(crate) fn default_name() -> f64 {
        0.60
    }
    pub(crate) fn default_email() -> f64 {
        0.80
    }
    pub(crate) fn default_phone() -> f64 {
        0.80
    }
    pub(crate) fn default_location() -> f64 {
        0.70
    }

    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("face", self.face),
            ("name", self.name),
            ("email", self.email),
            ("phone", self.phone),
            ("location", self.location),
        ]
    }
}

impl Default for FieldThresholds {
    fn default() -> Self {
        Self {
            face: Self::default_face(),
            name: Self::default_name(),
            email: Self::default_email(),
            phone: Self::default_phone(),
            location: Self::default_location(),
        }
    }
}

/// Inclusive lower bounds of the High and Medium confidence tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierCutoffs {
    #[serde(default = "TierCutoffs::default_high")]
    pub high: f64,
    #[serde(default = "TierCutoffs::default_medium")]
    pub medium: f64,
}

impl TierCutoffs {
    pub(crate) fn default_high() -> f64 {
        0.8
    }
    pub(crate) fn default_medium() -> f64 {
        0.6
    }
}

impl Default for TierCutoffs {
    fn default() -> Self {
        Self {
            high: Self::default_high(),
            medium: Self::default_medium(),
        }
    }
}

/// Complete scoring configuration: weights, declaration thresholds, tier
/// cutoffs, and the location subfield blend.
///
/// Cheap to clone and serde-friendly so it can live in config files and be
/// tuned without code changes. The defaults are the production values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: FieldWeights,
    #[serde(default)]
    pub thresholds: FieldThresholds,
    #[serde(default)]
    pub tiers: TierCutoffs,
    #[serde(default)]
    pub location_weights: LocationWeights,
}

impl ScoringConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        let mut weight_sum = 0.0;
        for (field, weight) in self.weights.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "weight for {field} must be a non-negative number"
                )));
            }
            weight_sum += weight;
        }
        if weight_sum == 0.0 {
            return Err(MatchError::InvalidConfig(
                "at least one field weight must be positive".into(),
            ));
        }

        for (field, threshold) in self.thresholds.as_array() {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(MatchError::InvalidConfig(format!(
                    "threshold for {field} must be within [0, 1]"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.tiers.high) || !(0.0..=1.0).contains(&self.tiers.medium) {
            return Err(MatchError::InvalidConfig(
                "tier cutoffs must be within [0, 1]".into(),
            ));
        }
        if self.tiers.medium > self.tiers.high {
            return Err(MatchError::InvalidConfig(
                "medium tier cutoff must not exceed the high cutoff".into(),
            ));
        }

        Ok(())
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatchError {
    /// Invalid scoring configuration.
    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),
}
