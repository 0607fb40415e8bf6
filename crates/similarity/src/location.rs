use records::Location;
use serde::{Deserialize, Serialize};

use crate::levenshtein::string_similarity;

/// Relative weights of the location subfields.
///
/// The blend is normalized by the weight actually used, so a comparison
/// where only cities are present on both sides is not penalized for the
/// missing state and country.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LocationWeights {
    #[serde(default = "LocationWeights::default_city")]
    pub city: f64,
    #[serde(default = "LocationWeights::default_state")]
    pub state: f64,
    #[serde(default = "LocationWeights::default_country")]
    pub country: f64,
}

impl LocationWeights {
    pub(crate) fn default_city() -> f64 {
        0.5
    }

    pub(crate) fn default_state() -> f64 {
        0.3
    }

    pub(crate) fn default_country() -> f64 {
        0.2
    }
}

impl Default for LocationWeights {
    fn default() -> Self {
        Self {
            city: Self::default_city(),
            state: Self::default_state(),
            country: Self::default_country(),
        }
    }
}

/// Weighted blend of subfield string similarities over the subfields present
/// on both sides. Returns 0 when no subfield is shared.
pub fn location_similarity(a: &Location, b: &Location, weights: &LocationWeights) -> f64 {
    let mut score = 0.0;
    let mut weight_used = 0.0;

    let pairs = [
        (a.city.as_deref(), b.city.as_deref(), weights.city),
        (a.state.as_deref(), b.state.as_deref(), weights.state),
        (a.country.as_deref(), b.country.as_deref(), weights.country),
    ];

    for (lhs, rhs, weight) in pairs {
        if let (Some(lhs), Some(rhs)) = (lhs, rhs) {
            score += string_similarity(lhs, rhs) * weight;
            weight_used += weight;
        }
    }

    if weight_used > 0.0 {
        score / weight_used
    } else {
        0.0
    }
}
