use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::types::Location;

/// The caller-issued query: any subset of identity descriptors plus a
/// confidence threshold and an optional restriction to named source groups.
///
/// At least one descriptor must be present for a search to be meaningful;
/// that is the caller's contract and is deliberately not enforced here — a
/// descriptor-free query scores every record at confidence 0 and returns
/// nothing at any positive threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchParameters {
    /// Raw image bytes for the embedding provider to convert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_image: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Minimum overall confidence for a record to be returned.
    #[serde(default = "SearchParameters::default_threshold")]
    pub confidence_threshold: f64,
    /// Restrict the search to these source groups; `None` searches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_groups: Option<Vec<String>>,
}

impl SearchParameters {
    pub(crate) fn default_threshold() -> f64 {
        0.5
    }

    /// Fail fast on malformed parameters.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.confidence_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.confidence_threshold)
        {
            return Err(ParameterError::ThresholdOutOfRange(
                self.confidence_threshold,
            ));
        }
        Ok(())
    }

    /// True when any descriptor field is populated.
    pub fn has_descriptors(&self) -> bool {
        self.face_image.is_some()
            || self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.location.as_ref().is_some_and(Location::has_any)
    }
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            face_image: None,
            name: None,
            email: None,
            phone: None,
            location: None,
            confidence_threshold: Self::default_threshold(),
            selected_groups: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_half() {
        let params = SearchParameters::default();
        assert_eq!(params.confidence_threshold, 0.5);
        assert!(params.validate().is_ok());
        assert!(!params.has_descriptors());
    }

    #[test]
    fn threshold_outside_unit_interval_rejected() {
        for bad in [-0.1, 1.01, f64::NAN] {
            let params = SearchParameters {
                confidence_threshold: bad,
                ..Default::default()
            };
            assert!(
                params.validate().is_err(),
                "threshold {bad} should be rejected"
            );
        }
    }

    #[test]
    fn boundary_thresholds_accepted() {
        for ok in [0.0, 0.5, 1.0] {
            let params = SearchParameters {
                confidence_threshold: ok,
                ..Default::default()
            };
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn missing_threshold_deserializes_to_default() {
        let params: SearchParameters =
            serde_json::from_str(r#"{"name": "Dana Whitfield"}"#).expect("deserialize");
        assert_eq!(params.confidence_threshold, 0.5);
        assert!(params.has_descriptors());
    }

    #[test]
    fn location_only_counts_as_descriptor() {
        let params = SearchParameters {
            location: Some(Location {
                city: Some("Springfield".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(params.has_descriptors());

        // An empty location struct carries no information.
        let params = SearchParameters {
            location: Some(Location::default()),
            ..Default::default()
        };
        assert!(!params.has_descriptors());
    }
}
