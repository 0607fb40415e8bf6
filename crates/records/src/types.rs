use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// A geographic location with independently optional subfields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    /// True when at least one subfield carries a value.
    pub fn has_any(&self) -> bool {
        self.city.is_some() || self.state.is_some() || self.country.is_some()
    }
}

/// A typed scalar value in a record's open metadata bag.
///
/// Replaces the dynamic `any`-typed bags of upstream data feeds: unknown keys
/// are allowed and never schema-validated, but every value is one of these
/// scalar shapes. Variant order matters for untagged deserialization (bools
/// and integers must be tried before floats and text).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Bool(v) => write!(f, "{v}"),
            MetadataValue::Integer(v) => write!(f, "{v}"),
            MetadataValue::Float(v) => write!(f, "{v}"),
            MetadataValue::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

/// A candidate identity as known to one record source.
///
/// `id` is unique within a `source_group` only; the same real-world identity
/// may appear under different ids in different groups, which is exactly what
/// cross-source correlation discovers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityRecord {
    /// Stable identifier within this record's source group.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Fixed-length biometric feature vector, nominally 128-dimensional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_embedding: Option<Vec<f32>>,
    /// Human-readable provenance label, e.g. "Civil Registry".
    pub source: String,
    /// Logical source partition this record belongs to. Two matches are
    /// cross-source candidates only when their groups differ.
    pub source_group: String,
    /// Open bag of source-specific attributes. Compared for discrepancy
    /// surfacing, never scored.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,
    /// Last modification time at the source.
    pub last_updated: DateTime<Utc>,
}

impl IdentityRecord {
    /// Validate the record against the ingestion contract.
    ///
    /// Ingestion collaborators are expected to emit only valid records;
    /// `RecordStore::append` re-checks at the boundary.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::EmptyId);
        }
        if self.source_group.trim().is_empty() {
            return Err(RecordError::EmptySourceGroup {
                id: self.id.clone(),
            });
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(RecordError::InvalidEmail {
                    id: self.id.clone(),
                    email: email.clone(),
                });
            }
        }
        if let Some(embedding) = &self.face_embedding {
            if embedding.is_empty() {
                return Err(RecordError::EmptyEmbedding {
                    id: self.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record() -> IdentityRecord {
        IdentityRecord {
            id: "REC-001".into(),
            name: Some("Dana Whitfield".into()),
            email: Some("dana.whitfield@example.com".into()),
            phone: Some("+1-555-0100".into()),
            location: Some(Location {
                city: Some("Springfield".into()),
                state: Some("Illinois".into()),
                country: Some("United States".into()),
            }),
            face_embedding: Some(vec![0.1, 0.2, 0.3]),
            source: "Civil Registry".into(),
            source_group: "national".into(),
            metadata: BTreeMap::new(),
            last_updated: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(base_record().validate().is_ok());
    }

    #[test]
    fn empty_id_rejected() {
        let mut record = base_record();
        record.id = "  ".into();
        assert!(matches!(record.validate(), Err(RecordError::EmptyId)));
    }

    #[test]
    fn empty_source_group_rejected() {
        let mut record = base_record();
        record.source_group = String::new();
        assert!(matches!(
            record.validate(),
            Err(RecordError::EmptySourceGroup { .. })
        ));
    }

    #[test]
    fn email_without_at_rejected() {
        let mut record = base_record();
        record.email = Some("not-an-email".into());
        let err = record.validate().expect_err("record should be invalid");
        assert!(err.to_string().contains("not-an-email"));
    }

    #[test]
    fn empty_embedding_rejected() {
        let mut record = base_record();
        record.face_embedding = Some(vec![]);
        assert!(matches!(
            record.validate(),
            Err(RecordError::EmptyEmbedding { .. })
        ));
    }

    #[test]
    fn absent_optional_fields_are_valid() {
        let mut record = base_record();
        record.name = None;
        record.email = None;
        record.phone = None;
        record.location = None;
        record.face_embedding = None;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn metadata_roundtrips_through_json() {
        let mut record = base_record();
        record
            .metadata
            .insert("registryNumber".into(), MetadataValue::Text("A-4411".into()));
        record
            .metadata
            .insert("verified".into(), MetadataValue::Bool(true));
        record
            .metadata
            .insert("revision".into(), MetadataValue::Integer(3));

        let json = serde_json::to_string(&record).expect("serialize");
        let back: IdentityRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, back);
        assert_eq!(
            back.metadata.get("verified"),
            Some(&MetadataValue::Bool(true))
        );
    }

    #[test]
    fn location_has_any() {
        assert!(!Location::default().has_any());
        assert!(Location {
            country: Some("India".into()),
            ..Default::default()
        }
        .has_any());
    }
}
