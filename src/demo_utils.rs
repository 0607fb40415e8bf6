//! Shared fixtures for integration tests and demos. Not part of the public
//! API surface.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{IdentityRecord, Location, MetadataValue, RecordStore};

/// Fixed timestamp so fixtures are reproducible.
pub fn demo_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_705_276_800, 0).expect("valid demo timestamp")
}

/// Deterministic embedding derived from a seed; stands in for a stored face
/// template.
pub fn demo_embedding(seed: u64, dim: usize) -> Vec<f32> {
    (0..dim)
        .map(|idx| (((seed >> (idx % 32)) as f32) * 0.0001 + idx as f32 * 0.01).sin())
        .collect()
}

pub fn demo_record(
    id: &str,
    group: &str,
    source: &str,
    name: &str,
    email: Option<&str>,
    phone: Option<&str>,
    city: Option<&str>,
) -> IdentityRecord {
    IdentityRecord {
        id: id.into(),
        name: Some(name.into()),
        email: email.map(Into::into),
        phone: phone.map(Into::into),
        location: city.map(|city| Location {
            city: Some(city.into()),
            state: None,
            country: Some("India".into()),
        }),
        face_embedding: None,
        source: source.into(),
        source_group: group.into(),
        metadata: BTreeMap::new(),
        last_updated: demo_timestamp(),
    }
}

/// A two-group store with one identity present in both groups under
/// different ids, one near-duplicate, and unrelated filler records.
pub fn demo_store() -> RecordStore {
    let mut store = RecordStore::new();

    let mut registry = vec![
        demo_record(
            "REG-001",
            "national",
            "Civil Registry",
            "Raj Kumar Singh",
            Some("raj.kumar@example.com"),
            Some("+91-98765-43210"),
            Some("Mumbai"),
        ),
        demo_record(
            "REG-002",
            "national",
            "Civil Registry",
            "Priya Sharma",
            Some("priya.sharma@example.com"),
            Some("+91-91234-56789"),
            Some("Delhi"),
        ),
        demo_record(
            "REG-003",
            "national",
            "Tax Authority",
            "Amit Patel",
            Some("amit.patel@example.com"),
            Some("+91-87654-32109"),
            Some("Ahmedabad"),
        ),
    ];
    registry[0].face_embedding = Some(demo_embedding(1, 128));
    registry[0]
        .metadata
        .insert("registryNumber".into(), MetadataValue::Text("MH-4411".into()));
    store.register("national", registry);

    let mut imported = vec![
        demo_record(
            "IMP-001",
            "imported",
            "Imported Data",
            "Raj K Singh",
            Some("raj.kumar@example.com"),
            Some("98765 43210"),
            Some("Pune"),
        ),
        demo_record(
            "IMP-002",
            "imported",
            "Imported Data",
            "Sunita Devi",
            None,
            Some("+91-99887-76655"),
            Some("Patna"),
        ),
    ];
    imported[0].face_embedding = Some(demo_embedding(1, 128));
    imported[0]
        .metadata
        .insert("registryNumber".into(), MetadataValue::Text("PN-9922".into()));
    store.register("imported", imported);

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_is_valid() {
        let store = demo_store();
        assert_eq!(store.groups(), vec!["imported", "national"]);
        for group in store.groups() {
            for record in store.records(&group).unwrap() {
                record.validate().expect("demo records validate");
            }
        }
    }

    #[test]
    fn demo_embedding_is_deterministic() {
        assert_eq!(demo_embedding(7, 128), demo_embedding(7, 128));
        assert_ne!(demo_embedding(7, 128), demo_embedding(8, 128));
        assert_eq!(demo_embedding(7, 64).len(), 64);
    }
}
