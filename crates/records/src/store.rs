use std::collections::BTreeMap;

use crate::error::{RecordError, SourceError};
use crate::types::IdentityRecord;

/// Supplies per-group ordered record snapshots to the search engine.
///
/// The snapshot returned by [`fetch`](RecordProvider::fetch) must be stable
/// for the duration of one search call. Implementations back onto whatever
/// storage the deployment uses; [`RecordStore`] is the in-memory reference
/// implementation and the only one this crate ships.
pub trait RecordProvider: Send + Sync {
    /// Names of the source groups this provider can serve, in a stable order.
    fn group_names(&self) -> Vec<String>;

    /// An ordered snapshot of one group's records.
    fn fetch(&self, group: &str) -> Result<Vec<IdentityRecord>, SourceError>;
}

/// Owned, explicitly passed store of identity records, partitioned by source
/// group.
///
/// This replaces process-wide accumulating record arrays: an ingestion
/// service appends into a store it owns and hands the store (or a snapshot)
/// to the orchestrator per search call. No global registry exists.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    groups: BTreeMap<String, Vec<IdentityRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace an entire source group.
    pub fn register<S: Into<String>>(&mut self, group: S, records: Vec<IdentityRecord>) {
        self.groups.insert(group.into(), records);
    }

    /// Validate and append one record, routed by its `source_group`.
    ///
    /// Rejects records that fail [`IdentityRecord::validate`] and duplicate
    /// ids within a group.
    pub fn append(&mut self, record: IdentityRecord) -> Result<(), RecordError> {
        record.validate()?;
        let group = self.groups.entry(record.source_group.clone()).or_default();
        if group.iter().any(|existing| existing.id == record.id) {
            return Err(RecordError::DuplicateId {
                group: record.source_group.clone(),
                id: record.id.clone(),
            });
        }
        group.push(record);
        Ok(())
    }

    /// Registered group names in sorted order.
    pub fn groups(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }

    /// Records of one group, or `None` if the group is not registered.
    pub fn records(&self, group: &str) -> Option<&[IdentityRecord]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Total record count across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordProvider for RecordStore {
    fn group_names(&self) -> Vec<String> {
        self.groups()
    }

    fn fetch(&self, group: &str) -> Result<Vec<IdentityRecord>, SourceError> {
        self.groups
            .get(group)
            .cloned()
            .ok_or_else(|| SourceError::UnknownGroup(group.to_string()))
    }
}
