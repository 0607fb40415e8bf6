//! Identity record data model (`records`).
//!
//! This crate defines the shapes that flow between the idlink engine and its
//! collaborators: candidate identity records as known to one source, the
//! search parameters a caller issues, the scored match results the engine
//! hands back, and the record store that ingestion services append into.
//!
//! Types here are designed to be:
//!
//! - **Serializable**: JSON in and out via serde, so a transport layer can be
//!   put in front of the engine without touching it
//! - **Cloneable**: results own their record snapshot and stay `'static` for
//!   task fan-out
//! - **Comparable**: equality checks for testing
//!
//! Absence is meaningful throughout: an `Option::None` field means "unknown
//! to this source", never "empty".

mod error;
mod params;
mod result;
mod store;
mod types;

pub use crate::error::{ParameterError, RecordError, SourceError};
pub use crate::params::SearchParameters;
pub use crate::result::{ConfidenceTier, MatchField, MatchResult};
pub use crate::store::{RecordProvider, RecordStore};
pub use crate::types::{IdentityRecord, Location, MetadataValue};
