//! # idlink match scorer (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns one set of search descriptors and one candidate record
//! into a weighted confidence score, and runs that scorer over a single
//! source group's record sequence. It sits between the pure field
//! comparators (`similarity`) and the multi-source orchestrator
//! (`federate`), which fans it out across groups.
//!
//! ## Core Types
//!
//! - [`ScoringConfig`]: field weights, per-field match-declaration
//!   thresholds, and confidence tier cutoffs, with the production defaults
//!   baked in as serde defaults.
//! - [`ResolvedQuery`]: search parameters with the face image already
//!   exchanged for an embedding via the provider seam.
//! - [`MatchEngine`]: scores records and executes threshold-filtered,
//!   confidence-ordered searches.
//!
//! Only fields present on BOTH sides of a comparison contribute to the
//! confidence — the denominator re-normalizes over the weight actually
//! used, so a name-only query is not diluted by the absent face, email,
//! phone, and location channels.
//!
//! Scoring is deterministic for fixed inputs and a fixed face scorer; the
//! executor's descending sort is stable, so ties keep record order and
//! repeated searches reproduce the same ordering and scores.

pub mod engine;
pub mod query;
pub mod types;

pub use crate::engine::MatchEngine;
pub use crate::query::ResolvedQuery;
pub use crate::types::{FieldThresholds, FieldWeights, MatchError, ScoringConfig, TierCutoffs};
