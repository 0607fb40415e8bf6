//! Cross-source correlation layer (`correlate`).
//!
//! Matches from different source groups that share strong identifiers
//! (email, normalized phone) or a near-exact name likely refer to the same
//! underlying identity. This crate clusters such matches, scores each
//! cluster, classifies how it was linked, and surfaces field-level
//! discrepancies between the linked records for investigation.
//!
//! Clustering is greedy and single-pass over a confidence-descending input:
//! the strongest unprocessed match seeds a cluster, captures every
//! unprocessed cross-group candidate it correlates with, and all members
//! are retired. Transitive chains across three or more sources are only
//! captured when the seed correlates with each of them directly.

mod config;
mod engine;
mod types;

pub use crate::config::{CorrelateConfig, CorrelateError};
pub use crate::engine::{correlate_matches, is_correlated};
pub use crate::types::{CorrelatedMatch, CorrelationType};
