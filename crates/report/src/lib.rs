//! QA report synthesis (`report`).
//!
//! Pure derivation of a human-facing quality-assurance report from a flat
//! match result list: counts by source group, high-confidence tallies, a
//! cross-source match pass of its own, a narrative summary, and actionable
//! recommendations.
//!
//! The cross-source detection here is deliberately independent of the
//! `correlate` crate. It applies the same predicate family — exact email,
//! exact normalized phone, near-exact name — directly to the flat list and
//! reports record-level clusters with a simpler confidence blend and its
//! own discrepancy flavor (location plus shared metadata keys). The two
//! passes agree on the documented scenarios but are separate code paths
//! with separate outputs.

mod synth;
mod types;

pub use crate::synth::generate_report;
pub use crate::types::{CrossSourceMatch, QaReport};
