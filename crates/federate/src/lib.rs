//! # idlink multi-source orchestrator (`federate`)
//!
//! ## Purpose
//!
//! `federate` fans one search out across every registered record source,
//! bounded by a concurrency cap and a per-source deadline, and folds the
//! per-source outcomes into a single [`AggregateSearchResult`]: matches per
//! group with status and timing, cross-source correlation clusters, and
//! summary counters.
//!
//! ## Failure isolation
//!
//! Each source group runs in its own task. A provider failure, a panic, or
//! a blown deadline is recorded as that group's outcome — `error` or
//! `timeout` with empty matches and real elapsed time — and never aborts
//! sibling searches. The worst case is a well-formed result with zero
//! successful sources. Engine-level errors are reserved for programmer
//! mistakes: malformed parameters or an empty effective source set fail
//! fast before any fan-out.
//!
//! ## Observability
//!
//! Install a [`SearchMetrics`] implementation via [`set_search_metrics`] to
//! record per-source latency, status, and hit counts. This is typically
//! done once during service startup so all [`Orchestrator`] instances share
//! the same metrics backend.

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod types;

pub use crate::config::FederateConfig;
pub use crate::engine::Orchestrator;
pub use crate::error::FederateError;
pub use crate::metrics::{set_search_metrics, SearchMetrics};
pub use crate::types::{AggregateSearchResult, SearchSummary, SourceOutcome, SourceStatus};
