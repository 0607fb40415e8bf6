// Metrics hooks for the `federate` crate.
//
// Callers install a global `SearchMetrics` implementation via
// [`set_search_metrics`], then every `Orchestrator` reports per-source
// latency, terminal status, and hit counts. This keeps instrumentation
// decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::SourceStatus;

/// Metrics observer for per-source search executions.
pub trait SearchMetrics: Send + Sync {
    /// Record one source group's outcome.
    ///
    /// `group` is the source group name, `status` its terminal state,
    /// `latency` the wall-clock duration of the attempt, and `hit_count`
    /// the number of matches that cleared the confidence threshold.
    fn record_source_search(
        &self,
        group: &str,
        status: SourceStatus,
        latency: Duration,
        hit_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global search metrics recorder.
///
/// Typically called once during service startup so all `Orchestrator`
/// instances share the same metrics backend.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
