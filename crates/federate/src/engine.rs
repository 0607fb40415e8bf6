use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use correlate::{correlate_matches, CorrelateConfig};
use embedding::EmbeddingProvider;
use matcher::{MatchEngine, ResolvedQuery, ScoringConfig};
use records::{MatchResult, RecordProvider, SearchParameters, SourceError};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::FederateConfig;
use crate::error::FederateError;
use crate::metrics::metrics_recorder;
use crate::types::{AggregateSearchResult, SearchSummary, SourceOutcome, SourceStatus};

/// Runs one search across every registered record source and aggregates the
/// outcomes.
#[derive(Clone)]
pub struct Orchestrator {
    engine: MatchEngine,
    embedder: Arc<dyn EmbeddingProvider>,
    federate_cfg: FederateConfig,
    correlate_cfg: CorrelateConfig,
}

impl Orchestrator {
    /// Construct an orchestrator with the reference match engine.
    pub fn new(
        scoring: ScoringConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        federate_cfg: FederateConfig,
        correlate_cfg: CorrelateConfig,
    ) -> Result<Self, FederateError> {
        Self::with_engine(MatchEngine::new(scoring)?, embedder, federate_cfg, correlate_cfg)
    }

    /// Construct an orchestrator around an existing match engine (e.g. one
    /// carrying a custom face scorer).
    pub fn with_engine(
        engine: MatchEngine,
        embedder: Arc<dyn EmbeddingProvider>,
        federate_cfg: FederateConfig,
        correlate_cfg: CorrelateConfig,
    ) -> Result<Self, FederateError> {
        federate_cfg.validate()?;
        correlate_cfg.validate()?;
        Ok(Self {
            engine,
            embedder,
            federate_cfg,
            correlate_cfg,
        })
    }

    /// Execute one multi-source search.
    ///
    /// Per-source searches run concurrently, each under the configured
    /// deadline; a failing, panicking, or slow source is recorded in its
    /// outcome and never disturbs siblings. Returns `Err` only for
    /// fail-fast contract violations (malformed parameters, empty source
    /// set).
    pub async fn search(
        &self,
        params: &SearchParameters,
        provider: Arc<dyn RecordProvider>,
    ) -> Result<AggregateSearchResult, FederateError> {
        params.validate()?;
        let groups = effective_groups(provider.as_ref(), params);
        if groups.is_empty() {
            return Err(FederateError::NoSources);
        }

        let search_id = format!("SEARCH-{}", Utc::now().timestamp_millis());
        tracing::info!(
            search_id = %search_id,
            sources = groups.len(),
            threshold = params.confidence_threshold,
            "starting multi-source identity search"
        );

        // One embedding resolution serves every source group.
        let query = Arc::new(ResolvedQuery::resolve(params, self.embedder.as_ref()).await);

        let semaphore = Arc::new(Semaphore::new(self.federate_cfg.max_concurrency));
        let deadline = self.federate_cfg.per_source_timeout();
        let threshold = params.confidence_threshold;

        let mut join_set = JoinSet::new();
        for group in groups {
            let engine = self.engine.clone();
            let provider = Arc::clone(&provider);
            let query = Arc::clone(&query);
            let semaphore = Arc::clone(&semaphore);

            join_set.spawn(async move {
                // The semaphore is never closed; a failed acquire just
                // means we run unthrottled.
                let _permit = semaphore.acquire_owned().await.ok();
                let start = Instant::now();

                let work_group = group.clone();
                let work = tokio::task::spawn_blocking(
                    move || -> Result<Vec<MatchResult>, SourceError> {
                        let records = provider.fetch(&work_group)?;
                        Ok(engine.search_records(&query, &records, threshold))
                    },
                );

                let outcome = match tokio::time::timeout(deadline, work).await {
                    Ok(Ok(Ok(matches))) => {
                        tracing::info!(
                            group = %group,
                            hits = matches.len(),
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "source search completed"
                        );
                        SourceOutcome {
                            matches,
                            search_time_ms: start.elapsed().as_millis() as u64,
                            status: SourceStatus::Completed,
                        }
                    }
                    Ok(Ok(Err(err))) => {
                        tracing::warn!(group = %group, error = %err, "source search failed");
                        SourceOutcome {
                            matches: Vec::new(),
                            search_time_ms: start.elapsed().as_millis() as u64,
                            status: SourceStatus::Error,
                        }
                    }
                    Ok(Err(join_err)) => {
                        tracing::error!(group = %group, error = %join_err, "source search panicked");
                        SourceOutcome {
                            matches: Vec::new(),
                            search_time_ms: start.elapsed().as_millis() as u64,
                            status: SourceStatus::Error,
                        }
                    }
                    Err(_) => {
                        // Deadline blown: abandon the in-flight work and
                        // discard whatever it eventually produces.
                        tracing::warn!(
                            group = %group,
                            deadline_ms = deadline.as_millis() as u64,
                            "source search timed out"
                        );
                        SourceOutcome {
                            matches: Vec::new(),
                            search_time_ms: start.elapsed().as_millis() as u64,
                            status: SourceStatus::Timeout,
                        }
                    }
                };

                (group, outcome)
            });
        }

        let mut source_outcomes = BTreeMap::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((group, outcome)) => {
                    if let Some(recorder) = metrics_recorder() {
                        recorder.record_source_search(
                            &group,
                            outcome.status,
                            std::time::Duration::from_millis(outcome.search_time_ms),
                            outcome.matches.len(),
                        );
                    }
                    source_outcomes.insert(group, outcome);
                }
                // Task bodies catch their own panics via spawn_blocking;
                // an outer join error has no group to attribute, so it can
                // only be logged.
                Err(join_err) => {
                    tracing::error!(error = %join_err, "source search task lost");
                }
            }
        }

        let result = self.aggregate(search_id, source_outcomes);
        tracing::info!(
            search_id = %result.search_id,
            total_matches = result.total_matches,
            correlated = result.correlated.len(),
            successful = result.summary.successful_searches,
            failed = result.summary.failed_searches,
            "multi-source identity search finished"
        );
        Ok(result)
    }

    fn aggregate(
        &self,
        search_id: String,
        source_outcomes: BTreeMap<String, SourceOutcome>,
    ) -> AggregateSearchResult {
        let mut flat: Vec<MatchResult> = source_outcomes
            .values()
            .flat_map(|outcome| outcome.matches.iter().cloned())
            .collect();
        // Stable by confidence so the correlator sees strongest-first input
        // with deterministic tie order (group name, then in-group order).
        flat.sort_by(|a, b| {
            b.overall_confidence
                .partial_cmp(&a.overall_confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let correlated = correlate_matches(&flat, &self.correlate_cfg);

        let total_sources = source_outcomes.len();
        let successful_searches = source_outcomes
            .values()
            .filter(|outcome| outcome.status == SourceStatus::Completed)
            .count();
        let high_confidence_matches = flat
            .iter()
            .filter(|result| result.confidence_tier == records::ConfidenceTier::High)
            .count();
        let clustered: usize = correlated
            .iter()
            .map(|cluster| cluster.related.len() + 1)
            .sum();
        let average_response_time_ms = if total_sources > 0 {
            source_outcomes
                .values()
                .map(|outcome| outcome.search_time_ms as f64)
                .sum::<f64>()
                / total_sources as f64
        } else {
            0.0
        };

        let summary = SearchSummary {
            total_sources,
            successful_searches,
            failed_searches: total_sources - successful_searches,
            high_confidence_matches,
            cross_source_matches: correlated.len(),
            unique_identities: correlated.len() + (flat.len() - clustered),
            average_response_time_ms,
        };

        AggregateSearchResult {
            search_id,
            total_matches: flat.len(),
            source_outcomes,
            correlated,
            summary,
        }
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("federate_cfg", &self.federate_cfg)
            .field("correlate_cfg", &self.correlate_cfg)
            .finish_non_exhaustive()
    }
}

/// Registered groups restricted to the caller's selection, if any.
fn effective_groups(provider: &dyn RecordProvider, params: &SearchParameters) -> Vec<String> {
    let all = provider.group_names();
    match &params.selected_groups {
        Some(selected) => all
            .into_iter()
            .filter(|group| selected.iter().any(|wanted| wanted == group))
            .collect(),
        None => all,
    }
}
