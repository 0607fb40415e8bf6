//! Umbrella crate for the idlink identity matching and correlation engine.
//!
//! This crate stitches the engine layers together so callers can run a full
//! multi-source identity search with a single API entry point:
//!
//! - `records` — the data model, search parameters, and record store
//! - `similarity` — pure per-field comparators
//! - `embedding` — the face embedding provider seam
//! - `matcher` — weighted scoring and single-source search execution
//! - `federate` — bounded concurrent multi-source orchestration
//! - `correlate` — cross-source identity correlation
//! - `report` — QA report synthesis
//!
//! The engine is a library, not a service: record sources and the embedding
//! backend are injected per call, every public type serializes via serde,
//! and all caller-visible failure short of a programmer error is expressed
//! as data in the result rather than as an `Err`.

pub mod config;

#[doc(hidden)]
pub mod demo_utils;

use std::sync::Arc;

pub use correlate::{
    correlate_matches, is_correlated, CorrelateConfig, CorrelatedMatch, CorrelationType,
};
pub use embedding::{
    CosineFaceScorer, EmbeddingConfig, EmbeddingError, EmbeddingProvider, FaceScorer,
    StubEmbeddingProvider,
};
pub use federate::{
    set_search_metrics, AggregateSearchResult, FederateConfig, FederateError, Orchestrator,
    SearchMetrics, SearchSummary, SourceOutcome, SourceStatus,
};
pub use matcher::{
    FieldThresholds, FieldWeights, MatchEngine, MatchError, ResolvedQuery, ScoringConfig,
    TierCutoffs,
};
pub use records::{
    ConfidenceTier, IdentityRecord, Location, MatchField, MatchResult, MetadataValue,
    ParameterError, RecordError, RecordProvider, RecordStore, SearchParameters, SourceError,
};
pub use report::{generate_report, CrossSourceMatch, QaReport};
pub use similarity::{
    cosine_similarity, edit_distance, email_similarity, location_similarity, name_similarity,
    phone_digits, phone_similarity, string_similarity, LocationWeights, SimilarityError,
};

pub use crate::config::{ConfigLoadError, EngineConfig};

/// Run one multi-source identity search end to end with explicit
/// configuration.
pub async fn search_identities(
    params: &SearchParameters,
    provider: Arc<dyn RecordProvider>,
    embedder: Arc<dyn EmbeddingProvider>,
    cfg: &EngineConfig,
) -> Result<AggregateSearchResult, FederateError> {
    let orchestrator = Orchestrator::new(
        cfg.scoring.clone(),
        embedder,
        cfg.federate,
        cfg.correlate,
    )?;
    orchestrator.search(params, provider).await
}

/// Run a multi-source search and derive the QA report over its flattened
/// matches in one call.
pub async fn search_and_report(
    params: &SearchParameters,
    provider: Arc<dyn RecordProvider>,
    embedder: Arc<dyn EmbeddingProvider>,
    cfg: &EngineConfig,
) -> Result<(AggregateSearchResult, QaReport), FederateError> {
    let aggregate = search_identities(params, provider, embedder, cfg).await?;

    let mut flat: Vec<MatchResult> = aggregate
        .source_outcomes
        .values()
        .flat_map(|outcome| outcome.matches.iter().cloned())
        .collect();
    flat.sort_by(|a, b| {
        b.overall_confidence
            .partial_cmp(&a.overall_confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let report = generate_report(&flat, params);
    Ok((aggregate, report))
}
