//! Concurrency behavior of the multi-source orchestrator: parallel fan-out
//! agrees with serial scoring, and concurrent searches do not interfere.

use std::sync::Arc;

use idlink::demo_utils::demo_store;
use idlink::{
    search_identities, EmbeddingConfig, EngineConfig, MatchEngine, ResolvedQuery, ScoringConfig,
    SearchParameters, StubEmbeddingProvider,
};

fn embedder() -> Arc<StubEmbeddingProvider> {
    Arc::new(StubEmbeddingProvider::new(EmbeddingConfig::default()).expect("valid config"))
}

fn name_params(name: &str) -> SearchParameters {
    SearchParameters {
        name: Some(name.into()),
        confidence_threshold: 0.3,
        ..Default::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_fan_out_matches_serial_scoring() {
    let store = demo_store();
    let params = name_params("Raj Kumar Singh");

    let result = search_identities(
        &params,
        Arc::new(store.clone()),
        embedder(),
        &EngineConfig::default(),
    )
    .await
    .expect("search succeeds");

    // Score each group serially with a bare engine and compare.
    let engine = MatchEngine::new(ScoringConfig::default()).unwrap();
    let query = ResolvedQuery::from_descriptors(&params, None);
    for group in store.groups() {
        let serial = engine.search_records(
            &query,
            store.records(&group).unwrap(),
            params.confidence_threshold,
        );
        let concurrent = &result.source_outcomes[&group].matches;
        assert_eq!(
            serial, *concurrent,
            "group {group} differs between serial and concurrent execution"
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_searches_do_not_interfere() {
    let store = Arc::new(demo_store());
    let cfg = EngineConfig::default();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        let cfg = cfg.clone();
        handles.push(tokio::spawn(async move {
            search_identities(
                &name_params("Raj Kumar Singh"),
                store,
                Arc::new(StubEmbeddingProvider::new(EmbeddingConfig::default()).unwrap()),
                &cfg,
            )
            .await
            .expect("search succeeds")
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.expect("task joins"));
    }

    let reference: Vec<_> = results[0]
        .source_outcomes
        .iter()
        .map(|(group, outcome)| (group.clone(), outcome.matches.clone()))
        .collect();
    for result in &results[1..] {
        let this: Vec<_> = result
            .source_outcomes
            .iter()
            .map(|(group, outcome)| (group.clone(), outcome.matches.clone()))
            .collect();
        assert_eq!(reference, this);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrency_cap_of_one_still_searches_every_group() {
    let mut cfg = EngineConfig::default();
    cfg.federate.max_concurrency = 1;

    let result = search_identities(
        &name_params("Raj Kumar Singh"),
        Arc::new(demo_store()),
        embedder(),
        &cfg,
    )
    .await
    .expect("search succeeds");

    assert_eq!(result.summary.total_sources, 2);
    assert_eq!(result.summary.successful_searches, 2);
}
