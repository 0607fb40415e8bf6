//! Full pipeline over the demo fixtures: search → correlate → report.

use std::sync::Arc;

use idlink::demo_utils::demo_store;
use idlink::{
    search_and_report, ConfidenceTier, CorrelationType, EmbeddingConfig, EngineConfig,
    SearchParameters, SourceStatus, StubEmbeddingProvider,
};

fn embedder() -> Arc<StubEmbeddingProvider> {
    Arc::new(StubEmbeddingProvider::new(EmbeddingConfig::default()).expect("valid config"))
}

#[tokio::test]
async fn cross_source_duplicate_is_found_and_reported() {
    let params = SearchParameters {
        name: Some("Raj Kumar Singh".into()),
        email: Some("raj.kumar@example.com".into()),
        ..Default::default()
    };

    let (aggregate, report) = search_and_report(
        &params,
        Arc::new(demo_store()),
        embedder(),
        &EngineConfig::default(),
    )
    .await
    .expect("pipeline succeeds");

    // Both groups completed and the registry identity surfaced in each.
    assert!(aggregate
        .source_outcomes
        .values()
        .all(|outcome| outcome.status == SourceStatus::Completed));
    assert!(aggregate.source_outcomes["national"]
        .matches
        .iter()
        .any(|hit| hit.record.id == "REG-001"));
    assert!(aggregate.source_outcomes["imported"]
        .matches
        .iter()
        .any(|hit| hit.record.id == "IMP-001"));

    // The shared email links the two records across groups, exactly.
    assert_eq!(aggregate.correlated.len(), 1);
    let cluster = &aggregate.correlated[0];
    assert_eq!(cluster.correlation_type, CorrelationType::Exact);
    assert!(cluster
        .discrepancies
        .iter()
        .any(|entry| entry.contains("City differs")));
    assert!(cluster
        .discrepancies
        .iter()
        .any(|entry| entry.contains("Name variation")));

    // The report's independent pass agrees that a duplicate exists.
    assert_eq!(report.cross_source_matches.len(), 1);
    assert!(report.recommendations[0].contains("Investigate cross-source matches"));
    assert!(report
        .recommendations
        .iter()
        .any(|entry| entry.contains("Verify discrepancies")));
    assert!(report.summary.contains("cross-source matches found"));
}

#[tokio::test]
async fn high_threshold_prunes_weak_matches() {
    let strict = SearchParameters {
        name: Some("Raj Kumar Singh".into()),
        confidence_threshold: 0.95,
        ..Default::default()
    };
    let lenient = SearchParameters {
        name: Some("Raj Kumar Singh".into()),
        confidence_threshold: 0.2,
        ..Default::default()
    };

    let (strict_result, _) = search_and_report(
        &strict,
        Arc::new(demo_store()),
        embedder(),
        &EngineConfig::default(),
    )
    .await
    .unwrap();
    let (lenient_result, _) = search_and_report(
        &lenient,
        Arc::new(demo_store()),
        embedder(),
        &EngineConfig::default(),
    )
    .await
    .unwrap();

    assert!(strict_result.total_matches <= lenient_result.total_matches);
    for outcome in strict_result.source_outcomes.values() {
        for hit in &outcome.matches {
            assert!(hit.overall_confidence >= 0.95);
            assert_eq!(hit.confidence_tier, ConfidenceTier::High);
        }
    }
}

#[tokio::test]
async fn face_only_search_finds_the_matching_template() {
    // IMP-001 and REG-001 carry the same stored template
    // (demo_embedding(1, 128)); a query resolved by the stub provider will
    // not equal it, but identical templates must score identically in both
    // groups.
    let params = SearchParameters {
        face_image: Some(b"subject portrait".to_vec()),
        confidence_threshold: 0.0,
        ..Default::default()
    };

    let (aggregate, _) = search_and_report(
        &params,
        Arc::new(demo_store()),
        embedder(),
        &EngineConfig::default(),
    )
    .await
    .expect("pipeline succeeds");

    let national_face = aggregate.source_outcomes["national"]
        .matches
        .iter()
        .find(|hit| hit.record.id == "REG-001")
        .and_then(|hit| hit.match_breakdown.get(&idlink::MatchField::Face).copied());
    let imported_face = aggregate.source_outcomes["imported"]
        .matches
        .iter()
        .find(|hit| hit.record.id == "IMP-001")
        .and_then(|hit| hit.match_breakdown.get(&idlink::MatchField::Face).copied());

    assert_eq!(national_face, imported_face);
    assert!(national_face.is_some());
}

#[tokio::test]
async fn group_restriction_flows_through_the_report() {
    let params = SearchParameters {
        name: Some("Raj Kumar Singh".into()),
        selected_groups: Some(vec!["national".into()]),
        ..Default::default()
    };

    let (aggregate, report) = search_and_report(
        &params,
        Arc::new(demo_store()),
        embedder(),
        &EngineConfig::default(),
    )
    .await
    .expect("pipeline succeeds");

    assert_eq!(aggregate.summary.total_sources, 1);
    assert!(report.matches_by_group.contains_key("national"));
    assert!(!report.matches_by_group.contains_key("imported"));
    // Single-source results cannot correlate; the report recommends
    // broadening instead.
    assert!(aggregate.correlated.is_empty());
    assert!(report
        .recommendations
        .iter()
        .any(|entry| entry.contains("expanding search criteria")));
}
