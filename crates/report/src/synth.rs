use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use records::{ConfidenceTier, IdentityRecord, MatchResult, SearchParameters};
use similarity::{name_similarity, phone_digits};

use crate::types::{CrossSourceMatch, QaReport};

/// Name similarity above which two records are treated as the same person
/// by the report's cross-source pass.
const NAME_MATCH_THRESHOLD: f64 = 0.8;

/// Derive a QA report from a flat match result list.
///
/// Pure except for the report id and timestamp; everything else is a
/// deterministic function of the inputs.
pub fn generate_report(results: &[MatchResult], parameters: &SearchParameters) -> QaReport {
    let mut matches_by_group: BTreeMap<String, usize> = BTreeMap::new();
    for result in results {
        *matches_by_group
            .entry(result.record.source_group.clone())
            .or_insert(0) += 1;
    }

    let high_confidence_matches = results
        .iter()
        .filter(|result| result.confidence_tier == ConfidenceTier::High)
        .count();

    let cross_source_matches = find_cross_source_matches(results);
    let summary = build_summary(results, &matches_by_group, &cross_source_matches);
    let recommendations = build_recommendations(results, &cross_source_matches);

    QaReport {
        id: format!("QA-{}", Utc::now().timestamp_millis()),
        parameters: parameters.clone(),
        total_matches: results.len(),
        matches_by_group,
        high_confidence_matches,
        cross_source_matches,
        generated_at: Utc::now(),
        summary,
        recommendations,
    }
}

fn records_likely_same(a: &IdentityRecord, b: &IdentityRecord) -> bool {
    if let (Some(name_a), Some(name_b)) = (&a.name, &b.name) {
        if name_similarity(name_a, name_b) > NAME_MATCH_THRESHOLD {
            return true;
        }
    }
    if let (Some(email_a), Some(email_b)) = (&a.email, &b.email) {
        if email_a.to_lowercase() == email_b.to_lowercase() {
            return true;
        }
    }
    if let (Some(phone_a), Some(phone_b)) = (&a.phone, &b.phone) {
        let digits_a = phone_digits(phone_a);
        if !digits_a.is_empty() && digits_a == phone_digits(phone_b) {
            return true;
        }
    }
    false
}

/// Greedy first-seen-wins clustering over the flat result list. Independent
/// of the correlator: record-level output, simpler confidence blend.
fn find_cross_source_matches(results: &[MatchResult]) -> Vec<CrossSourceMatch> {
    let mut cross_matches = Vec::new();
    let mut processed: HashSet<(String, String)> = HashSet::new();

    for primary in results {
        let primary_key = record_key(&primary.record);
        if processed.contains(&primary_key) {
            continue;
        }

        let related: Vec<&MatchResult> = results
            .iter()
            .filter(|candidate| {
                record_key(&candidate.record) != primary_key
                    && candidate.record.source_group != primary.record.source_group
                    && !processed.contains(&record_key(&candidate.record))
                    && records_likely_same(&primary.record, &candidate.record)
            })
            .collect();

        if related.is_empty() {
            continue;
        }

        let related_mean = related
            .iter()
            .map(|candidate| candidate.overall_confidence)
            .sum::<f64>()
            / related.len() as f64;
        let confidence = (primary.overall_confidence + related_mean) / 2.0;

        let related_records: Vec<IdentityRecord> = related
            .iter()
            .map(|candidate| candidate.record.clone())
            .collect();
        let discrepancies = find_discrepancies(&primary.record, &related_records);

        processed.insert(primary_key);
        for record in &related_records {
            processed.insert(record_key(record));
        }

        cross_matches.push(CrossSourceMatch {
            primary_record: primary.record.clone(),
            related_records,
            confidence,
            discrepancies,
        });
    }

    cross_matches
}

fn record_key(record: &IdentityRecord) -> (String, String) {
    (record.source_group.clone(), record.id.clone())
}

/// Location and metadata mismatches between the primary and each related
/// record, deduplicated preserving first-seen order.
fn find_discrepancies(primary: &IdentityRecord, related: &[IdentityRecord]) -> Vec<String> {
    let mut discrepancies = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |message: String| {
        if seen.insert(message.clone()) {
            discrepancies.push(message);
        }
    };

    for record in related {
        if let (Some(primary_loc), Some(record_loc)) = (&primary.location, &record.location) {
            if primary_loc.city != record_loc.city {
                push(format!(
                    "City mismatch: {} vs {}",
                    primary_loc.city.as_deref().unwrap_or("unknown"),
                    record_loc.city.as_deref().unwrap_or("unknown")
                ));
            }
            if primary_loc.country != record_loc.country {
                push(format!(
                    "Country mismatch: {} vs {}",
                    primary_loc.country.as_deref().unwrap_or("unknown"),
                    record_loc.country.as_deref().unwrap_or("unknown")
                ));
            }
        }

        for (key, primary_value) in &primary.metadata {
            if let Some(record_value) = record.metadata.get(key) {
                if primary_value != record_value {
                    push(format!("{key} mismatch: {primary_value} vs {record_value}"));
                }
            }
        }
    }

    discrepancies
}

fn build_summary(
    results: &[MatchResult],
    matches_by_group: &BTreeMap<String, usize>,
    cross_matches: &[CrossSourceMatch],
) -> String {
    let groups: Vec<&str> = matches_by_group.keys().map(String::as_str).collect();
    let high_confidence = results
        .iter()
        .filter(|result| result.confidence_tier == ConfidenceTier::High)
        .count();

    let mut summary = format!(
        "Identity search completed with {} total matches across {} record sources. ",
        results.len(),
        groups.len()
    );
    if high_confidence > 0 {
        summary.push_str(&format!(
            "{high_confidence} high-confidence matches were identified. "
        ));
    }
    if !cross_matches.is_empty() {
        summary.push_str(&format!(
            "{} cross-source matches found, indicating potential duplicate identities or data inconsistencies. ",
            cross_matches.len()
        ));
    }
    summary.push_str(&format!("Search covered: {}.", groups.join(", ")));
    summary
}

fn build_recommendations(
    results: &[MatchResult],
    cross_matches: &[CrossSourceMatch],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !cross_matches.is_empty() {
        recommendations.push(
            "Investigate cross-source matches for potential duplicate identities or data synchronization issues"
                .to_string(),
        );
        for cross in cross_matches {
            if !cross.discrepancies.is_empty() {
                recommendations.push(format!(
                    "Verify discrepancies found in record {}: {}",
                    cross.primary_record.id,
                    cross.discrepancies.join(", ")
                ));
            }
        }
    }

    let low_confidence = results
        .iter()
        .filter(|result| result.confidence_tier == ConfidenceTier::Low)
        .count();
    if low_confidence > 0 {
        recommendations.push(format!(
            "Review {low_confidence} low-confidence matches for potential false positives"
        ));
    }

    let clustered: HashSet<(String, String)> = cross_matches
        .iter()
        .flat_map(|cross| {
            std::iter::once(record_key(&cross.primary_record))
                .chain(cross.related_records.iter().map(record_key))
        })
        .collect();
    let single_source = results
        .iter()
        .filter(|result| !clustered.contains(&record_key(&result.record)))
        .count();
    if single_source > 0 {
        recommendations.push(format!(
            "{single_source} matches found in single sources only - consider expanding search criteria"
        ));
    }

    if recommendations.is_empty() {
        recommendations
            .push("No specific recommendations - results appear consistent and reliable".into());
    }

    recommendations
}
