use std::collections::HashSet;

use records::{IdentityRecord, MatchResult};
use similarity::{name_similarity, phone_digits};

use crate::config::CorrelateConfig;
use crate::types::{CorrelatedMatch, CorrelationType};

/// True when two records plausibly describe the same identity: equal emails
/// (case-insensitive), equal normalized phone digits, or name similarity
/// strictly above the configured threshold.
pub fn is_correlated(a: &IdentityRecord, b: &IdentityRecord, cfg: &CorrelateConfig) -> bool {
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

    if let (Some(name_a), Some(name_b)) = (&a.name, &b.name) {
        if name_similarity(name_a, name_b) > cfg.name_threshold {
            return true;
        }
    }

    false
}

/// Greedy single-pass clustering over a flattened, confidence-descending
/// match list.
///
/// Each unprocessed match seeds a cluster with every unprocessed candidate
/// from a different source group it correlates with; seed and candidates
/// are then retired, so no record appears in more than one cluster. Output
/// is sorted descending by correlation score.
pub fn correlate_matches(all: &[MatchResult], cfg: &CorrelateConfig) -> Vec<CorrelatedMatch> {
    let mut clusters = Vec::new();
    // Ids are only unique per group, so the processed set keys on the pair.
    let mut processed: HashSet<(String, String)> = HashSet::new();

    for primary in all {
        if processed.contains(&record_key(&primary.record)) {
            continue;
        }

        let related: Vec<MatchResult> = all
            .iter()
            .filter(|candidate| {
                record_key(&candidate.record) != record_key(&primary.record)
                    && candidate.record.source_group != primary.record.source_group
                    && !processed.contains(&record_key(&candidate.record))
                    && is_correlated(&primary.record, &candidate.record, cfg)
            })
            .cloned()
            .collect();

        if related.is_empty() {
            continue;
        }

        processed.insert(record_key(&primary.record));
        for candidate in &related {
            processed.insert(record_key(&candidate.record));
        }

        let correlation_score = correlation_score(primary, &related, cfg);
        let correlation_type = correlation_type(primary, &related);
        let discrepancies = find_discrepancies(&primary.record, &related);

        clusters.push(CorrelatedMatch {
            primary: primary.clone(),
            related,
            correlation_score,
            correlation_type,
            discrepancies,
        });
    }

    clusters.sort_by(|a, b| {
        b.correlation_score
            .partial_cmp(&a.correlation_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    clusters
}

fn record_key(record: &IdentityRecord) -> (String, String) {
    (record.source_group.clone(), record.id.clone())
}

/// Mean of three independent signals weighted equally: the primary's
/// confidence, the average related confidence, and source diversity
/// saturating at `diversity_target` distinct groups.
fn correlation_score(primary: &MatchResult, related: &[MatchResult], cfg: &CorrelateConfig) -> f64 {
    let related_mean = related
        .iter()
        .map(|candidate| candidate.overall_confidence)
        .sum::<f64>()
        / related.len() as f64;

    let distinct_groups: HashSet<&str> = std::iter::once(primary.record.source_group.as_str())
        .chain(
            related
                .iter()
                .map(|candidate| candidate.record.source_group.as_str()),
        )
        .collect();
    let diversity = (distinct_groups.len() as f64 / cfg.diversity_target as f64).min(1.0);

    (primary.overall_confidence + related_mean + diversity) / 3.0
}

fn correlation_type(primary: &MatchResult, related: &[MatchResult]) -> CorrelationType {
    for candidate in related {
        if let (Some(email_a), Some(email_b)) = (&primary.record.email, &candidate.record.email) {
            if email_a.to_lowercase() == email_b.to_lowercase() {
                return CorrelationType::Exact;
            }
        }
        if let (Some(phone_a), Some(phone_b)) = (&primary.record.phone, &candidate.record.phone) {
            let digits_a = phone_digits(phone_a);
            if !digits_a.is_empty() && digits_a == phone_digits(phone_b) {
                return CorrelationType::Exact;
            }
        }
    }

    let shares_matched_field = related.iter().any(|candidate| {
        primary
            .matched_fields
            .iter()
            .any(|field| candidate.matched_fields.contains(field))
    });
    if shares_matched_field {
        CorrelationType::Partial
    } else {
        CorrelationType::Fuzzy
    }
}

/// Exact string comparison of city, country, and full name between the
/// primary and each related record; one message per mismatch, deduplicated
/// preserving first-seen order.
fn find_discrepancies(primary: &IdentityRecord, related: &[MatchResult]) -> Vec<String> {
    let mut discrepancies = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |message: String| {
        if seen.insert(message.clone()) {
            discrepancies.push(message);
        }
    };

    for candidate in related {
        let record = &candidate.record;
        let group = &record.source_group;

        if let (Some(primary_loc), Some(record_loc)) = (&primary.location, &record.location) {
            if primary_loc.city != record_loc.city {
                push(format!(
                    "City differs in {group}: {} vs {}",
                    display_or_unknown(&primary_loc.city),
                    display_or_unknown(&record_loc.city)
                ));
            }
            if primary_loc.country != record_loc.country {
                push(format!(
                    "Country differs in {group}: {} vs {}",
                    display_or_unknown(&primary_loc.country),
                    display_or_unknown(&record_loc.country)
                ));
            }
        }

        if let (Some(primary_name), Some(record_name)) = (&primary.name, &record.name) {
            if primary_name != record_name {
                push(format!(
                    "Name variation in {group}: \"{primary_name}\" vs \"{record_name}\""
                ));
            }
        }
    }

    discrepancies
}

fn display_or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}
