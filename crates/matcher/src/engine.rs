use std::collections::BTreeMap;
use std::sync::Arc;

use embedding::{CosineFaceScorer, FaceScorer};
use records::{ConfidenceTier, IdentityRecord, MatchField, MatchResult};
use similarity::{email_similarity, location_similarity, name_similarity, phone_similarity};

use crate::query::ResolvedQuery;
use crate::types::{MatchError, ScoringConfig};


/// Scores candidate records against a resolved query and executes
/// single-source searches.
///
/// The engine is cheap to clone and `Send + Sync`; the orchestrator clones
/// one instance into every per-source task.
#[derive(Clone)]
pub struct MatchEngine {
    scoring: ScoringConfig,
    face_scorer: Arc<dyn FaceScorer>,
}

impl MatchEngine {
    /// Construct an engine with the reference cosine face scorer.
    pub fn new(scoring: ScoringConfig) -> Result<Self, MatchError> {
        Self::with_face_scorer(scoring, Arc::new(CosineFaceScorer))
    }

    /// Construct an engine with a custom face scorer implementation.
    pub fn with_face_scorer(
        scoring: ScoringConfig,
        face_scorer: Arc<dyn FaceScorer>,
    ) -> Result<Self, MatchError> {
        scoring.validate()?;
        Ok(Self {
            scoring,
            face_scorer,
        })
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Similarity for the face channel, or `None` when either side lacks an
    /// embedding. A comparison that violates the embedding contract scores
    /// 0 rather than aborting the record's evaluation.
    fn face_similarity(&self, query: &ResolvedQuery, record: &IdentityRecord) -> Option<f64> {
        let query_vec = query.face_embedding.as_ref()?;
        let record_vec = record.face_embedding.as_ref()?;
        match self.face_scorer.score(query_vec, record_vec) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(
                    record = %record.id,
                    error = %err,
                    "face comparison rejected; scoring the face channel 0"
                );
                Some(0.0)
            }
        }
    }

    /// Score one record against the query.
    ///
    /// Every field present on both sides contributes `similarity * weight`
    /// to the numerator and `weight` to the denominator; the confidence is
    /// the ratio, or 0 when nothing was comparable.
    pub fn score_record(&self, query: &ResolvedQuery, record: &IdentityRecord) -> MatchResult {
        let weights = &self.scoring.weights;
        let thresholds = &self.scoring.thresholds;

        let comparisons = [
            (
                MatchField::Face,
                self.face_similarity(query, record),
                weights.face,
                thresholds.face,
            ),
            (
                MatchField::Name,
                both(&query.name, &record.name).map(|(a, b)| name_similarity(a, b)),
                weights.name,
                thresholds.name,
            ),
            (
                MatchField::Email,
                both(&query.email, &record.email).map(|(a, b)| email_similarity(a, b)),
                weights.email,
                thresholds.email,
            ),
            (
                MatchField::Phone,
                both(&query.phone, &record.phone).map(|(a, b)| phone_similarity(a, b)),
                weights.phone,
                thresholds.phone,
            ),
            (
                MatchField::Location,
                query.location.as_ref().zip(record.location.as_ref()).map(
                    |(a, b)| location_similarity(a, b, &self.scoring.location_weights),
                ),
                weights.location,
                thresholds.location,
            ),
        ];

        let mut breakdown = BTreeMap::new();
        let mut matched_fields = Vec::new();
        let mut score = 0.0;
        let mut weight_used = 0.0;

        for (field, similarity, weight, threshold) in comparisons {
            let Some(similarity) = similarity else {
                continue;
            };
            breakdown.insert(field, similarity);
            score += similarity * weight;
            weight_used += weight;
            if similarity > threshold {
                matched_fields.push(field);
            }
        }

        let overall_confidence = if weight_used > 0.0 {
            score / weight_used
        } else {
            0.0
        };

        MatchResult {
            record: record.clone(),
            overall_confidence,
            match_breakdown: breakdown,
            matched_fields,
            confidence_tier: ConfidenceTier::from_confidence(
                overall_confidence,
                self.scoring.tiers.high,
                self.scoring.tiers.medium,
            ),
        }
    }

    /// Execute the query against one source group's record sequence.
    ///
    /// Retains records whose confidence meets `confidence_threshold`,
    /// sorted descending by confidence. The sort is stable, so equal
    /// confidences keep their original record order and repeated runs are
    /// reproducible. Performs no I/O — safe to run concurrently across
    /// sources.
    pub fn search_records(
        &self,
        query: &ResolvedQuery,
        records: &[IdentityRecord],
        confidence_threshold: f64,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = records
            .iter()
            .map(|record| self.score_record(query, record))
            .filter(|result| result.overall_confidence >= confidence_threshold)
            .collect();

        results.sort_by(|a, b| {
            b.overall_confidence
                .partial_cmp(&a.overall_confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results
    }
}

fn both<'a>(a: &'a Option<String>, b: &'a Option<String>) -> Option<(&'a str, &'a str)> {
    Some((a.as_deref()?, b.as_deref()?))
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("scoring", &self.scoring)
            .finish_non_exhaustive()
    }
}
