use crate::error::SimilarityError;

/// Cosine similarity between two equal-length embedding vectors, mapped into
/// `[0, 1]` via `(cos + 1) / 2` so the face channel shares the scoring
/// contract of every other field.
///
/// Mismatched lengths violate the input contract and fail with
/// [`SimilarityError::DimensionMismatch`]. A zero-magnitude vector carries no
/// information and scores 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Ok(0.0);
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += f64::from(x) * f64::from(y);
        norm_a += f64::from(x) * f64::from(x);
        norm_b += f64::from(y) * f64::from(y);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let cosine = (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0);
    Ok((cosine + 1.0) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![0.3f32, -0.5, 0.8, 0.1];
        let score = cosine_similarity(&v, &v).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn opposite_vectors_score_zero() {
        let a = vec![1.0f32, 0.0, 0.0];
        let b = vec![-1.0f32, 0.0, 0.0];
        let score = cosine_similarity(&a, &b).unwrap();
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_score_half() {
        let a = vec![1.0f32, 0.0];
        let b = vec![0.0f32, 1.0];
        let score = cosine_similarity(&a, &b).unwrap();
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn dimension_mismatch_fails() {
        let a = vec![1.0f32, 2.0];
        let b = vec![1.0f32, 2.0, 3.0];
        assert_eq!(
            cosine_similarity(&a, &b),
            Err(SimilarityError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn zero_vector_scores_zero() {
        let a = vec![0.0f32; 4];
        let b = vec![1.0f32, 2.0, 3.0, 4.0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = vec![0.2f32, 0.9, -0.4];
        let b = vec![0.7f32, -0.1, 0.5];
        assert_eq!(
            cosine_similarity(&a, &b).unwrap(),
            cosine_similarity(&b, &a).unwrap()
        );
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let a = vec![0.9f32, -0.3, 0.2, -0.8];
        let b = vec![-0.5f32, 0.4, -0.9, 0.1];
        let score = cosine_similarity(&a, &b).unwrap();
        assert!((0.0..=1.0).contains(&score));
    }
}
