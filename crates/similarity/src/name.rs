use crate::levenshtein::string_similarity;

/// Token-based similarity for person names.
///
/// Splits both names on whitespace and takes the maximum string similarity
/// over every cross-product token pair, then also compares the whole
/// strings; the final score is the maximum of the two. Partial matches (a
/// shared middle name, reordered given/family names) score highly without
/// penalizing token order.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim();
    let b = b.trim();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();

    let mut best = 0.0f64;
    for token_a in &tokens_a {
        for token_b in &tokens_b {
            best = best.max(string_similarity(token_a, token_b));
        }
    }

    best.max(string_similarity(a, b))
}
