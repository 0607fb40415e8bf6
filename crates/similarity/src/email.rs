use crate::levenshtein::string_similarity;

/// Domain-aware email similarity.
///
/// Splits at `@` and scores `0.7 * local-part + 0.3 * domain`. The local
/// part is weighted higher: a near-identical domain with a different mailbox
/// is weak evidence of the same identity. If either side has no domain, the
/// whole strings are compared instead.
pub fn email_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    match (split_email(&a), split_email(&b)) {
        (Some((user_a, domain_a)), Some((user_b, domain_b))) => {
            0.7 * string_similarity(user_a, user_b) + 0.3 * string_similarity(domain_a, domain_b)
        }
        _ => string_similarity(&a, &b),
    }
}

fn split_email(email: &str) -> Option<(&str, &str)> {
    match email.split_once('@') {
        Some((user, domain)) if !domain.is_empty() => Some((user, domain)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_emails_score_one() {
        assert_eq!(
            email_similarity("dana@example.com", "Dana@Example.com"),
            1.0
        );
    }

    #[test]
    fn same_user_different_domain_scores_seventy_percent_floor() {
        // Local parts identical, domains entirely dissimilar except by chance.
        let score = email_similarity("a@x.com", "a@zzz.org");
        assert!(score >= 0.7, "local-part match alone is worth 0.7: {score}");
        assert!(score < 1.0);
    }

    #[test]
    fn domain_similarity_boundary() {
        // userSim = 1, domain "xcom" vs "ycom" -> distance 1 over 4 chars.
        let score = email_similarity("a@xcom", "a@ycom");
        assert!((score - (0.7 + 0.3 * 0.75)).abs() < 1e-12);
    }

    #[test]
    fn missing_domain_falls_back_to_whole_string() {
        assert_eq!(email_similarity("dana", "dana"), 1.0);
        assert_eq!(email_similarity("dana@", "dana@"), 1.0);
        let score = email_similarity("dana@example.com", "dana");
        assert!(score < 1.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(email_similarity("", "dana@example.com"), 0.0);
        assert_eq!(email_similarity("dana@example.com", " "), 0.0);
    }

    #[test]
    fn symmetric() {
        assert_eq!(
            email_similarity("dana@example.com", "dana@sample.org"),
            email_similarity("dana@sample.org", "dana@example.com")
        );
    }
}
