use crate::levenshtein::string_similarity;

/// Strip a phone number down to its digits.
///
/// This is the canonical form used both for scoring and for the exact-match
/// predicates in cross-source correlation.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Phone similarity over digit-normalized numbers.
///
/// Formatting never matters. Equal digit strings score 1; if one is a
/// substring of the other (country code or extension differences) the score
/// is `shorter / longer`; otherwise the digit strings are compared as text.
pub fn phone_similarity(a: &str, b: &str) -> f64 {
    let digits_a = phone_digits(a);
    let digits_b = phone_digits(b);
    if digits_a.is_empty() || digits_b.is_empty() {
        return 0.0;
    }

    if digits_a == digits_b {
        return 1.0;
    }

    if digits_a.contains(&digits_b) || digits_b.contains(&digits_a) {
        let shorter = digits_a.len().min(digits_b.len());
        let longer = digits_a.len().max(digits_b.len());
        return shorter as f64 / longer as f64;
    }

    string_similarity(&digits_a, &digits_b)
}
