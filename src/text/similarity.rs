//! Bag-of-words cosine similarity

use std::collections::HashMap;

use super::tokenize::content_words;

/// Term frequencies over the content words of `text`
pub fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for word in content_words(text) {
        *counts.entry(word).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine of two sparse vectors; 0 when either is empty
pub fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, x)| b.get(term).map(|y| x * y))
        .sum();
    let norm_a = a.values().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.values().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Similarity of two texts in [0, 1]
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    cosine(&term_frequencies(a), &term_frequencies(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        let s = cosine_similarity("great battery life", "Great battery life!");
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_texts() {
        assert_eq!(cosine_similarity("cat sat", "rocket launch"), 0.0);
    }

    #[test]
    fn test_stop_words_only_is_zero() {
        assert_eq!(cosine_similarity("the and of", "great tablet"), 0.0);
        assert_eq!(cosine_similarity("", ""), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let s = cosine_similarity("cheap tablet", "expensive tablet");
        assert!((s - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = "The kindle screen is easy on the eyes";
        let b = "easy setup and a bright screen";
        assert!((cosine_similarity(a, b) - cosine_similarity(b, a)).abs() < 1e-12);
    }
}
