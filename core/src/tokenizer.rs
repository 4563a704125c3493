use unicode_normalization::UnicodeNormalization;

/// Tokenize text into normalized terms: NFKC normalization, lowercasing,
/// then a split on Unicode whitespace. Order and multiplicity are
/// preserved; there is no deduplication, stopword filtering, or stemming.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    normalized
        .split_whitespace()
        .map(|token| token.to_string())
        .collect()
}
