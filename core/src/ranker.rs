use crate::index::DocId;
use std::collections::HashMap;

/// Order scored documents for presentation: score descending, ties broken
/// by ascending doc id so equal scores still rank deterministically. Only
/// strictly positive scores qualify; an all-zero scoring therefore ranks
/// as an empty list and the caller renders the no-match outcome.
pub fn rank(scores: HashMap<DocId, f32>) -> Vec<(DocId, f32)> {
    let mut ranked: Vec<(DocId, f32)> = scores
        .into_iter()
        .filter(|&(_, score)| score > 0.0)
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
