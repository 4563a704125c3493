//! TF-IDF weighting and query-term-restricted cosine scoring.
//!
//! Weights are raw term frequency times `log10(N / df)` on both the query
//! and the document side; no log-dampening of tf and no document-length
//! normalization. Only terms present in the query participate in the dot
//! product and in both magnitudes.

use crate::index::{DocId, Index};
use std::collections::HashMap;

/// Inverse document frequency, `log10(N / df)`.
///
/// A term absent from the whole collection has df 0 and resolves to 0
/// here, so its weight contribution is 0 everywhere instead of an
/// undefined value leaking into downstream arithmetic.
pub fn idf(index: &Index, term: &str) -> f32 {
    let df = index.document_frequency(term);
    if df == 0 {
        return 0.0;
    }
    (index.collection_size() as f32 / df as f32).log10()
}

/// Cosine similarity of every matching document against the query.
///
/// Query weights are computed once per distinct query term (tf over the
/// query stream times idf); document weights come from the term's posting
/// frequencies, so documents are never re-tokenized. Accumulation is
/// postings-driven: a document that shares no positively-weighted term
/// with the query never acquires an entry, which is its score-0 outcome.
/// A zero query or document magnitude resolves to score 0 here, never to
/// an undefined value.
pub fn score_documents(index: &Index, query_terms: &[String]) -> HashMap<DocId, f32> {
    // tf over the query token stream, one entry per distinct term
    let mut query_tf: HashMap<&str, u32> = HashMap::new();
    for term in query_terms {
        *query_tf.entry(term.as_str()).or_insert(0) += 1;
    }

    let mut query_magnitude_sq = 0.0f32;
    let mut dot: HashMap<DocId, f32> = HashMap::new();
    let mut doc_magnitude_sq: HashMap<DocId, f32> = HashMap::new();

    for (&term, &tf_q) in &query_tf {
        let idf_t = idf(index, term);
        if idf_t == 0.0 {
            // df 0 (absent everywhere) or df == N (present everywhere):
            // weight 0 on both sides either way
            continue;
        }
        let query_weight = tf_q as f32 * idf_t;
        query_magnitude_sq += query_weight * query_weight;

        for posting in index.postings(term) {
            let doc_weight = posting.freq as f32 * idf_t;
            *dot.entry(posting.doc_id).or_insert(0.0) += query_weight * doc_weight;
            *doc_magnitude_sq.entry(posting.doc_id).or_insert(0.0) += doc_weight * doc_weight;
        }
    }

    let query_magnitude = query_magnitude_sq.sqrt();
    dot.into_iter()
        .map(|(doc_id, dot_product)| {
            let doc_magnitude = doc_magnitude_sq
                .get(&doc_id)
                .copied()
                .unwrap_or(0.0)
                .sqrt();
            let denom = query_magnitude * doc_magnitude;
            let score = if denom == 0.0 { 0.0 } else { dot_product / denom };
            (doc_id, score)
        })
        .collect()
}
