use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type DocId = u32;

/// One entry in a term's posting list: a document and the number of
/// occurrences of the term within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub freq: u32,
}

/// Dictionary entry for one distinct term.
///
/// `postings` is strictly ascending by `doc_id` with exactly one posting
/// per document containing the term, regardless of the order documents
/// were submitted to the builder. `doc_freq` always equals
/// `postings.len()` and `term_freq` the sum of posting frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    /// Total occurrences of the term across the whole collection.
    pub term_freq: u64,
    /// Number of distinct documents containing the term.
    pub doc_freq: u32,
    pub postings: Vec<Posting>,
}

/// Term → `DictEntry` mapping over a fixed collection of `num_docs`
/// documents. Built once by [`crate::builder::IndexBuilder`]; immutable
/// afterwards, so `&Index` can be shared across threads without locks.
#[derive(Debug)]
pub struct Index {
    pub(crate) entries: HashMap<String, DictEntry>,
    pub(crate) num_docs: u32,
}

impl Index {
    /// Posting list for a term, ascending by doc id. Empty if the term is
    /// not in the index.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.entries
            .get(term)
            .map(|e| e.postings.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct documents containing the term; 0 if absent.
    pub fn document_frequency(&self, term: &str) -> u32 {
        self.entries.get(term).map(|e| e.doc_freq).unwrap_or(0)
    }

    /// Total occurrences of the term across the collection; 0 if absent.
    pub fn collection_term_frequency(&self, term: &str) -> u64 {
        self.entries.get(term).map(|e| e.term_freq).unwrap_or(0)
    }

    /// Collection size N, including documents that contributed no terms.
    pub fn collection_size(&self) -> u32 {
        self.num_docs
    }

    pub fn distinct_terms(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_docs == 0
    }

    /// Ids of the documents containing the term, ascending. Bypasses
    /// scoring entirely.
    pub fn documents_containing(&self, term: &str) -> Vec<DocId> {
        self.postings(term).iter().map(|p| p.doc_id).collect()
    }

    /// Full dictionary entry for a term, if present.
    pub fn entry(&self, term: &str) -> Option<&DictEntry> {
        self.entries.get(term)
    }

    /// Iterate all distinct indexed terms (unordered).
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|t| t.as_str())
    }

    /// Rank the collection against a free-text query: tokenizer → scorer →
    /// ranker. Returns `(doc_id, score)` pairs, best first; empty when no
    /// document scores above zero.
    pub fn search(&self, query: &str) -> Vec<(DocId, f32)> {
        let terms = crate::tokenizer::tokenize(query);
        let scores = crate::scorer::score_documents(self, &terms);
        crate::ranker::rank(scores)
    }
}
