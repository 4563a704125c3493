use crate::index::{DictEntry, DocId, Index, Posting};
use std::collections::{BTreeMap, HashMap};

/// Per-term accumulator for the build phase. Per-document counts live in
/// an ordered map keyed by doc id, so postings freeze out ascending for
/// any submission order.
#[derive(Debug, Default)]
struct TermAcc {
    term_freq: u64,
    by_doc: BTreeMap<DocId, u32>,
}

/// What a build produced, returned alongside the index so the caller can
/// log it. Unreadable sources are reported here rather than swallowed.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub collection_size: u32,
    pub distinct_terms: usize,
    /// Documents whose source could not be read; they were indexed as
    /// empty and still count toward the collection size.
    pub unreadable_docs: Vec<DocId>,
}

/// Accumulates `(doc id, token stream)` pairs and freezes them into an
/// immutable [`Index`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    terms: HashMap<String, TermAcc>,
    num_docs: u32,
    unreadable: Vec<DocId>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's token stream into the accumulators. Every call
    /// counts toward the collection size, including empty token streams.
    pub fn add_document(&mut self, doc_id: DocId, tokens: Vec<String>) {
        self.num_docs += 1;
        for token in tokens {
            let acc = self.terms.entry(token).or_default();
            acc.term_freq += 1;
            *acc.by_doc.entry(doc_id).or_insert(0) += 1;
        }
    }

    /// Record a document whose source could not be obtained. It
    /// contributes no terms but still occupies its slot in the collection,
    /// and its id is carried into the [`BuildReport`].
    pub fn add_unreadable(&mut self, doc_id: DocId) {
        tracing::warn!(doc_id, "document source unavailable, indexing as empty");
        self.num_docs += 1;
        self.unreadable.push(doc_id);
    }

    /// Freeze the accumulators into the read-only index.
    pub fn finish(self) -> (Index, BuildReport) {
        let mut entries = HashMap::with_capacity(self.terms.len());
        for (term, acc) in self.terms {
            let postings: Vec<Posting> = acc
                .by_doc
                .into_iter()
                .map(|(doc_id, freq)| Posting { doc_id, freq })
                .collect();
            debug_assert!(
                postings.windows(2).all(|w| w[0].doc_id < w[1].doc_id),
                "postings must be strictly ascending by doc id"
            );
            entries.insert(
                term,
                DictEntry {
                    term_freq: acc.term_freq,
                    doc_freq: postings.len() as u32,
                    postings,
                },
            );
        }
        let report = BuildReport {
            collection_size: self.num_docs,
            distinct_terms: entries.len(),
            unreadable_docs: self.unreadable,
        };
        let index = Index {
            entries,
            num_docs: report.collection_size,
        };
        (index, report)
    }

    /// Build an index from an ordered collection of `(doc id, tokens)`
    /// pairs in one call.
    pub fn build<I>(documents: I) -> (Index, BuildReport)
    where
        I: IntoIterator<Item = (DocId, Vec<String>)>,
    {
        let mut builder = Self::new();
        for (doc_id, tokens) in documents {
            builder.add_document(doc_id, tokens);
        }
        builder.finish()
    }
}
