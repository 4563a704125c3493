use anyhow::{bail, Context, Result};
use docrank_core::tokenizer::tokenize;
use docrank_core::{BuildReport, DocId, Index, IndexBuilder, Posting};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One document in a loaded corpus. `text` is `None` when the source file
/// could not be read; such documents still occupy their id slot.
#[derive(Debug)]
pub struct CorpusDoc {
    pub id: DocId,
    pub name: String,
    pub path: PathBuf,
    pub text: Option<String>,
}

/// A directory of `.txt` documents with dense ids 1..N assigned in
/// lexicographic file-name order.
#[derive(Debug)]
pub struct Corpus {
    docs: Vec<CorpusDoc>,
}

impl Corpus {
    /// Load every `.txt` file directly under `dir`. A file that cannot be
    /// read is kept as an unreadable document and the load continues; a
    /// directory with no `.txt` files at all is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry
                .with_context(|| format!("reading corpus directory {}", dir.display()))?;
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
                paths.push(p.to_path_buf());
            }
        }
        if paths.is_empty() {
            bail!("no .txt documents under {}", dir.display());
        }
        paths.sort();

        let mut docs = Vec::with_capacity(paths.len());
        for (i, path) in paths.into_iter().enumerate() {
            let id = (i + 1) as DocId;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let text = match fs::read_to_string(&path) {
                Ok(text) => Some(text),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "cannot read document, indexing as empty");
                    None
                }
            };
            docs.push(CorpusDoc { id, name, path, text });
        }
        Ok(Self { docs })
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn docs(&self) -> &[CorpusDoc] {
        &self.docs
    }

    /// File name for an id assigned by [`Corpus::load`].
    pub fn name_of(&self, id: DocId) -> Option<&str> {
        let slot = (id as usize).checked_sub(1)?;
        self.docs.get(slot).map(|d| d.name.as_str())
    }

    /// Tokenize and index the whole corpus.
    pub fn build_index(&self) -> (Index, BuildReport) {
        let mut builder = IndexBuilder::new();
        for doc in &self.docs {
            match &doc.text {
                Some(text) => builder.add_document(doc.id, tokenize(text)),
                None => builder.add_unreadable(doc.id),
            }
        }
        builder.finish()
    }
}

/// One ranked result with its 1-based display rank.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub doc_id: DocId,
    pub source: String,
    pub score: f32,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub collection_size: u32,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse<'a> {
    pub term: String,
    pub document_frequency: u32,
    pub collection_term_frequency: u64,
    pub collection_size: u32,
    pub postings: &'a [Posting],
}

/// Truncate ranked results for display. A limit of 0 is clamped to 1 so
/// truncation alone never turns a non-empty result into the no-match
/// rendering.
pub fn truncate_for_display(ranked: &mut Vec<(DocId, f32)>, limit: Option<usize>) {
    if let Some(limit) = limit {
        ranked.truncate(limit.max(1));
    }
}

/// Attach display ranks and source file names to ranked `(doc id, score)`
/// pairs.
pub fn to_hits(corpus: &Corpus, ranked: &[(DocId, f32)]) -> Vec<SearchHit> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, &(doc_id, score))| SearchHit {
            rank: i + 1,
            doc_id,
            source: corpus.name_of(doc_id).map(str::to_string).unwrap_or_default(),
            score,
        })
        .collect()
}

/// One `Rank i:` line per hit with the similarity to five decimal places,
/// or the no-match message when nothing scored above zero.
pub fn render_search_text(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No documents match the query: {query}\n");
    }
    let mut out = String::new();
    for hit in hits {
        out.push_str(&format!(
            "Rank {}: {} (cosine similarity {:.5})\n",
            hit.rank, hit.source, hit.score
        ));
    }
    out
}

pub fn lookup_response<'a>(index: &'a Index, term: String) -> LookupResponse<'a> {
    LookupResponse {
        document_frequency: index.document_frequency(&term),
        collection_term_frequency: index.collection_term_frequency(&term),
        collection_size: index.collection_size(),
        postings: index.postings(&term),
        term,
    }
}

pub fn render_lookup_text(corpus: &Corpus, resp: &LookupResponse<'_>) -> String {
    let mut out = format!(
        "\"{}\" appears in {} of {} documents\n",
        resp.term, resp.document_frequency, resp.collection_size
    );
    for p in resp.postings {
        let name = corpus.name_of(p.doc_id).unwrap_or("?");
        out.push_str(&format!("  {} (freq {})\n", name, p.freq));
    }
    out
}
