//! In-memory TF-IDF ranked retrieval over a caller-supplied collection:
//! tokenizer, inverted index, cosine scorer, deterministic ranker. The
//! library performs no I/O; callers feed it `(doc id, token stream)`
//! pairs and query the built index read-only.

pub mod builder;
pub mod index;
pub mod ranker;
pub mod scorer;
pub mod tokenizer;

pub use builder::{BuildReport, IndexBuilder};
pub use index::{DictEntry, DocId, Index, Posting};
