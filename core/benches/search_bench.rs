use criterion::{criterion_group, criterion_main, Criterion};
use docrank_core::tokenizer::tokenize;
use docrank_core::{DocId, Index, IndexBuilder};

const VOCAB: &[&str] = &[
    "retrieval", "index", "cosine", "term", "document", "query", "weight",
    "posting", "corpus", "rank", "frequency", "vector", "builder", "token",
];

fn synth_doc(seed: usize, len: usize) -> String {
    let mut text = String::new();
    for j in 0..len {
        text.push_str(VOCAB[(seed * 7 + j * 3) % VOCAB.len()]);
        text.push(' ');
    }
    text
}

fn synth_index(docs: usize) -> Index {
    IndexBuilder::build((1..=docs).map(|i| (i as DocId, tokenize(&synth_doc(i, 120))))).0
}

fn bench_tokenize(c: &mut Criterion) {
    let text = synth_doc(1, 5_000);
    c.bench_function("tokenize_5k_terms", |b| b.iter(|| tokenize(&text)));
}

fn bench_build(c: &mut Criterion) {
    let docs: Vec<(DocId, Vec<String>)> = (1..=200)
        .map(|i| (i as DocId, tokenize(&synth_doc(i as usize, 120))))
        .collect();
    c.bench_function("build_200_docs", |b| {
        b.iter(|| IndexBuilder::build(docs.clone()))
    });
}

fn bench_search(c: &mut Criterion) {
    let index = synth_index(200);
    c.bench_function("search_200_docs", |b| {
        b.iter(|| index.search("cosine retrieval rank vector"))
    });
}

criterion_group!(benches, bench_tokenize, bench_build, bench_search);
criterion_main!(benches);
