use docrank_core::tokenizer::tokenize;
use docrank_core::{Index, IndexBuilder};

fn build_scenario() -> Index {
    IndexBuilder::build(vec![
        (1, tokenize("the cat sat")),
        (2, tokenize("the dog sat")),
        (3, tokenize("cat dog cat")),
    ])
    .0
}

#[test]
fn scenario_ranking_order_and_scores() {
    let index = build_scenario();
    let hits = index.search("cat dog");
    assert_eq!(hits.len(), 3);

    // doc3's (2, 1) vector against the query's (1, 1): 3 / sqrt(10)
    assert_eq!(hits[0].0, 3);
    assert!((hits[0].1 - 3.0 / 10.0f32.sqrt()).abs() < 1e-5);

    // doc1 and doc2 tie at 1 / sqrt(2); ascending doc id breaks the tie
    assert_eq!(hits[1].0, 1);
    assert_eq!(hits[2].0, 2);
    assert!((hits[1].1 - 1.0 / 2.0f32.sqrt()).abs() < 1e-5);
    assert!((hits[1].1 - hits[2].1).abs() < 1e-6);
}

#[test]
fn empty_query_returns_no_results() {
    let index = build_scenario();
    assert!(index.search("").is_empty());
    assert!(index.search("   \t ").is_empty());
}

#[test]
fn query_of_only_unknown_terms_returns_no_results() {
    let index = build_scenario();
    assert!(index.search("xyzzy").is_empty());
    assert!(index.search("xyzzy plugh").is_empty());
}

#[test]
fn unknown_terms_do_not_disturb_known_term_ranking() {
    let index = build_scenario();
    let plain = index.search("cat");
    let noisy = index.search("cat xyzzy");
    assert_eq!(plain, noisy);
    // "cat" alone ties doc 1 and doc 3 at cosine 1, so doc 1 leads
    assert_eq!(plain[0].0, 1);
}

#[test]
fn query_is_normalized_like_documents() {
    let index = build_scenario();
    assert_eq!(index.search("CAT Dog"), index.search("cat dog"));
}

#[test]
fn term_present_everywhere_cannot_match_alone() {
    // idf of a term with df == N is log10(1) == 0, so a query made only
    // of such terms has a zero-magnitude weight vector
    let (index, _) = IndexBuilder::build(vec![
        (1, tokenize("common cat")),
        (2, tokenize("common dog")),
        (3, tokenize("common bird")),
    ]);
    assert!(index.search("common").is_empty());
    // paired with a discriminating term it still contributes nothing
    let hits = index.search("common cat");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, 1);
}

#[test]
fn only_positive_scores_are_returned() {
    let index = build_scenario();
    for (_, score) in index.search("the cat dog sat") {
        assert!(score > 0.0);
    }
}

#[test]
fn single_term_query_ties_at_cosine_one() {
    let index = build_scenario();
    let hits = index.search("cat");
    // both matching docs have a single-axis vector parallel to the query,
    // so both cosines are 1 and bit-identical; only the ascending doc id
    // tie-break decides the order
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].0, 1);
    assert_eq!(hits[1].0, 3);
    assert_eq!(hits[0].1.to_bits(), hits[1].1.to_bits());
    assert!((hits[0].1 - 1.0).abs() < 1e-6);
}

#[test]
fn concurrent_readers_share_the_index() {
    let index = build_scenario();
    let expected = index.search("cat dog");
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| index.search("cat dog")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
