//! Identical inputs give identical outputs.

use crate::common::sample_corpus;
use findly::{search, search_hits, ExplicitFilters, SearchConfig};

const QUERIES: &[&str] = &[
    "Find CSE notes",
    "machine learning",
    "Show AI project reports from 2023",
    "web",
    "the",
];

#[test]
fn test_repeated_search_is_identical() {
    let corpus = sample_corpus();
    let config = SearchConfig::default();
    for query in QUERIES {
        let first = search(&corpus, query, &ExplicitFilters::default(), &config);
        for _ in 0..5 {
            let again = search(&corpus, query, &ExplicitFilters::default(), &config);
            assert_eq!(first, again, "query {query:?} changed between runs");
        }
    }
}

#[test]
fn test_scores_are_bit_identical() {
    let corpus = sample_corpus();
    let config = SearchConfig::default();
    for query in QUERIES {
        let a = search_hits(&corpus, query, &ExplicitFilters::default(), &config);
        let b = search_hits(&corpus, query, &ExplicitFilters::default(), &config);
        let bits = |h: &findly::SearchHits| -> Vec<u64> {
            h.hits.iter().map(|c| c.score.to_bits()).collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}

#[test]
fn test_search_does_not_mutate_corpus() {
    let corpus = sample_corpus();
    let before = corpus.clone();
    let _ = search(
        &corpus,
        "database",
        &ExplicitFilters::default(),
        &SearchConfig::default(),
    );
    assert_eq!(corpus, before);
}
