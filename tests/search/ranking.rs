//! Ordering, thresholds, and caps on ranked results.

use crate::common::{make_doc, sample_corpus};
use findly::{search, search_hits, ExplicitFilters, ScoringMethod, SearchConfig};

#[test]
fn test_only_relevant_documents_survive_threshold() {
    let corpus = sample_corpus();
    let response = search(
        &corpus,
        "kubernetes docker serverless",
        &ExplicitFilters::default(),
        &SearchConfig::default(),
    );
    assert_eq!(response.total, 1);
    assert_eq!(
        response.results[0].filename,
        "20231010_Cloud_Computing_ECE.txt"
    );
}

#[test]
fn test_scores_are_non_increasing() {
    let corpus = sample_corpus();
    let hits = search_hits(
        &corpus,
        "learning",
        &ExplicitFilters::default(),
        &SearchConfig::default(),
    );
    assert_eq!(hits.method, Some(ScoringMethod::Lexical));
    assert!(hits.hits.len() >= 2);
    for pair in hits.hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_closer_match_ranks_higher() {
    let corpus = vec![
        make_doc("loose.txt", "graph theory with a short note on database design"),
        make_doc("tight.txt", "database indexing and database normalization"),
    ];
    let response = search(
        &corpus,
        "database normalization",
        &ExplicitFilters::default(),
        &SearchConfig::default(),
    );
    assert_eq!(response.results[0].filename, "tight.txt");
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let corpus: Vec<_> = (0..5)
        .map(|i| make_doc(&format!("copy{i}"), "compiler design lecture"))
        .collect();
    let hits = search_hits(
        &corpus,
        "compiler design",
        &ExplicitFilters::default(),
        &SearchConfig::default(),
    );
    let positions: Vec<usize> = hits.hits.iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_results_capped_at_max_results() {
    let corpus: Vec<_> = (0..30)
        .map(|i| make_doc(&format!("doc{i}"), &format!("compiler notes part {i}")))
        .collect();
    let response = search(
        &corpus,
        "compiler",
        &ExplicitFilters::default(),
        &SearchConfig::default(),
    );
    assert_eq!(response.total, 10);

    let config = SearchConfig {
        max_results: 3,
        ..SearchConfig::default()
    };
    let response = search(&corpus, "compiler", &ExplicitFilters::default(), &config);
    assert_eq!(response.total, 3);
}
