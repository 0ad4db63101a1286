//! Loading and validating search configuration files.

use std::fs;

use findly::{search, Error, ExplicitFilters, SearchConfig};

use crate::common::sample_corpus;

#[test]
fn test_config_file_changes_result_cap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"max_results": 1}"#).unwrap();

    let config = SearchConfig::from_path(&path).unwrap();
    let response = search(
        &sample_corpus(),
        "learning",
        &ExplicitFilters::default(),
        &config,
    );
    assert_eq!(response.total, 1);
}

#[test]
fn test_invalid_weights_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"similarity_weight": 0.9, "keyword_weight": 0.9}"#).unwrap();
    assert!(matches!(
        SearchConfig::from_path(&path),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_raising_min_score_drops_weak_hits() {
    let corpus = sample_corpus();
    let loose = search(
        &corpus,
        "learning",
        &ExplicitFilters::default(),
        &SearchConfig::default(),
    );
    let strict = SearchConfig {
        min_score: 0.99,
        ..SearchConfig::default()
    };
    let tight = search(&corpus, "learning", &ExplicitFilters::default(), &strict);
    assert!(tight.total < loose.total);
}
