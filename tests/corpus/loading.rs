//! Reading corpus snapshots from disk.

use std::fs;

use findly::{load_corpus, search, Error, ExplicitFilters, SearchConfig, MAX_TEXT_CHARS};

use crate::common::sample_corpus;

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let corpus = sample_corpus();
    fs::write(&path, serde_json::to_string_pretty(&corpus).unwrap()).unwrap();

    let loaded = load_corpus(&path).unwrap();
    assert_eq!(loaded, corpus);

    let response = search(
        &loaded,
        "Find CSE notes",
        &ExplicitFilters::default(),
        &SearchConfig::default(),
    );
    assert_eq!(response.total, 2);
}

#[test]
fn test_oversized_text_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.json");
    let text = "word ".repeat(MAX_TEXT_CHARS);
    let json = serde_json::json!([{ "filename": "big.txt", "text": text }]);
    fs::write(&path, json.to_string()).unwrap();

    let loaded = load_corpus(&path).unwrap();
    assert_eq!(loaded[0].text.chars().count(), MAX_TEXT_CHARS);
}

#[test]
fn test_non_array_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("object.json");
    fs::write(&path, r#"{"filename": "a.txt"}"#).unwrap();
    assert!(matches!(load_corpus(&path), Err(Error::Json(_))));
}

#[test]
fn test_record_without_filename_loads_with_empty_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(
        &path,
        r#"[{"text": "orphan"}, {"filename": "b.txt", "text": "kept"}]"#,
    )
    .unwrap();
    let corpus = load_corpus(&path).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus[0].filename, "");
    assert_eq!(corpus[0].text, "orphan");
    assert_eq!(corpus[1].filename, "b.txt");
}
