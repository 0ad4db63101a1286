//! Substring fallback when the vocabulary is empty.

use crate::common::{make_doc, make_full_doc};
use findly::{search_hits, ExplicitFilters, ScoringMethod, SearchConfig};

#[test]
fn test_stop_word_corpus_uses_substring_matching() {
    let corpus = vec![
        make_doc("a", "the and of"),
        make_doc("b", "is was be"),
        make_doc("c", "then there"),
    ];
    let hits = search_hits(&corpus, "the", &ExplicitFilters::default(), &SearchConfig::default());

    assert_eq!(hits.method, Some(ScoringMethod::Substring));
    let positions: Vec<usize> = hits.hits.iter().map(|h| h.position).collect();
    // "the" is a substring of "then" too.
    assert_eq!(positions, vec![0, 2]);
    assert!(hits.hits.iter().all(|h| h.score == 1.0));
}

#[test]
fn test_fallback_still_capped() {
    let corpus: Vec<_> = (0..15).map(|_| make_doc("x", "the")).collect();
    let hits = search_hits(&corpus, "the", &ExplicitFilters::default(), &SearchConfig::default());
    assert_eq!(hits.method, Some(ScoringMethod::Substring));
    assert_eq!(hits.hits.len(), 10);
}

#[test]
fn test_fallback_matches_category_and_tags() {
    let mut tagged = make_doc("y", "of");
    tagged.tags = vec!["the".to_string()];
    let corpus = vec![
        make_full_doc("x", "", "Other", None, None, &[], "of and"),
        tagged,
        make_doc("z", "of and"),
    ];
    let hits = search_hits(&corpus, "the", &ExplicitFilters::default(), &SearchConfig::default());

    assert_eq!(hits.method, Some(ScoringMethod::Substring));
    let positions: Vec<usize> = hits.hits.iter().map(|h| h.position).collect();
    // "other" contains "the"; the tag is "the" itself.
    assert_eq!(positions, vec![0, 1]);
    assert!(hits.hits.iter().all(|h| h.score == 1.0));
}
