//! Corpus statistics and available filter values.

use findly::{available_filters, corpus_stats};

use crate::common::sample_corpus;

#[test]
fn test_sample_corpus_stats() {
    let stats = corpus_stats(&sample_corpus());
    assert_eq!(stats.total_documents, 7);
    assert_eq!(stats.documents_by_department["CSE"], 6);
    assert_eq!(stats.documents_by_department["ECE"], 1);
    assert_eq!(stats.documents_by_type["Project Report"], 2);
    assert_eq!(stats.documents_by_type["Research Paper"], 2);
    assert_eq!(stats.documents_by_year["2023"], 5);
    assert_eq!(stats.documents_by_year["2021"], 2);
    assert_eq!(
        stats.documents_by_department.values().sum::<usize>(),
        stats.total_documents
    );
}

#[test]
fn test_sample_available_filters() {
    let filters = available_filters(&sample_corpus());
    assert_eq!(filters.departments, vec!["CSE", "ECE"]);
    assert_eq!(filters.years, vec![2023, 2021]);
    assert_eq!(
        filters.document_types,
        vec!["Assignment", "Notes", "Project Report", "Research Paper"]
    );
}

#[test]
fn test_stats_json_shape() {
    let value = serde_json::to_value(corpus_stats(&sample_corpus())).unwrap();
    assert_eq!(value["total_documents"], 7);
    assert_eq!(value["documents_by_year"]["2021"], 2);
}
