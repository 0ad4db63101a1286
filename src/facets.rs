// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus-wide counts and the filter values a UI can offer.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::Document;

const UNKNOWN: &str = "Unknown";
const OTHER: &str = "Other";

/// Document counts per facet. Keys are sorted for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub total_documents: usize,
    pub documents_by_department: BTreeMap<String, usize>,
    pub documents_by_type: BTreeMap<String, usize>,
    /// Years as strings so that `"Unknown"` fits alongside them.
    pub documents_by_year: BTreeMap<String, usize>,
}

/// Distinct values present in the corpus for each filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailableFilters {
    pub departments: Vec<String>,
    /// Newest first.
    pub years: Vec<u32>,
    pub document_types: Vec<String>,
}

pub fn corpus_stats(corpus: &[Document]) -> CorpusStats {
    let mut stats = CorpusStats {
        total_documents: corpus.len(),
        ..CorpusStats::default()
    };

    for doc in corpus {
        let department = doc.department.as_deref().unwrap_or(UNKNOWN);
        *stats
            .documents_by_department
            .entry(department.to_string())
            .or_insert(0) += 1;

        let doc_type = if doc.category.is_empty() {
            OTHER
        } else {
            doc.category.as_str()
        };
        *stats
            .documents_by_type
            .entry(doc_type.to_string())
            .or_insert(0) += 1;

        let year = doc
            .year
            .map_or_else(|| UNKNOWN.to_string(), |y| y.to_string());
        *stats.documents_by_year.entry(year).or_insert(0) += 1;
    }

    stats
}

pub fn available_filters(corpus: &[Document]) -> AvailableFilters {
    let departments: BTreeSet<&str> = corpus
        .iter()
        .filter_map(|doc| doc.department.as_deref())
        .filter(|d| !d.is_empty())
        .collect();
    let years: BTreeSet<u32> = corpus.iter().filter_map(|doc| doc.year).collect();
    let document_types: BTreeSet<&str> = corpus
        .iter()
        .map(|doc| doc.category.as_str())
        .filter(|c| !c.is_empty())
        .collect();

    AvailableFilters {
        departments: departments.into_iter().map(str::to_string).collect(),
        years: years.into_iter().rev().collect(),
        document_types: document_types.into_iter().map(str::to_string).collect(),
    }
}
