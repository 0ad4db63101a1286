// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Narrowing the corpus to candidates.
//!
//! For each dimension the value extracted from the query wins; the caller's
//! explicit value only applies when the query said nothing, and a blank
//! explicit value (empty string, year zero) counts as nothing. Matching is exact
//! equality and dimensions combine with AND. Candidate order is corpus order,
//! which the ranker later relies on for tie-breaking.

use crate::types::{AppliedFilters, Document, ExplicitFilters, ExtractedFilters};

/// Resolve precedence between extracted and explicit filters.
pub fn resolve_filters(extracted: &ExtractedFilters, explicit: &ExplicitFilters) -> AppliedFilters {
    AppliedFilters {
        year: extracted
            .year
            .or_else(|| explicit.year.filter(|&year| year != 0)),
        department: extracted
            .department
            .map(str::to_string)
            .or_else(|| non_blank(explicit.department.as_deref())),
        document_type: extracted
            .document_type
            .map(str::to_string)
            .or_else(|| non_blank(explicit.document_type.as_deref())),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl AppliedFilters {
    /// Does `doc` pass every active filter? `document_type` compares against
    /// the document's category.
    pub fn matches(&self, doc: &Document) -> bool {
        if let Some(year) = self.year {
            if doc.year != Some(year) {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if doc.department.as_deref() != Some(department.as_str()) {
                return false;
            }
        }
        if let Some(document_type) = &self.document_type {
            if doc.category != *document_type {
                return false;
            }
        }
        true
    }
}

/// Documents passing `filters`, in corpus order.
pub fn apply_filters<'a>(corpus: &'a [Document], filters: &AppliedFilters) -> Vec<&'a Document> {
    corpus.iter().filter(|doc| filters.matches(doc)).collect()
}
