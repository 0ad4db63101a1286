// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter extraction from natural-language queries.
//!
//! "Show AI project reports from 2023" carries a year and a document type.
//! "Find CSE notes" carries a department and a type. The rules are plain:
//!
//! - **Year**: first word-bounded `20xx` token made of ASCII digits.
//! - **Department / type**: first entry of the constant list whose lower-cased
//!   form occurs anywhere in the query. List order breaks ties, and there is
//!   no word-boundary check, so `it` matches inside `with`.
//!
//! Nothing here can fail. No match means `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DEPARTMENTS, DOCUMENT_TYPES};
use crate::types::ExtractedFilters;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20[0-9]{2})\b").expect("year pattern is valid"));

/// Extract all three filters. The query is lower-cased first.
pub fn extract_filters(query: &str) -> ExtractedFilters {
    let query = query.to_lowercase();
    ExtractedFilters {
        year: extract_year(&query),
        department: extract_department(&query),
        document_type: extract_document_type(&query),
    }
}

/// First four-digit year in 2000..=2099 that stands on its own as a token.
pub fn extract_year(query: &str) -> Option<u32> {
    YEAR_PATTERN
        .captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// First department code that appears in the (lower-cased) query.
pub fn extract_department(query: &str) -> Option<&'static str> {
    first_label_in(DEPARTMENTS, query)
}

/// First document type label that appears in the (lower-cased) query.
pub fn extract_document_type(query: &str) -> Option<&'static str> {
    first_label_in(DOCUMENT_TYPES, query)
}

/// Ordered linear scan. Returns the label as declared, not as found.
fn first_label_in(labels: &[&'static str], query: &str) -> Option<&'static str> {
    labels
        .iter()
        .copied()
        .find(|label| query.contains(label.to_lowercase().as_str()))
}
