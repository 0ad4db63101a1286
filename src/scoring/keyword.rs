// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword overlap: the share of distinct query words that a document contains.
//!
//! Tokens here are whitespace-split and lower-cased, nothing more. Punctuation
//! stays attached, so `notes,` and `notes` are different words. This is
//! cruder than the vectorizer's analysis; the two signals are blended, not
//! reconciled.

use std::collections::HashSet;

/// Distinct lower-cased whitespace tokens of `query`.
pub fn query_terms(query: &str) -> HashSet<String> {
    split_terms(query)
}

/// `|Q ∩ D| / |Q|`, or 0.0 when the query has no terms.
pub fn keyword_overlap(query_terms: &HashSet<String>, doc_text: &str) -> f64 {
    if query_terms.is_empty() {
        return 0.0;
    }
    let doc_terms = split_terms(doc_text);
    let shared = query_terms.intersection(&doc_terms).count();
    shared as f64 / query_terms.len() as f64
}

fn split_terms(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
