// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring fallback for when the vectorizer ends up with no vocabulary.
//!
//! A candidate scores 1.0 if any whitespace token of the lower-cased query is
//! a substring of its haystack, else 0.0. Haystacks are expected lower-cased
//! already (see [`crate::types::Document::fallback_text`], the whole
//! searchable text).

/// One binary score per haystack, in input order.
pub fn substring_scores<S: AsRef<str>>(query: &str, haystacks: &[S]) -> Vec<f64> {
    let query = query.to_lowercase();
    let tokens: Vec<&str> = query.split_whitespace().collect();

    haystacks
        .iter()
        .map(|haystack| {
            let haystack = haystack.as_ref();
            if tokens.iter().any(|token| haystack.contains(token)) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}
