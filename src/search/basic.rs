// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain text search: cosine over body text only.
//!
//! No filters, no stop-word removal, no vocabulary cap, no keyword blend and
//! no threshold. Zero-similarity documents can still appear when fewer than
//! `limit` documents share a term with the query.

use crate::scoring::ranking::compare_scored;
use crate::scoring::tfidf::{query_similarities, VectorizerOptions};
use crate::types::{Document, ScoredCandidate};

/// Top `limit` documents by TF-IDF similarity of `text` to `query`.
pub fn basic_search<'a>(
    corpus: &'a [Document],
    query: &str,
    limit: usize,
) -> Vec<ScoredCandidate<'a>> {
    if corpus.is_empty() {
        return Vec::new();
    }

    let texts: Vec<&str> = corpus.iter().map(|doc| doc.text.as_str()).collect();
    let similarities = match query_similarities(query, &texts, VectorizerOptions::default()) {
        Ok(similarities) => similarities,
        Err(e) => {
            tracing::warn!(error = %e, query, "basic search found no terms");
            return Vec::new();
        }
    };

    let mut hits: Vec<ScoredCandidate<'a>> = corpus
        .iter()
        .zip(similarities)
        .enumerate()
        .map(|(position, (doc, score))| ScoredCandidate {
            position,
            doc,
            score,
        })
        .collect();
    hits.sort_by(compare_scored);
    hits.truncate(limit);
    hits
}
