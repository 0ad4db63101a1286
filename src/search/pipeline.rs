// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The natural-language search pipeline.
//!
//! ```text
//! query ─► extract_filters ─► resolve_filters ─► apply_filters
//!                                                      │
//!                                                      ▼
//! SearchResponse ◄─ rank ◄─ score_candidates ◄─── candidates
//! ```
//!
//! The corpus is a read-only snapshot. Nothing here fails: an empty corpus or
//! an empty candidate set returns no hits, and a vectorizer failure is handled
//! inside the scorer.

use crate::config::SearchConfig;
use crate::filters::{apply_filters, extract_filters, resolve_filters};
use crate::scoring::ranking::rank;
use crate::scoring::score_candidates;
use crate::types::{
    AppliedFilters, Document, ExplicitFilters, ExtractedFilters, ScoredCandidate, ScoringMethod,
    SearchResponse,
};

/// Ranked hits plus everything the pipeline learned along the way.
#[derive(Debug, Clone)]
pub struct SearchHits<'a> {
    pub hits: Vec<ScoredCandidate<'a>>,
    /// `None` when scoring never ran (no candidates).
    pub method: Option<ScoringMethod>,
    pub understanding: ExtractedFilters,
    pub applied: AppliedFilters,
    /// Documents that survived filtering.
    pub candidates: usize,
}

impl SearchHits<'_> {
    /// Drop the scores and clone the documents into a response.
    pub fn into_response(self) -> SearchResponse {
        let results: Vec<Document> = self.hits.into_iter().map(|hit| hit.doc.clone()).collect();
        SearchResponse {
            total: results.len(),
            results,
            query_understanding: self.understanding,
            filters_applied: self.applied,
        }
    }
}

/// Run the pipeline and keep the scores.
pub fn search_hits<'a>(
    corpus: &'a [Document],
    query: &str,
    explicit: &ExplicitFilters,
    config: &SearchConfig,
) -> SearchHits<'a> {
    let understanding = extract_filters(query);
    let applied = resolve_filters(&understanding, explicit);
    tracing::debug!(?understanding, ?applied, "resolved filters");

    if corpus.is_empty() {
        return SearchHits {
            hits: Vec::new(),
            method: None,
            understanding,
            applied,
            candidates: 0,
        };
    }

    let candidates = apply_filters(corpus, &applied);
    tracing::debug!(
        corpus = corpus.len(),
        candidates = candidates.len(),
        "filtered corpus"
    );
    if candidates.is_empty() {
        return SearchHits {
            hits: Vec::new(),
            method: None,
            understanding,
            applied,
            candidates: 0,
        };
    }

    let query = query.to_lowercase();
    let scores = score_candidates(&query, &candidates, config);
    let hits = rank(&candidates, &scores, config);
    tracing::debug!(method = ?scores.method, hits = hits.len(), "ranked candidates");

    SearchHits {
        hits,
        method: Some(scores.method),
        understanding,
        applied,
        candidates: candidates.len(),
    }
}

/// Run the pipeline and build the response.
pub fn search(
    corpus: &[Document],
    query: &str,
    explicit: &ExplicitFilters,
    config: &SearchConfig,
) -> SearchResponse {
    search_hits(corpus, query, explicit, config).into_response()
}
