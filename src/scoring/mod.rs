// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers.
//!
//! The normal path is lexical: TF-IDF cosine between the query and each
//! candidate's searchable text, blended with keyword overlap. When the
//! vectorizer cannot build a vocabulary (every fitted text is stop words or
//! single characters) scoring drops to binary substring containment.
//!
//! | Stage     | Module       |
//! |-----------|--------------|
//! | analysis  | `tokenize`   |
//! | cosine    | `tfidf`      |
//! | overlap   | `keyword`    |
//! | blend     | `core`       |
//! | fallback  | `fallback`   |
//! | ordering  | `ranking`    |

mod core;
pub mod fallback;
pub mod keyword;
pub mod ranking;
pub mod tfidf;
pub mod tokenize;

pub use core::*;

use crate::config::SearchConfig;
use crate::types::{Document, ScoringMethod};

use self::fallback::substring_scores;
use self::keyword::{keyword_overlap, query_terms};
use self::tfidf::{query_similarities, VectorizerOptions};

/// Scores for a candidate list, aligned by position.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScores {
    pub method: ScoringMethod,
    pub scores: Vec<f64>,
}

/// Score every candidate against `query`.
///
/// Never fails. A vectorizer error is logged and answered with the substring
/// fallback.
pub fn score_candidates(
    query: &str,
    candidates: &[&Document],
    config: &SearchConfig,
) -> CandidateScores {
    let texts: Vec<String> = candidates.iter().map(|doc| doc.searchable_text()).collect();
    let options = VectorizerOptions {
        stop_words: true,
        max_features: Some(config.max_features),
    };

    match query_similarities(query, &texts, options) {
        Ok(similarities) => {
            let terms = query_terms(query);
            let scores = similarities
                .iter()
                .zip(&texts)
                .map(|(&sim, text)| combine(sim, keyword_overlap(&terms, text), config))
                .collect();
            CandidateScores {
                method: ScoringMethod::Lexical,
                scores,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, query, "lexical scoring failed, using substring fallback");
            let haystacks: Vec<String> =
                candidates.iter().map(|doc| doc.fallback_text()).collect();
            CandidateScores {
                method: ScoringMethod::Substring,
                scores: substring_scores(query, &haystacks),
            }
        }
    }
}
