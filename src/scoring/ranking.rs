// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: threshold, order, cap.
//!
//! Order is score descending. Equal scores keep candidate order, which is
//! corpus order, so two runs over the same corpus always agree.
//!
//! The threshold depends on how scores were produced. Lexical scores must be
//! strictly above `min_score`; substring scores are binary, so anything above
//! zero is a match.

use std::cmp::Ordering;

use crate::config::SearchConfig;
use crate::types::{Document, ScoredCandidate, ScoringMethod};

use super::CandidateScores;

/// Compare two scored candidates for ranking.
///
/// Sort order:
/// 1. **Score** - higher wins
/// 2. **Position** - earlier candidate wins
pub fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Score floor a candidate must exceed to be returned.
pub fn threshold(method: ScoringMethod, config: &SearchConfig) -> f64 {
    match method {
        ScoringMethod::Lexical => config.min_score,
        ScoringMethod::Substring => 0.0,
    }
}

/// Pair candidates with their scores, drop those at or below the threshold,
/// sort, and keep at most `config.max_results`.
pub fn rank<'a>(
    candidates: &[&'a Document],
    scores: &CandidateScores,
    config: &SearchConfig,
) -> Vec<ScoredCandidate<'a>> {
    let floor = threshold(scores.method, config);
    let mut ranked: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .zip(&scores.scores)
        .enumerate()
        .filter(|(_, (_, score))| **score > floor)
        .map(|(position, (&doc, &score))| ScoredCandidate {
            position,
            doc,
            score,
        })
        .collect();

    ranked.sort_by(compare_scored);
    ranked.truncate(config.max_results);
    ranked
}
