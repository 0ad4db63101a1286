// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Blending the two lexical signals.
//!
//! ```text
//! score = similarity_weight * cosine + keyword_weight * overlap
//! ```
//!
//! With the default weights (0.6 / 0.4) and both inputs in [0, 1] the result
//! stays in [0, 1]. [`SearchConfig::validate`] rejects weights that do not sum
//! to one, so the bound holds for any accepted configuration.

use crate::config::SearchConfig;

/// Combined score for one candidate.
#[inline]
pub fn combine(similarity: f64, overlap: f64, config: &SearchConfig) -> f64 {
    config.similarity_weight * similarity + config.keyword_weight * overlap
}
