// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning knobs and the fixed vocabularies the extractor scans.
//!
//! The blend weights and the minimum score came from the upload service as
//! bare literals. They stay at those values by default and are exposed here so
//! deployments can tune them without touching the scorer.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// FIXED VOCABULARIES
// =============================================================================
// Scan order matters: the first entry found as a substring of the query wins.

/// Department codes, in scan order.
pub const DEPARTMENTS: &[&str] = &[
    "CSE", "ECE", "EEE", "MECH", "CIVIL", "IT", "ADMIN", "GENERAL",
];

/// Document type labels, in scan order. Matched against `Document::category`.
pub const DOCUMENT_TYPES: &[&str] = &[
    "Project Report",
    "Research Paper",
    "Notes",
    "Assignment",
    "Circular",
    "Letter",
    "Meeting Minutes",
    "Thesis",
    "Lab Report",
    "Other",
];

/// Upper bound on stored body text, in characters.
pub const MAX_TEXT_CHARS: usize = 10_000;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Weight of TF-IDF cosine similarity in the combined score.
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.6;

/// Weight of keyword overlap in the combined score.
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.4;

/// Lexical hits must score strictly above this.
pub const DEFAULT_MIN_SCORE: f64 = 0.01;

/// Result cap for the natural-language search.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Vocabulary cap for the vectorizer.
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Result cap for the plain text search.
pub const DEFAULT_BASIC_LIMIT: usize = 5;

/// Runtime configuration for a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub similarity_weight: f64,
    pub keyword_weight: f64,
    pub min_score: f64,
    pub max_results: usize,
    pub max_features: usize,
    pub basic_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            similarity_weight: DEFAULT_SIMILARITY_WEIGHT,
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
            min_score: DEFAULT_MIN_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
            max_features: DEFAULT_MAX_FEATURES,
            basic_limit: DEFAULT_BASIC_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would push combined scores outside [0, 1] or
    /// return nothing by construction.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("similarity_weight", self.similarity_weight),
            ("keyword_weight", self.keyword_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        let sum = self.similarity_weight + self.keyword_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(Error::Config(format!(
                "similarity_weight + keyword_weight must equal 1.0, got {}",
                sum
            )));
        }
        if !(0.0..1.0).contains(&self.min_score) {
            return Err(Error::Config(format!(
                "min_score must be in [0, 1), got {}",
                self.min_score
            )));
        }
        if self.max_results == 0 {
            return Err(Error::Config("max_results must be at least 1".into()));
        }
        if self.max_features == 0 {
            return Err(Error::Config("max_features must be at least 1".into()));
        }
        if self.basic_limit == 0 {
            return Err(Error::Config("basic_limit must be at least 1".into()));
        }
        Ok(())
    }
}
