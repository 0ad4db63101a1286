// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vectors and cosine similarity.
//!
//! The vectorizer is fitted per request over the candidate texts plus the
//! query, so IDF reflects the filtered set rather than the whole corpus.
//!
//! # Weighting
//!
//! ```text
//! tf(t, d)  = raw count of t in d
//! idf(t)    = ln((1 + N) / (1 + df(t))) + 1
//! w(t, d)   = tf(t, d) * idf(t), then each row is L2-normalized
//! ```
//!
//! Rows are unit length, so cosine similarity is a plain dot product. All
//! weights are non-negative, which keeps similarities in [0, 1].
//!
//! # Vocabulary cap
//!
//! With `max_features = Some(k)` only the k terms with the highest total count
//! across all fitted texts survive. Equal counts are broken alphabetically so
//! the cap never depends on hash order.

use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use thiserror::Error;

use super::tokenize::analyze;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorizeError {
    /// Every text tokenized to nothing (e.g. only stop words or single letters).
    #[error("empty vocabulary; the texts contain only stop words or no terms at all")]
    EmptyVocabulary,
}

/// How texts are analyzed and how large the vocabulary may grow.
/// The default keeps stop words and places no cap on the vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorizerOptions {
    pub stop_words: bool,
    pub max_features: Option<usize>,
}

/// Sparse row: `(term index, weight)` pairs sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_unsorted(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|&(idx, _)| idx);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&(_, w)| w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for entry in &mut self.entries {
                entry.1 /= norm;
            }
        }
        self
    }

    /// Merge-join over the two sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine similarity clamped to [0, 1]. A zero vector is similar to nothing.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}

/// A fitted vocabulary and one L2-normalized row per input text.
#[derive(Debug, Clone)]
pub struct TermMatrix {
    /// Terms in alphabetical order; a term's position is its column index.
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    pub rows: Vec<SparseVector>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfVectorizer {
    options: VectorizerOptions,
}

impl TfidfVectorizer {
    pub fn new(options: VectorizerOptions) -> Self {
        Self { options }
    }

    /// Fit the vocabulary on `texts` and return their TF-IDF rows, in input order.
    pub fn fit_transform<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
    ) -> Result<TermMatrix, VectorizeError> {
        let counts = self.count_terms(texts);

        // term -> (document frequency, total count)
        let mut stats: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for doc in &counts {
            for (term, &n) in doc {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += n;
            }
        }
        if stats.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let mut kept: Vec<(&str, (usize, usize))> = stats.into_iter().collect();
        if let Some(limit) = self.options.max_features {
            if kept.len() > limit {
                kept.sort_by(|a, b| b.1 .1.cmp(&a.1 .1).then_with(|| a.0.cmp(b.0)));
                kept.truncate(limit);
                kept.sort_by(|a, b| a.0.cmp(b.0));
            }
        }

        let n_docs = texts.len() as f64;
        let column: HashMap<&str, usize> =
            kept.iter().enumerate().map(|(i, (t, _))| (*t, i)).collect();
        let idf: Vec<f64> = kept
            .iter()
            .map(|(_, (df, _))| smoothed_idf(n_docs, *df as f64))
            .collect();

        let rows = counts
            .iter()
            .map(|doc| {
                let entries = doc
                    .iter()
                    .filter_map(|(term, &n)| {
                        column
                            .get(term.as_str())
                            .map(|&col| (col, n as f64 * idf[col]))
                    })
                    .collect();
                SparseVector::from_unsorted(entries).normalized()
            })
            .collect();

        let vocabulary = kept.iter().map(|(t, _)| (*t).to_string()).collect();
        Ok(TermMatrix {
            vocabulary,
            idf,
            rows,
        })
    }

    fn count_terms<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<HashMap<String, usize>> {
        let stop_words = self.options.stop_words;
        let count = |text: &S| {
            let mut counts: HashMap<String, usize> = HashMap::new();
            for term in analyze(text.as_ref(), stop_words) {
                *counts.entry(term).or_insert(0) += 1;
            }
            counts
        };

        #[cfg(feature = "parallel")]
        {
            texts.par_iter().map(count).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(count).collect()
        }
    }
}

fn smoothed_idf(n_docs: f64, df: f64) -> f64 {
    ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
}

/// Similarity of `query` to each of `texts`, fitted over `texts` plus the query.
pub fn query_similarities<S: AsRef<str> + Sync>(
    query: &str,
    texts: &[S],
    options: VectorizerOptions,
) -> Result<Vec<f64>, VectorizeError> {
    let mut fitted: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
    fitted.push(query);

    let matrix = TfidfVectorizer::new(options).fit_transform(&fitted)?;
    let (query_row, doc_rows) = matrix
        .rows
        .split_last()
        .ok_or(VectorizeError::EmptyVocabulary)?;
    Ok(doc_rows
        .iter()
        .map(|row| cosine_similarity(query_row, row))
        .collect())
}
