// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through a search.
//!
//! `Document` is owned by whoever stores the corpus; the search core only ever
//! sees it behind a shared reference. Everything else here is built per query
//! and thrown away once the response is serialized.
//!
//! | Type               | Lifetime        | Produced by          |
//! |--------------------|-----------------|----------------------|
//! | `Document`         | corpus snapshot | storage collaborator |
//! | `ExplicitFilters`  | one request     | caller               |
//! | `ExtractedFilters` | one request     | `filters::extract`   |
//! | `AppliedFilters`   | one request     | `filters::apply`     |
//! | `ScoredCandidate`  | one ranking     | `scoring`            |
//! | `SearchResponse`   | one request     | `search`             |

use serde::{Deserialize, Deserializer, Serialize};

/// A stored document record.
///
/// Field names match the JSON written by the upload service, so a corpus file
/// deserializes directly. Provenance fields ride along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub summary: String,
    /// Document type label. Compared against the `document_type` filter.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Extracted body text, bounded by the corpus loader.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Document {
    /// Everything the lexical scorer looks at, in order: summary, body,
    /// filename, category, tags. Empty parts are skipped.
    pub fn searchable_text(&self) -> String {
        let tags = self.tags.join(" ");
        join_nonempty(&[
            self.summary.as_str(),
            self.text.as_str(),
            self.filename.as_str(),
            self.category.as_str(),
            tags.as_str(),
        ])
    }

    /// Haystack for the substring fallback: the searchable text, lower-cased.
    pub fn fallback_text(&self) -> String {
        self.searchable_text().to_lowercase()
    }
}

fn join_nonempty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"tags": null` shows up in older records.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Filters supplied by the caller alongside the query text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitFilters {
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
}

/// What the extractor understood from the query text.
///
/// Department and type are always entries of the constant lists in
/// [`crate::config`], hence `&'static str`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFilters {
    #[serde(rename = "extracted_year")]
    pub year: Option<u32>,
    #[serde(rename = "extracted_department")]
    pub department: Option<&'static str>,
    #[serde(rename = "extracted_type")]
    pub document_type: Option<&'static str>,
}

/// Filters after precedence resolution: extracted value if any, else explicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub year: Option<u32>,
    pub department: Option<String>,
    pub document_type: Option<String>,
}

impl AppliedFilters {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.department.is_none() && self.document_type.is_none()
    }
}

/// A candidate paired with its combined score.
///
/// `position` is the index in the candidate list, which preserves corpus
/// order. It is the tie-breaker that keeps ranking deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub position: usize,
    pub doc: &'a Document,
    pub score: f64,
}

/// Which scorer produced a set of scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// TF-IDF cosine blended with keyword overlap.
    Lexical,
    /// Plain substring containment after the vectorizer gave up.
    Substring,
}

/// The serialized result of a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Document>,
    pub total: usize,
    pub query_understanding: ExtractedFilters,
    pub filters_applied: AppliedFilters,
}
