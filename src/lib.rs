// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query understanding and ranking over an uploaded-document corpus.
//!
//! A query like "Show AI project reports from 2023" carries filters as well as
//! search terms. Findly pulls those filters out, narrows the corpus with them,
//! then ranks what remains by TF-IDF similarity blended with keyword overlap.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   filters::  │──▶│   filters::  │──▶│   scoring    │──▶│   scoring::  │
//! │   extract    │   │   apply      │   │ (tfidf, kw,  │   │   ranking    │
//! │ (year, dept, │   │ (precedence, │   │  fallback)   │   │ (threshold,  │
//! │  doc type)   │   │  conjunction)│   │              │   │  order, cap) │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!         ▲                                                        │
//!         │                  search::search                        ▼
//!       query ─────────────────────────────────────────────▶ SearchResponse
//! ```
//!
//! | Module     | Responsibility                                   |
//! |------------|--------------------------------------------------|
//! | `types`    | Document and request/response records            |
//! | `config`   | Constant vocabularies and tunable weights         |
//! | `filters`  | Extraction from query text, candidate narrowing  |
//! | `scoring`  | TF-IDF, keyword overlap, fallback, ranking       |
//! | `search`   | The pipelines callers use                        |
//! | `corpus`   | Loading a snapshot from JSON                     |
//! | `facets`   | Corpus statistics and available filter values    |
//!
//! # Usage
//!
//! ```
//! use findly::{search, ExplicitFilters, SearchConfig};
//!
//! let corpus = findly::parse_corpus(
//!     r#"[{"filename": "dbms.pdf", "category": "Notes", "department": "CSE",
//!          "year": 2023, "text": "database normalization"}]"#,
//! )
//! .unwrap();
//!
//! let response = search(
//!     &corpus,
//!     "CSE notes on normalization",
//!     &ExplicitFilters::default(),
//!     &SearchConfig::default(),
//! );
//! assert_eq!(response.total, 1);
//! assert_eq!(response.query_understanding.department, Some("CSE"));
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod facets;
pub mod filters;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;

pub use config::{SearchConfig, DEPARTMENTS, DOCUMENT_TYPES, MAX_TEXT_CHARS};
pub use corpus::{load_corpus, parse_corpus};
pub use error::{Error, Result};
pub use facets::{available_filters, corpus_stats, AvailableFilters, CorpusStats};
pub use filters::{apply_filters, extract_filters, resolve_filters};
pub use scoring::{score_candidates, CandidateScores};
pub use search::{basic_search, search, search_hits, SearchHits};
pub use types::*;
