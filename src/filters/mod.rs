// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query understanding and candidate filtering.
//!
//! Two small steps run before any scoring: pull a year, department, and
//! document type out of the query text, then narrow the corpus to documents
//! that match whatever filters are in force. Both are deterministic scans,
//! not classifiers.

pub mod apply;
pub mod extract;

pub use apply::{apply_filters, resolve_filters};
pub use extract::{extract_department, extract_document_type, extract_filters, extract_year};
