//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a bare document with just a filename and body text.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(filename: &str, text: &str) -> Document {
    Document {
        filename: filename.to_string(),
        summary: String::new(),
        category: String::new(),
        department: None,
        year: None,
        tags: vec![],
        text: text.to_string(),
        uploader: None,
        role: None,
        branch: None,
        semester: None,
        timestamp: None,
    }
}

/// Create a document with the metadata the filters look at.
pub fn make_doc_with_meta(
    filename: &str,
    category: &str,
    department: Option<&str>,
    year: Option<u32>,
) -> Document {
    Document {
        category: category.to_string(),
        department: department.map(str::to_string),
        year,
        ..make_doc(filename, "")
    }
}

/// Create a fully populated document.
pub fn make_full_doc(
    filename: &str,
    summary: &str,
    category: &str,
    department: Option<&str>,
    year: Option<u32>,
    tags: &[&str],
    text: &str,
) -> Document {
    Document {
        summary: summary.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        text: text.to_string(),
        ..make_doc_with_meta(filename, category, department, year)
    }
}
