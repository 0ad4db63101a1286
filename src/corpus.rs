// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a corpus snapshot from the JSON the upload service writes.
//!
//! The file is a JSON array of document records. Body text longer than
//! [`MAX_TEXT_CHARS`] characters is cut on a character boundary.

use std::fs;
use std::path::Path;

use crate::config::MAX_TEXT_CHARS;
use crate::error::Result;
use crate::types::Document;

/// Read and parse a corpus file.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let content = fs::read_to_string(path)?;
    let corpus = parse_corpus(&content)?;
    tracing::info!(path = %path.display(), documents = corpus.len(), "loaded corpus");
    Ok(corpus)
}

/// Parse a corpus from a JSON string.
pub fn parse_corpus(json: &str) -> Result<Vec<Document>> {
    let mut corpus: Vec<Document> = serde_json::from_str(json)?;
    for doc in &mut corpus {
        if truncate_text(&mut doc.text, MAX_TEXT_CHARS) {
            tracing::warn!(
                filename = %doc.filename,
                max_chars = MAX_TEXT_CHARS,
                "document text truncated"
            );
        }
    }
    Ok(corpus)
}

/// Cut `text` to at most `max_chars` characters. Returns whether it was cut.
fn truncate_text(text: &mut String, max_chars: usize) -> bool {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            text.truncate(byte_idx);
            true
        }
        None => false,
    }
}
