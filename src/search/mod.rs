// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search entry points: where the pieces meet.
//!
//! `search` is the natural-language path: extract filters, narrow the corpus,
//! score, rank. `basic_search` is the plain text path with no filters and no
//! keyword blend.

pub mod basic;
mod pipeline;

pub use basic::basic_search;
pub use pipeline::*;
