// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the findly command-line interface.
//!
//! Four subcommands over a JSON corpus file: `search` runs the
//! natural-language pipeline, `basic` the plain text search, `stats` and
//! `filters` summarize the corpus. Each takes `--json` for machine output.

pub mod display;
pub mod report;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "findly",
    about = "Natural-language search over an uploaded-document corpus",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract filters from a query, narrow the corpus, and rank what remains
    Search {
        /// Natural-language query, e.g. "CSE project reports from 2023"
        query: String,

        /// Corpus file (JSON array of document records)
        #[arg(short, long)]
        corpus: PathBuf,

        /// Year filter, used when the query names none
        #[arg(long)]
        year: Option<u32>,

        /// Department filter, used when the query names none
        #[arg(long)]
        department: Option<String>,

        /// Document type filter, used when the query names none
        #[arg(long = "type")]
        document_type: Option<String>,

        /// Maximum number of results (overrides the config file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSON file with scoring weights and limits
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank documents by similarity of their body text alone
    Basic {
        /// Search text
        query: String,

        /// Corpus file (JSON array of document records)
        #[arg(short, long)]
        corpus: PathBuf,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count documents per department, type, and year
    Stats {
        /// Corpus file (JSON array of document records)
        #[arg(short, long)]
        corpus: PathBuf,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the filter values present in the corpus
    Filters {
        /// Corpus file (JSON array of document records)
        #[arg(short, long)]
        corpus: PathBuf,

        /// Print the values as JSON
        #[arg(long)]
        json: bool,
    },
}
