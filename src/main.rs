// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use findly::{
    available_filters, basic_search, corpus_stats, load_corpus, search_hits, Document,
    ExplicitFilters, SearchConfig,
};

mod cli;
use cli::{report, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Search {
            query,
            corpus,
            year,
            department,
            document_type,
            limit,
            config,
            json,
        } => {
            let mut config = match config {
                Some(path) => SearchConfig::from_path(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => SearchConfig::default(),
            };
            if let Some(limit) = limit {
                config.max_results = limit;
            }
            config.validate().context("invalid --limit")?;

            let docs = read_corpus(&corpus)?;
            let explicit = ExplicitFilters {
                year,
                department,
                document_type,
            };
            let hits = search_hits(&docs, &query, &explicit, &config);
            if json {
                print_json(&hits.into_response())?;
            } else {
                report::print_search(&query, &hits);
            }
        }
        Commands::Basic {
            query,
            corpus,
            limit,
            json,
        } => {
            let limit = limit.unwrap_or(SearchConfig::default().basic_limit);
            let docs = read_corpus(&corpus)?;
            let hits = basic_search(&docs, &query, limit);
            if json {
                let results: Vec<&Document> = hits.iter().map(|hit| hit.doc).collect();
                print_json(&results)?;
            } else {
                report::print_basic(&query, &hits);
            }
        }
        Commands::Stats { corpus, json } => {
            let stats = corpus_stats(&read_corpus(&corpus)?);
            if json {
                print_json(&stats)?;
            } else {
                report::print_stats(&stats);
            }
        }
        Commands::Filters { corpus, json } => {
            let filters = available_filters(&read_corpus(&corpus)?);
            if json {
                print_json(&filters)?;
            } else {
                report::print_filters(&filters);
            }
        }
    }
    Ok(())
}

fn read_corpus(path: &Path) -> anyhow::Result<Vec<Document>> {
    load_corpus(path).with_context(|| format!("failed to load corpus {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
