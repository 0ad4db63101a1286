// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-readable output for each subcommand.

use findly::{AvailableFilters, CorpusStats, ScoredCandidate, SearchHits};

use super::display::*;

const NAME_WIDTH: usize = 34;
const TYPE_WIDTH: usize = 16;

pub fn print_search(query: &str, hits: &SearchHits) {
    banner(&format!("findly: \"{}\"", truncate_chars(query, 60)));

    section_top("QUERY UNDERSTANDING");
    let understanding = &hits.understanding;
    let year = understanding.year.map(|y| y.to_string());
    row(&format!(
        "{}   {}   {}",
        field("year", year.as_deref()),
        field("department", understanding.department),
        field("type", understanding.document_type)
    ));

    section_mid("FILTERS APPLIED");
    let applied = &hits.applied;
    let year = applied.year.map(|y| y.to_string());
    row(&format!(
        "{}   {}   {}",
        field("year", year.as_deref()),
        field("department", applied.department.as_deref()),
        field("type", applied.document_type.as_deref())
    ));

    section_mid(&format!(
        "RESULTS ({} of {} candidates)",
        hits.hits.len(),
        hits.candidates
    ));
    row(&method_badge(hits.method));
    print_hits(&hits.hits);
    section_bot();
}

pub fn print_basic(query: &str, hits: &[ScoredCandidate]) {
    banner(&format!("findly basic: \"{}\"", truncate_chars(query, 54)));
    section_top(&format!("RESULTS ({})", hits.len()));
    print_hits(hits);
    section_bot();
}

fn print_hits(hits: &[ScoredCandidate]) {
    if hits.is_empty() {
        row(&themed(GRAY, &[DIM], "no matching documents"));
        return;
    }
    row(&themed(
        GRAY,
        &[BOLD],
        &format!(
            "{:>2}  {:>6}  {}  {}  {:<5} {}",
            "#",
            "score",
            pad_right("filename", NAME_WIDTH),
            pad_right("type", TYPE_WIDTH),
            "dept",
            "year"
        ),
    ));
    for (rank, hit) in hits.iter().enumerate() {
        let doc = hit.doc;
        let category = if doc.category.is_empty() {
            "-"
        } else {
            doc.category.as_str()
        };
        row(&format!(
            "{:>2}  {}  {}  {}  {:<5} {}",
            rank + 1,
            score_value(hit.score),
            pad_right(
                &themed(BRIGHT_CYAN, &[], &truncate_chars(&doc.filename, NAME_WIDTH)),
                NAME_WIDTH
            ),
            pad_right(&truncate_chars(category, TYPE_WIDTH), TYPE_WIDTH),
            doc.department.as_deref().unwrap_or("-"),
            doc.year.map_or_else(|| "-".to_string(), |y| y.to_string()),
        ));
    }
}

pub fn print_stats(stats: &CorpusStats) {
    banner("findly: corpus statistics");
    section_top(&format!("DOCUMENTS ({})", stats.total_documents));
    for (label, counts) in [
        ("BY DEPARTMENT", &stats.documents_by_department),
        ("BY TYPE", &stats.documents_by_type),
        ("BY YEAR", &stats.documents_by_year),
    ] {
        section_mid(label);
        if counts.is_empty() {
            row(&themed(GRAY, &[DIM], "none"));
        }
        for (key, count) in counts {
            row(&format!(
                "{} {}",
                pad_right(key, TYPE_WIDTH + 4),
                themed(YELLOW, &[BOLD], &format!("{count:>6}"))
            ));
        }
    }
    section_bot();
}

pub fn print_filters(filters: &AvailableFilters) {
    banner("findly: available filters");
    let years: Vec<String> = filters.years.iter().map(u32::to_string).collect();
    for (i, (label, values)) in [
        ("DEPARTMENTS", filters.departments.join(", ")),
        ("YEARS", years.join(", ")),
        ("DOCUMENT TYPES", filters.document_types.join(", ")),
    ]
    .iter()
    .enumerate()
    {
        if i == 0 {
            section_top(label);
        } else {
            section_mid(label);
        }
        if values.is_empty() {
            row(&themed(GRAY, &[DIM], "none"));
        } else {
            row(&truncate_chars(values, BOX_WIDTH - 2));
        }
    }
    section_bot();
}
