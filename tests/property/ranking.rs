//! Ranking properties over the full pipeline.

use findly::{search, search_hits, ExplicitFilters, ScoringMethod, SearchConfig};
use proptest::prelude::*;

use crate::strategies::{corpus_strategy, text_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Property: results are capped, sorted, above threshold, and tie-broken
    /// by candidate position.
    #[test]
    fn prop_ranked_output_well_formed(
        corpus in corpus_strategy(),
        query in text_strategy(),
        max_results in 1usize..15,
    ) {
        let config = SearchConfig { max_results, ..SearchConfig::default() };
        let hits = search_hits(&corpus, &query, &ExplicitFilters::default(), &config);

        prop_assert!(hits.hits.len() <= max_results);
        prop_assert!(hits.hits.len() <= hits.candidates);
        let floor = match hits.method {
            Some(ScoringMethod::Lexical) => config.min_score,
            _ => 0.0,
        };
        for hit in &hits.hits {
            prop_assert!(hit.score > floor);
        }
        for pair in hits.hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    /// Property: the same inputs give the same response.
    #[test]
    fn prop_search_idempotent(corpus in corpus_strategy(), query in text_strategy()) {
        let config = SearchConfig::default();
        let first = search(&corpus, &query, &ExplicitFilters::default(), &config);
        let second = search(&corpus, &query, &ExplicitFilters::default(), &config);
        prop_assert_eq!(first.total, first.results.len());
        prop_assert_eq!(first, second);
    }

    /// Property: every result passes the filters the response reports.
    #[test]
    fn prop_results_respect_applied_filters(corpus in corpus_strategy(), query in text_strategy()) {
        let response = search(&corpus, &query, &ExplicitFilters::default(), &SearchConfig::default());
        for doc in &response.results {
            prop_assert!(response.filters_applied.matches(doc));
        }
    }
}
