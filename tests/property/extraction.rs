//! Filter extraction properties.

use findly::filters::{extract_department, extract_document_type, extract_year};
use findly::{extract_filters, DEPARTMENTS, DOCUMENT_TYPES};
use proptest::prelude::*;

use crate::strategies::word_strategy;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a standalone 20xx token is always found.
    #[test]
    fn prop_year_found(before in word_strategy(), year in 2000u32..2100, after in word_strategy()) {
        let query = format!("{before} {year} {after}");
        prop_assert_eq!(extract_year(&query), Some(year));
    }

    /// Property: without digits there is no year.
    #[test]
    fn prop_no_digits_no_year(words in prop::collection::vec(word_strategy(), 0..8)) {
        prop_assert_eq!(extract_year(&words.join(" ")), None);
    }

    /// Property: the extracted department is the first list entry found in
    /// the lower-cased query.
    #[test]
    fn prop_department_is_first_listed_match(
        words in prop::collection::vec(word_strategy(), 0..6),
        dept in prop::sample::select(DEPARTMENTS),
    ) {
        let query = format!("{} {}", words.join(" "), dept.to_lowercase());
        let expected = DEPARTMENTS
            .iter()
            .copied()
            .find(|d| query.contains(d.to_lowercase().as_str()));
        prop_assert!(expected.is_some());
        prop_assert_eq!(extract_department(&query), expected);
    }

    /// Property: same rule for document types.
    #[test]
    fn prop_type_is_first_listed_match(
        words in prop::collection::vec(word_strategy(), 0..6),
        doc_type in prop::sample::select(DOCUMENT_TYPES),
    ) {
        let query = format!("{} {}", doc_type.to_lowercase(), words.join(" "));
        let expected = DOCUMENT_TYPES
            .iter()
            .copied()
            .find(|t| query.contains(t.to_lowercase().as_str()));
        prop_assert!(expected.is_some());
        prop_assert_eq!(extract_document_type(&query), expected);
    }

    /// Property: extraction ignores case.
    #[test]
    fn prop_extraction_case_insensitive(
        words in prop::collection::vec(word_strategy(), 0..6),
        dept in prop::sample::select(DEPARTMENTS),
        year in 2000u32..2100,
    ) {
        let query = format!("{} {} {}", words.join(" "), dept, year);
        prop_assert_eq!(extract_filters(&query), extract_filters(&query.to_uppercase()));
    }
}
