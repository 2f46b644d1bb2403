#![allow(unused)]
//! Subject filter integration harness.
//!
//! # What this covers
//!
//! The filter is the core of the search path, so this harness pins its
//! contract from the outside:
//!
//! - **Empty-query identity**: a blank query returns the full catalog,
//!   untouched and in order.
//! - **Case-insensitive substring**: a match in either the title or the
//!   description is enough; ASCII case differences never matter.
//! - **Order stability**: results always appear in catalog order, never
//!   ranked or reordered.
//! - **Reference scenarios**: the 코딩 / 학습 / zzz queries against the
//!   builtin catalog, with exact expected result sets.
//! - **Properties** (proptest): results are an ordered subset of the catalog;
//!   extending a query can only shrink the result set.
//!
//! # What this does NOT cover
//!
//! - Match-span highlighting in the results view (widget-level tests)
//! - The URI round trip feeding the filter (see compose_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;

use munpul_core::{catalog, search::filter_subjects, Subject};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Empty-query identity
// ---------------------------------------------------------------------------

#[test]
fn empty_query_returns_full_catalog_in_order() {
    let subjects = catalog::builtin();
    let results = filter_subjects("", &subjects);
    assert_eq!(results.len(), subjects.len());
    assert_titles!(results, ["한국사", "국어", "수학", "영어", "코딩"]);
}

#[test]
fn whitespace_query_is_not_empty() {
    // A pure-whitespace query is a real query: it matches only subjects whose
    // text contains that whitespace.
    let subjects = catalog_of(&[("A B", "x"), ("AB", "y")]);
    let results = filter_subjects(" ", &subjects);
    assert_titles!(results, ["A B"]);
}

// ---------------------------------------------------------------------------
// Reference scenarios against the builtin catalog
// ---------------------------------------------------------------------------

#[test]
fn exact_title_returns_single_record() {
    let subjects = catalog::builtin();
    let results = filter_subjects("코딩", &subjects);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "코딩");
    assert_eq!(results[0].description, "프론트엔드부터 백엔드까지 실무형 코딩 학습");
}

#[test]
fn description_token_matches_multiple_subjects() {
    let subjects = catalog::builtin();
    let results = filter_subjects("학습", &subjects);
    assert_titles!(results, ["한국사", "수학", "코딩"]);
}

#[test]
fn no_match_returns_empty_not_error() {
    let subjects = catalog::builtin();
    assert!(filter_subjects("zzz", &subjects).is_empty());
}

#[rstest]
#[case("한국사", &["한국사"])]
#[case("국어", &["국어"])]
#[case("독해", &["국어", "영어"])]
#[case("문법", &["국어", "영어"])]
#[case("실력", &["국어", "영어"])]
fn builtin_catalog_scenarios(#[case] query: &str, #[case] expected: &[&str]) {
    let subjects = catalog::builtin();
    let actual: Vec<&str> = filter_subjects(query, &subjects)
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(actual, expected);
}

// ---------------------------------------------------------------------------
// Case folding
// ---------------------------------------------------------------------------

#[rstest]
#[case("english", &["English Conversation", "English Grammar"])]
#[case("ENGLISH", &["English Conversation", "English Grammar"])]
#[case("gRaMmAr", &["English Grammar"])]
#[case("OWNERSHIP", &["Rust"])]
fn ascii_case_is_ignored(#[case] query: &str, #[case] expected: &[&str]) {
    let subjects = catalog_of(CORPUS_ASCII);
    let actual: Vec<&str> = filter_subjects(query, &subjects)
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(actual, expected);
}

// ---------------------------------------------------------------------------
// Order stability at scale
// ---------------------------------------------------------------------------

#[test]
fn scaled_catalog_preserves_order() {
    let subjects = corpus_scaled(300);
    let results = filter_subjects("학습", &subjects);
    // Every third entry carries the token
    assert_eq!(results.len(), 100);
    assert_ordered_subset!(results, subjects);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Results are always an ordered subset of the catalog: the filter never
    /// fabricates, duplicates, or reorders subjects.
    #[test]
    fn results_are_an_ordered_subset(query in "[a-z가-힣 ]{0,6}") {
        let subjects = catalog::builtin();
        let results = filter_subjects(&query, &subjects);
        prop_assert!(results.len() <= subjects.len());
        assert_ordered_subset!(results, subjects);
    }

    /// Appending a character to the query can only shrink the result set:
    /// any text containing `q + c` also contains `q`.
    #[test]
    fn longer_query_matches_subset(query in "[a-z가-힣]{0,4}", tail in "[a-z가-힣]") {
        let subjects = catalog::builtin();
        let broad = filter_subjects(&query, &subjects);
        let extended = format!("{query}{tail}");
        let narrow = filter_subjects(&extended, &subjects);
        for subject in &narrow {
            prop_assert!(broad.contains(subject), "{:?} matched {:?} but not its prefix {:?}",
                subject.title, extended, query);
        }
    }

    /// Filtering the filtered set again with the same query is a no-op.
    #[test]
    fn filter_is_idempotent(query in "[a-z가-힣]{0,5}") {
        let subjects = catalog::builtin();
        let once: Vec<Subject> = filter_subjects(&query, &subjects).into_iter().cloned().collect();
        let twice = filter_subjects(&query, &once);
        prop_assert_eq!(twice.len(), once.len());
    }
}
