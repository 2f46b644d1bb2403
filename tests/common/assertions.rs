//! Domain-specific assertion macros for munpul harnesses.
//!
//! These add context-rich failure messages that make it clear which filter
//! invariant was violated and for which query.

/// Assert that a filter result has exactly these titles, in this order.
///
/// ```rust
/// assert_titles!(filter_subjects("학습", &catalog), ["한국사", "수학", "코딩"]);
/// ```
#[macro_export]
macro_rules! assert_titles {
    ($results:expr, [$($title:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $results.iter().map(|s| s.title.as_str()).collect();
        let expected: Vec<&str> = vec![$($title),*];
        if actual != expected {
            panic!(
                "assert_titles! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

/// Assert that every result is a member of `catalog` and that results appear
/// in catalog order (the filter must never reorder or fabricate subjects).
#[macro_export]
macro_rules! assert_ordered_subset {
    ($results:expr, $catalog:expr) => {{
        // Subsequence check: each result must be found in the catalog at or
        // after the position of the previous one.
        let mut next_start = 0usize;
        for result in $results.iter() {
            match $catalog[next_start..].iter().position(|s| s == *result) {
                Some(offset) => next_start += offset + 1,
                None => panic!(
                    "assert_ordered_subset! failed: {:?} missing from catalog[{}..] \
                     (out of order, duplicated, or fabricated)",
                    result.title, next_start
                ),
            }
        }
    }};
}
