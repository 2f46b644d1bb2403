//! Result filter — case-insensitive substring search over the subject catalog.
//!
//! This is a pure, total function over its inputs: no errors, no I/O, no
//! reordering. Case folding uses [`str::to_lowercase`] (Unicode simple case
//! folding — a no-op for Hangul, which has no case). Matching is literal
//! substring containment; there is no normalization, ranking, or fuzziness.

use crate::Subject;

/// Return the subjects whose title or description contains `query` as a
/// case-insensitive substring, preserving catalog order.
///
/// An empty query is a substring of everything, so it returns the full
/// catalog — deliberately not special-cased into "no results".
pub fn filter_subjects<'a>(query: &str, subjects: &'a [Subject]) -> Vec<&'a Subject> {
    let needle = query.to_lowercase();
    subjects
        .iter()
        .filter(|s| {
            s.title.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Locate the first case-insensitive occurrence of `query` in `haystack`,
/// returning the byte range within the *original* string.
///
/// Used by the results view to highlight the matched span. The scan compares
/// lowercased characters position by position so byte offsets stay valid even
/// when case folding changes a character's encoded length.
pub fn find_match(haystack: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }
    let needle: Vec<char> = query.to_lowercase().chars().collect();

    let starts: Vec<usize> = haystack.char_indices().map(|(i, _)| i).collect();
    for &start in &starts {
        let mut pos = start;
        let mut matched = 0;
        for c in haystack[start..].chars() {
            let mut ok = true;
            for lc in c.to_lowercase() {
                if matched >= needle.len() || needle[matched] != lc {
                    ok = false;
                    break;
                }
                matched += 1;
            }
            if !ok {
                break;
            }
            pos += c.len_utf8();
            if matched == needle.len() {
                return Some((start, pos));
            }
        }
    }
    None
}
