//! Query composition and the search route.
//!
//! [`compose`] builds the single search string from the typed keyword and the
//! uploaded-file text. [`Route`] carries that string through a navigation
//! transition as a percent-encoded URI parameter, exactly the way the results
//! view reads it back out.

use std::borrow::Cow;

/// Path component of the search route.
pub const SEARCH_PATH: &str = "/search";

/// Combine the typed keyword and the uploaded-file text into one query.
///
/// The two parts are joined with a single space and trimmed. Returns `None`
/// when the combination is empty or whitespace-only — the caller must treat
/// that as a silent no-op, not an error.
pub fn compose(base: &str, uploaded: &str) -> Option<String> {
    let combined = format!("{base} {uploaded}");
    let combined = combined.trim();
    if combined.is_empty() {
        None
    } else {
        Some(combined.to_string())
    }
}

/// A navigable route within the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The results view, carrying the composed query string.
    Search { query: String },
}

impl Route {
    pub fn search(query: impl Into<String>) -> Self {
        Route::Search {
            query: query.into(),
        }
    }

    /// Encode this route as a URI, e.g. `/search?query=%ED%95%9C%EA%B5%AD%EC%82%AC`.
    pub fn to_uri(&self) -> String {
        match self {
            Route::Search { query } => {
                format!("{SEARCH_PATH}?query={}", urlencoding::encode(query))
            }
        }
    }

    /// Parse a URI back into a route, decoding the query parameter.
    ///
    /// An absent `query` parameter yields an empty query string — not an
    /// error. A path other than [`SEARCH_PATH`] is `None`. A parameter that
    /// fails percent-decoding is kept as its literal text.
    pub fn parse(uri: &str) -> Option<Route> {
        let (path, params) = match uri.split_once('?') {
            Some((p, rest)) => (p, rest),
            None => (uri, ""),
        };
        if path != SEARCH_PATH {
            return None;
        }

        let query = params
            .split('&')
            .find_map(|pair| pair.strip_prefix("query="))
            .map(decode_component)
            .unwrap_or_default();

        Some(Route::Search { query })
    }
}

fn decode_component(raw: &str) -> String {
    // '+' is not produced by our encoder, but accept it as a space anyway.
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_joins_with_single_space() {
        assert_eq!(compose("영어", "회화 기초"), Some("영어 회화 기초".into()));
    }

    #[test]
    fn compose_trims_each_side() {
        assert_eq!(compose("  코딩  ", ""), Some("코딩".into()));
        assert_eq!(compose("", "  노트  "), Some("노트".into()));
    }

    #[test]
    fn compose_empty_is_none() {
        assert_eq!(compose("", ""), None);
        assert_eq!(compose("   ", "\t\n"), None);
    }

    #[test]
    fn uri_round_trips_hangul() {
        let route = Route::search("한국사 필기 노트");
        let uri = route.to_uri();
        assert!(uri.starts_with("/search?query="), "got {uri}");
        assert_eq!(Route::parse(&uri), Some(route));
    }

    #[test]
    fn absent_query_parameter_is_empty() {
        assert_eq!(
            Route::parse("/search"),
            Some(Route::Search { query: String::new() })
        );
        assert_eq!(
            Route::parse("/search?other=1"),
            Some(Route::Search { query: String::new() })
        );
    }

    #[test]
    fn unknown_path_is_none() {
        assert_eq!(Route::parse("/home"), None);
        assert_eq!(Route::parse("/search2?query=a"), None);
    }

    #[test]
    fn undecodable_sequence_falls_back_to_literal() {
        // "%ZZ" is not valid percent-encoding
        let route = Route::parse("/search?query=%ZZ").unwrap();
        assert_eq!(route, Route::Search { query: "%ZZ".into() });
    }
}
