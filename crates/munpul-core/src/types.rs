//! Core types for munpul-core.
//!
//! This module defines the data structures shared across all layers: the
//! [`Subject`] catalog record and the [`TrendingSnapshot`] handed out by the
//! keyword store.

use serde::Serialize;

/// A searchable catalog entry: one tutoring subject.
///
/// Subjects are static and immutable — they carry no identity beyond their
/// position in the catalog, and nothing mutates them after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    /// Display title, e.g. `"한국사"`.
    pub title: String,
    /// One-line description shown under the title in the results view.
    pub description: String,
}

impl Subject {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// An owned snapshot of the trending-keyword list.
///
/// Returned by [`KeywordStore::read`](crate::store::KeywordStore::read).
/// Later wholesale replacements never mutate a snapshot already handed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendingSnapshot {
    /// Ordered trending keywords, most popular first.
    pub keywords: Vec<String>,
    /// When the list was last replaced. `None` until the first replacement.
    pub refreshed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TrendingSnapshot {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
