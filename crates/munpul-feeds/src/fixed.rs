//! Fixed feed — a built-in demo keyword list, published once.

use crate::TrendingSource;
use munpul_core::KeywordStore;

/// One-shot source with a hardcoded keyword list. Used when no keyword file
/// is configured, so the trending chips have something to show.
#[derive(Debug, Clone)]
pub struct FixedFeed {
    keywords: Vec<String>,
}

impl FixedFeed {
    /// The default demo list.
    pub fn demo() -> Self {
        Self::with_keywords(["한국사", "영어", "코딩", "수학", "국어"])
    }

    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

impl TrendingSource for FixedFeed {
    async fn run(self, store: KeywordStore) -> anyhow::Result<()> {
        tracing::debug!(count = self.keywords.len(), "fixed feed: publishing");
        store.replace_all(self.keywords);
        Ok(())
    }
}
