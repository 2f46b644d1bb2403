//! munpul-feeds — trending-keyword sources for munpul.
//!
//! The keyword store is populated from outside the UI; each source here reads
//! a keyword list from somewhere and pushes it into the shared
//! [`KeywordStore`](munpul_core::KeywordStore) via wholesale replacement.
//! Sources never append incrementally.

pub mod file;
pub mod fixed;

pub use file::FileFeed;
pub use fixed::FixedFeed;

use munpul_core::KeywordStore;

/// A source of trending keywords.
///
/// Implementations run until their source is exhausted (a one-shot list) or
/// indefinitely (a watched file), publishing each full list they observe with
/// [`KeywordStore::replace_all`].
pub trait TrendingSource {
    fn run(
        self,
        store: KeywordStore,
    ) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}
