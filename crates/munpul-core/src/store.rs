//! Keyword store — session-wide shared state for the trending-keyword list.
//!
//! The store is built on [`tokio::sync::watch`]: a cheaply clonable handle
//! with a single-writer, replace-whole-value contract. There is no per-item
//! mutation — the only write operation swaps the entire list, so readers can
//! never observe a partially updated state.
//!
//! The store starts empty and resets to empty on restart; nothing persists.

use crate::types::TrendingSnapshot;
use tokio::sync::watch;

/// Shared handle to the trending-keyword list.
///
/// Clone freely; every clone points at the same underlying channel. Display
/// components call [`read`](Self::read) (or [`subscribe`](Self::subscribe)
/// for change notification); the external trending source is responsible for
/// calling [`replace_all`](Self::replace_all).
#[derive(Debug, Clone)]
pub struct KeywordStore {
    tx: watch::Sender<TrendingSnapshot>,
}

impl KeywordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(TrendingSnapshot::default()),
        }
    }

    /// Atomically replace the entire keyword list and stamp the refresh time.
    ///
    /// This is the only write operation. Snapshots handed out before the call
    /// are unaffected.
    pub fn replace_all(&self, keywords: Vec<String>) {
        self.tx.send_replace(TrendingSnapshot {
            keywords,
            refreshed_at: Some(chrono::Utc::now()),
        });
    }

    /// Return an owned snapshot of the current list.
    pub fn read(&self) -> TrendingSnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribe for change notification. The receiver observes every
    /// wholesale replacement published after the subscription.
    pub fn subscribe(&self) -> watch::Receiver<TrendingSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for KeywordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = KeywordStore::new();
        let snap = store.read();
        assert!(snap.is_empty());
        assert!(snap.refreshed_at.is_none());
    }

    #[test]
    fn replace_all_is_wholesale() {
        let store = KeywordStore::new();
        store.replace_all(vec!["한국사".into(), "영어".into()]);
        store.replace_all(vec!["코딩".into()]);
        assert_eq!(store.read().keywords, ["코딩"]);
    }

    #[test]
    fn snapshots_are_isolated_from_later_writes() {
        let store = KeywordStore::new();
        store.replace_all(vec!["영어".into()]);
        let before = store.read();
        store.replace_all(vec!["수학".into()]);
        assert_eq!(before.keywords, ["영어"]);
        assert_eq!(store.read().keywords, ["수학"]);
    }

    #[test]
    fn clones_share_state() {
        let store = KeywordStore::new();
        let handle = store.clone();
        store.replace_all(vec!["코딩".into()]);
        assert_eq!(handle.read().keywords, ["코딩"]);
    }

    #[tokio::test]
    async fn subscribers_see_replacements() {
        let store = KeywordStore::new();
        let mut rx = store.subscribe();
        store.replace_all(vec!["국어".into()]);
        rx.changed().await.expect("sender alive");
        assert_eq!(rx.borrow().keywords, ["국어"]);
    }
}
