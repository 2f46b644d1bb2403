//! File feed — keywords from a newline-separated UTF-8 file.
//!
//! One keyword per line; blank lines and surrounding whitespace are ignored;
//! order is preserved. With watching enabled, the file is re-read on every
//! modification and the store receives the new list wholesale.

use crate::TrendingSource;
use anyhow::Context;
use munpul_core::KeywordStore;
use notify::{RecursiveMode, Watcher};
use std::path::{Path, PathBuf};

/// Reads the trending list from a file, optionally watching it for changes.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
    watch: bool,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            watch: false,
        }
    }

    /// Keep running after the initial read, republishing on file change.
    pub fn watching(mut self) -> Self {
        self.watch = true;
        self
    }
}

impl TrendingSource for FileFeed {
    async fn run(self, store: KeywordStore) -> anyhow::Result<()> {
        let keywords = read_keywords(&self.path).await?;
        tracing::debug!(count = keywords.len(), path = %self.path.display(), "file feed: initial read");
        store.replace_all(keywords);

        if !self.watch {
            return Ok(());
        }

        // Bridge notify's callback into the async loop; the unbounded sender
        // is safe to use from the watcher's own thread.
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            if let Ok(event) = res {
                if event.kind.is_modify() || event.kind.is_create() {
                    let _ = tx.send(());
                }
            }
        })
        .context("creating file watcher")?;
        watcher
            .watch(&self.path, RecursiveMode::NonRecursive)
            .with_context(|| format!("watching {}", self.path.display()))?;

        while rx.recv().await.is_some() {
            match read_keywords(&self.path).await {
                Ok(keywords) => {
                    tracing::debug!(count = keywords.len(), "file feed: change detected");
                    store.replace_all(keywords);
                }
                // A transient read failure (editor mid-save) keeps the
                // previous list in place; the next event retries.
                Err(err) => tracing::warn!(%err, "file feed: re-read failed"),
            }
        }
        Ok(())
    }
}

async fn read_keywords(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading keyword file {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
