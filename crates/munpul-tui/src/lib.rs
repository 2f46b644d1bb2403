//! munpul TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use munpul_core::{KeywordStore, Subject};

/// Start the TUI against an already-populated store and subject catalog.
/// Blocks the calling thread until the user quits.
pub fn run(
    store: KeywordStore,
    subjects: Vec<Subject>,
    runtime: tokio::runtime::Handle,
) -> anyhow::Result<()> {
    let config =
        munpul_core::config::Config::load().unwrap_or_else(|_| munpul_core::config::Config::defaults());
    let theme = theme::Theme::load_default();
    App::new(store, subjects, config, theme, runtime).run()
}
