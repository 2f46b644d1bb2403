use std::path::PathBuf;

use clap::Parser;
use munpul_core::{catalog, KeywordStore};
use munpul_feeds::{FileFeed, FixedFeed, TrendingSource};

mod headless;

#[derive(Parser)]
#[command(name = "munpul", about = "문풀 — terminal subject search")]
struct Cli {
    /// Write debug logs to /tmp/munpul-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Newline-separated trending keyword file, watched for changes.
    /// Without it, a fixed demo list is used.
    #[arg(long, value_name = "PATH")]
    keywords_file: Option<PathBuf>,

    /// Run one search and print the matches to stdout instead of the TUI.
    #[arg(long)]
    headless: bool,

    /// Query for headless mode. Empty or absent prints the whole catalog.
    #[arg(long, default_value = "")]
    query: String,

    /// Output format for headless mode.
    #[arg(long, value_enum, default_value = "plain")]
    format: headless::OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/munpul-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("munpul debug log started — tail -f /tmp/munpul-debug.log");
    }

    if cli.headless {
        return headless::run(&cli.query, cli.format);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let store = KeywordStore::new();

    // Trending feed runs as a background task; a failed feed leaves the
    // trending pane empty but never takes the UI down.
    let feed_store = store.clone();
    match cli.keywords_file {
        Some(path) => {
            let feed = FileFeed::new(path).watching();
            runtime.spawn(async move {
                if let Err(err) = feed.run(feed_store).await {
                    tracing::error!(%err, "keyword file feed failed");
                }
            });
        }
        None => {
            runtime.spawn(async move {
                if let Err(err) = FixedFeed::demo().run(feed_store).await {
                    tracing::error!(%err, "demo feed failed");
                }
            });
        }
    }

    munpul_tui::run(store, catalog::builtin(), runtime.handle().clone())
}
