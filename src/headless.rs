//! Headless mode — run one search against the builtin catalog and print the
//! matches to stdout. The scriptable counterpart of the results view: same
//! filter, same ordering, no terminal required.

use clap::ValueEnum;
use munpul_core::{catalog, search::filter_subjects};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `title — description` line per match.
    Plain,
    /// One JSON object per match (jsonl).
    Json,
}

/// Exit code is 0 whether or not anything matched; no matches just means no
/// output lines.
pub fn run(query: &str, format: OutputFormat) -> anyhow::Result<()> {
    let subjects = catalog::builtin();
    let matches = filter_subjects(query, &subjects);
    tracing::debug!(%query, count = matches.len(), "headless search");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for subject in matches {
        match format {
            OutputFormat::Plain => {
                writeln!(out, "{} — {}", subject.title, subject.description)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, subject)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
