//! Command parsing for the vim-style `:` command bar.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Leave the results view (or quit from home) |
//! | `q!`, `quit!` | Quit regardless of the active view |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `open <path>` | Upload a text file |
//! | `clear` | Drop the uploaded file text and preview |
//! | `trending <w>...` | Replace the trending-keyword list by hand |

use std::path::PathBuf;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the results view; quits when already on the home view.
    Quit,
    /// Quit regardless of the active view.
    Exit,
    /// Toggle the help popup.
    Help,
    /// Switch colour theme.
    Theme(String),
    /// Upload the file at the given path.
    Open(PathBuf),
    /// Drop the uploaded text and preview.
    Clear,
    /// Replace the trending-keyword list wholesale.
    Trending(Vec<String>),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "open" => {
                if rest.is_empty() {
                    Err("usage: open <path-to-txt>".to_string())
                } else {
                    Ok(Command::Open(PathBuf::from(rest)))
                }
            }
            "trending" => {
                if rest.is_empty() {
                    Err("usage: trending <keyword>...".to_string())
                } else {
                    Ok(Command::Trending(
                        rest.split_whitespace().map(str::to_string).collect(),
                    ))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}
