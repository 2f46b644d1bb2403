//! Ratatui widgets for the munpul TUI.

pub mod command_bar;
pub mod help;
pub mod preview;
pub mod results;
pub mod search_bar;
pub mod trending;
