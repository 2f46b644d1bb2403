//! Search bar widget — keyword input + attachment indicator.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor (arrow keys while this pane
//!   is focused, re-mapped by the App shell).

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// The keyword typed (or placed by a trending-chip selection).
    pub keyword: String,
    /// Byte offset of the cursor within `keyword`.
    pub cursor: usize,
}

impl SearchBarState {
    /// Replace the visible keyword wholesale (trending-chip selection).
    pub fn set_keyword(&mut self, word: &str) {
        self.keyword = word.to_string();
        self.cursor = self.keyword.len();
    }

    /// Handle a key event from the app shell.
    ///
    /// Text-editing events (`Char`, `Backspace`, arrow keys) update the
    /// keyword string; all other events are ignored.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.keyword.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(keyword = %self.keyword, cursor = self.cursor, "search: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    // Walk back one char boundary
                    let prev = self.keyword[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.keyword.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(keyword = %self.keyword, cursor = self.cursor, "search: backspace");
                }
            }
            // Left/right arrows re-mapped from Nav by the App shell
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.keyword[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.keyword.len() {
                    let next = self.keyword[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.keyword.len());
                    self.cursor = next;
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    /// Character count of the uploaded file text, 0 when nothing is attached.
    attached_chars: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(
        state: &'a SearchBarState,
        attached_chars: usize,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            attached_chars,
            focused,
            theme,
        }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.keyword[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Search")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        // Split inner area: keyword text (fill) | attachment indicator
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(24)])
            .split(inner);

        let keyword_line = if self.state.keyword.is_empty() && !self.focused {
            Line::from(Span::styled(
                "배우고 싶은 분야를 검색하세요... (/)",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.keyword.as_str())
        };
        Paragraph::new(keyword_line).render(chunks[0], buf);

        // Attachment indicator:  file:[1234 chars]
        let indicator = if self.attached_chars > 0 {
            format!("file:[{} chars]", self.attached_chars)
        } else {
            "file:[none]".to_string()
        };
        Paragraph::new(Line::from(Span::styled(
            indicator,
            Style::default().add_modifier(Modifier::DIM),
        )))
        .render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
