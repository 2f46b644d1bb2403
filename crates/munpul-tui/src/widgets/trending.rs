//! Trending chips widget — the row of `#keyword` chips under the search bar.
//!
//! # Navigation
//! - `←`/`h` and `→`/`l` move the chip cursor.
//! - `Enter` selects the chip under the cursor (handled by the App shell,
//!   which reads [`TrendingState::selected`]).
//!
//! The widget row is hidden entirely while the keyword store is empty; the
//! App shell checks [`TrendingState::is_empty`] before rendering.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use munpul_core::TrendingSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TrendingState {
    snapshot: TrendingSnapshot,
    /// Index of the chip under the cursor.
    pub cursor: usize,
    /// Cap on how many chips are shown, from `[ui] trending_limit`.
    pub limit: usize,
}

impl TrendingState {
    pub fn new(limit: usize) -> Self {
        Self {
            snapshot: TrendingSnapshot::default(),
            cursor: 0,
            limit,
        }
    }

    /// Install a fresh snapshot from the keyword store, clamping the cursor.
    pub fn update(&mut self, snapshot: TrendingSnapshot) {
        self.snapshot = snapshot;
        let max = self.keywords().len().saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }
    }

    /// Visible keywords, capped at the configured limit.
    pub fn keywords(&self) -> &[String] {
        let n = self.snapshot.keywords.len().min(self.limit);
        &self.snapshot.keywords[..n]
    }

    pub fn is_empty(&self) -> bool {
        self.keywords().is_empty()
    }

    /// The keyword under the cursor, if any.
    pub fn selected(&self) -> Option<&str> {
        self.keywords().get(self.cursor).map(String::as_str)
    }

    pub fn refreshed_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.snapshot.refreshed_at
    }

    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Right) => {
                let max = self.keywords().len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Trending<'a> {
    state: &'a TrendingState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Trending<'a> {
    pub fn new(state: &'a TrendingState, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            focused,
            theme,
        }
    }
}

impl Widget for Trending<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("실시간 인기 검색어")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans: Vec<Span> = Vec::new();
        for (idx, word) in self.state.keywords().iter().enumerate() {
            let mut style = self.theme.chip_style(word);
            if self.focused && idx == self.state.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" #{word} "), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        // "updated HH:MM:SS" caption at the right edge of the title row
        if let Some(ts) = self.state.refreshed_at() {
            let caption = format!(" updated {} ", ts.format("%H:%M:%S"));
            let x = area.right().saturating_sub(caption.chars().count() as u16 + 1);
            buf.set_string(
                x,
                area.y,
                caption,
                Style::default().add_modifier(Modifier::DIM),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
