//! Results widget — the search-results view.
//!
//! Renders one card per matching subject (title + description, with the
//! matched substring highlighted) or the explicit empty-state message when
//! nothing matched. The query shown in the header is the decoded URI
//! parameter, exactly what the filter ran against.
//!
//! # Navigation (when this view is active)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one card |
//! | `↓` / `j` | Move cursor down one card |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `g` / `G` | Jump to first / last card |

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use munpul_core::{search, Subject};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const PAGE_STEP: usize = 3;

/// Rows a single card occupies (title + description + separator).
const CARD_ROWS: usize = 3;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct ResultsState {
    /// The URI this view was navigated to, e.g. `/search?query=%EC%98%81%EC%96%B4`.
    pub uri: String,
    /// The decoded query parameter.
    pub query: String,
    /// Matching subjects, in catalog order.
    pub matches: Vec<Subject>,
    /// Index of the highlighted card.
    pub cursor: usize,
    /// Cached from the last render so `handle()` can page correctly.
    last_height: Cell<usize>,
}

impl ResultsState {
    pub fn new(uri: String, query: String, matches: Vec<Subject>) -> Self {
        Self {
            uri,
            query,
            matches,
            cursor: 0,
            last_height: Cell::new(40),
        }
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.matches.len();
        if total == 0 {
            return;
        }

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(total - 1);
            }
            AppEvent::ScrollToTop => {
                self.cursor = 0;
            }
            AppEvent::ScrollToBottom => {
                self.cursor = total - 1;
            }
            _ => {}
        }
    }

    /// First visible card, keeping the cursor inside the window.
    fn first_visible(&self, rows: usize) -> usize {
        let per_screen = (rows / CARD_ROWS).max(1);
        if self.cursor >= per_screen {
            self.cursor + 1 - per_screen
        } else {
            0
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Results<'a> {
    state: &'a ResultsState,
    theme: &'a Theme,
}

impl<'a> Results<'a> {
    pub fn new(state: &'a ResultsState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Results<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" 🔍 검색 결과: \"{}\" ", self.state.query))
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.matches.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "검색 결과가 없습니다.",
                self.theme.empty_state,
            )))
            .render(inner, buf);
            return;
        }

        let rows = inner.height as usize;
        self.state.last_height.set(rows);

        let first = self.state.first_visible(rows);
        let mut lines: Vec<Line> = Vec::new();
        for (idx, subject) in self.state.matches.iter().enumerate().skip(first) {
            if lines.len() >= rows {
                break;
            }
            let selected = idx == self.state.cursor;
            lines.push(styled_field(
                &subject.title,
                &self.state.query,
                self.theme.result_title,
                self.theme.search_highlight,
                selected,
            ));
            lines.push(styled_field(
                &subject.description,
                &self.state.query,
                self.theme.result_description,
                self.theme.search_highlight,
                false,
            ));
            lines.push(Line::default());
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Render one field with the matched span highlighted.
///
/// Splits the text at the first case-insensitive occurrence of the query; the
/// matched slice gets the highlight style layered over the base style.
fn styled_field(
    text: &str,
    query: &str,
    base: Style,
    highlight: Style,
    selected: bool,
) -> Line<'static> {
    let base = if selected {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    };

    let spans = match search::find_match(text, query) {
        Some((start, end)) => vec![
            Span::styled(text[..start].to_string(), base),
            Span::styled(text[start..end].to_string(), base.patch(highlight)),
            Span::styled(text[end..].to_string(), base),
        ],
        None => vec![Span::styled(text.to_string(), base)],
    };
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
