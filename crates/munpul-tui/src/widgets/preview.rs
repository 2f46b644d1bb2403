//! File preview widget — shows the first 500 characters of the uploaded file.
//!
//! Purely presentational. The App shell renders this pane only when a preview
//! exists and `[ui] show_preview` is enabled.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct Preview<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> Preview<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for Preview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("파일 미리보기")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.text)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
