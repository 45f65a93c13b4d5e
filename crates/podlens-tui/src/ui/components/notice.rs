use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use podlens_types::FetchError;

use crate::ui::{Strings, Theme};

/// A single centered message standing in for empty or pending content
pub struct Placeholder<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> Placeholder<'a> {
    pub fn new(text: &'a str, style: Style) -> Self {
        Self { text, style }
    }
}

impl Widget for Placeholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(Line::styled(self.text, self.style))
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}

/// The last fetch failure, drawn over the bottom of the content
pub struct ErrorBanner<'a> {
    error: &'a FetchError,
    theme: &'a Theme,
    strings: &'a Strings,
}

impl<'a> ErrorBanner<'a> {
    pub const HEIGHT: u16 = 4;

    pub fn new(error: &'a FetchError, theme: &'a Theme, strings: &'a Strings) -> Self {
        Self {
            error,
            theme,
            strings,
        }
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.error())
            .title(Span::styled(
                format!(" {} ", self.strings.error_title),
                self.theme.error(),
            ))
            .title_bottom(Line::from(vec![
                Span::styled(" [x] ", self.theme.status_bar_key()),
                Span::styled(format!("{} ", self.strings.hint_dismiss), self.theme.text_dim()),
            ]));

        Paragraph::new(self.error.to_string())
            .style(self.theme.text())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
