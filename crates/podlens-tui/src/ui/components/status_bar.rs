use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::{Strings, Theme};

/// Status bar showing keyboard shortcuts
pub struct StatusBar<'a> {
    theme: &'a Theme,
    hints: Vec<(&'a str, &'a str)>,
    right_text: Option<String>,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            hints: Vec::new(),
            right_text: None,
        }
    }

    /// Add keyboard hints as (key, description) pairs
    pub fn hints<I>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.hints = hints.into_iter().collect();
        self
    }

    /// Set text to display on the right side
    pub fn right<S: Into<String>>(mut self, text: S) -> Self {
        self.right_text = Some(text.into());
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        buf.set_style(area, self.theme.status_bar());

        let mut spans = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.status_bar()));
            }
            spans.push(Span::styled(format!("[{}]", key), self.theme.status_bar_key()));
            spans.push(Span::styled(format!(" {}", desc), self.theme.status_bar()));
        }

        let line = Line::from(spans);
        let line_width = line.width() as u16;

        buf.set_line(area.x + 1, area.y, &line, area.width.saturating_sub(2));

        if let Some(right) = self.right_text {
            let right_width = right.width() as u16;
            let right_x = area.x + area.width.saturating_sub(right_width + 1);
            if right_x > area.x + line_width + 2 {
                let right_span = Span::styled(right.as_str(), self.theme.status_bar());
                buf.set_span(right_x, area.y, &right_span, right_width);
            }
        }
    }
}

/// Hints for the namespace list
pub fn list_nav_hints(strings: &Strings) -> Vec<(&'static str, &'static str)> {
    vec![
        ("↑↓/jk", strings.hint_move),
        ("Enter", strings.hint_select),
        ("r", strings.hint_refresh),
        ("t", strings.auto_refresh),
        ("?", strings.hint_help),
        ("q", strings.hint_quit),
    ]
}

/// Hints for the workload grid; `can_go_back` is false for a preselected namespace
pub fn grid_hints(strings: &Strings, can_go_back: bool) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![
        ("←↓↑→/hjkl", strings.hint_move),
        ("Enter", strings.hint_open_logs),
    ];
    if can_go_back {
        hints.push(("Esc", strings.hint_back));
    }
    hints.extend([
        ("r", strings.hint_refresh),
        ("t", strings.auto_refresh),
        ("?", strings.hint_help),
        ("q", strings.hint_quit),
    ]);
    hints
}

/// Hints for the analysis view
pub fn analysis_hints(strings: &Strings) -> Vec<(&'static str, &'static str)> {
    vec![
        ("↑↓/jk", strings.hint_scroll),
        ("Esc", strings.hint_back),
        ("r", strings.hint_refresh),
        ("?", strings.hint_help),
        ("q", strings.hint_quit),
    ]
}
