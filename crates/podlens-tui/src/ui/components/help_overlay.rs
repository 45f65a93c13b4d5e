use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::{Layout, Strings, Theme};

/// Help overlay showing keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, theme: &Theme, strings: &Strings) {
        let popup_area = Layout::centered_popup(frame.area(), 50, 19);

        // Clear the background
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(strings.help_navigation, theme.text_highlight())),
            Self::key_line(theme, "k/↑ j/↓", strings.hint_move),
            Self::key_line(theme, "h/← l/→", strings.hint_move),
            Self::key_line(theme, "g/Home G/End", strings.help_first_last),
            Self::key_line(theme, "Enter", strings.hint_select),
            Self::key_line(theme, "Esc/Bksp", strings.hint_back),
            Line::from(""),
            Line::from(Span::styled(strings.help_actions, theme.text_highlight())),
            Self::key_line(theme, "r", strings.hint_refresh),
            Self::key_line(theme, "t", strings.auto_refresh),
            Self::key_line(theme, "x", strings.hint_dismiss),
            Self::key_line(theme, "?", strings.help_toggle_help),
            Self::key_line(theme, "q/Ctrl+c", strings.hint_quit),
        ];

        let help_widget = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused())
                .title(Span::styled(format!(" {} ", strings.help_title), theme.title())),
        );

        frame.render_widget(help_widget, popup_area);
    }

    fn key_line<'a>(theme: &Theme, key: &'a str, desc: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("  {:>12}", key), theme.key()),
            Span::styled(format!("  {}", desc), theme.text()),
        ])
    }
}
