use ratatui::style::{Color, Modifier, Style};

use podlens_logs::LineTone;
use podlens_types::{LogCategory, LogVerdict, PhaseTone};

/// Color theme handed to every screen
#[derive(Clone, Debug)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub primary: Color,
    pub secondary: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub terminating: Color,

    pub status_bar_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            fg_dim: Color::DarkGray,
            primary: Color::Cyan,
            secondary: Color::Blue,
            highlight: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            terminating: Color::Magenta,
            status_bar_bg: Color::DarkGray,
        }
    }
}

impl Theme {
    // Border styles
    pub fn border(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.primary)
    }

    // Text styles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Key names in the help overlay
    pub fn key(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    // List styles
    pub fn list_item(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn list_item_selected(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    // Status bar
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.fg).bg(self.status_bar_bg)
    }

    pub fn status_bar_key(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .bg(self.status_bar_bg)
            .add_modifier(Modifier::BOLD)
    }

    // Error
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of a failing workload card while the blink is on
    pub fn alert(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn phase(&self, tone: PhaseTone) -> Style {
        let color = match tone {
            PhaseTone::Running => self.success,
            PhaseTone::Pending => self.warning,
            PhaseTone::Failed => self.error,
            PhaseTone::Terminating => self.terminating,
            PhaseTone::Unknown => self.fg_dim,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Restart counts: above 10 is an error, above 3 a warning
    pub fn restarts(&self, count: u32) -> Style {
        let color = match count {
            0..=3 => self.success,
            4..=10 => self.warning,
            _ => self.error,
        };
        Style::default().fg(color)
    }

    pub fn category(&self, category: LogCategory) -> Style {
        let color = match category {
            LogCategory::Error => self.error,
            LogCategory::Warning => self.warning,
            LogCategory::Info => self.info,
        };
        Style::default().fg(color)
    }

    pub fn line_tone(&self, tone: LineTone) -> Style {
        match tone {
            LineTone::Error => self.category(LogCategory::Error),
            LineTone::Warning => self.category(LogCategory::Warning),
            LineTone::Info => self.category(LogCategory::Info),
            LineTone::Neutral => self.text(),
        }
    }

    pub fn verdict(&self, verdict: LogVerdict) -> Style {
        let color = match verdict {
            LogVerdict::Healthy => self.success,
            LogVerdict::Warnings => self.warning,
            LogVerdict::Errors => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
