use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use podlens_types::{PhaseTone, WorkloadSummary};

use crate::ui::{Strings, Theme, truncate};

/// One cell of the workload grid
pub struct WorkloadCard<'a> {
    workload: &'a WorkloadSummary,
    theme: &'a Theme,
    strings: &'a Strings,
    selected: bool,
    blink: bool,
}

impl<'a> WorkloadCard<'a> {
    pub fn new(workload: &'a WorkloadSummary, theme: &'a Theme, strings: &'a Strings) -> Self {
        Self {
            workload,
            theme,
            strings,
            selected: false,
            blink: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Blink phase of the timer; failing workloads flash with it
    pub fn blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }
}

impl Widget for WorkloadCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let workload = self.workload;

        let border_style = if workload.is_failing() && self.blink {
            theme.alert()
        } else if self.selected {
            theme.border_focused()
        } else {
            theme.border()
        };
        let border_type = if self.selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let name_style = if self.selected {
            theme.text_highlight()
        } else {
            theme.text()
        };

        // Icon, two spaces and both border corners
        let name_width = usize::from(area.width.saturating_sub(7));
        let title = Line::from(vec![
            Span::raw(format!(" {} ", workload.status_icon())),
            Span::styled(truncate(&workload.name, name_width).into_owned(), name_style),
            Span::raw(" "),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let label = |text: &str| Span::styled(format!("{}: ", text), theme.label());

        let readiness = if workload.ready {
            Span::styled(format!("✓ {}", self.strings.ready), theme.phase(PhaseTone::Running))
        } else {
            Span::styled(format!("✗ {}", self.strings.not_ready), theme.error())
        };
        let lines = vec![
            Line::from(vec![
                label(self.strings.status),
                Span::styled(workload.phase.clone(), theme.phase(workload.phase_tone())),
            ]),
            Line::from(readiness),
            Line::from(vec![
                label(self.strings.restarts),
                Span::styled(workload.restarts.to_string(), theme.restarts(workload.restarts)),
            ]),
            Line::from(vec![
                label(self.strings.age),
                Span::styled(workload.age.to_string(), theme.text()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
