use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use podlens_logs::{LineTone, LogAnalysis, LogCategory, LogVerdict, display_lines};
use podlens_types::{PhaseTone, WorkloadSummary};

use crate::{
    app::NavigationState,
    ui::{
        Layout, Strings, Theme,
        components::{Placeholder, StatusBar, analysis_hints},
        truncate,
    },
};

use super::render_header;

const SUMMARY_HEIGHT: u16 = 9;

/// Classified log summary plus the scrollable raw lines
pub struct LogAnalysisScreen;

impl LogAnalysisScreen {
    pub fn render(frame: &mut Frame, state: &NavigationState, theme: &Theme, strings: &Strings) {
        let (header_area, content_area, status_area) = Layout::main(frame.area());

        let namespace = state.namespace().unwrap_or_default();
        let workload = state.open_workload().unwrap_or_default();
        render_header(
            frame,
            header_area,
            state,
            theme,
            strings,
            &[namespace, workload, strings.log_analysis_title],
        );

        let status = StatusBar::new(theme).hints(analysis_hints(strings));

        let Some(analysis) = state.current_analysis() else {
            let (text, style) = if state.is_loading() {
                (strings.loading, theme.text_highlight())
            } else {
                (strings.no_analysis, theme.text_dim())
            };
            frame.render_widget(Placeholder::new(text, style), content_area);
            frame.render_widget(status, status_area);
            return;
        };

        let (top_area, lines_area) = Layout::with_header_panel(content_area, SUMMARY_HEIGHT);
        let (details_area, rest) = Layout::columns(top_area, 28);
        let (summary_area, findings_area) = Layout::columns(rest, 40);

        let details = state.workloads().iter().find(|w| w.name == workload);
        Self::render_details(frame, details_area, details, theme, strings);
        Self::render_summary(frame, summary_area, analysis, theme, strings);
        Self::render_findings(frame, findings_area, analysis, theme, strings);
        let position = Self::render_lines(frame, lines_area, state, analysis, theme, strings);

        frame.render_widget(status.right(position), status_area);
    }

    /// Status of the pod the logs came from, as last listed
    fn render_details(
        frame: &mut Frame,
        area: Rect,
        workload: Option<&WorkloadSummary>,
        theme: &Theme,
        strings: &Strings,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(format!(" {} ", strings.details), theme.title()));

        // The pod can drop out of the list while its analysis is open
        let Some(workload) = workload else {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        };

        let label = |text: &str| Span::styled(format!("{:<10}", format!("{}:", text)), theme.label());
        let (ready_text, ready_style) = if workload.ready {
            (strings.ready, theme.phase(PhaseTone::Running))
        } else {
            (strings.not_ready, theme.error())
        };

        let lines = vec![
            Line::from(vec![
                label(strings.status),
                Span::styled(
                    format!("{} {}", workload.status_icon(), workload.phase),
                    theme.phase(workload.phase_tone()),
                ),
            ]),
            Line::from(vec![label(strings.ready), Span::styled(ready_text, ready_style)]),
            Line::from(vec![
                label(strings.restarts),
                Span::styled(
                    workload.restarts.to_string(),
                    theme.restarts(workload.restarts),
                ),
            ]),
            Line::from(vec![
                label(strings.age),
                Span::styled(workload.age.to_string(), theme.text()),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_summary(
        frame: &mut Frame,
        area: Rect,
        analysis: &LogAnalysis,
        theme: &Theme,
        strings: &Strings,
    ) {
        let verdict = analysis.verdict();
        let verdict_text = match verdict {
            LogVerdict::Healthy => strings.status_healthy,
            LogVerdict::Warnings => strings.status_warnings,
            LogVerdict::Errors => strings.status_errors,
        };

        let count = |label: &str, value: usize, style| {
            Line::from(vec![
                Span::styled(format!("{:<14}", format!("{}:", label)), theme.label()),
                Span::styled(value.to_string(), style),
            ])
        };

        let lines = vec![
            Line::styled(verdict_text, theme.verdict(verdict)),
            Line::from(""),
            count(strings.total_lines, analysis.total_lines, theme.text()),
            count(
                strings.errors,
                analysis.error_count(),
                theme.category(LogCategory::Error),
            ),
            count(
                strings.warnings,
                analysis.warning_count(),
                theme.category(LogCategory::Warning),
            ),
            count(
                strings.info,
                analysis.info_count(),
                theme.category(LogCategory::Info),
            ),
            Line::from(vec![
                Span::styled(format!("{:<14}", format!("{}:", strings.analyzed_at)), theme.label()),
                Span::styled(
                    analysis.analyzed_at.format("%H:%M:%S").to_string(),
                    theme.text_dim(),
                ),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(format!(" {} ", strings.log_summary), theme.title()));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Most recent error and warning lines, errors first
    fn render_findings(
        frame: &mut Frame,
        area: Rect,
        analysis: &LogAnalysis,
        theme: &Theme,
        strings: &Strings,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(
                format!(" {} ", strings.recent_findings),
                theme.title(),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if analysis.errors.is_empty() && analysis.warnings.is_empty() {
            frame.render_widget(
                Placeholder::new(strings.no_findings, theme.verdict(LogVerdict::Healthy)),
                inner,
            );
            return;
        }

        let room = usize::from(inner.height);
        let width = usize::from(inner.width.saturating_sub(2));
        let error_room = if analysis.warnings.is_empty() {
            room
        } else {
            room.div_ceil(2)
        };

        let mut lines = Vec::with_capacity(room);
        for (category, budget) in [
            (LogCategory::Error, error_room),
            (LogCategory::Warning, room),
        ] {
            let matched = analysis.lines(category);
            let budget = budget.min(room - lines.len());
            let marker = match category {
                LogCategory::Error => "✗ ",
                _ => "! ",
            };
            for line in &matched[matched.len().saturating_sub(budget)..] {
                lines.push(Line::styled(
                    format!("{}{}", marker, truncate(line.trim(), width)),
                    theme.category(category),
                ));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Draw the raw lines at the current offset; returns the position text
    fn render_lines(
        frame: &mut Frame,
        area: Rect,
        state: &NavigationState,
        analysis: &LogAnalysis,
        theme: &Theme,
        strings: &Strings,
    ) -> String {
        let all = display_lines(&analysis.raw);
        let window = state.log_window(all.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focused())
            .title(Span::styled(format!(" {} ", strings.log_lines), theme.title()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if all.is_empty() {
            frame.render_widget(Placeholder::new(strings.log_empty, theme.text_dim()), inner);
            return String::new();
        }

        // Keep the newest lines of the window when the panel is shorter
        let shown = window.start.max(window.end.saturating_sub(usize::from(inner.height)))..window.end;
        // "NNNN: " before every line
        let width = usize::from(inner.width.saturating_sub(6));
        let lines: Vec<Line> = all[shown.clone()]
            .iter()
            .zip(shown.start + 1..)
            .map(|(line, number)| {
                Line::from(vec![
                    Span::styled(format!("{:>4}: ", number), theme.text_dim()),
                    Span::styled(
                        truncate(line, width).into_owned(),
                        theme.line_tone(LineTone::of(line)),
                    ),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        format!(
            "{} {}-{} / {}",
            strings.showing_lines,
            shown.start + 1,
            shown.end,
            all.len()
        )
    }
}
