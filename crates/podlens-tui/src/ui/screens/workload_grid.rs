use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{NavigationState, grid},
    ui::{
        Layout, Strings, Theme,
        components::{Placeholder, StatusBar, WorkloadCard, grid_hints},
    },
};

use super::render_header;

/// Height of the details panel below the grid
const DETAILS_HEIGHT: u16 = 7;
/// Gap between the grid border and the first card
const GRID_PADDING: u16 = 2;

/// Workload cards of the selected namespace
pub struct WorkloadGridScreen;

impl WorkloadGridScreen {
    pub fn render(frame: &mut Frame, state: &NavigationState, theme: &Theme, strings: &Strings) {
        let (header_area, content_area, status_area) = Layout::main(frame.area());
        let (grid_area, details_area) = Layout::with_footer_panel(content_area, DETAILS_HEIGHT);

        let namespace = state.namespace().unwrap_or_default();
        render_header(
            frame,
            header_area,
            state,
            theme,
            strings,
            &[namespace, strings.workloads_title],
        );
        Self::render_grid(frame, grid_area, state, theme, strings);
        Self::render_details(frame, details_area, state, theme, strings);

        let count = format!("{} {}", state.workloads().len(), strings.workloads_count);
        let status = StatusBar::new(theme)
            .hints(grid_hints(strings, state.can_leave_workloads()))
            .right(count);
        frame.render_widget(status, status_area);
    }

    fn render_grid(
        frame: &mut Frame,
        area: Rect,
        state: &NavigationState,
        theme: &Theme,
        strings: &Strings,
    ) {
        let workloads = state.workloads();
        let geometry = state.grid_geometry();
        let window = state.visible_rows();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focused())
            .title(Span::styled(
                format!(" {} ({}) ", strings.workloads_title, workloads.len()),
                theme.title(),
            ));
        if window.first > 0 || window.first + window.count < geometry.total_rows {
            block = block.title_bottom(Span::styled(
                format!(
                    " {}-{} / {} ",
                    window.first + 1,
                    window.first + window.count,
                    geometry.total_rows
                ),
                theme.text_dim(),
            ));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if workloads.is_empty() {
            let (text, style) = if state.is_loading() {
                (strings.loading, theme.text_highlight())
            } else {
                (strings.no_workloads, theme.text_dim())
            };
            frame.render_widget(Placeholder::new(text, style), inner);
            return;
        }

        for (visible, row) in window.rows().enumerate() {
            let y = inner.y + visible as u16 * grid::ROW_HEIGHT;

            for column in 0..geometry.items_per_row {
                let index = row * geometry.items_per_row + column;
                let Some(workload) = workloads.get(index) else {
                    break;
                };

                let x = inner.x
                    + GRID_PADDING
                    + column as u16 * (geometry.item_width + grid::ITEM_SPACING);
                let cell = Rect::new(x, y, geometry.item_width, grid::ROW_HEIGHT).intersection(inner);
                if cell.is_empty() {
                    continue;
                }

                let card = WorkloadCard::new(workload, theme, strings)
                    .selected(index == state.selected_workload_index())
                    .blink(state.blink());
                frame.render_widget(card, cell);
            }
        }
    }

    fn render_details(
        frame: &mut Frame,
        area: Rect,
        state: &NavigationState,
        theme: &Theme,
        strings: &Strings,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(format!(" {} ", strings.details), theme.title()));

        let Some(workload) = state.selected_workload() else {
            frame.render_widget(block, area);
            return;
        };

        let field = |label: &str, value: String, style| {
            Line::from(vec![
                Span::styled(format!("{:<10}", format!("{}:", label)), theme.label()),
                Span::styled(value, style),
            ])
        };

        let readiness = if workload.ready {
            strings.ready
        } else {
            strings.not_ready
        };

        let lines = vec![
            field(strings.name, workload.name.clone(), theme.text_highlight()),
            field(
                strings.status,
                format!("{} {}", workload.status_icon(), workload.phase),
                theme.phase(workload.phase_tone()),
            ),
            field(strings.ready, readiness.to_string(), theme.text()),
            field(
                strings.restarts,
                format!("{}   {}: {}", workload.restarts, strings.age, workload.age),
                theme.text(),
            ),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
