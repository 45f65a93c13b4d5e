mod log_analysis;
mod namespace_select;
mod workload_grid;

pub use log_analysis::LogAnalysisScreen;
pub use namespace_select::NamespaceSelectScreen;
pub use workload_grid::WorkloadGridScreen;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use podlens_types::PhaseTone;

use crate::app::NavigationState;
use crate::ui::{Strings, Theme};

/// Title bar shared by every screen: breadcrumb on the left, refresh state on the right
fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &NavigationState,
    theme: &Theme,
    strings: &Strings,
    breadcrumb: &[&str],
) {
    let mut left = vec![Span::styled("podlens", theme.title())];
    for (i, part) in breadcrumb.iter().enumerate() {
        left.push(Span::styled(" │ ", theme.text_dim()));
        let style = if i + 1 == breadcrumb.len() {
            theme.text()
        } else {
            theme.text_highlight()
        };
        left.push(Span::styled(part.to_string(), style));
    }

    let mut right = Vec::new();
    if state.is_loading() {
        right.push(Span::styled(
            format!("{}  ", strings.loading),
            theme.text_highlight(),
        ));
    }
    let (refresh_state, refresh_style) = if state.auto_refresh() {
        (strings.on, theme.phase(PhaseTone::Running))
    } else {
        (strings.off, theme.text_dim())
    };
    right.push(Span::styled(format!("{}: ", strings.auto_refresh), theme.text_dim()));
    right.push(Span::styled(refresh_state, refresh_style));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(Line::from(left)), inner);
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        inner,
    );
}
