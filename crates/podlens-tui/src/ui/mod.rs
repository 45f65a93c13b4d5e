pub mod components;
mod layout;
mod locale;
pub mod screens;
mod text;
mod theme;

pub use layout::Layout;
pub use locale::Strings;
pub use text::truncate;
pub use theme::Theme;

use ratatui::{Frame, layout::Rect};

use crate::app::{NavigationState, View};
use components::{ErrorBanner, HelpOverlay};
use screens::{LogAnalysisScreen, NamespaceSelectScreen, WorkloadGridScreen};

/// Draw the whole frame for the current state
pub fn render(frame: &mut Frame, state: &NavigationState, theme: &Theme, strings: &Strings) {
    match state.view() {
        View::Namespaces => NamespaceSelectScreen::render(frame, state, theme, strings),
        View::Workloads => WorkloadGridScreen::render(frame, state, theme, strings),
        View::Analysis => LogAnalysisScreen::render(frame, state, theme, strings),
    }

    if let Some(error) = state.error() {
        let area = frame.area();
        // Sits just above the status bar
        let height = ErrorBanner::HEIGHT.min(area.height.saturating_sub(1));
        let banner = Rect {
            y: area.bottom().saturating_sub(height + 1),
            height,
            ..area
        };
        frame.render_widget(ErrorBanner::new(error, theme, strings), banner);
    }

    if state.help_visible() {
        HelpOverlay::render(frame, theme, strings);
    }
}
