use ratatui::layout::{Constraint, Layout as RatatuiLayout, Rect};

/// Screen regions shared by the three views
pub struct Layout;

impl Layout {
    /// Header (breadcrumb and status line), content, one-line key hints
    pub fn main(area: Rect) -> (Rect, Rect, Rect) {
        let [header, content, status] = RatatuiLayout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        (header, content, status)
    }

    /// Content on top, a `panel_height` panel under it (workload details, error banner)
    pub fn with_footer_panel(area: Rect, panel_height: u16) -> (Rect, Rect) {
        let [body, panel] =
            RatatuiLayout::vertical([Constraint::Min(1), Constraint::Length(panel_height)])
                .areas(area);

        (body, panel)
    }

    /// A `panel_height` panel on top (analysis summary), content under it
    pub fn with_header_panel(area: Rect, panel_height: u16) -> (Rect, Rect) {
        let [panel, body] =
            RatatuiLayout::vertical([Constraint::Length(panel_height), Constraint::Min(1)])
                .areas(area);

        (panel, body)
    }

    /// Two columns side by side, the left one `left_percent` wide
    pub fn columns(area: Rect, left_percent: u16) -> (Rect, Rect) {
        let left_percent = left_percent.min(100);
        let [left, right] = RatatuiLayout::horizontal([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .areas(area);

        (left, right)
    }

    /// Horizontally centered strip `width_percent` wide, for the namespace list
    pub fn centered_list(area: Rect, width_percent: u16) -> Rect {
        let width_percent = width_percent.min(100);
        let side = (100 - width_percent) / 2;
        let [_, middle, _] = RatatuiLayout::horizontal([
            Constraint::Percentage(side),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(side),
        ])
        .areas(area);

        middle
    }

    /// A `width` x `height` box centered in `area`, shrunk to fit
    pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width.saturating_sub(4));
        let height = height.min(area.height.saturating_sub(4));
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }
}
