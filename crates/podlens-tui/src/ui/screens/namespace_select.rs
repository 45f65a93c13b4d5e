use std::ops::Range;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::NavigationState,
    ui::{
        Layout, Strings, Theme,
        components::{Placeholder, StatusBar, list_nav_hints},
        truncate,
    },
};

use super::render_header;

/// Namespace selection screen
pub struct NamespaceSelectScreen;

impl NamespaceSelectScreen {
    pub fn render(frame: &mut Frame, state: &NavigationState, theme: &Theme, strings: &Strings) {
        let (header_area, content_area, status_area) = Layout::main(frame.area());

        render_header(
            frame,
            header_area,
            state,
            theme,
            strings,
            &[strings.namespace_selection_title],
        );
        Self::render_list(frame, content_area, state, theme, strings);

        let count = format!("{} {}", state.namespaces().len(), strings.namespaces_count);
        let status = StatusBar::new(theme)
            .hints(list_nav_hints(strings))
            .right(count);
        frame.render_widget(status, status_area);
    }

    fn render_list(
        frame: &mut Frame,
        area: Rect,
        state: &NavigationState,
        theme: &Theme,
        strings: &Strings,
    ) {
        let list_area = Layout::centered_list(area, 80);
        let namespaces = state.namespaces();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focused())
            .title(Span::styled(format!(" {} ", strings.namespace), theme.title()));

        let inner = block.inner(list_area);
        let shown = Self::shown_rows(
            state.namespace_window(),
            state.selected_namespace_index(),
            usize::from(inner.height),
        );

        // Scroll indicators live on the border so they never take a row
        if shown.start > 0 {
            block = block.title(
                Line::styled(
                    format!(" ↑ {} {} ", shown.start, strings.more_above),
                    theme.text_dim(),
                )
                .right_aligned(),
            );
        }
        let below = namespaces.len().saturating_sub(shown.end);
        if below > 0 {
            block = block.title_bottom(
                Line::styled(format!(" ↓ {} {} ", below, strings.more_below), theme.text_dim())
                    .right_aligned(),
            );
        }
        frame.render_widget(block, list_area);

        if namespaces.is_empty() {
            let (text, style) = if state.is_loading() {
                (strings.loading, theme.text_highlight())
            } else {
                (strings.no_namespaces, theme.text_dim())
            };
            frame.render_widget(Placeholder::new(text, style), inner);
            return;
        }

        let name_width = usize::from(inner.width.saturating_sub(3));
        let lines: Vec<Line> = shown
            .map(|index| {
                let selected = index == state.selected_namespace_index();
                let marker = if selected { "▶ " } else { "  " };
                let text = format!("{}{}", marker, truncate(&namespaces[index], name_width));
                let style = if selected {
                    theme.list_item_selected()
                } else {
                    theme.list_item()
                };
                Line::styled(text, style)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// The part of the page that fits in `rows` lines, keeping `selected` in it
    fn shown_rows(page: Range<usize>, selected: usize, rows: usize) -> Range<usize> {
        if page.len() <= rows {
            return page;
        }
        if rows == 0 {
            return page.start..page.start;
        }
        let mut start = page.start;
        if selected >= start + rows {
            start = selected + 1 - rows;
        }
        start..(start + rows).min(page.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_rows_fit() {
        assert_eq!(NamespaceSelectScreen::shown_rows(0..10, 3, 20), 0..10);
    }

    #[test]
    fn test_shown_rows_follow_selection() {
        // Page of 10 in a box of 7 rows
        assert_eq!(NamespaceSelectScreen::shown_rows(40..50, 41, 7), 40..47);
        assert_eq!(NamespaceSelectScreen::shown_rows(40..50, 49, 7), 43..50);
        assert_eq!(NamespaceSelectScreen::shown_rows(40..50, 45, 7), 40..47);
        assert!(NamespaceSelectScreen::shown_rows(0..10, 5, 0).is_empty());
    }
}
