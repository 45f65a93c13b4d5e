//! Geometry of the workload card grid and the scrolled lists.
//!
//! Everything here is a pure function of the viewport size, so the state
//! machine and the renderers always agree on what is visible.

use std::ops::Range;

/// Columns reserved for the outer border and padding
pub const HORIZONTAL_MARGIN: u16 = 8;
pub const MIN_ITEM_WIDTH: u16 = 45;
pub const ITEM_SPACING: u16 = 2;
pub const MAX_COLUMNS: u16 = 6;
pub const MAX_ITEM_WIDTH: u16 = 60;
/// Height of one card row, borders included
pub const ROW_HEIGHT: u16 = 8;
/// Lines taken by the header, details and status bar around the grid
pub const VERTICAL_RESERVE: u16 = 15;

const LIST_RESERVE: u16 = 8;
const MIN_LIST_ROWS: u16 = 10;
const MAX_LIST_ROWS: u16 = 30;

const LOG_RESERVE: u16 = 25;
const MIN_LOG_LINES: u16 = 10;

/// Column layout of the workload grid for one viewport width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub items_per_row: usize,
    pub item_width: u16,
    pub total_rows: usize,
}

impl GridGeometry {
    /// Row holding the item at `index`
    pub fn row_of(&self, index: usize) -> usize {
        index / self.items_per_row
    }

    /// Column holding the item at `index`
    pub fn column_of(&self, index: usize) -> usize {
        index % self.items_per_row
    }
}

/// Range of grid rows currently drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowWindow {
    pub first: usize,
    pub count: usize,
}

impl RowWindow {
    pub fn contains(&self, row: usize) -> bool {
        row >= self.first && row < self.first + self.count
    }

    pub fn rows(&self) -> Range<usize> {
        self.first..self.first + self.count
    }
}

/// Largest column count (up to [`MAX_COLUMNS`]) whose minimum widths fit,
/// never fewer than one.
pub fn compute_grid(width: u16, item_count: usize) -> GridGeometry {
    let available = width.saturating_sub(HORIZONTAL_MARGIN);

    let mut columns: u16 = 1;
    for candidate in 2..=MAX_COLUMNS {
        let required = candidate * MIN_ITEM_WIDTH + (candidate - 1) * ITEM_SPACING;
        if required > available {
            break;
        }
        columns = candidate;
    }

    let spacing = (columns - 1) * ITEM_SPACING;
    let item_width = (available.saturating_sub(spacing) / columns).min(MAX_ITEM_WIDTH);
    let items_per_row = usize::from(columns);

    GridGeometry {
        items_per_row,
        item_width,
        total_rows: item_count.div_ceil(items_per_row),
    }
}

/// Rows that fit below the header, at least one
pub fn max_visible_rows(height: u16) -> usize {
    usize::from((height.saturating_sub(VERTICAL_RESERVE) / ROW_HEIGHT).max(1))
}

/// Window of rows to draw so that `selected_row` is visible.
///
/// The window only moves forward as far as needed and never runs past the
/// last row.
pub fn visible_rows(height: u16, total_rows: usize, selected_row: usize) -> RowWindow {
    let max_rows = max_visible_rows(height);

    let mut first = 0;
    if total_rows > max_rows {
        if selected_row >= max_rows {
            first = selected_row + 1 - max_rows;
        }
        first = first.min(total_rows - max_rows);
    }

    RowWindow {
        first,
        count: max_rows.min(total_rows - first),
    }
}

/// Page size of the namespace list
pub fn max_visible_namespaces(height: u16) -> usize {
    usize::from(height.saturating_sub(LIST_RESERVE).clamp(MIN_LIST_ROWS, MAX_LIST_ROWS))
}

/// Number of raw log lines shown in the analysis view
pub fn max_visible_log_lines(height: u16) -> usize {
    usize::from(height.saturating_sub(LOG_RESERVE).max(MIN_LOG_LINES))
}

/// Slice of the log lines to show, `offset` lines back from the tail
pub fn log_window(total: usize, max_visible: usize, offset: usize) -> Range<usize> {
    let start = total.saturating_sub(max_visible.saturating_add(offset));
    let end = total.min(start + max_visible);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_viewport() {
        // 192 usable columns: 4 * 45 + 3 * 2 = 186 fits, 5 * 45 + 4 * 2 = 233 does not
        let grid = compute_grid(200, 7);
        assert_eq!(grid.items_per_row, 4);
        assert_eq!(grid.item_width, (192 - 6) / 4);
        assert_eq!(grid.item_width, 46);
        assert_eq!(grid.total_rows, 2);
    }

    #[test]
    fn test_narrow_viewport_forces_one_column() {
        let grid = compute_grid(20, 3);
        assert_eq!(grid.items_per_row, 1);
        assert_eq!(grid.item_width, 12);
        assert_eq!(grid.total_rows, 3);

        let grid = compute_grid(0, 0);
        assert_eq!(grid.items_per_row, 1);
        assert_eq!(grid.item_width, 0);
        assert_eq!(grid.total_rows, 0);
    }

    #[test]
    fn test_item_width_is_capped() {
        let grid = compute_grid(u16::MAX, 100);
        assert_eq!(grid.items_per_row, 6);
        assert_eq!(grid.item_width, MAX_ITEM_WIDTH);
    }

    #[test]
    fn test_columns_monotonic_and_bounded() {
        let mut previous = 1;
        for width in 0..=600 {
            let columns = compute_grid(width, 10).items_per_row;
            assert!((1..=6).contains(&columns));
            assert!(columns >= previous, "columns shrank at width {}", width);
            previous = columns;
        }
    }

    #[test]
    fn test_window_shifts_minimally() {
        // 31 lines leave room for exactly 2 rows
        assert_eq!(max_visible_rows(31), 2);

        let window = visible_rows(31, 5, 3);
        assert_eq!(window, RowWindow { first: 2, count: 2 });
        assert!(window.contains(3));
        assert!(!window.contains(4));
    }

    #[test]
    fn test_window_never_passes_the_end() {
        let window = visible_rows(31, 3, 2);
        assert_eq!(window, RowWindow { first: 1, count: 2 });

        let window = visible_rows(31, 1, 0);
        assert_eq!(window, RowWindow { first: 0, count: 1 });

        let window = visible_rows(31, 0, 0);
        assert_eq!(window.count, 0);
    }

    #[test]
    fn test_selected_row_always_visible() {
        for height in [0, 20, 31, 60, 120] {
            for total in 1..12 {
                for selected in 0..total {
                    let window = visible_rows(height, total, selected);
                    assert!(
                        window.contains(selected),
                        "row {} hidden (height {}, total {})",
                        selected,
                        height,
                        total
                    );
                }
            }
        }
    }

    #[test]
    fn test_list_page_size() {
        assert_eq!(max_visible_namespaces(0), 10);
        assert_eq!(max_visible_namespaces(24), 16);
        assert_eq!(max_visible_namespaces(100), 30);
    }

    #[test]
    fn test_log_window() {
        assert_eq!(max_visible_log_lines(24), 10);
        assert_eq!(max_visible_log_lines(50), 25);

        // Tail by default
        assert_eq!(log_window(100, 10, 0), 90..100);
        // Held back from the bottom
        assert_eq!(log_window(100, 10, 15), 75..85);
        // Clamped at the start
        assert_eq!(log_window(100, 10, 95), 0..10);
        assert_eq!(log_window(4, 10, 0), 0..4);
        assert_eq!(log_window(0, 10, 5), 0..0);
    }
}
