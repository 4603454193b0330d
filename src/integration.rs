//! Demo grid host (pure core).
//!
//! [`DemoGrid`] is the in-memory grid the demo binary drags items around
//! in: a single section of labeled slots laid out row-major on a fixed
//! cell raster, in content-space units that map 1:1 to terminal cells.
//! It implements both collaborator traits, so a `&mut DemoGrid` is a
//! complete [`ReorderHost`](crate::host::ReorderHost). Everything here is
//! testable without a terminal.

use std::collections::HashSet;

use crate::host::{GridHost, ProxyExtent, VacancyDataSource};
use crate::model::{GridIndex, Point, Rect, Size};

/// Terminal columns per grid cell.
pub const CELL_WIDTH: f64 = 10.0;

/// Terminal rows per grid cell.
pub const CELL_HEIGHT: f64 = 5.0;

/// A single-section grid of labeled slots with explicit empty slots.
#[derive(Debug, Clone)]
pub struct DemoGrid {
    /// Slot contents in layout order; `None` is an empty slot.
    labels: Vec<Option<String>>,
    cols: usize,
    hidden: HashSet<GridIndex>,
    viewport: Size,
    scroll: Point,
}

impl DemoGrid {
    /// Build a `rows × cols` grid with `empty_slots` vacancies spread at
    /// even intervals and numbered labels everywhere else.
    pub fn new(rows: u16, cols: u16, empty_slots: u16) -> Self {
        let total = usize::from(rows) * usize::from(cols);
        let empty = usize::from(empty_slots).min(total);

        let mut vacancies = HashSet::new();
        if empty > 0 {
            let step = total / (empty + 1);
            for k in 1..=empty {
                vacancies.insert((k * step).min(total - 1));
            }
        }

        let mut labels = Vec::with_capacity(total);
        let mut next_label = 1usize;
        for offset in 0..total {
            if vacancies.contains(&offset) {
                labels.push(None);
            } else {
                labels.push(Some(format!("{next_label:02}")));
                next_label += 1;
            }
        }

        Self {
            labels,
            cols: usize::from(cols).max(1),
            hidden: HashSet::new(),
            viewport: Size::new(
                f64::from(cols) * CELL_WIDTH,
                f64::from(rows) * CELL_HEIGHT,
            ),
            scroll: Point::ZERO,
        }
    }

    /// Resize the visible viewport (terminal resize).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        // Re-clamp so a grown terminal doesn't leave the view past the end.
        let offset = self.scroll;
        self.set_scroll_offset(offset);
    }

    /// Total slot count (occupied + empty).
    pub fn slot_count(&self) -> usize {
        self.labels.len()
    }

    /// Column count of the layout raster.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Label of the slot at `index`, if occupied.
    pub fn label_at(&self, index: GridIndex) -> Option<&str> {
        self.labels.get(index.offset())?.as_deref()
    }

    /// Whether the resting cell at `index` is currently hidden.
    pub fn is_hidden(&self, index: GridIndex) -> bool {
        self.hidden.contains(&index)
    }

    fn max_scroll(&self) -> Point {
        let content = self.content_extent();
        Point::new(
            (content.width - self.viewport.width).max(0.0),
            (content.height - self.viewport.height).max(0.0),
        )
    }
}

impl GridHost for DemoGrid {
    fn index_at(&self, position: Point) -> Option<GridIndex> {
        if position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        let col = (position.x / CELL_WIDTH) as usize;
        let row = (position.y / CELL_HEIGHT) as usize;
        if col >= self.cols {
            return None;
        }
        let offset = row * self.cols + col;
        (offset < self.labels.len()).then(|| GridIndex::item(offset))
    }

    fn frame_of(&self, index: GridIndex) -> Option<Rect> {
        let offset = index.offset();
        if index.section() != 0 || offset >= self.labels.len() {
            return None;
        }
        let col = offset % self.cols;
        let row = offset / self.cols;
        Some(Rect::new(
            col as f64 * CELL_WIDTH,
            row as f64 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        ))
    }

    fn item_count(&self, section: usize) -> usize {
        if section == 0 {
            self.labels.len()
        } else {
            0
        }
    }

    fn apply_move(&mut self, from: GridIndex, to: GridIndex) {
        let label = self.labels.remove(from.offset());
        self.labels.insert(to.offset(), label);
    }

    fn set_item_hidden(&mut self, index: GridIndex, hidden: bool) {
        if hidden {
            self.hidden.insert(index);
        } else {
            self.hidden.remove(&index);
        }
    }

    fn viewport_extent(&self) -> Size {
        self.viewport
    }

    fn content_extent(&self) -> Size {
        let rows = self.labels.len().div_ceil(self.cols);
        Size::new(self.cols as f64 * CELL_WIDTH, rows as f64 * CELL_HEIGHT)
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: Point) {
        let max = self.max_scroll();
        self.scroll = Point::new(
            offset.x.clamp(0.0, max.x),
            offset.y.clamp(0.0, max.y),
        );
    }
}

impl VacancyDataSource for DemoGrid {
    fn is_empty(&self, index: GridIndex) -> bool {
        self.labels
            .get(index.offset())
            .is_some_and(Option::is_none)
    }

    fn apply_swap(&mut self, a: GridIndex, b: GridIndex) {
        self.labels.swap(a.offset(), b.offset());
    }
}

/// The demo's floating proxy: one grid cell's worth of screen.
///
/// Carries no state of its own; the renderer draws the dragged item's
/// label by looking it up at the controller's current source index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermProxy;

impl TermProxy {
    /// A cell-sized proxy.
    pub fn new() -> Self {
        Self
    }
}

impl ProxyExtent for TermProxy {
    fn extent(&self) -> Size {
        Size::new(CELL_WIDTH, CELL_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Seeding =====

    #[test]
    fn new_seeds_requested_vacancy_count() {
        let grid = DemoGrid::new(6, 8, 3);
        let empties = (0..grid.slot_count())
            .filter(|&i| grid.is_empty(GridIndex::item(i)))
            .count();
        assert_eq!(grid.slot_count(), 48);
        assert_eq!(empties, 3);
    }

    #[test]
    fn new_numbers_occupied_slots_sequentially() {
        let grid = DemoGrid::new(2, 3, 1);
        let labels: Vec<_> = (0..grid.slot_count())
            .filter_map(|i| grid.label_at(GridIndex::item(i)))
            .collect();
        assert_eq!(labels, vec!["01", "02", "03", "04", "05"]);
    }

    #[test]
    fn new_caps_vacancies_at_grid_size() {
        let grid = DemoGrid::new(1, 2, 10);
        let empties = (0..grid.slot_count())
            .filter(|&i| grid.is_empty(GridIndex::item(i)))
            .count();
        assert_eq!(empties, 2);
    }

    // ===== Geometry =====

    #[test]
    fn index_at_maps_cell_interior_to_offset() {
        let grid = DemoGrid::new(2, 3, 0);
        // Row 1, column 2.
        let hit = grid.index_at(Point::new(2.5 * CELL_WIDTH, 1.5 * CELL_HEIGHT));
        assert_eq!(hit, Some(GridIndex::item(5)));
    }

    #[test]
    fn index_at_rejects_positions_outside_the_raster() {
        let grid = DemoGrid::new(2, 3, 0);
        assert_eq!(grid.index_at(Point::new(-1.0, 2.0)), None);
        assert_eq!(grid.index_at(Point::new(3.5 * CELL_WIDTH, 2.0)), None);
        assert_eq!(grid.index_at(Point::new(2.0, 5.0 * CELL_HEIGHT)), None);
    }

    #[test]
    fn frame_of_matches_index_at() {
        let grid = DemoGrid::new(3, 3, 0);
        let index = GridIndex::item(7);
        let frame = grid.frame_of(index).expect("laid out");
        assert_eq!(grid.index_at(frame.center()), Some(index));
    }

    #[test]
    fn frame_of_unknown_index_is_none() {
        let grid = DemoGrid::new(2, 2, 0);
        assert_eq!(grid.frame_of(GridIndex::item(4)), None);
        assert_eq!(grid.frame_of(GridIndex::new(1, 0)), None);
    }

    #[test]
    fn content_extent_covers_partial_last_row() {
        let mut grid = DemoGrid::new(2, 3, 0);
        // 7 slots over 3 columns needs 3 rows.
        grid.labels.push(Some("07".to_string()));
        let content = grid.content_extent();
        assert_eq!(content.height, 3.0 * CELL_HEIGHT);
    }

    // ===== Mutation =====

    #[test]
    fn apply_move_shifts_intervening_labels() {
        let mut grid = DemoGrid::new(1, 4, 0);
        grid.apply_move(GridIndex::item(0), GridIndex::item(2));
        let labels: Vec<_> = (0..4)
            .map(|i| grid.label_at(GridIndex::item(i)).unwrap().to_string())
            .collect();
        assert_eq!(labels, vec!["02", "03", "01", "04"]);
    }

    #[test]
    fn apply_swap_trades_occupancy() {
        let mut grid = DemoGrid::new(1, 3, 1);
        let vacancy = (0..3)
            .find(|&i| grid.is_empty(GridIndex::item(i)))
            .expect("seeded vacancy");
        let occupied = (0..3)
            .find(|&i| !grid.is_empty(GridIndex::item(i)))
            .expect("occupied slot");

        grid.apply_swap(GridIndex::item(occupied), GridIndex::item(vacancy));

        assert!(grid.is_empty(GridIndex::item(occupied)));
        assert!(!grid.is_empty(GridIndex::item(vacancy)));
    }

    #[test]
    fn hidden_markers_are_index_addressed() {
        let mut grid = DemoGrid::new(1, 3, 0);
        grid.set_item_hidden(GridIndex::item(1), true);
        assert!(grid.is_hidden(GridIndex::item(1)));
        grid.set_item_hidden(GridIndex::item(1), false);
        assert!(!grid.is_hidden(GridIndex::item(1)));
    }

    // ===== Scrolling =====

    #[test]
    fn scroll_offset_clamps_to_scrollable_range() {
        let mut grid = DemoGrid::new(6, 2, 0);
        grid.set_viewport(Size::new(2.0 * CELL_WIDTH, 2.0 * CELL_HEIGHT));

        grid.set_scroll_offset(Point::new(0.0, 100.0 * CELL_HEIGHT));
        assert_eq!(grid.scroll_offset(), Point::new(0.0, 4.0 * CELL_HEIGHT));

        grid.set_scroll_offset(Point::new(-5.0, -5.0));
        assert_eq!(grid.scroll_offset(), Point::ZERO);
    }

    #[test]
    fn growing_the_viewport_reclamps_the_offset() {
        let mut grid = DemoGrid::new(6, 2, 0);
        grid.set_viewport(Size::new(2.0 * CELL_WIDTH, 2.0 * CELL_HEIGHT));
        grid.set_scroll_offset(Point::new(0.0, 4.0 * CELL_HEIGHT));

        grid.set_viewport(Size::new(2.0 * CELL_WIDTH, 6.0 * CELL_HEIGHT));
        assert_eq!(grid.scroll_offset(), Point::ZERO);
    }
}
