//! Shared unit-test fixtures.
//!
//! `GridFixture` is an in-memory single-section grid: a `Vec<Option<char>>`
//! backing store (`None` = empty slot) laid out row-major over uniform
//! cells, implementing both collaborator traits. Mutations are recorded so
//! tests can assert on the exact instruction traffic, not just the end
//! state.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{FrameScheduler, GridHost, ProxyExtent, VacancyDataSource};
use crate::model::{GridIndex, Point, Rect, Size};

/// Proxy stand-in with a fixed extent.
#[derive(Debug, Clone, Copy)]
pub struct TestProxy {
    pub extent: Size,
}

impl TestProxy {
    pub fn square(side: f64) -> Self {
        Self {
            extent: Size::new(side, side),
        }
    }
}

impl ProxyExtent for TestProxy {
    fn extent(&self) -> Size {
        self.extent
    }
}

/// In-memory uniform grid implementing `GridHost` + `VacancyDataSource`.
pub struct GridFixture {
    pub slots: Vec<Option<char>>,
    pub cols: usize,
    pub cell: Size,
    pub viewport: Size,
    pub scroll: Point,
    pub undraggable: Vec<GridIndex>,
    /// Log of `set_item_hidden` calls.
    pub hidden_calls: Vec<(GridIndex, bool)>,
    /// Log of `apply_move` calls.
    pub moves: Vec<(GridIndex, GridIndex)>,
    /// Log of `apply_swap` calls.
    pub swaps: Vec<(GridIndex, GridIndex)>,
}

impl GridFixture {
    /// Build from a slot spec (`'_'` = empty) laid out `cols` per row with
    /// 10x10 cells and a viewport covering the whole content.
    pub fn new(spec: &str, cols: usize) -> Self {
        let slots: Vec<Option<char>> = spec
            .chars()
            .map(|c| if c == '_' { None } else { Some(c) })
            .collect();
        let cell = Size::new(10.0, 10.0);
        let rows = slots.len().div_ceil(cols);
        let viewport = Size::new(cols as f64 * cell.width, rows as f64 * cell.height);
        Self {
            slots,
            cols,
            cell,
            viewport,
            scroll: Point::ZERO,
            undraggable: Vec::new(),
            hidden_calls: Vec::new(),
            moves: Vec::new(),
            swaps: Vec::new(),
        }
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn with_scroll(mut self, x: f64, y: f64) -> Self {
        self.scroll = Point::new(x, y);
        self
    }

    /// Content rendered back to the spec format, for order assertions.
    pub fn spec(&self) -> String {
        self.slots.iter().map(|s| s.unwrap_or('_')).collect()
    }

    /// Center of the cell at `item`, for synthesizing drag positions.
    pub fn center_of(&self, item: usize) -> Point {
        self.frame_of(GridIndex::item(item))
            .map(|f| f.center())
            .unwrap_or(Point::ZERO)
    }

    /// Indices currently reported hidden (last write wins).
    pub fn currently_hidden(&self) -> Vec<GridIndex> {
        let mut hidden = Vec::new();
        for &(idx, flag) in &self.hidden_calls {
            hidden.retain(|&h| h != idx);
            if flag {
                hidden.push(idx);
            }
        }
        hidden
    }
}

impl GridHost for GridFixture {
    fn index_at(&self, position: Point) -> Option<GridIndex> {
        if position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        let col = (position.x / self.cell.width) as usize;
        let row = (position.y / self.cell.height) as usize;
        if col >= self.cols {
            return None;
        }
        let item = row * self.cols + col;
        (item < self.slots.len()).then(|| GridIndex::item(item))
    }

    fn frame_of(&self, index: GridIndex) -> Option<Rect> {
        (index.section() == 0 && index.offset() < self.slots.len()).then(|| {
            Rect::new(
                (index.offset() % self.cols) as f64 * self.cell.width,
                (index.offset() / self.cols) as f64 * self.cell.height,
                self.cell.width,
                self.cell.height,
            )
        })
    }

    fn item_count(&self, section: usize) -> usize {
        if section == 0 {
            self.slots.len()
        } else {
            0
        }
    }

    fn is_draggable(&self, index: GridIndex) -> bool {
        !self.undraggable.contains(&index)
    }

    fn apply_move(&mut self, from: GridIndex, to: GridIndex) {
        let item = self.slots.remove(from.offset());
        self.slots.insert(to.offset(), item);
        self.moves.push((from, to));
    }

    fn set_item_hidden(&mut self, index: GridIndex, hidden: bool) {
        self.hidden_calls.push((index, hidden));
    }

    fn viewport_extent(&self) -> Size {
        self.viewport
    }

    fn content_extent(&self) -> Size {
        let rows = self.slots.len().div_ceil(self.cols);
        Size::new(
            self.cols as f64 * self.cell.width,
            rows as f64 * self.cell.height,
        )
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: Point) {
        self.scroll = offset;
    }
}

impl VacancyDataSource for GridFixture {
    fn is_empty(&self, index: GridIndex) -> bool {
        index.section() == 0
            && self
                .slots
                .get(index.offset())
                .is_some_and(|slot| slot.is_none())
    }

    fn apply_swap(&mut self, a: GridIndex, b: GridIndex) {
        self.slots.swap(a.offset(), b.offset());
        self.swaps.push((a, b));
    }
}

/// Observable scheduler state shared with [`SchedulerProbe`].
#[derive(Debug, Default)]
pub struct ProbeState {
    pub started: bool,
    pub starts: usize,
    pub stops: usize,
}

/// Recording `FrameScheduler` for asserting start/stop traffic.
#[derive(Debug, Clone, Default)]
pub struct SchedulerProbe {
    state: Rc<RefCell<ProbeState>>,
}

impl SchedulerProbe {
    /// The probe and a shared handle onto its recorded state.
    pub fn new() -> (Self, Rc<RefCell<ProbeState>>) {
        let probe = Self::default();
        let state = Rc::clone(&probe.state);
        (probe, state)
    }
}

impl FrameScheduler for SchedulerProbe {
    fn start(&mut self) {
        let mut state = self.state.borrow_mut();
        state.started = true;
        state.starts += 1;
    }

    fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.started = false;
        state.stops += 1;
    }
}
