//! Grid rendering widget.
//!
//! Draws the demo grid's visible slice plus the floating proxy. Content
//! space maps 1:1 to terminal cells, so converting a slot frame to screen
//! coordinates is a subtract-scroll-and-clip.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as ScreenRect;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Widget};

use crate::host::{GridHost, VacancyDataSource};
use crate::integration::{DemoGrid, CELL_HEIGHT, CELL_WIDTH};
use crate::model::{GridIndex, Point, Rect};
use crate::view::styles::GridStyles;

/// The dragged item floating over the grid.
#[derive(Debug, Clone, Copy)]
pub struct DragOverlay<'a> {
    /// Proxy center, content space.
    pub position: Point,
    /// Dragged item's label, when known.
    pub label: Option<&'a str>,
}

/// Renders a [`DemoGrid`] viewport with an optional drag overlay.
pub struct GridView<'a> {
    grid: &'a DemoGrid,
    styles: &'a GridStyles,
    drag: Option<DragOverlay<'a>>,
}

impl<'a> GridView<'a> {
    /// A view over `grid` with no active drag.
    pub fn new(grid: &'a DemoGrid, styles: &'a GridStyles) -> Self {
        Self {
            grid,
            styles,
            drag: None,
        }
    }

    /// Attach the floating proxy overlay.
    pub fn with_drag(mut self, drag: DragOverlay<'a>) -> Self {
        self.drag = Some(drag);
        self
    }

    fn render_cell(&self, index: GridIndex, area: ScreenRect, buf: &mut Buffer) {
        let Some(frame) = self.grid.frame_of(index) else {
            return;
        };
        let Some(cell) = to_screen(frame, self.grid.scroll_offset(), area) else {
            return;
        };

        if self.grid.is_empty(index) {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.styles.empty_slot_style())
                .render(cell, buf);
            return;
        }

        Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.item_style())
            .render(cell, buf);
        if let Some(label) = self.grid.label_at(index) {
            draw_label(label, cell, self.styles.item_style(), buf);
        }
    }

    fn render_proxy(&self, drag: DragOverlay<'_>, area: ScreenRect, buf: &mut Buffer) {
        let frame = Rect::new(
            drag.position.x - CELL_WIDTH / 2.0,
            drag.position.y - CELL_HEIGHT / 2.0,
            CELL_WIDTH,
            CELL_HEIGHT,
        );
        let Some(cell) = to_screen(frame, self.grid.scroll_offset(), area) else {
            return;
        };

        Clear.render(cell, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(self.styles.proxy_style())
            .render(cell, buf);
        if let Some(label) = drag.label {
            draw_label(label, cell, self.styles.proxy_style(), buf);
        }
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: ScreenRect, buf: &mut Buffer) {
        for offset in 0..self.grid.slot_count() {
            let index = GridIndex::item(offset);
            if self.grid.is_hidden(index) {
                continue;
            }
            self.render_cell(index, area, buf);
        }

        // Proxy draws last so it floats above resting cells.
        if let Some(drag) = self.drag {
            self.render_proxy(drag, area, buf);
        }
    }
}

/// Convert a content-space frame to a screen rect clipped to `area`.
///
/// Returns `None` when the frame is entirely off-screen.
fn to_screen(frame: Rect, scroll: Point, area: ScreenRect) -> Option<ScreenRect> {
    let x = i32::from(area.x) + (frame.origin.x - scroll.x).round() as i32;
    let y = i32::from(area.y) + (frame.origin.y - scroll.y).round() as i32;
    let w = frame.size.width.round() as i32;
    let h = frame.size.height.round() as i32;

    let x1 = x.max(i32::from(area.x));
    let y1 = y.max(i32::from(area.y));
    let x2 = (x + w).min(i32::from(area.right()));
    let y2 = (y + h).min(i32::from(area.bottom()));
    if x2 <= x1 || y2 <= y1 {
        return None;
    }
    Some(ScreenRect::new(
        x1 as u16,
        y1 as u16,
        (x2 - x1) as u16,
        (y2 - y1) as u16,
    ))
}

fn draw_label(label: &str, cell: ScreenRect, style: ratatui::style::Style, buf: &mut Buffer) {
    let len = label.len() as u16;
    if cell.width < len + 2 || cell.height < 3 {
        return;
    }
    let x = cell.x + (cell.width - len) / 2;
    let y = cell.y + cell.height / 2;
    buf.set_string(x, y, label, style);
}

// ===== Tests =====
