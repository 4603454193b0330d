//! TUI rendering and terminal management (impure shell)

mod grid;
mod styles;

pub use grid::{DragOverlay, GridView};
pub use styles::{ColorConfig, GridStyles};

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
    Terminal,
};
use tracing::{debug, info};

use crate::config::ResolvedConfig;
use crate::host::{DragHooks, GridHost, NullScheduler};
use crate::integration::{DemoGrid, TermProxy};
use crate::model::{AppError, Point, Size};
use crate::state::{DragPhase, InteractionController};

/// Target cadence for the event loop; doubles as the autoscroll tick rate.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    grid: DemoGrid,
    controller: InteractionController<TermProxy>,
    styles: GridStyles,
    /// Last rendered grid area (for mouse position mapping)
    last_grid_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(config: &ResolvedConfig) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let grid = DemoGrid::new(config.rows, config.cols, config.empty_slots);
        let hooks = DragHooks::new(|_| TermProxy::new());
        let controller =
            InteractionController::new(config.reorder(), hooks, Box::new(NullScheduler::new()));

        info!(
            rows = config.rows,
            cols = config.cols,
            empty_slots = config.empty_slots,
            "grid initialized"
        );

        Ok(Self {
            terminal,
            grid,
            controller,
            styles: GridStyles::new(),
            last_grid_area: None,
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when the user quits. Each iteration delivers one frame tick
    /// to the controller (autoscroll), redraws, then drains input for up to
    /// one frame interval.
    pub fn run(&mut self) -> Result<(), AppError> {
        let mut last_tick = Instant::now();

        loop {
            let now = Instant::now();
            let dt = now - last_tick;
            last_tick = now;
            self.controller.on_frame(dt, &mut self.grid);

            self.draw()?;

            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        // The next draw recomputes the grid area and
                        // viewport from the new frame size.
                        self.last_grid_area = None;
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Handle a key event. Returns `true` to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.controller.cancel_drag(&mut self.grid);
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.cancel_drag(&mut self.grid);
                true
            }
            KeyCode::Esc => {
                if self.controller.phase() == DragPhase::Dragging {
                    self.controller.cancel_drag(&mut self.grid);
                    false
                } else {
                    true
                }
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(position) = self.content_position(mouse.column, mouse.row) else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.grid.index_at(position) {
                    self.controller.begin_drag(index, &mut self.grid);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.controller.update_drag(position, &mut self.grid);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.controller.end_drag(&mut self.grid);
            }
            _ => {}
        }
    }

    /// Map a screen cell to its content-space center.
    ///
    /// Positions outside the grid area still map (drag events past the
    /// edge feed the autoscroll decision); only a never-drawn grid yields
    /// `None`.
    fn content_position(&self, column: u16, row: u16) -> Option<Point> {
        let area = self.last_grid_area?;
        let scroll = self.grid.scroll_offset();
        Some(Point::new(
            f64::from(column) - f64::from(area.x) + 0.5 + scroll.x,
            f64::from(row) - f64::from(area.y) + 0.5 + scroll.y,
        ))
    }

    /// Render one frame.
    fn draw(&mut self) -> Result<(), AppError> {
        let Self {
            terminal,
            grid,
            controller,
            styles,
            last_grid_area,
        } = self;

        terminal.draw(|frame| {
            let chunks = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

            let grid_area = chunks[1];
            if *last_grid_area != Some(grid_area) {
                grid.set_viewport(Size::new(
                    f64::from(grid_area.width),
                    f64::from(grid_area.height),
                ));
                *last_grid_area = Some(grid_area);
            }

            frame.render_widget(
                Paragraph::new(" gridshift - drag cells with the mouse")
                    .style(styles.chrome_style()),
                chunks[0],
            );

            let mut view = GridView::new(grid, styles);
            if let Some(position) = controller.proxy_position() {
                let label = controller.source_index().and_then(|i| grid.label_at(i));
                view = view.with_drag(DragOverlay { position, label });
            }
            frame.render_widget(view, grid_area);

            frame.render_widget(
                Paragraph::new(" q quit · esc cancel drag").style(styles.chrome_style()),
                chunks[2],
            );
        })?;

        Ok(())
    }
}

/// Run the demo against the real terminal, restoring it on the way out.
pub fn run(config: &ResolvedConfig) -> Result<(), AppError> {
    let mut app = TuiApp::new(config)?;
    let run_result = app.run();
    let restore_result = restore_terminal();
    run_result?;
    restore_result
}

fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}
