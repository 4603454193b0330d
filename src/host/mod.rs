//! Collaborator interfaces consumed by the interaction core.
//!
//! The controller never touches the backing collection or the screen
//! directly. Everything it needs from the integrating view arrives through
//! the traits here, passed by reference per call — the controller holds no
//! collaborator and never extends one's lifetime.
//!
//! The split mirrors the integration surface: [`GridHost`] is what any
//! grid-like view already knows (geometry, scroll state, item moves), while
//! [`VacancyDataSource`] is the two-method delegate that makes empty slots
//! first-class drop targets.

use crate::model::{GridIndex, Point, Rect, Size};

/// Geometry, scroll state, and mutation surface of the hosting grid view.
///
/// Geometry queries return `Option`: a position between cells or an index
/// with no laid-out frame is "no actionable target this tick", never an
/// error.
pub trait GridHost {
    /// The index occupying `position` (content-space), if any.
    fn index_at(&self, position: Point) -> Option<GridIndex>;

    /// The laid-out frame of `index` (content-space), if known.
    fn frame_of(&self, index: GridIndex) -> Option<Rect>;

    /// Number of items in `section`, bounding the engine's rightward scan.
    fn item_count(&self, section: usize) -> usize;

    /// Gate on drag-begin. Defaults to everything draggable.
    fn is_draggable(&self, _index: GridIndex) -> bool {
        true
    }

    /// Relocate a single element, `from` → `to`.
    ///
    /// Implementations must update the data model and any visual
    /// representation together, as one atomic batch.
    fn apply_move(&mut self, from: GridIndex, to: GridIndex);

    /// Hide or reveal the resting cell at `index`.
    ///
    /// The controller keeps the hidden marker on the dragged item's
    /// logical index for the whole session: it re-issues hide/unhide
    /// pairs as instructions move the item, so implementations only need
    /// index-addressed visibility.
    fn set_item_hidden(&mut self, index: GridIndex, hidden: bool);

    /// Visible viewport extent.
    fn viewport_extent(&self) -> Size;

    /// Total scrollable content extent.
    fn content_extent(&self) -> Size;

    /// Current scroll offset (top-left of the viewport in content space).
    fn scroll_offset(&self) -> Point;

    /// Move the viewport. Called only with offsets already clamped to
    /// `[0, content − viewport]` per axis.
    fn set_scroll_offset(&mut self, offset: Point);
}

/// The required vacancy delegate: which slots are empty, and how to trade
/// emptiness between two slots.
pub trait VacancyDataSource {
    /// Whether `index` is an empty slot (a valid drop target with no
    /// content). Queried fresh on every reorder evaluation, never cached.
    fn is_empty(&self, index: GridIndex) -> bool;

    /// Exchange the emptiness/occupancy roles of two slots.
    ///
    /// This is a data-model exchange; it need not move visual cells (the
    /// controller issues the visual relocation separately via
    /// [`GridHost::apply_move`] when one is required).
    fn apply_swap(&mut self, a: GridIndex, b: GridIndex);
}

/// Union collaborator passed to every controller call.
///
/// Blanket-implemented so one host object (or a test harness) can carry
/// both roles behind a single `&mut dyn ReorderHost`.
pub trait ReorderHost: GridHost + VacancyDataSource {}

impl<T: GridHost + VacancyDataSource> ReorderHost for T {}

/// Implemented by proxy element types so the autoscroll controller can
/// derive its default edge insets (half the proxy extent per axis).
pub trait ProxyExtent {
    /// On-screen extent of the proxy element.
    fn extent(&self) -> Size;
}

/// Abstract periodic-task primitive for the autoscroll tick.
///
/// `start` schedules the integrator to call
/// [`InteractionController::on_frame`](crate::state::InteractionController::on_frame)
/// at its native frame cadence until `stop`. Ticks never overlap: the whole
/// system is single-threaded and each tick runs to completion before the
/// next is delivered.
pub trait FrameScheduler {
    /// Begin delivering frame ticks. Idempotent.
    fn start(&mut self);

    /// Stop delivering frame ticks. Idempotent.
    fn stop(&mut self);
}

/// How a drag gesture ended, passed to the finish hook so integrator policy
/// can differ cosmetically. The controller itself treats both the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The gesture ended normally; the item rests at its final index.
    Committed,
    /// The gesture was cancelled by the integrator.
    Cancelled,
}

/// Whether a finish animation completed synchronously or is still running.
///
/// `Pending` defers session teardown until the integrator calls
/// [`InteractionController::finish_animation_done`](crate::state::InteractionController::finish_animation_done)
/// — the single-threaded rendition of a completion callback invoked exactly
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Animation finished (or there was none); tear down now.
    Completed,
    /// Animation still running; teardown is gated on `finish_animation_done`.
    Pending,
}

/// Creation function for the floating proxy element.
pub type CreateProxyFn<E> = Box<dyn FnMut(GridIndex) -> E>;

/// Begin-drag animation hook. Side effect only; never gates the state
/// machine (the drag is live before any lift animation settles).
pub type BeginDragFn<E> = Box<dyn FnMut(&mut E, GridIndex)>;

/// Finish-drag animation hook. Receives the resolved target frame (`None`
/// when geometry cannot resolve it) and the outcome.
pub type FinishDragFn<E> = Box<dyn FnMut(&mut E, GridIndex, Option<Rect>, DragOutcome) -> AnimationStatus>;

/// Pluggable proxy-creation and animation strategies.
///
/// Replaceable before a session starts, never mid-session: the controller
/// takes the hooks at construction and a live session always finishes with
/// the hooks it began with.
pub struct DragHooks<E> {
    pub(crate) create_proxy: CreateProxyFn<E>,
    pub(crate) on_begin: BeginDragFn<E>,
    pub(crate) on_finish: FinishDragFn<E>,
}

impl<E> DragHooks<E> {
    /// Hooks with the given proxy factory and no-op animations.
    ///
    /// The default finish hook reports [`AnimationStatus::Completed`], so
    /// teardown is synchronous unless the integrator installs an animated
    /// finish.
    pub fn new(create_proxy: impl FnMut(GridIndex) -> E + 'static) -> Self {
        Self {
            create_proxy: Box::new(create_proxy),
            on_begin: Box::new(|_, _| {}),
            on_finish: Box::new(|_, _, _, _| AnimationStatus::Completed),
        }
    }

    /// Replace the begin-drag animation hook.
    pub fn with_on_begin(mut self, hook: impl FnMut(&mut E, GridIndex) + 'static) -> Self {
        self.on_begin = Box::new(hook);
        self
    }

    /// Replace the finish-drag animation hook.
    pub fn with_on_finish(
        mut self,
        hook: impl FnMut(&mut E, GridIndex, Option<Rect>, DragOutcome) -> AnimationStatus + 'static,
    ) -> Self {
        self.on_finish = Box::new(hook);
        self
    }
}

impl<E> std::fmt::Debug for DragHooks<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragHooks").finish_non_exhaustive()
    }
}

/// A [`FrameScheduler`] that only tracks whether ticks are wanted.
///
/// Suits integrators whose event loop already runs at frame cadence (the
/// demo's crossterm poll loop): they check [`NullScheduler::is_started`]
/// each frame and call `on_frame` while it holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullScheduler {
    started: bool,
}

impl NullScheduler {
    /// A stopped scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether ticks are currently wanted.
    pub fn is_started(&self) -> bool {
        self.started
    }
}

impl FrameScheduler for NullScheduler {
    fn start(&mut self) {
        self.started = true;
    }

    fn stop(&mut self) {
        self.started = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Size;

    struct StubProxy;

    impl ProxyExtent for StubProxy {
        fn extent(&self) -> Size {
            Size::new(8.0, 8.0)
        }
    }

    #[test]
    fn default_hooks_complete_synchronously() {
        let mut hooks: DragHooks<StubProxy> = DragHooks::new(|_| StubProxy);
        let mut proxy = (hooks.create_proxy)(GridIndex::item(0));
        (hooks.on_begin)(&mut proxy, GridIndex::item(0));
        let status = (hooks.on_finish)(&mut proxy, GridIndex::item(0), None, DragOutcome::Committed);
        assert_eq!(status, AnimationStatus::Completed);
    }

    #[test]
    fn replaced_finish_hook_is_used() {
        let mut hooks: DragHooks<StubProxy> =
            DragHooks::new(|_| StubProxy).with_on_finish(|_, _, _, _| AnimationStatus::Pending);
        let mut proxy = (hooks.create_proxy)(GridIndex::item(1));
        let status = (hooks.on_finish)(&mut proxy, GridIndex::item(1), None, DragOutcome::Cancelled);
        assert_eq!(status, AnimationStatus::Pending);
    }

    #[test]
    fn null_scheduler_tracks_start_stop() {
        let mut sched = NullScheduler::new();
        assert!(!sched.is_started());
        sched.start();
        sched.start();
        assert!(sched.is_started());
        sched.stop();
        assert!(!sched.is_started());
    }
}
