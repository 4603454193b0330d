//! Drag session state.
//!
//! A [`DragSession`] exists only while a drag is in flight. It owns the
//! floating proxy element for the session's lifetime and tracks the dragged
//! item's logical index, which advances with every applied reorder
//! instruction independently of any animation still settling on screen.

use crate::model::{GridIndex, Point};

/// Lifecycle phase of the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in flight.
    #[default]
    Idle,
    /// A session is live and tracking position updates.
    Dragging,
    /// End/cancel received; waiting for the finish animation to settle.
    Finishing,
}

/// State of a single in-flight drag gesture.
///
/// At most one session exists at a time; the controller refuses a second
/// begin-request while any session is alive (in `Dragging` *or*
/// `Finishing`).
#[derive(Debug)]
pub struct DragSession<E> {
    /// Logical index of the dragged item, updated on every applied
    /// instruction.
    pub(crate) source_index: GridIndex,
    /// Proxy position in content space, updated on every drag-move and
    /// shifted by autoscroll ticks.
    pub(crate) proxy_position: Point,
    /// The floating proxy element, owned for the session's lifetime.
    pub(crate) proxy: E,
}

impl<E> DragSession<E> {
    /// Open a session for the item at `source_index`.
    pub(crate) fn new(source_index: GridIndex, proxy_position: Point, proxy: E) -> Self {
        Self {
            source_index,
            proxy_position,
            proxy,
        }
    }

    /// The dragged item's current logical index.
    pub fn source_index(&self) -> GridIndex {
        self.source_index
    }

    /// The proxy's current content-space position.
    pub fn proxy_position(&self) -> Point {
        self.proxy_position
    }

    /// The proxy element.
    pub fn proxy(&self) -> &E {
        &self.proxy
    }
}
