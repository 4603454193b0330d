//! Top-level drag interaction state machine.
//!
//! Orchestrates a single drag lifecycle: begin, position updates (reorder
//! evaluation then autoscroll evaluation), end/cancel, and the deferred
//! teardown behind an asynchronous finish animation. Runs synchronously to
//! completion inside each event callback; the only suspension points are
//! the finish-animation gate and the periodic autoscroll tick.
//!
//! The controller never reads or writes the backing collection itself.
//! Every mutation flows through the engine's instructions into the
//! [`ReorderHost`] collaborator, which is passed by reference per call.

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::ReorderConfig;
use crate::host::{
    AnimationStatus, DragHooks, DragOutcome, FrameScheduler, ProxyExtent, ReorderHost,
};
use crate::model::{EdgeInsets, GridIndex, Point, ReorderInstruction, Vector};
use crate::state::autoscroll::{AutoScrollController, ScrollContext, TickCommand};
use crate::state::engine;
use crate::state::session::{DragPhase, DragSession};

/// Drag lifecycle state machine, generic over the proxy element type.
///
/// # Re-entrancy
///
/// At most one [`DragSession`] exists at a time. A begin-request while any
/// session is alive (dragging *or* finishing) fails with `false` rather
/// than queueing. Update/end/cancel events with no live session are silent
/// no-ops, which absorbs gesture events racing the finish-animation
/// completion.
pub struct InteractionController<E> {
    config: ReorderConfig,
    hooks: DragHooks<E>,
    scheduler: Box<dyn FrameScheduler>,
    autoscroll: AutoScrollController,
    phase: DragPhase,
    session: Option<DragSession<E>>,
}

impl<E: ProxyExtent> InteractionController<E> {
    /// Build a controller from configuration, hooks, and the integrator's
    /// frame scheduler.
    pub fn new(
        config: ReorderConfig,
        hooks: DragHooks<E>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Self {
        Self {
            config,
            hooks,
            scheduler,
            autoscroll: AutoScrollController::new(),
            phase: DragPhase::Idle,
            session: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The dragged item's logical index, while a session is live.
    pub fn source_index(&self) -> Option<GridIndex> {
        self.session.as_ref().map(DragSession::source_index)
    }

    /// The proxy's content-space position, while a session is live.
    pub fn proxy_position(&self) -> Option<Point> {
        self.session.as_ref().map(DragSession::proxy_position)
    }

    /// The proxy element, while a session is live.
    pub fn proxy(&self) -> Option<&E> {
        self.session.as_ref().map(DragSession::proxy)
    }

    /// Current autoscroll velocity (zero when idle).
    pub fn scroll_velocity(&self) -> Vector {
        self.autoscroll.velocity()
    }

    /// Start a drag on the item at `index`.
    ///
    /// Returns `false` — with no state change — when a session is already
    /// active or the host reports the item non-draggable. On success the
    /// proxy element is created and centered over the source frame, the
    /// resting cell is hidden, and the begin-animation hook fires (side
    /// effect only; it does not gate the state machine).
    pub fn begin_drag(&mut self, index: GridIndex, host: &mut dyn ReorderHost) -> bool {
        if self.phase != DragPhase::Idle || self.session.is_some() {
            trace!(%index, phase = ?self.phase, "begin rejected: session active");
            return false;
        }
        if !host.is_draggable(index) {
            trace!(%index, "begin rejected: not draggable");
            return false;
        }

        let proxy = (self.hooks.create_proxy)(index);
        let position = host
            .frame_of(index)
            .map(|frame| frame.center())
            .unwrap_or(Point::ZERO);

        host.set_item_hidden(index, true);

        let mut session = DragSession::new(index, position, proxy);
        (self.hooks.on_begin)(&mut session.proxy, index);
        self.session = Some(session);
        self.phase = DragPhase::Dragging;

        debug!(%index, "drag began");
        true
    }

    /// Process a drag-move to `position` (content space).
    ///
    /// Sets the proxy position, runs one reorder evaluation, then one
    /// autoscroll evaluation — in that order. A no-op when no session is
    /// dragging (stale events after end/cancel).
    pub fn update_drag(&mut self, position: Point, host: &mut dyn ReorderHost) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.proxy_position = position;
        let current = session.source_index;

        if let Some(target) = host.index_at(position) {
            let item_count = host.item_count(target.section());
            let instruction =
                engine::evaluate(current, target, item_count, |idx| host.is_empty(idx));
            if let Some(instruction) = instruction {
                self.apply_instruction(instruction, host);
            }
        }

        self.evaluate_autoscroll(position, host);
    }

    /// End the drag normally. See [`Self::cancel_drag`]; the two share the
    /// finishing path and differ only in the [`DragOutcome`] handed to the
    /// finish hook.
    pub fn end_drag(&mut self, host: &mut dyn ReorderHost) {
        self.finish(DragOutcome::Committed, host);
    }

    /// Cancel the drag. Immediate and synchronous: the autoscroll tick is
    /// stopped inside this transition, not on a future tick. Idempotent —
    /// a cancel with no live session is a no-op.
    pub fn cancel_drag(&mut self, host: &mut dyn ReorderHost) {
        self.finish(DragOutcome::Cancelled, host);
    }

    /// Complete a deferred finish animation.
    ///
    /// Called by the integrator exactly once after the finish hook returned
    /// [`AnimationStatus::Pending`]. Tears the session down and returns to
    /// `Idle`. A call with nothing pending is a stale-event no-op.
    pub fn finish_animation_done(&mut self, host: &mut dyn ReorderHost) {
        if self.phase != DragPhase::Finishing {
            return;
        }
        self.teardown(host);
    }

    /// Deliver one autoscroll tick of length `dt`.
    ///
    /// Displaces the scroll offset by `velocity × dt` (clamped to the
    /// scrollable range) and shifts the proxy with it so the proxy holds
    /// its on-screen position. Never re-runs reorder evaluation — that
    /// happens only on drag-update events. A no-op unless a session is
    /// dragging with the tick scheduled.
    pub fn on_frame(&mut self, dt: Duration, host: &mut dyn ReorderHost) {
        if self.phase != DragPhase::Dragging || !self.autoscroll.is_active() {
            return;
        }

        let ctx = ScrollContext {
            viewport: host.viewport_extent(),
            content: host.content_extent(),
            offset: host.scroll_offset(),
        };
        let delta = self.autoscroll.tick(dt, &ctx);
        if delta.is_zero() {
            return;
        }

        host.set_scroll_offset(ctx.offset + delta);
        if let Some(session) = self.session.as_mut() {
            session.proxy_position += delta;
        }
        trace!(dx = delta.dx, dy = delta.dy, "autoscroll tick");
    }

    // ===== Private =====

    /// Apply an engine instruction through the host and advance the
    /// session's logical index to the instruction's destination.
    fn apply_instruction(&mut self, instruction: ReorderInstruction, host: &mut dyn ReorderHost) {
        match instruction {
            ReorderInstruction::Swap { a, b } => {
                host.apply_swap(a, b);
            }
            ReorderInstruction::Move { from, to } => {
                host.apply_move(from, to);
            }
            ReorderInstruction::SwapThenMove { vacancy, from, to } => {
                // The swap parks the emptiness at the drag origin; the
                // dragged item then moves out of the vacancy slot.
                host.apply_swap(from, vacancy);
                host.apply_move(vacancy, to);
            }
        }

        // The resting cell under the proxy stays hidden; the marker follows
        // the dragged item's logical index.
        let destination = instruction.destination();
        if let Some(session) = self.session.as_mut() {
            host.set_item_hidden(session.source_index, false);
            host.set_item_hidden(destination, true);
            session.source_index = destination;
        }
        debug!(?instruction, "applied reorder instruction");
    }

    /// Re-run the autoscroll decision and apply its scheduling command.
    fn evaluate_autoscroll(&mut self, position: Point, host: &mut dyn ReorderHost) {
        let insets = self.effective_insets();
        let ctx = ScrollContext {
            viewport: host.viewport_extent(),
            content: host.content_extent(),
            offset: host.scroll_offset(),
        };
        match self
            .autoscroll
            .evaluate(position, insets, self.config.max_scroll_speed, &ctx)
        {
            TickCommand::Start => {
                debug!(velocity = ?self.autoscroll.velocity(), "autoscroll started");
                self.scheduler.start();
            }
            TickCommand::Stop => {
                debug!("autoscroll stopped");
                self.scheduler.stop();
            }
            TickCommand::Keep => {}
        }
    }

    /// Configured edge insets, defaulting to half the proxy extent per
    /// axis.
    fn effective_insets(&self) -> EdgeInsets {
        if let Some(insets) = self.config.scroll_edge_insets {
            return insets;
        }
        match self.session.as_ref() {
            Some(session) => {
                let extent = session.proxy.extent();
                EdgeInsets::new(
                    extent.height / 2.0,
                    extent.width / 2.0,
                    extent.height / 2.0,
                    extent.width / 2.0,
                )
            }
            None => EdgeInsets::default(),
        }
    }

    /// Shared end/cancel path: stop the tick, invoke the finish hook with
    /// the resolved target frame, and tear down now or wait for
    /// [`Self::finish_animation_done`].
    fn finish(&mut self, outcome: DragOutcome, host: &mut dyn ReorderHost) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let Some(index) = self.session.as_ref().map(DragSession::source_index) else {
            return;
        };

        self.phase = DragPhase::Finishing;
        self.autoscroll.reset();
        self.scheduler.stop();

        let target_frame = host.frame_of(index);
        let status = match self.session.as_mut() {
            Some(session) => {
                (self.hooks.on_finish)(&mut session.proxy, index, target_frame, outcome)
            }
            None => AnimationStatus::Completed,
        };

        debug!(%index, ?outcome, ?status, "drag finishing");
        match status {
            AnimationStatus::Completed => self.teardown(host),
            AnimationStatus::Pending => {}
        }
    }

    /// Destroy the session: unhide the resting cell, drop the proxy, and
    /// return to `Idle`.
    fn teardown(&mut self, host: &mut dyn ReorderHost) {
        if let Some(session) = self.session.take() {
            host.set_item_hidden(session.source_index, false);
        }
        self.autoscroll.reset();
        self.scheduler.stop();
        self.phase = DragPhase::Idle;
        debug!("drag session cleaned up");
    }
}

impl<E> std::fmt::Debug for InteractionController<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("phase", &self.phase)
            .field("has_session", &self.session.is_some())
            .field("autoscroll_active", &self.autoscroll.is_active())
            .finish()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
