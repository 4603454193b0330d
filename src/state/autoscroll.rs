//! Edge-triggered autoscroll velocity state machine.
//!
//! Re-evaluated after every drag position update: each axis independently
//! gets velocity `±max_speed` when the proxy sits inside the edge inset,
//! the content actually overflows the viewport, and there is scroll room
//! left in that direction. While velocity is nonzero a periodic tick adds
//! elapsed-time-scaled displacement to the scroll offset, clamped to the
//! scrollable range.

use std::time::Duration;

use crate::model::{EdgeInsets, Point, Size, Vector};

/// Numerical tolerance absorbing floating-point noise in the edge and
/// scroll-room comparisons.
pub const SCROLL_EPS: f64 = 0.001;

/// Scroll-relevant host state, sampled fresh for each evaluation or tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollContext {
    /// Visible viewport extent.
    pub viewport: Size,
    /// Total content extent.
    pub content: Size,
    /// Current scroll offset.
    pub offset: Point,
}

/// What the controller should do with the periodic tick after an
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickCommand {
    /// Velocity became nonzero with no tick running: schedule one.
    Start,
    /// Velocity returned to zero with a tick running: cancel it.
    Stop,
    /// No scheduling change.
    Keep,
}

/// Velocity state machine driving the autoscroll loop.
///
/// Owns the scroll state for the lifetime of a drag session; the
/// interaction controller resets it when the session ends.
#[derive(Debug, Default)]
pub struct AutoScrollController {
    velocity: Vector,
    active: bool,
}

impl AutoScrollController {
    /// An idle controller (zero velocity, no tick scheduled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current velocity vector (zero when idle).
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Whether a periodic tick is currently scheduled.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Recompute velocity from the proxy position and report the required
    /// tick scheduling change.
    pub fn evaluate(
        &mut self,
        proxy_position: Point,
        insets: EdgeInsets,
        max_speed: f64,
        ctx: &ScrollContext,
    ) -> TickCommand {
        self.velocity = compute_velocity(proxy_position, insets, max_speed, ctx);

        if self.velocity.is_zero() {
            if self.active {
                self.active = false;
                TickCommand::Stop
            } else {
                TickCommand::Keep
            }
        } else if self.active {
            TickCommand::Keep
        } else {
            self.active = true;
            TickCommand::Start
        }
    }

    /// Displacement to apply for a tick of length `dt`.
    ///
    /// The returned delta already accounts for clamping the new offset to
    /// `[0, content − viewport]` per axis (lower bound wins when content is
    /// smaller than the viewport), so it may be zero at the extremes while
    /// velocity stays nonzero.
    pub fn tick(&self, dt: Duration, ctx: &ScrollContext) -> Vector {
        let translation = self.velocity * dt.as_secs_f64();
        let clamped = Point::new(
            clamp_axis(ctx.offset.x + translation.dx, ctx.content.width, ctx.viewport.width),
            clamp_axis(ctx.offset.y + translation.dy, ctx.content.height, ctx.viewport.height),
        );
        clamped - ctx.offset
    }

    /// Drop back to idle: zero velocity, tick descheduled.
    ///
    /// Called when the drag session ends; cancellation is synchronous, not
    /// deferred to a future tick.
    pub fn reset(&mut self) {
        self.velocity = Vector::ZERO;
        self.active = false;
    }
}

fn clamp_axis(value: f64, content: f64, viewport: f64) -> f64 {
    value.min(content - viewport).max(0.0)
}

/// Per-axis velocity rule.
///
/// Leading edge: proxy within `offset + inset` *and* offset not already at
/// 0. Trailing edge: proxy within `offset + viewport − inset` *and* offset
/// short of `content − viewport`. Either way the axis must actually
/// overflow (`|viewport − content| > EPS`).
pub fn compute_velocity(
    position: Point,
    insets: EdgeInsets,
    max_speed: f64,
    ctx: &ScrollContext,
) -> Vector {
    let mut velocity = Vector::ZERO;

    if (ctx.viewport.width - ctx.content.width).abs() > SCROLL_EPS {
        if position.x < ctx.offset.x + SCROLL_EPS + insets.left && ctx.offset.x > SCROLL_EPS {
            velocity.dx = -max_speed;
        } else if position.x > ctx.offset.x + ctx.viewport.width - SCROLL_EPS - insets.right
            && ctx.offset.x < ctx.content.width - ctx.viewport.width - SCROLL_EPS
        {
            velocity.dx = max_speed;
        }
    }

    if (ctx.viewport.height - ctx.content.height).abs() > SCROLL_EPS {
        if position.y < ctx.offset.y + SCROLL_EPS + insets.top && ctx.offset.y > SCROLL_EPS {
            velocity.dy = -max_speed;
        } else if position.y > ctx.offset.y + ctx.viewport.height - SCROLL_EPS - insets.bottom
            && ctx.offset.y < ctx.content.height - ctx.viewport.height - SCROLL_EPS
        {
            velocity.dy = max_speed;
        }
    }

    velocity
}

// ===== Tests =====

#[cfg(test)]
#[path = "autoscroll_tests.rs"]
mod tests;
