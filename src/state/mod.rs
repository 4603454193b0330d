//! Interaction state machines (pure core).
//!
//! Everything here runs synchronously inside the integrator's event
//! callbacks and talks to the outside world only through the traits in
//! [`crate::host`]. The reorder engine is a pure function; the autoscroll
//! and interaction controllers are small explicit state machines.

pub mod autoscroll;
pub mod controller;
pub mod engine;
pub mod session;

// Re-export for convenience
pub use autoscroll::{AutoScrollController, ScrollContext, TickCommand};
pub use controller::InteractionController;
pub use session::{DragPhase, DragSession};
