//! Reorder instructions emitted by the engine.
//!
//! An instruction is the engine's entire output: the controller applies it
//! through the host collaborators as one atomic visual-update batch, then
//! advances the drag session's logical index.

use crate::model::GridIndex;

/// A single reorder decision.
///
/// Carries every index involved so the application step needs no further
/// lookups; in particular `SwapThenMove` records the vacancy explicitly
/// because the move leg operates on the post-swap collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderInstruction {
    /// Exchange the dragged item with an empty slot.
    Swap {
        /// The dragged item's current index.
        a: GridIndex,
        /// The empty slot it lands in.
        b: GridIndex,
    },

    /// Shift the dragged item, using its own vacated slot as the vacancy.
    Move {
        /// The dragged item's current index.
        from: GridIndex,
        /// The occupied target it displaces into.
        to: GridIndex,
    },

    /// Two-step relocation through a vacancy elsewhere in the section.
    ///
    /// Applied as: swap `from` with `vacancy` (the emptiness moves to
    /// `from`), then move the dragged item — now at `vacancy` — to `to`.
    /// The two steps are observable (move counts, animations) and must not
    /// be collapsed into a single swap.
    SwapThenMove {
        /// The empty slot found by the scan.
        vacancy: GridIndex,
        /// The dragged item's current index.
        from: GridIndex,
        /// The occupied target it displaces into.
        to: GridIndex,
    },
}

impl ReorderInstruction {
    /// The index the dragged item logically occupies after application.
    pub fn destination(&self) -> GridIndex {
        match *self {
            Self::Swap { b, .. } => b,
            Self::Move { to, .. } | Self::SwapThenMove { to, .. } => to,
        }
    }
}
