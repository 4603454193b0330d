//! Reorder decision engine.
//!
//! Pure function from (current index, resolved target index, emptiness
//! predicate) to at most one [`ReorderInstruction`]. The controller resolves
//! the proxy position to a target index before calling in; everything here
//! is geometry-free and side-effect-free, so the tie-break policy is
//! testable in isolation.

use crate::model::{GridIndex, ReorderInstruction};

/// Decide how the dragged item should trade places with `target`.
///
/// Returns `None` when the drag has not crossed into a new cell
/// (`target == current`) or when no qualifying vacancy exists anywhere in
/// the target's section — a full list is a valid configuration, not an
/// error.
///
/// # Decision policy
///
/// 1. Empty target: swap directly into it.
/// 2. Occupied target: scan from `target` down to item 0 of its section
///    (inclusive), stopping at the first empty slot *or* at `current`
///    itself — vacating the drag's own origin counts as a usable vacancy.
/// 3. If that scan finds nothing, scan from `target + 1` to the section's
///    last item with the same stopping rule.
/// 4. Stop equal to `current`: a plain shift (`Move`). Stop at a genuine
///    vacancy: the two-step `SwapThenMove` through it.
///
/// The shift/compound asymmetry is observable (move counts and animations
/// differ) and is preserved deliberately; see
/// [`ReorderInstruction::SwapThenMove`].
///
/// # Arguments
/// * `current` - The dragged item's logical index.
/// * `target` - The index resolved from the proxy position.
/// * `item_count` - Number of items in `target`'s section (right-scan bound).
/// * `is_empty` - Vacancy predicate, queried fresh on every call.
pub fn evaluate<F>(
    current: GridIndex,
    target: GridIndex,
    item_count: usize,
    is_empty: F,
) -> Option<ReorderInstruction>
where
    F: Fn(GridIndex) -> bool,
{
    if target == current {
        return None;
    }

    if is_empty(target) {
        return Some(ReorderInstruction::Swap {
            a: current,
            b: target,
        });
    }

    let stop = scan_down(current, target, &is_empty)
        .or_else(|| scan_up(current, target, item_count, &is_empty))?;

    if stop == current {
        Some(ReorderInstruction::Move {
            from: current,
            to: target,
        })
    } else {
        Some(ReorderInstruction::SwapThenMove {
            vacancy: stop,
            from: current,
            to: target,
        })
    }
}

/// Scan from `target` toward item 0, inclusive of `target`.
fn scan_down<F>(current: GridIndex, target: GridIndex, is_empty: &F) -> Option<GridIndex>
where
    F: Fn(GridIndex) -> bool,
{
    (0..=target.offset())
        .rev()
        .map(|offset| target.with_offset(offset))
        .find(|&candidate| is_empty(candidate) || candidate == current)
}

/// Fallback scan from `target + 1` to the section's last item.
fn scan_up<F>(
    current: GridIndex,
    target: GridIndex,
    item_count: usize,
    is_empty: &F,
) -> Option<GridIndex>
where
    F: Fn(GridIndex) -> bool,
{
    (target.offset() + 1..item_count)
        .map(|offset| target.with_offset(offset))
        .find(|&candidate| is_empty(candidate) || candidate == current)
}

// ===== Tests =====

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
