//! Debug assertion macros for ring buffer invariants.
//!
//! Active only in debug builds (`#[cfg(debug_assertions)]`), so release builds
//! pay nothing for them.

// =============================================================================
// Masked indices
// =============================================================================

/// Assert that a slot index lies in `[0, C)`.
///
/// **Invariant**: `0 ≤ head < C` and `0 ≤ tail < C`
///
/// Used in: `push_unchecked()` / `pop_unchecked()` before touching a slot
macro_rules! debug_assert_index_in_bounds {
    ($name:literal, $idx:expr, $mask:expr) => {
        debug_assert!(
            $idx <= $mask,
            "{} index {} outside storage of {} slots",
            $name,
            $idx,
            $mask + 1
        )
    };
}

// =============================================================================
// Bounded count
// =============================================================================

/// Assert that the number of live elements never exceeds `C - 1`.
///
/// **Invariant**: `(tail - head) mod C ≤ C - 1`, and the buffer is full iff
/// `(tail + 1) mod C == head`
///
/// Used in: `push_unchecked()` before publishing the new tail
macro_rules! debug_assert_bounded_count {
    ($next_tail:expr, $head:expr, $mask:expr) => {
        debug_assert!(
            $next_tail.wrapping_sub($head) & $mask != 0,
            "publishing tail {} would collide with head {}",
            $next_tail,
            $head
        )
    };
}

// =============================================================================
// Live range
// =============================================================================

/// Assert that the slot being moved out is inside the live range.
///
/// **Invariant**: `storage[i]` is initialized ⟺ `i ∈ [head, tail)` (mod `C`)
///
/// Used in: `pop_unchecked()` before `assume_init_read()`
macro_rules! debug_assert_live_slot {
    ($idx:expr, $head:expr, $tail:expr, $mask:expr) => {
        debug_assert!(
            $idx.wrapping_sub($head) & $mask < $tail.wrapping_sub($head) & $mask,
            "reading slot {} outside live range [{}, {})",
            $idx,
            $head,
            $tail
        )
    };
}

pub(crate) use debug_assert_bounded_count;
pub(crate) use debug_assert_index_in_bounds;
pub(crate) use debug_assert_live_slot;
