//! Error types for ring buffer operations.

use std::fmt;
use thiserror::Error;

/// Returned by `push` when no free slot exists.
///
/// The rejected element is handed back so the caller keeps ownership of it.
/// The buffer is left unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Error)]
#[error("ring buffer is full")]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the element that could not be enqueued.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

// Written by hand so `Full<T>` is `Debug` (and therefore an `Error`) for any `T`.
impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Full(..)")
    }
}

/// Returned by `pop` when no element is available. The buffer is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ring buffer is empty")]
pub struct Empty;

/// Errors from the fallible constructors and [`Config`](crate::Config) validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested capacity is zero or not a power of two.
    #[error("capacity must be a non-zero power of two (got {0})")]
    NotPowerOfTwo(usize),

    /// `ring_bits` would overflow `usize`.
    #[error("ring_bits {bits} exceeds the maximum of {max}")]
    RingBitsTooLarge {
        /// The configured `ring_bits`.
        bits: u8,
        /// The largest accepted `ring_bits` on this target.
        max: u8,
    },
}
