use crate::handle::{Consumer, Producer};
use crate::invariants::{
    debug_assert_bounded_count, debug_assert_index_in_bounds, debug_assert_live_slot,
};
use crate::sync::{Arc, AtomicUsize, Ordering, UnsafeCell};
use crate::{Config, ConfigError, Empty, Full, Metrics, MetricsSnapshot};
use crossbeam_utils::CachePadded;
use std::fmt;
use std::mem::MaybeUninit;

// =============================================================================
// MEMORY ORDERING & SYNCHRONIZATION STRATEGY
// =============================================================================
//
// Classic two-index (Lamport) SPSC protocol.
//
// ## Wrapped Indices
//
// `head` and `tail` are always in `[0, C)`. They advance with `(i + 1) & mask`,
// which is only correct because `C` is a power of two. With two wrapped
// indices, `head == tail` must mean empty, so one slot is never filled and
// full is `(tail + 1) & mask == head`. Usable capacity is `C - 1`.
//
// ## Memory Ordering Protocol
//
// **Producer (push):**
// 1. Load `tail` with Relaxed (only producer writes tail)
// 2. Load `head` with Acquire (synchronizes with the consumer's Release store,
//    so the consumer's move-out of that slot happened-before our overwrite)
// 3. Write the element into `buffer[tail]`
// 4. Store `tail + 1` with Release (publishes the write to the consumer)
//
// **Consumer (pop):**
// 1. Load `head` with Relaxed (only consumer writes head)
// 2. Load `tail` with Acquire (synchronizes with the producer's Release store,
//    so the element write happened-before our read)
// 3. Move the element out of `buffer[head]`
// 4. Store `head + 1` with Release (hands the slot back to the producer)
//
// ## Slot Ownership
//
// - `buffer[tail]`: owned by the producer (outside the live range)
// - `buffer[head]`: owned by the consumer while `head != tail`
// - every slot in `[head, tail)` holds an initialized element, every other
//   slot is uninitialized
//
// There is no lock, no CAS and no retry loop. Both operations are wait-free.
//
// =============================================================================

type Slot<T> = UnsafeCell<MaybeUninit<T>>;

/// Fixed-capacity lock-free SPSC ring buffer.
///
/// A buffer built with physical capacity `C` (a power of two) holds at most
/// `C - 1` elements. `push` and `pop` never block and never allocate; a full
/// or empty buffer is reported through [`Full`] and [`Empty`].
///
/// Use [`split`](Self::split) to hand the two ends to two threads. With
/// exclusive access, [`push`](Self::push) and [`pop`](Self::pop) can be
/// called directly.
///
/// # Example
///
/// ```
/// use ringspsc_rs::{Full, RingBuffer};
///
/// let mut ring = RingBuffer::new(4); // 3 usable slots
/// assert_eq!(ring.capacity(), 3);
///
/// ring.push(1).unwrap();
/// ring.push(2).unwrap();
/// ring.push(3).unwrap();
/// assert_eq!(ring.push(4), Err(Full(4)));
///
/// assert_eq!(ring.pop(), Ok(1));
/// ```
pub struct RingBuffer<T> {
    // === CONSUMER HOT ===
    /// Next slot to consume (written by consumer, read by producer)
    head: CachePadded<AtomicUsize>,

    // === PRODUCER HOT ===
    /// Next slot to fill (written by producer, read by consumer)
    tail: CachePadded<AtomicUsize>,

    // === COLD STATE ===
    mask: usize,
    config: Config,
    metrics: Metrics,

    /// Fixed-size storage, allocated once. `Box<[_]>` since it never grows.
    buffer: Box<[Slot<T>]>,
}

// Safety: slots are only touched under the SPSC protocol above, and the
// Acquire/Release pairs on head/tail order every slot access.
unsafe impl<T: Send> Send for RingBuffer<T> {}
unsafe impl<T: Send> Sync for RingBuffer<T> {}

impl<T> RingBuffer<T> {
    /// Creates an empty ring buffer with `capacity_pow2` physical slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity_pow2` is zero or not a power of two. The capacity
    /// is never rounded.
    pub fn new(capacity_pow2: usize) -> Self {
        assert!(
            capacity_pow2.is_power_of_two(),
            "capacity must be a non-zero power of two (got {})",
            capacity_pow2
        );
        Self::build(Config::new(capacity_pow2.trailing_zeros() as u8, false))
    }

    /// Fallible form of [`new`](Self::new).
    pub fn try_new(capacity_pow2: usize) -> Result<Self, ConfigError> {
        Config::from_capacity(capacity_pow2).map(Self::build)
    }

    /// Creates an empty ring buffer from a [`Config`].
    ///
    /// # Panics
    ///
    /// Panics if `config.ring_bits` is out of range (see [`Config::validate`]).
    pub fn with_config(config: Config) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid ring buffer config: {err}");
        }
        Self::build(config)
    }

    fn build(config: Config) -> Self {
        let capacity = config.capacity();

        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || UnsafeCell::new(MaybeUninit::uninit()));
        let buffer = buffer.into_boxed_slice();

        Self {
            head: CachePadded::new(AtomicUsize::new(0)),
            tail: CachePadded::new(AtomicUsize::new(0)),
            mask: config.mask(),
            config,
            metrics: Metrics::new(),
            buffer,
        }
    }

    // ---------------------------------------------------------------------
    // CONSTANTS & STATUS
    // ---------------------------------------------------------------------

    /// Returns the number of elements the buffer can hold (`C - 1`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask
    }

    /// Returns the number of live elements.
    ///
    /// Advisory: the value may be stale as soon as it is returned.
    #[inline]
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        tail.wrapping_sub(head) & self.mask
    }

    /// Returns true if the buffer is empty.
    ///
    /// Advisory only. Check the result of `pop` instead of relying on this.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Acquire)
    }

    /// Returns true if the buffer holds `capacity()` elements. Advisory.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Get a snapshot of metrics if enabled.
    pub fn metrics(&self) -> MetricsSnapshot {
        if self.config.enable_metrics {
            self.metrics.snapshot()
        } else {
            MetricsSnapshot::default()
        }
    }

    /// Moves the buffer into a producer/consumer handle pair.
    ///
    /// Each handle can be sent to its own thread. The storage (and anything
    /// still enqueued) is freed when both handles are gone.
    pub fn split(self) -> (Producer<T>, Consumer<T>) {
        let ring = Arc::new(self);
        (Producer::new(Arc::clone(&ring)), Consumer::new(ring))
    }

    // ---------------------------------------------------------------------
    // EXCLUSIVE ACCESS
    // ---------------------------------------------------------------------

    /// Enqueues `value`, or hands it back inside [`Full`] if no slot is free.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Full<T>> {
        // SAFETY: `&mut self` rules out any concurrent producer.
        unsafe { self.push_unchecked(value) }
    }

    /// Dequeues the oldest element, or returns [`Empty`].
    #[inline]
    pub fn pop(&mut self) -> Result<T, Empty> {
        // SAFETY: `&mut self` rules out any concurrent consumer.
        unsafe { self.pop_unchecked() }
    }

    // ---------------------------------------------------------------------
    // PRODUCER API
    // ---------------------------------------------------------------------

    /// Producer side of the protocol through a shared reference.
    ///
    /// # Safety
    ///
    /// No other thread may call `push_unchecked` on this buffer while this
    /// call runs. A single consumer may run `pop_unchecked` concurrently.
    #[inline]
    pub unsafe fn push_unchecked(&self, value: T) -> Result<(), Full<T>> {
        let tail = self.tail.load(Ordering::Relaxed);
        let next_tail = (tail + 1) & self.mask;
        let head = self.head.load(Ordering::Acquire);

        if next_tail == head {
            if self.config.enable_metrics {
                self.metrics.record_full();
            }
            return Err(Full(value));
        }

        debug_assert_index_in_bounds!("tail", tail, self.mask);
        debug_assert_bounded_count!(next_tail, head, self.mask);

        // SAFETY: Buffer access is safe because:
        // 1. tail is within bounds (masked to capacity)
        // 2. buffer[tail] is outside [head, tail), so the consumer never reads it
        // 3. The Acquire load on head ordered the consumer's last read of this
        //    slot before this write
        // 4. Only the producer writes slots, and the caller guarantees one producer
        self.buffer[tail].with_mut(|slot| unsafe {
            (*slot).write(value);
        });

        self.tail.store(next_tail, Ordering::Release);

        if self.config.enable_metrics {
            self.metrics.record_push();
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // CONSUMER API
    // ---------------------------------------------------------------------

    /// Consumer side of the protocol through a shared reference.
    ///
    /// # Safety
    ///
    /// No other thread may call `pop_unchecked` on this buffer while this
    /// call runs. A single producer may run `push_unchecked` concurrently.
    #[inline]
    pub unsafe fn pop_unchecked(&self) -> Result<T, Empty> {
        let head = self.head.load(Ordering::Relaxed);
        let tail = self.tail.load(Ordering::Acquire);

        if head == tail {
            if self.config.enable_metrics {
                self.metrics.record_empty();
            }
            return Err(Empty);
        }

        debug_assert_index_in_bounds!("head", head, self.mask);
        debug_assert_live_slot!(head, head, tail, self.mask);

        // SAFETY: Buffer access is safe because:
        // 1. head is within bounds (masked to capacity)
        // 2. head != tail, so buffer[head] was written by the producer
        // 3. The Acquire load on tail synchronizes with the producer's Release store
        // 4. assume_init_read moves the element out; the slot is treated as
        //    uninitialized from here on and the producer can reuse it once
        //    head is published
        let value = self.buffer[head].with(|slot| unsafe { (*slot).assume_init_read() });

        self.head.store((head + 1) & self.mask, Ordering::Release);

        if self.config.enable_metrics {
            self.metrics.record_pop();
        }
        Ok(value)
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        if !std::mem::needs_drop::<T>() {
            return;
        }

        // Drop all initialized items in the ring
        let mut head = self.head.load(Ordering::Relaxed);
        let tail = self.tail.load(Ordering::Relaxed);

        while head != tail {
            // SAFETY: [head, tail) holds initialized elements and `&mut self`
            // means nobody else can reach them.
            self.buffer[head].with_mut(|slot| unsafe { (*slot).assume_init_drop() });
            head = (head + 1) & self.mask;
        }
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
