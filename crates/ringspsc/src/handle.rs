use crate::sync::Arc;
use crate::{Empty, Full, MetricsSnapshot, RingBuffer};
use std::fmt;

/// Producer handle returned by [`RingBuffer::split`].
///
/// There is exactly one per buffer and it cannot be cloned. `push` takes
/// `&mut self`, so the single-producer rule is enforced by the borrow checker.
pub struct Producer<T> {
    ring: Arc<RingBuffer<T>>,
}

impl<T> Producer<T> {
    pub(crate) fn new(ring: Arc<RingBuffer<T>>) -> Self {
        Self { ring }
    }

    /// Enqueues `value`, or hands it back inside [`Full`] if no slot is free.
    ///
    /// Never blocks. To wait for space, retry with your own backoff.
    ///
    /// # Example
    /// ```
    /// use ringspsc_rs::RingBuffer;
    ///
    /// let (mut producer, _consumer) = RingBuffer::new(2).split();
    /// producer.push(1).unwrap();
    ///
    /// // Ring is full, handle backpressure
    /// let rejected = producer.push(2).unwrap_err().into_inner();
    /// assert_eq!(rejected, 2);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Full<T>> {
        // SAFETY: this handle is the only producer and `&mut self` keeps it
        // on one thread at a time.
        unsafe { self.ring.push_unchecked(value) }
    }

    /// Returns the number of elements the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the number of free slots. Can only grow until the next `push`.
    #[inline]
    pub fn slots(&self) -> usize {
        self.ring.capacity() - self.ring.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Get a snapshot of metrics if enabled.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.ring.metrics()
    }
}

impl<T> fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer").field("ring", &self.ring).finish()
    }
}

/// Consumer handle returned by [`RingBuffer::split`].
///
/// There is exactly one per buffer and it cannot be cloned. `pop` takes
/// `&mut self`, so the single-consumer rule is enforced by the borrow checker.
pub struct Consumer<T> {
    ring: Arc<RingBuffer<T>>,
}

impl<T> Consumer<T> {
    pub(crate) fn new(ring: Arc<RingBuffer<T>>) -> Self {
        Self { ring }
    }

    /// Dequeues the oldest element, or returns [`Empty`].
    ///
    /// Never blocks. To wait for data, retry with your own backoff.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Empty> {
        // SAFETY: this handle is the only consumer and `&mut self` keeps it
        // on one thread at a time.
        unsafe { self.ring.pop_unchecked() }
    }

    /// Returns the number of elements the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the number of elements ready to pop. Can only grow until the next `pop`.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Get a snapshot of metrics if enabled.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.ring.metrics()
    }
}

impl<T> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer").field("ring", &self.ring).finish()
    }
}
