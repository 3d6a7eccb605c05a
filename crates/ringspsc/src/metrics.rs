use crate::sync::{AtomicU64, Ordering};

/// Optional counters for monitoring a ring buffer.
///
/// Every counter has a single writer: `pushed` and `full_rejections` are only
/// touched by the producer, `popped` and `empty_polls` only by the consumer.
/// Updates are therefore a relaxed load + store rather than an RMW.
#[derive(Debug)]
pub struct Metrics {
    pushed: AtomicU64,
    full_rejections: AtomicU64,
    popped: AtomicU64,
    empty_polls: AtomicU64,
}

/// Point-in-time copy of [`Metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Elements successfully enqueued.
    pub pushed: u64,
    /// `push` calls rejected with `Full`.
    pub full_rejections: u64,
    /// Elements successfully dequeued.
    pub popped: u64,
    /// `pop` calls answered with `Empty`.
    pub empty_polls: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            pushed: AtomicU64::new(0),
            full_rejections: AtomicU64::new(0),
            popped: AtomicU64::new(0),
            empty_polls: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn record_push(&self) {
        bump(&self.pushed);
    }

    #[inline]
    pub(crate) fn record_full(&self) {
        bump(&self.full_rejections);
    }

    #[inline]
    pub(crate) fn record_pop(&self) {
        bump(&self.popped);
    }

    #[inline]
    pub(crate) fn record_empty(&self) {
        bump(&self.empty_polls);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            pushed: self.pushed.load(Ordering::Relaxed),
            full_rejections: self.full_rejections.load(Ordering::Relaxed),
            popped: self.popped.load(Ordering::Relaxed),
            empty_polls: self.empty_polls.load(Ordering::Relaxed),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

// Single writer per counter, so no fetch_add needed.
#[inline]
fn bump(counter: &AtomicU64) {
    let value = counter.load(Ordering::Relaxed);
    counter.store(value.wrapping_add(1), Ordering::Relaxed);
}

impl MetricsSnapshot {
    /// Elements pushed but not yet popped at the time of the snapshot.
    pub fn in_flight(&self) -> u64 {
        self.pushed.saturating_sub(self.popped)
    }
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts() {
        let metrics = Metrics::new();
        metrics.record_push();
        metrics.record_push();
        metrics.record_full();
        metrics.record_pop();
        metrics.record_empty();
        metrics.record_empty();

        let snap = metrics.snapshot();
        assert_eq!(
            snap,
            MetricsSnapshot {
                pushed: 2,
                full_rejections: 1,
                popped: 1,
                empty_polls: 2,
            }
        );
        assert_eq!(snap.in_flight(), 1);
    }
}
