//! Observable side effects for benchmarked actions.

use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};

/// Destination for the work ids recorded by benchmarked actions.
///
/// Every write goes through [`black_box`] and an atomic store, so the
/// optimizer cannot drop the branches being measured. The running checksum is
/// order-sensitive: two contenders agree only if they recorded the same ids
/// in the same order.
///
/// # Example
///
/// ```
/// use predswitch_benchmark::Sink;
///
/// let sink = Sink::new();
/// sink.record(1);
/// sink.record(2);
///
/// assert_eq!(sink.last(), 2);
/// assert_eq!(sink.count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Sink {
    last: AtomicU64,
    checksum: AtomicU64,
    count: AtomicU64,
}

impl Sink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one unit of work.
    #[inline]
    pub fn record(&self, work_id: u64) {
        let work_id = black_box(work_id);
        self.last.store(work_id, Ordering::Relaxed);
        let checksum = self.checksum.load(Ordering::Relaxed);
        self.checksum.store(
            checksum.wrapping_mul(31).wrapping_add(work_id),
            Ordering::Relaxed,
        );
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the last recorded work id, or 0 if nothing was recorded.
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }

    /// Returns the order-sensitive checksum of every recorded id.
    pub fn checksum(&self) -> u64 {
        self.checksum.load(Ordering::Relaxed)
    }

    /// Returns how many ids were recorded.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Forgets everything recorded so far.
    pub fn reset(&self) {
        self.last.store(0, Ordering::Relaxed);
        self.checksum.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_order_sensitive() {
        let a = Sink::new();
        a.record(1);
        a.record(2);

        let b = Sink::new();
        b.record(2);
        b.record(1);

        assert_ne!(a.checksum(), b.checksum());
        assert_eq!(a.count(), b.count());
    }

    #[test]
    fn test_same_sequence_same_checksum() {
        let a = Sink::new();
        let b = Sink::new();
        for id in [3, 1, 4, 1, 5] {
            a.record(id);
            b.record(id);
        }
        assert_eq!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_reset() {
        let sink = Sink::new();
        sink.record(9);
        sink.reset();
        assert_eq!(sink.last(), 0);
        assert_eq!(sink.checksum(), 0);
        assert_eq!(sink.count(), 0);
    }
}
