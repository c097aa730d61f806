//! Interrupt-safe pulse counting.

use core::sync::atomic::{AtomicI32, Ordering};

/// Signed tick counter for one wheel's encoder.
///
/// Designed to live in a `static` so an interrupt handler can reach it
/// without owning it. Each qualifying edge performs exactly one word-sized
/// atomic add: no locking, no allocation, no I/O, bounded time. The cycle
/// controller snapshots the counter once per cycle; counts are cumulative
/// and never reset between cycles.
///
/// Single-channel encoders cannot sense direction, so the counter exposes
/// both signs and leaves the choice to the GPIO backend wiring the
/// interrupt. A quadrature-capable backend calls [`count_down`] for reverse
/// edges.
///
/// [`count_down`]: PulseCounter::count_down
#[derive(Debug)]
pub struct PulseCounter {
    count: AtomicI32,
}

impl PulseCounter {
    /// Create a counter at zero.
    #[inline]
    pub const fn new() -> Self {
        Self {
            count: AtomicI32::new(0),
        }
    }

    /// Record one forward edge. Safe to call from interrupt context.
    #[inline]
    pub fn count_up(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one reverse edge. Safe to call from interrupt context.
    #[inline]
    pub fn count_down(&self) {
        self.count.fetch_sub(1, Ordering::Relaxed);
    }

    /// Snapshot the cumulative signed tick count.
    #[inline]
    pub fn read(&self) -> i32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Reset the counter to zero.
    ///
    /// Only meaningful while interrupts are detached; racing a reset against
    /// live edges loses counts.
    #[inline]
    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}

impl Default for PulseCounter {
    fn default() -> Self {
        Self::new()
    }
}
