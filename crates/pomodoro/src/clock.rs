//! Monotonic time sources.

use core::sync::atomic::{AtomicU64, Ordering};

/// Microseconds per whole second; elapsed time truncates to this unit.
pub const MICROS_PER_SEC: u64 = 1_000_000;

/// Monotonic microsecond counter since boot.
///
/// Implementations never fail and never wrap within any feasible uptime.
pub trait Clock: Send + Sync {
    /// Returns the current counter value in microseconds.
    fn now_micros(&self) -> u64;
}

/// Manually advanced clock for tests and host simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    /// Creates a clock at timestamp zero.
    pub const fn new() -> Self {
        Self {
            now: AtomicU64::new(0),
        }
    }

    /// Creates a clock at the given timestamp.
    pub const fn at(now_us: u64) -> Self {
        Self {
            now: AtomicU64::new(now_us),
        }
    }

    /// Moves the clock to an absolute timestamp.
    pub fn set(&self, now_us: u64) {
        self.now.store(now_us, Ordering::Release);
    }

    /// Advances the clock by the given number of microseconds.
    pub fn advance(&self, delta_us: u64) {
        self.now.fetch_add(delta_us, Ordering::AcqRel);
    }

    /// Advances the clock by whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance(secs * MICROS_PER_SEC);
    }
}

impl Clock for ManualClock {
    fn now_micros(&self) -> u64 {
        self.now.load(Ordering::Acquire)
    }
}

impl<C: Clock + ?Sized> Clock for &'static C {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }
}

#[cfg(feature = "std")]
impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }
}
