//! Timestamp-gap filtering of raw button edges.

/// Debounce filter owned by the edge-queue consumer.
///
/// Edges closer than the window to the last accepted edge are discarded;
/// accepted edges move the reference timestamp. The raw interrupt posts both
/// press and release edges, so the window also collapses each press/release
/// pair into a single action.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window_us: u64,
    last_accepted_at: Option<u64>,
}

impl Debouncer {
    /// Creates a filter with the given minimum gap between accepted edges.
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted_at: None,
        }
    }

    /// Returns true when the edge at `timestamp_us` should produce an action.
    pub fn accept(&mut self, timestamp_us: u64) -> bool {
        if let Some(last) = self.last_accepted_at {
            if timestamp_us.saturating_sub(last) < self.window_us {
                log::trace!("edge at {timestamp_us}us within debounce window; discarded");
                return false;
            }
        }
        self.last_accepted_at = Some(timestamp_us);
        true
    }

    /// The configured minimum gap, in microseconds.
    pub fn window_us(&self) -> u64 {
        self.window_us
    }
}
