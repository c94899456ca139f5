//! Start/pause/elapsed bookkeeping for one countdown session.

use crate::clock::MICROS_PER_SEC;

/// Elapsed-time tracker shared by all counting phases.
///
/// Invariants: a set pause marker implies counting is not active, and an
/// unset start marker implies zero elapsed time. Pausing freezes the elapsed
/// value; resuming shifts the start marker forward by the pause duration so
/// paused time is excluded. All operations are total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElapsedTracker {
    counting_started_at: Option<u64>,
    pause_started_at: Option<u64>,
    active: bool,
}

impl ElapsedTracker {
    /// Creates a tracker that has never counted.
    pub const fn new() -> Self {
        Self {
            counting_started_at: None,
            pause_started_at: None,
            active: false,
        }
    }

    /// Starts or resumes counting at `now`.
    ///
    /// Calling this while already counting is a no-op, so repeated starts
    /// leave the session origin untouched.
    pub fn start_counting(&mut self, now: u64) {
        if self.active {
            return;
        }
        match self.pause_started_at.take() {
            Some(paused_at) => {
                // Shift the origin forward so the paused gap never counts.
                let pause_len = now.saturating_sub(paused_at);
                if let Some(started_at) = self.counting_started_at.as_mut() {
                    *started_at += pause_len;
                }
            }
            None => {
                self.counting_started_at = Some(now);
            }
        }
        self.active = true;
    }

    /// Pauses counting at `now`; a no-op unless counting is running.
    pub fn pause_counting(&mut self, now: u64) {
        if !self.active {
            log::debug!("pause requested while not counting; ignored");
            return;
        }
        self.pause_started_at = Some(now);
        self.active = false;
    }

    /// Clears both timestamps and the active flag unconditionally.
    pub fn reset_counting(&mut self) {
        *self = Self::new();
    }

    /// Whole seconds counted so far, excluding paused time.
    ///
    /// Returns 0 if counting never started. While paused, the value is
    /// frozen at the pause timestamp.
    pub fn counting_seconds(&self, now: u64) -> u64 {
        let Some(started_at) = self.counting_started_at else {
            return 0;
        };
        let reference = self.pause_started_at.unwrap_or(now);
        reference.saturating_sub(started_at) / MICROS_PER_SEC
    }

    /// True while counting is running (started and not paused).
    pub fn is_timer_active(&self) -> bool {
        self.active
    }

    /// True while counting is paused.
    pub fn is_paused(&self) -> bool {
        self.pause_started_at.is_some()
    }

    /// True once counting has started, paused or not.
    pub fn is_started(&self) -> bool {
        self.counting_started_at.is_some()
    }
}
