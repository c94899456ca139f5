//! Event signals dispatched to the phase machine.
//!
//! Events carry no payload. The dispatcher samples the monotonic clock once
//! per dispatch and hands the timestamp to the machine alongside the event,
//! so a timestamp payload would be redundant.

use core::fmt;

/// Signal delivered to [`crate::PomodoroMachine::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Boot-time bring-up finished; leaves `Off`.
    TimerReady,
    /// Explicit request to begin a work period from `Idle`.
    StartTimer,
    /// Periodic tick; phases evaluate their elapsed-time thresholds.
    CheckTimer,
    /// Accepted for compatibility; no phase reacts to it.
    TimerComplete,
    /// Abandon the current countdown.
    ResetTimer,
    /// Debounced button press.
    TimerAction,
}

impl Event {
    /// All signal variants, in dispatch-table order.
    pub const ALL: [Event; 6] = [
        Event::TimerReady,
        Event::StartTimer,
        Event::CheckTimer,
        Event::TimerComplete,
        Event::ResetTimer,
        Event::TimerAction,
    ];
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Event::TimerReady => "TIMER_READY",
            Event::StartTimer => "START_TIMER",
            Event::CheckTimer => "CHECK_TIMER",
            Event::TimerComplete => "TIMER_COMPLETE",
            Event::ResetTimer => "RESET_TIMER",
            Event::TimerAction => "TIMER_ACTION",
        };
        f.write_str(name)
    }
}
