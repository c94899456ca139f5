//! The six-phase pomodoro state machine.
//!
//! Phases are a flat enum and every reaction is evaluated in a single match,
//! so the whole transition table is visible in one place. Entry actions run
//! exactly once per transition; events outside the table are ignored.

use core::fmt;

use crate::config::TimerConfig;
use crate::event::Event;
use crate::tracker::ElapsedTracker;

/// One state of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Power-on state; waits for bring-up to finish.
    Off,
    /// Ready; a button press begins a work period.
    Idle,
    /// Work period countdown.
    Work,
    /// Short break countdown.
    ShortBreak,
    /// Long break countdown.
    LongBreak,
    /// Final minutes of the long break; continues the same countdown.
    LongBreakLastMinutes,
}

impl Phase {
    /// True for phases whose entry starts a fresh countdown.
    ///
    /// The long-break tail is excluded: it continues the countdown begun at
    /// long-break entry.
    pub fn resets_tracker_on_entry(self) -> bool {
        matches!(
            self,
            Phase::Idle | Phase::Work | Phase::ShortBreak | Phase::LongBreak
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Off => "OFF",
            Phase::Idle => "IDLE",
            Phase::Work => "WORK",
            Phase::ShortBreak => "SHORT_BREAK",
            Phase::LongBreak => "LONG_BREAK",
            Phase::LongBreakLastMinutes => "LONG_BREAK_LAST_MINUTES",
        };
        f.write_str(name)
    }
}

/// The timer context: current phase, elapsed tracker and break counters.
///
/// Single-threaded by construction; concurrent contexts reach it through
/// [`crate::dispatch::Dispatcher`], which serializes access behind a mutex.
#[derive(Debug, Clone)]
pub struct PomodoroMachine {
    phase: Phase,
    tracker: ElapsedTracker,
    short_breaks: u8,
    long_breaks: u32,
    config: TimerConfig,
}

impl PomodoroMachine {
    /// Creates the machine in `Off` with a fresh tracker.
    pub fn new(config: TimerConfig) -> Self {
        log::info!("pomodoro timer starting");
        Self {
            phase: Phase::Off,
            tracker: ElapsedTracker::new(),
            short_breaks: 0,
            long_breaks: 0,
            config,
        }
    }

    /// Creates the machine with the default firmware configuration.
    pub fn with_defaults() -> Self {
        Self::new(TimerConfig::default())
    }

    /// The currently active phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The shared elapsed-time tracker.
    pub fn tracker(&self) -> &ElapsedTracker {
        &self.tracker
    }

    /// Short breaks taken since the last long break.
    pub fn short_breaks(&self) -> u8 {
        self.short_breaks
    }

    /// Long breaks taken since boot.
    pub fn long_breaks(&self) -> u32 {
        self.long_breaks
    }

    /// The active configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Reacts to `event` at timestamp `now` (µs since boot).
    ///
    /// Events outside the current phase's transition row leave both the
    /// phase and the tracker untouched.
    pub fn dispatch(&mut self, event: Event, now: u64) {
        if let Some(next) = self.react(event, now) {
            self.enter(next, now);
        }
    }

    fn react(&mut self, event: Event, now: u64) -> Option<Phase> {
        use Event::*;
        use Phase::*;

        match (self.phase, event) {
            (Off, TimerReady) => Some(Idle),

            (Idle, StartTimer | ResetTimer | TimerAction) => Some(Work),

            (Work, ResetTimer) => Some(Idle),
            (Work, TimerAction) => {
                self.toggle_work(now);
                None
            }
            (Work, CheckTimer) if self.period_elapsed(now, self.config.work_period_s) => {
                Some(self.work_complete_target())
            }

            (ShortBreak | LongBreak | LongBreakLastMinutes, ResetTimer) => Some(Idle),
            (ShortBreak | LongBreak | LongBreakLastMinutes, TimerAction) => self.break_action(now),

            (ShortBreak, CheckTimer)
                if self.period_elapsed(now, self.config.short_break_period_s) =>
            {
                Some(Work)
            }
            (LongBreak, CheckTimer)
                if self.period_elapsed(now, self.config.long_break_tail_start_s()) =>
            {
                Some(LongBreakLastMinutes)
            }
            (LongBreakLastMinutes, CheckTimer)
                if self.period_elapsed(now, self.config.long_break_period_s) =>
            {
                Some(Work)
            }

            _ => None,
        }
    }

    /// Runs the entry actions for `next` and records the transition.
    fn enter(&mut self, next: Phase, _now: u64) {
        if next.resets_tracker_on_entry() {
            self.tracker.reset_counting();
        }
        match next {
            Phase::ShortBreak => {
                self.short_breaks = self
                    .short_breaks
                    .saturating_add(1)
                    .min(self.config.long_break_after);
            }
            Phase::LongBreak => {
                self.short_breaks = 0;
                self.long_breaks += 1;
            }
            _ => {}
        }
        log::info!(
            "{} -> {} (short breaks: {}, long breaks: {})",
            self.phase,
            next,
            self.short_breaks,
            self.long_breaks
        );
        self.phase = next;
    }

    /// Three-way button toggle in `Work`: start, resume or pause.
    fn toggle_work(&mut self, now: u64) {
        if !self.tracker.is_started() {
            self.tracker.start_counting(now);
        } else if self.tracker.is_paused() {
            self.tracker.start_counting(now);
        } else {
            self.tracker.pause_counting(now);
        }
    }

    /// Button in a break phase: first press starts the break, a later press
    /// abandons it for a new work period.
    fn break_action(&mut self, now: u64) -> Option<Phase> {
        if !self.tracker.is_started() {
            self.tracker.start_counting(now);
            None
        } else {
            Some(Phase::Work)
        }
    }

    /// True when the countdown is running and has reached `threshold_s`.
    ///
    /// A paused or never-started tracker freezes every phase in place.
    fn period_elapsed(&self, now: u64, threshold_s: u64) -> bool {
        self.tracker.is_timer_active() && self.tracker.counting_seconds(now) >= threshold_s
    }

    /// Where a completed work period goes: a long break once enough short
    /// breaks accumulated (and long breaks are enabled), else a short break.
    fn work_complete_target(&self) -> Phase {
        if self.config.long_breaks_enabled && self.short_breaks >= self.config.long_break_after {
            Phase::LongBreak
        } else {
            Phase::ShortBreak
        }
    }
}
