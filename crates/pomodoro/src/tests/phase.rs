use crate::clock::MICROS_PER_SEC;
use crate::config::TimerConfig;
use crate::event::Event;
use crate::phase::{Phase, PomodoroMachine};
use crate::tracker::ElapsedTracker;

/// Shortened periods so a full cycle stays readable: 10 s work, 5 s short
/// break, 8 s long break (tail begins at 3 s), long break after 2 shorts.
fn short_config() -> TimerConfig {
    TimerConfig::builder()
        .work_period(10)
        .short_break_period(5)
        .long_break_period(8)
        .long_break_after(2)
        .build()
}

struct Harness {
    machine: PomodoroMachine,
    now: u64,
}

impl Harness {
    fn new(config: TimerConfig) -> Self {
        Self {
            machine: PomodoroMachine::new(config),
            now: 0,
        }
    }

    fn send(&mut self, event: Event) {
        self.machine.dispatch(event, self.now);
    }

    fn advance(&mut self, secs: u64) {
        self.now += secs * MICROS_PER_SEC;
    }

    fn phase(&self) -> Phase {
        self.machine.phase()
    }

    fn state(&self) -> (Phase, ElapsedTracker, u8, u32) {
        (
            self.machine.phase(),
            *self.machine.tracker(),
            self.machine.short_breaks(),
            self.machine.long_breaks(),
        )
    }

    /// Starts the countdown (button), runs it to completion and ticks.
    fn complete_period(&mut self, secs: u64) {
        if !self.machine.tracker().is_started() {
            self.send(Event::TimerAction);
        }
        self.advance(secs);
        self.send(Event::CheckTimer);
    }
}

#[test]
fn boots_off_and_ready_enters_idle() {
    let mut h = Harness::new(short_config());
    assert_eq!(h.phase(), Phase::Off);

    h.send(Event::TimerReady);
    assert_eq!(h.phase(), Phase::Idle);
    assert!(!h.machine.tracker().is_started());
}

#[test]
fn idle_enters_work_on_any_start_event() {
    for event in [Event::StartTimer, Event::ResetTimer, Event::TimerAction] {
        let mut h = Harness::new(short_config());
        h.send(Event::TimerReady);
        h.send(event);
        assert_eq!(h.phase(), Phase::Work, "event {event}");
        // Fresh countdown: the user has not started counting yet.
        assert!(!h.machine.tracker().is_started(), "event {event}");
    }
}

#[test]
fn work_action_is_a_three_way_toggle() {
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);

    h.send(Event::TimerAction); // start
    assert!(h.machine.tracker().is_timer_active());

    h.advance(4);
    h.send(Event::TimerAction); // pause
    assert!(h.machine.tracker().is_paused());
    assert_eq!(h.machine.tracker().counting_seconds(h.now), 4);

    h.advance(30);
    h.send(Event::TimerAction); // resume, pause excluded
    assert!(h.machine.tracker().is_timer_active());
    h.advance(2);
    assert_eq!(h.machine.tracker().counting_seconds(h.now), 6);
}

#[test]
fn work_check_timer_honors_default_threshold() {
    let mut h = Harness::new(TimerConfig::default());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);
    h.send(Event::TimerAction); // start counting

    h.advance(2699);
    h.send(Event::CheckTimer);
    assert_eq!(h.phase(), Phase::Work);

    h.advance(1);
    h.send(Event::CheckTimer);
    assert_eq!(h.phase(), Phase::ShortBreak);
    assert_eq!(h.machine.short_breaks(), 1);
}

#[test]
fn check_timer_is_frozen_while_paused() {
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);
    h.send(Event::TimerAction); // start
    h.send(Event::TimerAction); // pause

    h.advance(100);
    h.send(Event::CheckTimer);
    assert_eq!(h.phase(), Phase::Work);
}

#[test]
fn check_timer_is_frozen_before_break_starts() {
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);
    h.complete_period(10);
    assert_eq!(h.phase(), Phase::ShortBreak);

    // Break not started by the user yet; time alone must not end it.
    h.advance(100);
    h.send(Event::CheckTimer);
    assert_eq!(h.phase(), Phase::ShortBreak);
}

#[test]
fn short_break_entry_increments_counter_once() {
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);

    h.complete_period(10);
    assert_eq!(h.phase(), Phase::ShortBreak);
    assert_eq!(h.machine.short_breaks(), 1);

    h.complete_period(5); // finish the break
    assert_eq!(h.phase(), Phase::Work);
    assert_eq!(h.machine.short_breaks(), 1);
}

#[test]
fn long_break_after_configured_short_breaks() {
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);

    h.complete_period(10); // -> short break #1
    h.complete_period(5); // -> work
    h.complete_period(10); // -> short break #2
    h.complete_period(5); // -> work
    assert_eq!(h.machine.short_breaks(), 2);

    h.complete_period(10); // bound reached -> long break
    assert_eq!(h.phase(), Phase::LongBreak);
    assert_eq!(h.machine.short_breaks(), 0);
    assert_eq!(h.machine.long_breaks(), 1);

    // The cycle restarts: the next completed work period is a short break.
    h.complete_period(8); // finish the long break (via the tail)
    assert_eq!(h.phase(), Phase::LongBreakLastMinutes);
}

#[test]
fn long_break_tail_continues_the_same_countdown() {
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);
    h.complete_period(10);
    h.complete_period(5);
    h.complete_period(10);
    h.complete_period(5);
    h.complete_period(10);
    assert_eq!(h.phase(), Phase::LongBreak);

    h.send(Event::TimerAction); // start the long break
    h.advance(2);
    h.send(Event::CheckTimer);
    assert_eq!(h.phase(), Phase::LongBreak);

    h.advance(1); // 3 s: tail threshold (8 - 5)
    h.send(Event::CheckTimer);
    assert_eq!(h.phase(), Phase::LongBreakLastMinutes);
    // No reset on tail entry: elapsed keeps counting from long-break entry.
    assert_eq!(h.machine.tracker().counting_seconds(h.now), 3);

    h.advance(4); // 7 s total
    h.send(Event::CheckTimer);
    assert_eq!(h.phase(), Phase::LongBreakLastMinutes);

    h.advance(1); // 8 s total: the long break ends
    h.send(Event::CheckTimer);
    assert_eq!(h.phase(), Phase::Work);
}

#[test]
fn reset_returns_every_counting_phase_to_idle() {
    // Work.
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);
    h.send(Event::ResetTimer);
    assert_eq!(h.phase(), Phase::Idle);

    // Short break.
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);
    h.complete_period(10);
    h.send(Event::ResetTimer);
    assert_eq!(h.phase(), Phase::Idle);
    assert!(!h.machine.tracker().is_started());
}

#[test]
fn break_press_starts_then_abandons_to_work() {
    let mut h = Harness::new(short_config());
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);
    h.complete_period(10);
    assert_eq!(h.phase(), Phase::ShortBreak);

    h.send(Event::TimerAction); // first press starts the break
    assert_eq!(h.phase(), Phase::ShortBreak);
    assert!(h.machine.tracker().is_timer_active());

    h.advance(1);
    h.send(Event::TimerAction); // second press abandons it
    assert_eq!(h.phase(), Phase::Work);
    assert!(!h.machine.tracker().is_started());
}

#[test]
fn disabled_long_breaks_never_leave_the_short_cycle() {
    let config = TimerConfig::builder()
        .work_period(10)
        .short_break_period(5)
        .long_break_after(1)
        .long_breaks_enabled(false)
        .build();
    let mut h = Harness::new(config);
    h.send(Event::TimerReady);
    h.send(Event::TimerAction);

    h.complete_period(10);
    assert_eq!(h.phase(), Phase::ShortBreak);
    h.complete_period(5);
    h.complete_period(10); // counter at the bound, long breaks disabled
    assert_eq!(h.phase(), Phase::ShortBreak);
    assert_eq!(h.machine.long_breaks(), 0);
}

/// The transition table: which events a phase reacts to at all.
fn in_table(phase: Phase, event: Event) -> bool {
    use Event::*;
    match phase {
        Phase::Off => matches!(event, TimerReady),
        Phase::Idle => matches!(event, StartTimer | ResetTimer | TimerAction),
        Phase::Work
        | Phase::ShortBreak
        | Phase::LongBreak
        | Phase::LongBreakLastMinutes => {
            matches!(event, ResetTimer | TimerAction | CheckTimer)
        }
    }
}

fn harness_in(phase: Phase) -> Harness {
    let mut h = Harness::new(short_config());
    match phase {
        Phase::Off => {}
        Phase::Idle => h.send(Event::TimerReady),
        Phase::Work => {
            h.send(Event::TimerReady);
            h.send(Event::TimerAction);
        }
        Phase::ShortBreak => {
            h.send(Event::TimerReady);
            h.send(Event::TimerAction);
            h.complete_period(10);
        }
        Phase::LongBreak => {
            h.send(Event::TimerReady);
            h.send(Event::TimerAction);
            h.complete_period(10);
            h.complete_period(5);
            h.complete_period(10);
            h.complete_period(5);
            h.complete_period(10);
        }
        Phase::LongBreakLastMinutes => {
            let mut inner = harness_in(Phase::LongBreak);
            inner.complete_period(3);
            return inner;
        }
    }
    assert_eq!(h.phase(), phase);
    h
}

#[test]
fn events_outside_the_table_change_nothing() {
    let phases = [
        Phase::Off,
        Phase::Idle,
        Phase::Work,
        Phase::ShortBreak,
        Phase::LongBreak,
        Phase::LongBreakLastMinutes,
    ];
    for phase in phases {
        for event in Event::ALL {
            if in_table(phase, event) {
                continue;
            }
            let mut h = harness_in(phase);
            let before = h.state();
            h.send(event);
            assert_eq!(h.state(), before, "{phase} must ignore {event}");
        }
    }
}
