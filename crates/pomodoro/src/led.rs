//! Phase-to-LED encoding and the output bank.
//!
//! The encoder is a pure lookup from (phase, started, paused) to a pattern;
//! blinking resolves against wall-clock second parity, so no extra timer is
//! involved. Outputs are active-low: a lit LED drives its pin to ground.

use crate::clock::MICROS_PER_SEC;
use crate::gpio::{Level, OutputPin};
use crate::phase::Phase;

/// Steady or blinking state of a single LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedMode {
    On,
    Off,
    /// Lit during even seconds since boot, dark during odd ones (1 Hz).
    Blink,
}

impl LedMode {
    /// Resolves the mode to a pin level for the given second parity.
    pub fn level(self, even_second: bool) -> Level {
        match self {
            LedMode::On => Level::Low,
            LedMode::Off => Level::High,
            LedMode::Blink => {
                if even_second {
                    Level::Low
                } else {
                    Level::High
                }
            }
        }
    }
}

/// Target state of the red/yellow/green indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedPattern {
    pub red: LedMode,
    pub yellow: LedMode,
    pub green: LedMode,
}

impl LedPattern {
    pub const fn new(red: LedMode, yellow: LedMode, green: LedMode) -> Self {
        Self { red, yellow, green }
    }

    /// Resolves all three modes to pin levels for the given second parity.
    pub fn levels(self, even_second: bool) -> [Level; 3] {
        [
            self.red.level(even_second),
            self.yellow.level(even_second),
            self.green.level(even_second),
        ]
    }
}

/// The indicator table: (phase, started, paused) to (red, yellow, green).
///
/// Break phases render from `started` alone; the transition rules make a
/// paused break unreachable, but the encoder stays total regardless.
pub fn pattern_for(phase: Phase, started: bool, paused: bool) -> LedPattern {
    use LedMode::{Blink, Off, On};

    match phase {
        Phase::Off => LedPattern::new(On, On, On),
        Phase::Idle => LedPattern::new(Off, Blink, Off),
        Phase::Work if !started => LedPattern::new(On, On, Off),
        Phase::Work if paused => LedPattern::new(Off, Blink, On),
        Phase::Work => LedPattern::new(Off, Off, On),
        Phase::ShortBreak if !started => LedPattern::new(Off, On, On),
        Phase::ShortBreak => LedPattern::new(Blink, Off, Off),
        Phase::LongBreak if !started => LedPattern::new(Off, On, On),
        Phase::LongBreak => LedPattern::new(On, Off, Off),
        Phase::LongBreakLastMinutes if !started => LedPattern::new(Off, On, On),
        Phase::LongBreakLastMinutes => LedPattern::new(Blink, Off, Off),
    }
}

/// True during even seconds since boot; drives the 1 Hz blink.
pub fn even_second(now_us: u64) -> bool {
    (now_us / MICROS_PER_SEC) % 2 == 0
}

/// The three indicator outputs, applied together once per tick.
#[derive(Debug)]
pub struct LedBank<P: OutputPin> {
    red: P,
    yellow: P,
    green: P,
}

impl<P: OutputPin> LedBank<P> {
    pub fn new(red: P, yellow: P, green: P) -> Self {
        Self { red, yellow, green }
    }

    /// Drives all three pins from the pattern at the given second parity.
    pub fn apply(&mut self, pattern: LedPattern, even_second: bool) {
        let [red, yellow, green] = pattern.levels(even_second);
        self.red.write(red);
        self.yellow.write(yellow);
        self.green.write(green);
    }
}
