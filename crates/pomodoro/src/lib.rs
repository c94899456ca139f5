//! # pomodoro
//!
//! Engine for a firmware-resident pomodoro timer. The crate models the timer
//! as an event-driven state machine dispatched from two contexts: a periodic
//! tick that samples the monotonic clock, and a debounced button edge
//! consumer. Three active-low LEDs indicate the current phase.
//!
//! ## Module Overview
//! - [`event`]    – Event signals dispatched into the machine.
//! - [`clock`]    – Monotonic microsecond time sources.
//! - [`gpio`]     – Pin level/edge types and the output-pin trait.
//! - [`tracker`]  – Start/pause/elapsed bookkeeping for one countdown.
//! - [`phase`]    – The six-phase state machine and its transition rules.
//! - [`led`]      – Pure phase-to-LED encoding and the output bank.
//! - [`debounce`] – Timestamp-gap filtering of raw button edges.
//! - [`config`]   – Timer periods and runtime options.
//! - [`dispatch`] – Serialized dispatcher, edge queue and consumer (`std`).
//!
//! The machine itself is single-threaded; [`dispatch::Dispatcher`] is the
//! only concurrent entry point and serializes all access behind a mutex.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod clock;
pub mod config;
pub mod debounce;
#[cfg(feature = "std")]
pub mod dispatch;
pub mod event;
pub mod gpio;
pub mod led;
pub mod phase;
pub mod sync;
pub mod tracker;

pub use clock::{Clock, ManualClock, MICROS_PER_SEC};
pub use config::{TimerConfig, TimerConfigBuilder};
pub use debounce::Debouncer;
#[cfg(feature = "std")]
pub use dispatch::{edge_queue, Dispatcher, EdgePump, EdgeQueue, RawEdge, TimerSnapshot};
pub use event::Event;
pub use gpio::{Edge, Level, OutputPin};
pub use led::{LedBank, LedMode, LedPattern};
pub use phase::{Phase, PomodoroMachine};
pub use tracker::ElapsedTracker;

#[cfg(test)]
mod tests;
