//! Event dispatch plumbing between interrupt, tick and machine contexts.
//!
//! Three contexts touch the timer: the interrupt producer (posts raw edges,
//! never blocks), the edge-pump consumer (debounces and forwards the button
//! action) and the periodic tick. The machine itself is single-threaded, so
//! [`Dispatcher`] is the only way in: it samples the clock once per dispatch
//! and serializes every reaction behind a mutex.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

use crate::clock::Clock;
use crate::config::TimerConfig;
use crate::debounce::Debouncer;
use crate::event::Event;
use crate::gpio::OutputPin;
use crate::led::{self, LedBank};
use crate::phase::{Phase, PomodoroMachine};
use crate::sync::{Arc, Mutex};

/// Capacity of the raw edge queue. A full queue drops further edges until
/// the consumer catches up; lost bounces are acceptable.
pub const EDGE_QUEUE_DEPTH: usize = 8;

/// One raw button edge, stamped in the interrupt context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEdge {
    /// GPIO number that raised the interrupt.
    pub pin: u32,
    /// Clock sample taken when the edge fired, in µs since boot.
    pub timestamp_us: u64,
}

/// Producer half of the edge queue, handed to the interrupt handler.
#[derive(Clone)]
pub struct EdgeQueue {
    tx: SyncSender<RawEdge>,
}

impl EdgeQueue {
    /// Posts an edge without blocking.
    ///
    /// Returns false when the queue is full or the consumer is gone; the
    /// edge is dropped either way and the caller must not retry.
    pub fn post_from_isr(&self, edge: RawEdge) -> bool {
        self.tx.try_send(edge).is_ok()
    }
}

/// Creates the fixed-capacity edge queue.
pub fn edge_queue() -> (EdgeQueue, Receiver<RawEdge>) {
    let (tx, rx) = sync_channel(EDGE_QUEUE_DEPTH);
    (EdgeQueue { tx }, rx)
}

/// Serialized front door to the phase machine.
///
/// Samples the clock once per dispatch so the machine and the LED refresh
/// observe the same timestamp within a tick.
pub struct Dispatcher<C: Clock> {
    machine: Mutex<PomodoroMachine>,
    clock: C,
    config: TimerConfig,
}

impl<C: Clock> Dispatcher<C> {
    pub fn new(config: TimerConfig, clock: C) -> Self {
        Self {
            machine: Mutex::new(PomodoroMachine::new(config)),
            clock,
            config,
        }
    }

    /// The configuration the machine was built with.
    pub fn config(&self) -> TimerConfig {
        self.config
    }

    /// Current clock sample, for producers stamping edges.
    pub fn now_micros(&self) -> u64 {
        self.clock.now_micros()
    }

    /// Dispatches one event at the current clock sample.
    pub fn dispatch(&self, event: Event) {
        let now = self.clock.now_micros();
        self.machine.lock().dispatch(event, now);
    }

    /// One periodic tick: evaluate elapsed time, then refresh the LEDs with
    /// the same timestamp.
    pub fn tick<P: OutputPin>(&self, leds: &mut LedBank<P>) {
        let now = self.clock.now_micros();
        let pattern = {
            let mut machine = self.machine.lock();
            machine.dispatch(Event::CheckTimer, now);
            let tracker = machine.tracker();
            led::pattern_for(machine.phase(), tracker.is_started(), tracker.is_paused())
        };
        leds.apply(pattern, led::even_second(now));
    }

    /// Consistent view of the timer state, for status output.
    pub fn snapshot(&self) -> TimerSnapshot {
        let now = self.clock.now_micros();
        let machine = self.machine.lock();
        let tracker = machine.tracker();
        TimerSnapshot {
            phase: machine.phase(),
            started: tracker.is_started(),
            paused: tracker.is_paused(),
            elapsed_s: tracker.counting_seconds(now),
            short_breaks: machine.short_breaks(),
            long_breaks: machine.long_breaks(),
        }
    }
}

/// Point-in-time view of the timer, taken under the dispatch lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub started: bool,
    pub paused: bool,
    pub elapsed_s: u64,
    pub short_breaks: u8,
    pub long_breaks: u32,
}

/// Consumer of the raw edge queue.
///
/// Blocks on the queue, filters bounces and forwards a single
/// [`Event::TimerAction`] per accepted edge. Debounce state lives here and
/// nowhere else.
pub struct EdgePump<C: Clock> {
    rx: Receiver<RawEdge>,
    debouncer: Debouncer,
    dispatcher: Arc<Dispatcher<C>>,
}

impl<C: Clock> EdgePump<C> {
    pub fn new(rx: Receiver<RawEdge>, dispatcher: Arc<Dispatcher<C>>) -> Self {
        let debouncer = Debouncer::new(dispatcher.config().debounce_window_us);
        Self {
            rx,
            debouncer,
            dispatcher,
        }
    }

    /// Runs until every producer handle is dropped.
    pub fn run(mut self) {
        while let Ok(edge) = self.rx.recv() {
            self.process(edge);
        }
        log::debug!("edge queue closed; pump exiting");
    }

    /// Handles one edge; returns true when an action was dispatched.
    pub fn process(&mut self, edge: RawEdge) -> bool {
        if !self.debouncer.accept(edge.timestamp_us) {
            return false;
        }
        log::debug!(
            "button edge on pin {} at {}us accepted",
            edge.pin,
            edge.timestamp_us
        );
        self.dispatcher.dispatch(Event::TimerAction);
        true
    }
}
