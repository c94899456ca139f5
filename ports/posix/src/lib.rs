//! POSIX hosting for the pomodoro engine.
//!
//! The hardware firmware drives the engine from a periodic timer callback
//! and an interrupt-fed queue; this port reproduces both on an OS: a ticker
//! thread stands in for the timer service, an edge-pump thread for the
//! consumer task, and [`VirtualPin`]s for the LED outputs. Intended for the
//! host demo and for exercising the engine under real concurrency.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use pomodoro::{
    edge_queue, Clock, Dispatcher, EdgePump, EdgeQueue, Event, LedBank, Level, OutputPin,
    RawEdge, TimerConfig, TimerSnapshot,
};

/// GPIO numbers mirrored from the reference board layout.
pub const BUTTON_PIN: u32 = 4;
pub const RED_PIN: u32 = 25;
pub const YELLOW_PIN: u32 = 26;
pub const GREEN_PIN: u32 = 27;

/// Monotonic microseconds since the runtime was created ("boot").
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_micros(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }
}

/// Output pin backed by an atomic level, readable back by the host UI.
#[derive(Debug, Clone)]
pub struct VirtualPin {
    number: u32,
    high: Arc<AtomicBool>,
}

impl VirtualPin {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            // Outputs rest high: active-low LEDs start dark.
            high: Arc::new(AtomicBool::new(true)),
        }
    }

    /// The last level written to the pin.
    pub fn level(&self) -> Level {
        if self.high.load(Ordering::Acquire) {
            Level::High
        } else {
            Level::Low
        }
    }

    /// True when the active-low LED on this pin is currently lit.
    pub fn is_lit(&self) -> bool {
        self.level() == Level::Low
    }
}

impl OutputPin for VirtualPin {
    fn write(&mut self, level: Level) {
        self.high.store(level == Level::High, Ordering::Release);
    }

    fn pin_number(&self) -> u32 {
        self.number
    }
}

/// Thread-backed runtime owning the ticker and the edge pump.
pub struct PosixRuntime {
    dispatcher: Arc<Dispatcher<SystemClock>>,
    edges: Option<EdgeQueue>,
    leds: [VirtualPin; 3],
    running: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
    pump: Option<JoinHandle<()>>,
}

impl PosixRuntime {
    /// Brings the timer up: spawns the ticker and pump threads, then posts
    /// `TimerReady` so the machine leaves `Off`.
    pub fn start(config: TimerConfig) -> io::Result<Self> {
        let dispatcher = Arc::new(Dispatcher::new(config, SystemClock::new()));
        let (edges, rx) = edge_queue();

        let red = VirtualPin::new(RED_PIN);
        let yellow = VirtualPin::new(YELLOW_PIN);
        let green = VirtualPin::new(GREEN_PIN);
        let leds = [red.clone(), yellow.clone(), green.clone()];
        let mut bank = LedBank::new(red, yellow, green);

        let running = Arc::new(AtomicBool::new(true));
        let tick_period = Duration::from_micros(config.tick_period_us);

        let ticker = {
            let dispatcher = Arc::clone(&dispatcher);
            let running = Arc::clone(&running);
            thread::Builder::new()
                .name("dispatch-tick".into())
                .spawn(move || {
                    while running.load(Ordering::Acquire) {
                        thread::sleep(tick_period);
                        dispatcher.tick(&mut bank);
                    }
                })?
        };

        let pump = {
            let pump = EdgePump::new(rx, Arc::clone(&dispatcher));
            thread::Builder::new()
                .name("edge-pump".into())
                .spawn(move || pump.run())?
        };

        dispatcher.dispatch(Event::TimerReady);
        log::info!("posix runtime up; tick period {tick_period:?}");

        Ok(Self {
            dispatcher,
            edges: Some(edges),
            leds,
            running,
            ticker: Some(ticker),
            pump: Some(pump),
        })
    }

    /// The serialized front door to the machine.
    pub fn dispatcher(&self) -> &Arc<Dispatcher<SystemClock>> {
        &self.dispatcher
    }

    /// Simulates one raw button edge, stamped with the current clock.
    ///
    /// Returns false when the edge queue is full, matching the interrupt
    /// producer's drop semantics.
    pub fn press_button(&self) -> bool {
        let edge = RawEdge {
            pin: BUTTON_PIN,
            timestamp_us: self.dispatcher.now_micros(),
        };
        match &self.edges {
            Some(edges) => edges.post_from_isr(edge),
            None => false,
        }
    }

    /// Point-in-time view of the timer.
    pub fn snapshot(&self) -> TimerSnapshot {
        self.dispatcher.snapshot()
    }

    /// The three indicator pins (red, yellow, green).
    pub fn leds(&self) -> &[VirtualPin; 3] {
        &self.leds
    }

    /// Stops both threads and waits for them.
    pub fn shutdown(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        self.running.store(false, Ordering::Release);
        // Dropping the last producer closes the queue and ends the pump.
        self.edges = None;
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
        if let Some(pump) = self.pump.take() {
            let _ = pump.join();
        }
        log::info!("posix runtime stopped");
    }
}

impl Drop for PosixRuntime {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}
