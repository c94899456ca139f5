//! Pomodoro timer on a POSIX host.
//!
//! Stands in for the board: Enter is the button, the terminal shows the
//! LEDs. The real cadence (45 min work, 15 min short break, 30 min long
//! break) is compressed so a whole cycle fits a demo session.

use std::io::{self, BufRead};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pomodoro::{TimerConfig, TimerSnapshot};
use pomodoro_port_posix::{PosixRuntime, VirtualPin};

fn main() {
    println!("pomodoro host demo");
    println!("  Enter  press the button");
    println!("  Ctrl-C quit");
    println!();

    // Compressed cadence: 60 s work, 15 s short break, 30 s long break.
    let config = TimerConfig::builder()
        .work_period(60)
        .short_break_period(15)
        .long_break_period(30)
        .build();

    let runtime = PosixRuntime::start(config).expect("runtime should start");
    print_status(&runtime.snapshot(), runtime.leds());

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || {
            stop.store(true, Ordering::Release);
            // recv on stdin does not wake on a signal; just leave.
            println!("\nbye");
            process::exit(0);
        })
        .expect("signal handler should install");
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line.is_err() || stop.load(Ordering::Acquire) {
            break;
        }
        if !runtime.press_button() {
            println!("(edge dropped, queue full)");
        }
        // Give the pump a moment to drain before reporting.
        std::thread::sleep(std::time::Duration::from_millis(20));
        print_status(&runtime.snapshot(), runtime.leds());
    }

    runtime.shutdown();
}

fn print_status(snapshot: &TimerSnapshot, leds: &[VirtualPin; 3]) {
    let lamp = |pin: &VirtualPin| if pin.is_lit() { "*" } else { "." };
    println!(
        "[{}] elapsed {:>4}s  short breaks {}  long breaks {}  R:{} Y:{} G:{}{}",
        snapshot.phase,
        snapshot.elapsed_s,
        snapshot.short_breaks,
        snapshot.long_breaks,
        lamp(&leds[0]),
        lamp(&leds[1]),
        lamp(&leds[2]),
        if snapshot.paused { "  (paused)" } else { "" },
    );
}
