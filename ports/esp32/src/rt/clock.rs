use pomodoro::Clock;

/// Monotonic microseconds since boot, from the `esp_timer` service.
#[derive(Debug, Clone, Copy, Default)]
pub struct EspClock;

impl Clock for EspClock {
    fn now_micros(&self) -> u64 {
        // Monotonic since boot and never negative.
        unsafe { esp_idf_sys::esp_timer_get_time() as u64 }
    }
}
