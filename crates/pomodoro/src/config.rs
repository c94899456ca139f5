//! Timer periods and runtime options.

/// Configuration for the pomodoro cycle.
///
/// Defaults reproduce the firmware constants: 45 minutes of work, 15-minute
/// short breaks, a 30-minute long break after four short breaks, a 200 ms
/// button debounce window and a 1 s dispatch tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Work period length, in seconds.
    pub work_period_s: u64,
    /// Short break length, in seconds.
    pub short_break_period_s: u64,
    /// Long break length, in seconds.
    pub long_break_period_s: u64,
    /// Short breaks taken before a long break is due.
    pub long_break_after: u8,
    /// Selects the six-phase cycle; disabled, every break is short.
    pub long_breaks_enabled: bool,
    /// Minimum gap between accepted button edges, in microseconds.
    pub debounce_window_us: u64,
    /// Periodic dispatch interval, in microseconds.
    pub tick_period_us: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_period_s: 2700,
            short_break_period_s: 900,
            long_break_period_s: 1800,
            long_break_after: 4,
            long_breaks_enabled: true,
            debounce_window_us: 200_000,
            tick_period_us: 1_000_000,
        }
    }
}

impl TimerConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> TimerConfigBuilder {
        TimerConfigBuilder::default()
    }

    /// Elapsed seconds at which a running long break enters its tail.
    ///
    /// The tail covers the final `short_break_period_s` of the long break.
    pub fn long_break_tail_start_s(&self) -> u64 {
        self.long_break_period_s
            .saturating_sub(self.short_break_period_s)
    }
}

/// Builder for ergonomic configuration construction.
#[derive(Debug, Clone, Default)]
pub struct TimerConfigBuilder {
    config: TimerConfig,
}

impl TimerConfigBuilder {
    /// Sets the work period, in seconds.
    pub fn work_period(mut self, seconds: u64) -> Self {
        self.config.work_period_s = seconds;
        self
    }

    /// Sets the short break period, in seconds.
    pub fn short_break_period(mut self, seconds: u64) -> Self {
        self.config.short_break_period_s = seconds;
        self
    }

    /// Sets the long break period, in seconds.
    pub fn long_break_period(mut self, seconds: u64) -> Self {
        self.config.long_break_period_s = seconds;
        self
    }

    /// Sets how many short breaks precede a long break.
    pub fn long_break_after(mut self, count: u8) -> Self {
        self.config.long_break_after = count;
        self
    }

    /// Enables or disables the long-break phases.
    pub fn long_breaks_enabled(mut self, enabled: bool) -> Self {
        self.config.long_breaks_enabled = enabled;
        self
    }

    /// Sets the button debounce window, in microseconds.
    pub fn debounce_window_us(mut self, window: u64) -> Self {
        self.config.debounce_window_us = window;
        self
    }

    /// Sets the periodic dispatch interval, in microseconds.
    pub fn tick_period_us(mut self, period: u64) -> Self {
        self.config.tick_period_us = period;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> TimerConfig {
        self.config
    }
}
