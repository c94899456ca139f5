//! Pin types shared by the LED encoder and the hardware ports.

/// GPIO pin levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Low level (0V). Lights an active-low LED.
    Low,
    /// High level (VCC). Darkens an active-low LED.
    High,
}

/// Interrupt trigger edge for the button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
    /// Both edges; the button is serviced on press and release alike.
    Both,
}

/// Output pin trait (object-safe).
///
/// Writes cannot fail: the ports validate pin configuration at boot, and a
/// configured output register write has no error path on the target.
pub trait OutputPin: Send {
    /// Drives the pin to the given level.
    fn write(&mut self, level: Level);

    /// Pin number, for diagnostics.
    fn pin_number(&self) -> u32;
}
