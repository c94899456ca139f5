//! ESP32 hardware port for the pomodoro timer.
//!
//! The default build carries the board configuration and boot error types
//! and compiles on the host. The `rt` feature adds the ESP-IDF glue over
//! `esp-idf-sys`: GPIO pins and the button interrupt, the periodic
//! `esp_timer` dispatch callback, and the boot sequence (NVS, netif, event
//! loop, best-effort Wi-Fi, modem power save).

pub mod error;

#[cfg(feature = "rt")]
pub mod rt;

pub use error::{BootError, BootResult};

/// Wi-Fi modem power-save mode applied once the network is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiPowerSave {
    /// No power save; the modem stays awake.
    #[default]
    None,
    /// Wake for beacons at the DTIM interval.
    MinModem,
    /// Wake at the configured listen interval.
    MaxModem,
}

/// Board wiring and port options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortConfig {
    /// Button input, pulled up, interrupting on both edges.
    pub button_gpio: u32,
    /// Active-low indicator outputs.
    pub red_gpio: u32,
    pub yellow_gpio: u32,
    pub green_gpio: u32,
    pub power_save: WifiPowerSave,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            button_gpio: 4,
            red_gpio: 25,
            yellow_gpio: 26,
            green_gpio: 27,
            power_save: WifiPowerSave::None,
        }
    }
}

impl PortConfig {
    /// Highest GPIO number accepted by the port.
    pub const MAX_GPIO: u32 = 48;

    /// All pins in wiring order: button, red, yellow, green.
    pub fn pins(&self) -> [u32; 4] {
        [
            self.button_gpio,
            self.red_gpio,
            self.yellow_gpio,
            self.green_gpio,
        ]
    }

    /// Rejects out-of-range and doubly assigned pins before any driver call.
    pub fn validate(&self) -> BootResult<()> {
        let pins = self.pins();
        for pin in pins {
            if pin > Self::MAX_GPIO {
                return Err(BootError::InvalidGpio(pin));
            }
        }
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(BootError::GpioConflict(*pin));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wiring_is_valid() {
        assert!(PortConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_pin_is_rejected() {
        let config = PortConfig {
            button_gpio: 49,
            ..PortConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BootError::InvalidGpio(49))
        ));
    }

    #[test]
    fn shared_pin_is_rejected() {
        let config = PortConfig {
            red_gpio: 4,
            ..PortConfig::default()
        };
        assert!(matches!(config.validate(), Err(BootError::GpioConflict(4))));
    }
}
