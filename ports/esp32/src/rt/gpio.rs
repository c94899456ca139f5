//! GPIO outputs and the button interrupt.

use core::ffi::c_void;

use esp_idf_sys as sys;

use pomodoro::{EdgeQueue, Level, OutputPin, RawEdge};

use super::check;
use crate::error::{BootError, BootResult};

/// Push-pull output pin.
pub struct EspOutputPin {
    pin: u32,
}

impl EspOutputPin {
    /// Configures the pin as an output, initially high (LED dark).
    pub fn configure(pin: u32) -> BootResult<Self> {
        unsafe {
            check("gpio_reset_pin", sys::gpio_reset_pin(pin as i32))?;
            check(
                "gpio_set_direction",
                sys::gpio_set_direction(pin as i32, sys::gpio_mode_t_GPIO_MODE_OUTPUT),
            )?;
        }
        let mut out = Self { pin };
        out.write(Level::High);
        Ok(out)
    }
}

impl OutputPin for EspOutputPin {
    fn write(&mut self, level: Level) {
        let value: u32 = match level {
            Level::Low => 0,
            Level::High => 1,
        };
        // Configured output pins have no error path on this target.
        unsafe {
            sys::gpio_set_level(self.pin as i32, value);
        }
    }

    fn pin_number(&self) -> u32 {
        self.pin
    }
}

struct IsrContext {
    pin: u32,
    edges: EdgeQueue,
}

/// Button input with its interrupt handler installed.
///
/// The handler context lives for the rest of the uptime; the firmware never
/// tears the button down.
pub struct Button {
    pin: u32,
    _context: *mut IsrContext,
}

impl Button {
    /// Pull-up input interrupting on both edges, posting raw edges onto the
    /// queue. Fatal when the ISR service or the handler cannot be installed.
    pub fn install(pin: u32, edges: EdgeQueue) -> BootResult<Self> {
        unsafe {
            check("gpio_reset_pin", sys::gpio_reset_pin(pin as i32))?;
            check(
                "gpio_set_direction",
                sys::gpio_set_direction(pin as i32, sys::gpio_mode_t_GPIO_MODE_INPUT),
            )?;
            check(
                "gpio_set_pull_mode",
                sys::gpio_set_pull_mode(pin as i32, sys::gpio_pull_mode_t_GPIO_PULLUP_ONLY),
            )?;
            check(
                "gpio_set_intr_type",
                sys::gpio_set_intr_type(pin as i32, sys::gpio_int_type_t_GPIO_INTR_ANYEDGE),
            )?;

            // Idempotent across components: already-installed is fine.
            let err = sys::gpio_install_isr_service(0);
            if err != sys::ESP_OK as i32 && err != sys::ESP_ERR_INVALID_STATE as i32 {
                return Err(BootError::Driver {
                    call: "gpio_install_isr_service",
                    code: err,
                });
            }

            let context = Box::into_raw(Box::new(IsrContext { pin, edges }));
            let err = sys::gpio_isr_handler_add(pin as i32, Some(button_isr), context.cast());
            if err != sys::ESP_OK as i32 {
                drop(Box::from_raw(context));
                return Err(BootError::Driver {
                    call: "gpio_isr_handler_add",
                    code: err,
                });
            }

            log::debug!("button interrupt armed on gpio {pin}");
            Ok(Self {
                pin,
                _context: context,
            })
        }
    }

    pub fn pin_number(&self) -> u32 {
        self.pin
    }
}

/// Interrupt context: stamp the edge and post it. Never blocks, never
/// allocates; a full queue drops the edge.
unsafe extern "C" fn button_isr(arg: *mut c_void) {
    let context = &*(arg as *const IsrContext);
    let edge = RawEdge {
        pin: context.pin,
        timestamp_us: sys::esp_timer_get_time() as u64,
    };
    critical_section::with(|_| {
        let _ = context.edges.post_from_isr(edge);
    });
}
