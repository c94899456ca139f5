//! Hardware glue over `esp-idf-sys`.

mod clock;
mod gpio;
mod net;
mod runtime;
mod timer;

pub use clock::EspClock;
pub use gpio::{Button, EspOutputPin};
pub use net::{connect_network, init_system};
pub use runtime::Esp32Runtime;
pub use timer::DispatchTimer;

use crate::error::{BootError, BootResult};

/// Maps a non-OK ESP-IDF return code to a fatal boot error.
pub(crate) fn check(call: &'static str, code: i32) -> BootResult<()> {
    if code == esp_idf_sys::ESP_OK as i32 {
        Ok(())
    } else {
        Err(BootError::Driver { call, code })
    }
}
