//! One-shot system bring-up and best-effort network attach.
//!
//! The Wi-Fi connect routine itself lives outside the timer (it is an
//! sdkconfig-driven application component, as in the C firmware); the port
//! only sequences it and applies the modem power-save mode afterwards.

use esp_idf_sys as sys;

use super::check;
use crate::{BootResult, WifiPowerSave};

/// Initializes NVS flash, the netif layer and the default event loop.
///
/// Fatal on failure: everything later in bring-up assumes the event loop
/// exists. A stale NVS partition is erased and re-initialized once.
pub fn init_system() -> BootResult<()> {
    unsafe {
        let mut err = sys::nvs_flash_init();
        if err == sys::ESP_ERR_NVS_NO_FREE_PAGES as i32
            || err == sys::ESP_ERR_NVS_NEW_VERSION_FOUND as i32
        {
            check("nvs_flash_erase", sys::nvs_flash_erase())?;
            err = sys::nvs_flash_init();
        }
        check("nvs_flash_init", err)?;
        check("esp_netif_init", sys::esp_netif_init())?;
        check(
            "esp_event_loop_create_default",
            sys::esp_event_loop_create_default(),
        )?;
    }
    Ok(())
}

/// Runs the application's connect routine, then applies the power-save
/// mode. Best-effort: a failed connect is logged and the timer carries on
/// without the network.
pub fn connect_network<F>(connect: F, power_save: WifiPowerSave)
where
    F: FnOnce() -> Result<(), i32>,
{
    match connect() {
        Ok(()) => {
            let mode = match power_save {
                WifiPowerSave::None => sys::wifi_ps_type_t_WIFI_PS_NONE,
                WifiPowerSave::MinModem => sys::wifi_ps_type_t_WIFI_PS_MIN_MODEM,
                WifiPowerSave::MaxModem => sys::wifi_ps_type_t_WIFI_PS_MAX_MODEM,
            };
            let err = unsafe { sys::esp_wifi_set_ps(mode) };
            if err == sys::ESP_OK as i32 {
                log::info!("network up, power save {power_save:?}");
            } else {
                log::warn!("esp_wifi_set_ps failed ({err}); modem stays awake");
            }
        }
        Err(code) => {
            log::warn!("wifi connect failed ({code}); continuing without network");
        }
    }
}
