//! The periodic dispatch timer.

use core::ffi::c_void;
use core::ptr;
use std::sync::Arc;

use esp_idf_sys as sys;

use pomodoro::{Dispatcher, LedBank};

use super::{check, EspClock, EspOutputPin};
use crate::error::{BootError, BootResult};

struct TickContext {
    dispatcher: Arc<Dispatcher<EspClock>>,
    leds: LedBank<EspOutputPin>,
}

/// Periodic `esp_timer` firing the dispatch tick from the timer task.
///
/// Fixed-rate reschedule: a slow tick is simply not made up, matching the
/// timer service's periodic semantics.
pub struct DispatchTimer {
    handle: sys::esp_timer_handle_t,
    _context: *mut TickContext,
}

impl DispatchTimer {
    /// Creates and starts the timer. Fatal when the timer service refuses
    /// either call.
    pub fn start(
        period_us: u64,
        dispatcher: Arc<Dispatcher<EspClock>>,
        leds: LedBank<EspOutputPin>,
    ) -> BootResult<Self> {
        let context = Box::into_raw(Box::new(TickContext { dispatcher, leds }));
        let args = sys::esp_timer_create_args_t {
            callback: Some(dispatch_tick),
            arg: context.cast(),
            dispatch_method: sys::esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"dispatch_timer\0".as_ptr().cast(),
            skip_unhandled_events: false,
        };

        let mut handle: sys::esp_timer_handle_t = ptr::null_mut();
        unsafe {
            let err = sys::esp_timer_create(&args, &mut handle);
            if err != sys::ESP_OK as i32 {
                drop(Box::from_raw(context));
                return Err(BootError::Driver {
                    call: "esp_timer_create",
                    code: err,
                });
            }
            check(
                "esp_timer_start_periodic",
                sys::esp_timer_start_periodic(handle, period_us),
            )?;
        }

        log::debug!("dispatch timer started, period {period_us}us");
        Ok(Self {
            handle,
            _context: context,
        })
    }

    pub fn handle(&self) -> sys::esp_timer_handle_t {
        self.handle
    }
}

/// Timer-task context; the single caller, so the exclusive borrow of the
/// tick context is sound.
unsafe extern "C" fn dispatch_tick(arg: *mut c_void) {
    let context = &mut *(arg as *mut TickContext);
    context.dispatcher.tick(&mut context.leds);
}
