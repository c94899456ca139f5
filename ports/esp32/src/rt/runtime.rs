//! The assembled firmware runtime.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use esp_idf_sys as sys;

use pomodoro::{edge_queue, Dispatcher, EdgePump, Event, LedBank, TimerConfig};

use super::{connect_network, init_system, Button, DispatchTimer, EspClock, EspOutputPin};
use crate::error::BootResult;
use crate::PortConfig;

/// Everything the firmware keeps alive after boot: the serialized
/// dispatcher, the armed button and the running dispatch timer.
pub struct Esp32Runtime {
    dispatcher: Arc<Dispatcher<EspClock>>,
    _button: Button,
    _timer: DispatchTimer,
}

impl Esp32Runtime {
    /// Full boot sequence, in the order of the original firmware: system
    /// services, best-effort network, outputs, input, dispatch timer, then
    /// `TimerReady` so the machine leaves `Off`.
    ///
    /// `wifi_connect` is the application-provided connect routine; pass
    /// `None::<fn() -> Result<(), i32>>` on boards without networking.
    pub fn boot<F>(
        port: PortConfig,
        timer_config: TimerConfig,
        wifi_connect: Option<F>,
    ) -> BootResult<Self>
    where
        F: FnOnce() -> Result<(), i32>,
    {
        sys::link_patches();
        port.validate()?;
        init_system()?;
        if let Some(connect) = wifi_connect {
            connect_network(connect, port.power_save);
        }

        let leds = LedBank::new(
            EspOutputPin::configure(port.red_gpio)?,
            EspOutputPin::configure(port.yellow_gpio)?,
            EspOutputPin::configure(port.green_gpio)?,
        );

        let dispatcher = Arc::new(Dispatcher::new(timer_config, EspClock));
        let (edges, rx) = edge_queue();

        let pump = EdgePump::new(rx, Arc::clone(&dispatcher));
        thread::Builder::new()
            .name("edge-pump".into())
            .spawn(move || pump.run())?;

        let button = Button::install(port.button_gpio, edges)?;
        let timer =
            DispatchTimer::start(timer_config.tick_period_us, Arc::clone(&dispatcher), leds)?;

        dispatcher.dispatch(Event::TimerReady);
        log::info!("pomodoro firmware up");

        Ok(Self {
            dispatcher,
            _button: button,
            _timer: timer,
        })
    }

    /// The serialized front door to the machine.
    pub fn dispatcher(&self) -> &Arc<Dispatcher<EspClock>> {
        &self.dispatcher
    }

    /// Parks the main task; ticks and button edges drive everything.
    pub fn run(&self) -> ! {
        loop {
            thread::sleep(Duration::from_secs(60));
        }
    }
}
