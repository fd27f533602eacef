//! Thermo - dual-digit thermometer firmware
//!
//! Main firmware binary for RP2040 boards. The blocking main loop owns the
//! button debouncer and indicator LEDs; a task on a high-priority interrupt
//! executor services the timers and the button edge. Both reach the
//! tracker, display and power state through one critical-section mutex.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use thermo_core::config::ThermometerConfig;
use thermo_core::debounce::Debouncer;
use thermo_core::{Controller, UiEvent};
use thermo_hal_rp2040::WfeHalt;

use crate::board::{Events, SharedBoard};

mod board;
mod tasks;

/// Enable, pending and run bits of the four event lines
static EVENTS: Events = Events::new();

static SHARED: StaticCell<SharedBoard> = StaticCell::new();

static EVENT_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EVENT_EXECUTOR.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Thermo firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = ThermometerConfig::default();
    info!("Timing: {}", config.timing);

    let parts = unwrap!(board::split(p, &EVENTS));
    let shared: &'static SharedBoard = SHARED.init(parts.state.into_shared());
    info!("Board ready");

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let event_spawner = EVENT_EXECUTOR.start(interrupt::SWI_IRQ_1);
    event_spawner
        .spawn(tasks::event_task(shared, &EVENTS, config.timing))
        .unwrap();
    event_spawner
        .spawn(tasks::button_task(parts.button_edge, &EVENTS))
        .unwrap();

    let debouncer = Debouncer::new(parts.button_level, Delay, config.debounce);
    let mut controller = Controller::new(shared, debouncer, parts.indicators, WfeHalt);

    controller.start();
    info!("Showing {}", controller.state());

    // The controller blocks; this task never yields back to the executor
    loop {
        let slept = controller
            .state()
            .transition(UiEvent::ButtonPressed)
            .is_sleeping();
        let state = controller.step();
        if slept {
            info!("Woke from system sleep");
        }
        info!("Showing {}", state);
    }
}
