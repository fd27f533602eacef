//! Button edge detector
//!
//! Keeps a rising-edge wait armed at all times, independent of the event
//! task's own loop, so an edge that lands while a dispatch runs is held by
//! the GPIO interrupt latch and recorded once the dispatch ends.

use defmt::*;
use embassy_rp::gpio::Input;

use thermo_hal::EventLine;

use crate::board::Events;

#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>, events: &'static Events) {
    info!("Button task started");

    loop {
        button.wait_for_rising_edge().await;
        events.trigger(EventLine::ButtonEdge);
        trace!("Button edge latched");
    }
}
