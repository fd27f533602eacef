//! Event context
//!
//! Stands in for the interrupt handler: owns the three tickers, latches
//! whichever fired into the event register and runs one dispatch under the
//! shared mutex. Every dispatch ends with `SEV` so a main loop about to
//! halt notices it.

use core::future::pending;

use defmt::*;
use embassy_futures::select::{select4, Either4};
use embassy_time::{Duration, Ticker};

use thermo_core::config::TimingConfig;
use thermo_core::dispatch;
use thermo_hal::EventLine;

use crate::board::{Events, SharedBoard};

#[embassy_executor::task]
pub async fn event_task(shared: &'static SharedBoard, events: &'static Events, timing: TimingConfig) {
    info!(
        "Event task started: multiplex {}Hz, sample {}ms, wake {}s",
        timing.multiplex_rate_hz(),
        timing.sample_period_ms,
        timing.wake_period_s
    );

    let mut multiplex = Ticker::every(Duration::from_micros(timing.multiplex_period_us as u64));
    let mut sample = Ticker::every(Duration::from_millis(timing.sample_period_ms as u64));
    let mut wake = Ticker::every(Duration::from_secs(timing.wake_period_s as u64));

    loop {
        let restarts = events.take_restarts();
        if restarts & EventLine::MultiplexTimer.mask() != 0 {
            multiplex.reset();
        }
        if restarts & EventLine::SampleTimer.mask() != 0 {
            sample.reset();
        }
        if restarts & EventLine::WakeTimer.mask() != 0 {
            wake.reset();
        }

        if !events.has_active() {
            let fired = select4(
                next_tick(&mut multiplex, events, EventLine::MultiplexTimer),
                next_tick(&mut sample, events, EventLine::SampleTimer),
                next_tick(&mut wake, events, EventLine::WakeTimer),
                events.wait_reschedule(),
            )
            .await;

            match fired {
                Either4::First(line) | Either4::Second(line) | Either4::Third(line) => {
                    events.raise(line)
                }
                // Restarted timer, button edge or unmasked line
                Either4::Fourth(()) => {}
            }
        }

        let serviced = shared.lock(|cell| dispatch(&mut cell.borrow_mut()));
        if serviced.contains(EventLine::WakeTimer) {
            debug!("Wake-timer sample taken");
        }
        if serviced.contains(EventLine::ButtonEdge) {
            info!("Button edge, leaving system sleep");
        }
        trace!("Serviced lines {=u8:b}", serviced.bits());

        cortex_m::asm::sev();
    }
}

/// Next tick of a running timer; never resolves for a stopped one
async fn next_tick(ticker: &mut Ticker, events: &Events, line: EventLine) -> EventLine {
    if !events.is_timer_running(line) {
        pending::<()>().await;
    }
    ticker.next().await;
    line
}
