//! Event dispatcher
//!
//! The single entry point of the event context. Each branch is guarded by
//! its own line being both enabled and pending, clears only its own pending
//! flag and never blocks. Branches run in a fixed order:
//!
//! 1. Multiplex tick: advance the lit digit
//! 2. Sample tick: read the sensor and re-render the shown reading
//! 3. Wake timer: sample once while the system sleeps
//! 4. Button edge: disarm the wake line and record the wake request
//!
//! The button branch never changes the UI state; the main loop does that
//! once it sees the request.

use thermo_hal::{EventLine, EventLines};

use crate::shared::{Board, SharedState};

/// Set of lines handled by one dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServicedLines(u8);

impl ServicedLines {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, line: EventLine) {
        self.0 |= line.mask();
    }

    pub fn contains(&self, line: EventLine) -> bool {
        self.0 & line.mask() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Raw bits, laid out like [`EventLine::mask`]
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Serviced lines in dispatch order
    pub fn iter(self) -> impl Iterator<Item = EventLine> {
        EventLine::ALL
            .into_iter()
            .filter(move |line| self.contains(*line))
    }
}

/// Service every enabled, pending event line once
pub fn dispatch<B: Board>(state: &mut SharedState<B>) -> ServicedLines {
    let mut serviced = ServicedLines::empty();

    if state.lines.is_active(EventLine::MultiplexTimer) {
        state.multiplexer.tick(&mut state.display);
        state.lines.clear_pending(EventLine::MultiplexTimer);
        serviced.insert(EventLine::MultiplexTimer);
    }

    if state.lines.is_active(EventLine::SampleTimer) {
        state.tracker.sample(&mut state.sensor);
        state.refresh_display();
        state.lines.clear_pending(EventLine::SampleTimer);
        serviced.insert(EventLine::SampleTimer);
    }

    if state.lines.is_active(EventLine::WakeTimer) {
        state.wake_timer_sample();
        serviced.insert(EventLine::WakeTimer);
    }

    if state.lines.is_active(EventLine::ButtonEdge) {
        state.button_wake();
        serviced.insert(EventLine::ButtonEdge);
    }

    serviced
}
