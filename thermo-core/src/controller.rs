//! Main-loop controller
//!
//! Blocks on the button, advances the UI state machine, drives the
//! indicator LEDs and renders the selected reading. Entering `Sleeping`
//! runs the whole system-sleep sequence:
//!
//! 1. LEDs off, display and sensor to low power
//! 2. Debounce the press that asked for sleep
//! 3. Arm the button edge, CPU to the idle clock
//! 4. Halt until the button edge records a wake request (wake-timer
//!    samples return from the halt without waking the UI)
//! 5. Unwind, force the maximum onto the display, debounce the waking press
//!
//! The shared mutex is only held for the short non-blocking sequences in
//! [`SharedState`]; every wait happens with it released.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use thermo_hal::{Halt, InputPin, OutputPin};

use crate::debounce::Debouncer;
use crate::shared::{Board, Shared, SharedState};
use crate::ui::{IndicatorLeds, UiEvent, UiState};

/// Main execution context of the thermometer
pub struct Controller<'a, M, B, P, D, O, H>
where
    M: RawMutex,
    B: Board,
    P: InputPin,
    D: DelayNs,
    O: OutputPin,
    H: Halt,
{
    shared: &'a Shared<M, B>,
    debouncer: Debouncer<P, D>,
    indicators: IndicatorLeds<O>,
    halt: H,
    /// Current UI state
    state: UiState,
}

impl<'a, M, B, P, D, O, H> Controller<'a, M, B, P, D, O, H>
where
    M: RawMutex,
    B: Board,
    P: InputPin,
    D: DelayNs,
    O: OutputPin,
    H: Halt,
{
    pub fn new(
        shared: &'a Shared<M, B>,
        debouncer: Debouncer<P, D>,
        indicators: IndicatorLeds<O>,
        halt: H,
    ) -> Self {
        Self {
            shared,
            debouncer,
            indicators,
            halt,
            state: UiState::POWER_ON,
        }
    }

    /// Power-on sequence: light the power-on indicator, then start the
    /// collaborators and both timers
    pub fn start(&mut self) {
        let state = self.state;
        self.indicators.show(state.indicator());
        self.with_state(|s| {
            s.set_ui_state(state);
            s.initialize();
        });
    }

    /// Wait for one press and handle it; returns the state afterwards
    ///
    /// The firmware's main loop calls this forever.
    pub fn step(&mut self) -> UiState {
        self.debouncer.wait_for_press();
        let next = self.state.transition(UiEvent::ButtonPressed);
        if next.is_sleeping() {
            self.sleep();
        } else {
            self.show(next);
        }
        self.state
    }

    fn show(&mut self, state: UiState) {
        self.state = state;
        self.indicators.show(state.indicator());
        self.with_state(|s| {
            s.set_ui_state(state);
            s.render_state(state);
        });
        self.debouncer.wait_for_release();
    }

    fn sleep(&mut self) {
        self.state = UiState::Sleeping;
        self.indicators.show(None);
        self.with_state(|s| s.enter_sleep());

        // The wake line is only armed once the button is physically up
        self.debouncer.wait_for_release();
        self.with_state(|s| s.arm_wake());

        while !self.with_state(|s| s.take_wake_request()) {
            self.halt.halt();
        }

        self.with_state(|s| s.leave_sleep());
        self.state = self.state.transition(UiEvent::Woken);
        self.indicators.show(self.state.indicator());
        self.debouncer.wait_for_release();
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut SharedState<B>) -> R) -> R {
        self.shared.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn indicators(&self) -> &IndicatorLeds<O> {
        &self.indicators
    }

    pub fn debouncer(&self) -> &Debouncer<P, D> {
        &self.debouncer
    }
}
