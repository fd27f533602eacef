//! State shared between the main loop and the event context
//!
//! Everything both contexts touch lives in one [`SharedState`] behind one
//! blocking mutex. On hardware the mutex is a critical section, so taking
//! it also holds off the event context; the per-line masks inside the
//! state ([`MaskedLine`]) express which events a sequence must not race.
//!
//! The sequences here are the building blocks of system sleep. They never
//! block: the debounce waits and the halt happen in the controller with the
//! mutex released.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use thermo_hal::{CoreClock, EventLine, EventLines};

use crate::mask::MaskedLine;
use crate::multiplex::Multiplexer;
use crate::power::PowerController;
use crate::render::render_field;
use crate::tracker::{TemperatureTracker, TrackedField};
use crate::traits::{Celsius, SegmentDisplay, TemperatureSensor};
use crate::ui::UiState;

/// Hardware a board plugs into the shared state
pub trait Board {
    type Sensor: TemperatureSensor;
    type Display: SegmentDisplay;
    type Lines: EventLines;
    type Clock: CoreClock;
}

/// The shared state behind its mutex
pub type Shared<M, B> = Mutex<M, RefCell<SharedState<B>>>;

/// Tracker, display buffer, power flags and the peripherals both contexts
/// drive
pub struct SharedState<B: Board> {
    pub(crate) tracker: TemperatureTracker,
    pub(crate) multiplexer: Multiplexer,
    pub(crate) power: PowerController,
    /// Mirror of the main loop's state, read by the sample tick to render
    pub(crate) ui_state: UiState,
    /// Set by the button edge while asleep, consumed by the main loop
    pub(crate) wake_requested: bool,
    pub(crate) sensor: B::Sensor,
    pub(crate) display: B::Display,
    pub(crate) lines: B::Lines,
    pub(crate) clock: B::Clock,
}

impl<B: Board> SharedState<B> {
    /// Wrap the peripherals. Nothing is started until [`Self::initialize`].
    pub fn new(sensor: B::Sensor, display: B::Display, lines: B::Lines, clock: B::Clock) -> Self {
        Self {
            tracker: TemperatureTracker::new(),
            multiplexer: Multiplexer::new(),
            power: PowerController::new(),
            ui_state: UiState::POWER_ON,
            wake_requested: false,
            sensor,
            display,
            lines,
            clock,
        }
    }

    /// Put the state behind a mutex
    pub fn into_shared<M: RawMutex>(self) -> Shared<M, B> {
        Mutex::new(RefCell::new(self))
    }

    /// Set up both collaborators and start display refresh and sampling
    ///
    /// Both timers start expired, so the first sample and refresh happen
    /// on the next event rather than a full period later.
    pub fn initialize(&mut self) {
        self.sensor.initialize();
        self.display.initialize();
        self.power.set_display_low_power(
            false,
            &mut self.display,
            &mut self.multiplexer,
            &mut self.lines,
        );
        self.power
            .set_sensor_low_power(false, &mut self.sensor, &mut self.lines);
    }

    /// Publish the main loop's state to the sample tick
    pub fn set_ui_state(&mut self, state: UiState) {
        self.ui_state = state;
    }

    /// Render the reading behind `state` into the display buffer
    ///
    /// Main-loop side: the sample line is masked while the tracker is read
    /// and the multiplex line while the pair is written.
    pub fn render_state(&mut self, state: UiState) {
        let tracker = &self.tracker;
        let mut lines = MaskedLine::new(&mut self.lines, EventLine::SampleTimer);
        self.multiplexer
            .update(&mut *lines, || render_field(tracker, state.field()));
    }

    /// Event-context render of the published UI state after a sample
    pub(crate) fn refresh_display(&mut self) {
        let tracker = &self.tracker;
        let field = self.ui_state.field();
        self.multiplexer
            .update(&mut self.lines, || render_field(tracker, field));
    }

    /// First half of system sleep: display and sensor off
    pub fn enter_sleep(&mut self) {
        self.ui_state = UiState::Sleeping;
        self.power.set_display_low_power(
            true,
            &mut self.display,
            &mut self.multiplexer,
            &mut self.lines,
        );
        self.power
            .set_sensor_low_power(true, &mut self.sensor, &mut self.lines);
    }

    /// Second half of system sleep, once the button is released: arm the
    /// button edge and drop the CPU to the idle clock
    pub fn arm_wake(&mut self) {
        self.wake_requested = false;
        self.lines.clear_pending(EventLine::ButtonEdge);
        self.lines.enable(EventLine::ButtonEdge);
        self.power
            .set_cpu_low_power(true, &mut self.clock, &mut self.lines);
    }

    /// Consume a wake request recorded by the button edge
    pub fn take_wake_request(&mut self) -> bool {
        core::mem::take(&mut self.wake_requested)
    }

    /// Unwind system sleep and force the maximum back onto the display
    pub fn leave_sleep(&mut self) {
        self.lines.disable(EventLine::ButtonEdge);
        self.power
            .set_cpu_low_power(false, &mut self.clock, &mut self.lines);
        self.power
            .set_sensor_low_power(false, &mut self.sensor, &mut self.lines);
        self.power.set_display_low_power(
            false,
            &mut self.display,
            &mut self.multiplexer,
            &mut self.lines,
        );
        self.ui_state = UiState::ShowMaximum;
        self.render_state(UiState::ShowMaximum);
    }

    /// Wake-timer micro-sequence: sample once with CPU and sensor briefly
    /// active, then put both back to sleep
    ///
    /// Runs inside one dispatch, so nothing observes the half-awake window.
    pub(crate) fn wake_timer_sample(&mut self) {
        self.power
            .set_cpu_low_power(false, &mut self.clock, &mut self.lines);
        self.power
            .set_sensor_low_power(false, &mut self.sensor, &mut self.lines);
        self.tracker.sample(&mut self.sensor);
        self.lines.clear_pending(EventLine::WakeTimer);
        self.power
            .set_sensor_low_power(true, &mut self.sensor, &mut self.lines);
        self.power
            .set_cpu_low_power(true, &mut self.clock, &mut self.lines);
    }

    /// Button-edge handler: disarm the wake line and record the request
    pub(crate) fn button_wake(&mut self) {
        self.lines.clear_pending(EventLine::ButtonEdge);
        self.lines.disable(EventLine::ButtonEdge);
        self.power
            .set_cpu_low_power(false, &mut self.clock, &mut self.lines);
        self.wake_requested = true;
    }

    pub fn tracker(&self) -> &TemperatureTracker {
        &self.tracker
    }

    /// Tracked value behind a field, `None` before the first sample
    pub fn reading(&self, field: TrackedField) -> Option<Celsius> {
        self.tracker.reading(field)
    }

    pub fn multiplexer(&self) -> &Multiplexer {
        &self.multiplexer
    }

    pub fn power(&self) -> &PowerController {
        &self.power
    }

    pub fn ui_state(&self) -> UiState {
        self.ui_state
    }

    pub fn is_wake_requested(&self) -> bool {
        self.wake_requested
    }

    pub fn sensor(&self) -> &B::Sensor {
        &self.sensor
    }

    pub fn display(&self) -> &B::Display {
        &self.display
    }

    pub fn lines(&self) -> &B::Lines {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut B::Lines {
        &mut self.lines
    }

    pub fn clock(&self) -> &B::Clock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{
        fire, test_state, LineOp, MockClock, MockDisplay, MockSensor, RecordingLines,
    };
    use crate::power::{PowerState, Subsystem};
    use crate::render::CharacterPair;
    use crate::traits::CharacterCode::Digit;
    use std::boxed::Box;
    use std::vec::Vec;

    #[test]
    fn test_initialize_starts_display_and_sensor() {
        let mut state = test_state(&[21]);
        state.initialize();

        assert!(state.sensor().is_initialized());
        assert!(state.display().is_initialized());
        assert_eq!(state.power().state(Subsystem::Display), PowerState::Active);
        assert_eq!(state.power().state(Subsystem::Sensor), PowerState::Active);
        assert!(state.lines().is_active(EventLine::MultiplexTimer));
        assert!(state.lines().is_active(EventLine::SampleTimer));
        assert!(!state.lines().is_enabled(EventLine::ButtonEdge));
        assert_eq!(state.ui_state(), UiState::ShowCurrent);
    }

    #[test]
    fn test_render_state_before_first_sample_is_blank() {
        let mut state = test_state(&[21]);
        state.initialize();
        state.render_state(UiState::ShowCurrent);
        assert_eq!(state.multiplexer().buffer(), CharacterPair::BLANK);
    }

    #[test]
    fn test_render_state_restores_masks() {
        let mut state = test_state(&[21]);
        state.initialize();
        fire(&mut state, EventLine::SampleTimer);

        state.render_state(UiState::ShowMaximum);
        assert_eq!(
            state.multiplexer().buffer(),
            CharacterPair::new(Digit(2), Digit(1))
        );
        assert!(state.lines().is_enabled(EventLine::SampleTimer));
        assert!(state.lines().is_enabled(EventLine::MultiplexTimer));
    }

    struct LoggingBoard;

    impl Board for LoggingBoard {
        type Sensor = MockSensor;
        type Display = MockDisplay;
        type Lines = RecordingLines<'static>;
        type Clock = MockClock;
    }

    #[test]
    fn test_render_state_masks_sample_then_multiplex() {
        let log: &'static RefCell<Vec<LineOp>> = Box::leak(Box::new(RefCell::new(Vec::new())));
        let mut state: SharedState<LoggingBoard> = SharedState::new(
            MockSensor::new(&[5]),
            MockDisplay::new(),
            RecordingLines::new(log),
            MockClock::new(),
        );
        state.initialize();
        log.borrow_mut().clear();

        state.render_state(UiState::ShowCurrent);
        assert_eq!(
            *log.borrow(),
            [
                LineOp::Disable(EventLine::SampleTimer),
                LineOp::Disable(EventLine::MultiplexTimer),
                LineOp::Enable(EventLine::MultiplexTimer),
                LineOp::Enable(EventLine::SampleTimer),
            ]
        );
    }

    #[test]
    fn test_enter_sleep_powers_down_display_and_sensor() {
        let mut state = test_state(&[21]);
        state.initialize();
        fire(&mut state, EventLine::MultiplexTimer);

        state.enter_sleep();
        assert_eq!(state.ui_state(), UiState::Sleeping);
        assert!(state.display().is_low_power());
        assert!(state.sensor().is_low_power());
        assert_eq!(state.multiplexer().buffer(), CharacterPair::BLANK);
        assert!(!state.lines().is_enabled(EventLine::MultiplexTimer));
        assert!(!state.lines().is_enabled(EventLine::SampleTimer));
        // CPU stays fast until the button is released
        assert_eq!(state.power().state(Subsystem::Cpu), PowerState::Active);
    }

    #[test]
    fn test_arm_wake_drops_stale_edge() {
        let mut state = test_state(&[21]);
        state.initialize();
        state.enter_sleep();
        state.lines_mut().raise(EventLine::ButtonEdge);

        state.arm_wake();
        assert!(state.lines().is_enabled(EventLine::ButtonEdge));
        assert!(!state.lines().is_pending(EventLine::ButtonEdge));
        assert!(state.clock().is_low_power());
        assert!(state.power().is_system_asleep());
    }

    #[test]
    fn test_wake_request_taken_once() {
        let mut state = test_state(&[21]);
        state.initialize();
        state.enter_sleep();
        state.arm_wake();
        fire(&mut state, EventLine::ButtonEdge);

        assert!(state.take_wake_request());
        assert!(!state.take_wake_request());
    }

    #[test]
    fn test_leave_sleep_forces_maximum() {
        let mut state = test_state(&[18, 25, 20]);
        state.initialize();
        for _ in 0..3 {
            fire(&mut state, EventLine::SampleTimer);
        }
        state.enter_sleep();
        state.arm_wake();
        fire(&mut state, EventLine::ButtonEdge);

        state.leave_sleep();
        assert_eq!(state.ui_state(), UiState::ShowMaximum);
        assert!(!state.power().is_system_asleep());
        assert_eq!(state.power().state(Subsystem::Display), PowerState::Active);
        assert_eq!(state.power().state(Subsystem::Sensor), PowerState::Active);
        assert!(!state.lines().is_enabled(EventLine::ButtonEdge));
        assert_eq!(
            state.multiplexer().buffer(),
            CharacterPair::new(Digit(2), Digit(5))
        );

        // Refresh resumes from the left digit on the next tick
        fire(&mut state, EventLine::MultiplexTimer);
        assert_eq!(state.display().shown(), [Some(Digit(2)), None]);
    }
}
