//! Test doubles for the collaborator and HAL traits

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal::delay::DelayNs;
use thermo_hal::{CoreClock, EventFlags, EventLine, EventLines, Halt, InputPin, OutputPin, TimerStart};

use crate::dispatcher::{dispatch, ServicedLines};
use crate::render::CharacterPair;
use crate::shared::{Board, Shared, SharedState};
use crate::traits::{Celsius, CharacterCode, DigitPosition, SegmentDisplay, TemperatureSensor};

/// Sensor returning a fixed list of readings, repeating the last one
pub struct MockSensor {
    readings: Vec<Celsius>,
    next: usize,
    reads: usize,
    low_power: bool,
    initialized: bool,
}

impl MockSensor {
    pub fn new(readings: &[Celsius]) -> Self {
        Self {
            readings: readings.to_vec(),
            next: 0,
            reads: 0,
            low_power: false,
            initialized: false,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn is_low_power(&self) -> bool {
        self.low_power
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl TemperatureSensor for MockSensor {
    fn initialize(&mut self) {
        self.initialized = true;
    }

    fn set_low_power(&mut self, enabled: bool) {
        self.low_power = enabled;
    }

    fn read_celsius(&mut self) -> Celsius {
        assert!(!self.low_power, "sensor read while powered down");
        self.reads += 1;
        let reading = self
            .readings
            .get(self.next)
            .or(self.readings.last())
            .copied()
            .unwrap_or(0);
        self.next += 1;
        reading
    }
}

/// Display recording what each position latched when it was lit
pub struct MockDisplay {
    bus: Option<CharacterCode>,
    latched: [Option<CharacterCode>; 2],
    lit: [bool; 2],
    frames: Vec<(DigitPosition, CharacterCode)>,
    both_lit_seen: bool,
    low_power: bool,
    initialized: bool,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            bus: None,
            latched: [None; 2],
            lit: [false; 2],
            frames: Vec::new(),
            both_lit_seen: false,
            low_power: false,
            initialized: false,
        }
    }

    /// Code visible at each position, `None` for a dark position
    pub fn shown(&self) -> [Option<CharacterCode>; 2] {
        [0, 1].map(|i| if self.lit[i] { self.latched[i] } else { None })
    }

    /// Last code each position showed, dark or not
    pub fn latched_pair(&self) -> CharacterPair {
        CharacterPair::new(
            self.latched[0].unwrap_or(CharacterCode::Empty),
            self.latched[1].unwrap_or(CharacterCode::Empty),
        )
    }

    /// Every position lit so far, with the code it showed
    pub fn frames(&self) -> &[(DigitPosition, CharacterCode)] {
        &self.frames
    }

    pub fn both_lit_seen(&self) -> bool {
        self.both_lit_seen
    }

    pub fn is_low_power(&self) -> bool {
        self.low_power
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl SegmentDisplay for MockDisplay {
    fn initialize(&mut self) {
        self.initialized = true;
    }

    fn set_low_power(&mut self, enabled: bool) {
        if enabled {
            self.bus = None;
            self.lit = [false; 2];
        }
        self.low_power = enabled;
    }

    fn write_segment_code(&mut self, _position: DigitPosition, code: CharacterCode) {
        self.bus = Some(code);
    }

    fn enable_position(&mut self, position: DigitPosition) {
        assert!(!self.low_power, "display refreshed while powered down");
        if self.lit[position.other().index()] {
            self.both_lit_seen = true;
        }
        let code = self.bus.unwrap_or(CharacterCode::Empty);
        self.lit[position.index()] = true;
        self.latched[position.index()] = Some(code);
        self.frames.push((position, code));
    }

    fn disable_position(&mut self, position: DigitPosition) {
        self.lit[position.index()] = false;
    }
}

pub struct MockClock {
    low_power: bool,
    switches: usize,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            low_power: false,
            switches: 0,
        }
    }

    pub fn switches(&self) -> usize {
        self.switches
    }
}

impl CoreClock for MockClock {
    fn set_low_power(&mut self, enabled: bool) {
        if self.low_power != enabled {
            self.switches += 1;
        }
        self.low_power = enabled;
    }

    fn is_low_power(&self) -> bool {
        self.low_power
    }
}

/// Mask operations and render calls, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOp {
    Enable(EventLine),
    Disable(EventLine),
    Render,
}

/// Event-line register that logs every enable and disable
pub struct RecordingLines<'a> {
    flags: EventFlags,
    log: &'a RefCell<Vec<LineOp>>,
}

impl<'a> RecordingLines<'a> {
    pub fn new(log: &'a RefCell<Vec<LineOp>>) -> Self {
        Self {
            flags: EventFlags::new(),
            log,
        }
    }
}

impl EventLines for RecordingLines<'_> {
    fn enable(&mut self, line: EventLine) {
        self.log.borrow_mut().push(LineOp::Enable(line));
        self.flags.enable(line);
    }

    fn disable(&mut self, line: EventLine) {
        self.log.borrow_mut().push(LineOp::Disable(line));
        self.flags.disable(line);
    }

    fn is_enabled(&self, line: EventLine) -> bool {
        self.flags.is_enabled(line)
    }

    fn is_pending(&self, line: EventLine) -> bool {
        self.flags.is_pending(line)
    }

    fn clear_pending(&mut self, line: EventLine) {
        self.flags.clear_pending(line);
    }

    fn start_timer(&mut self, line: EventLine, start: TimerStart) {
        self.flags.start_timer(line, start);
    }

    fn stop_timer(&mut self, line: EventLine) {
        self.flags.stop_timer(line);
    }

    fn is_timer_running(&self, line: EventLine) -> bool {
        self.flags.is_timer_running(line)
    }
}

/// Host board built from the mocks above
pub struct TestBoard;

impl Board for TestBoard {
    type Sensor = MockSensor;
    type Display = MockDisplay;
    type Lines = EventFlags;
    type Clock = MockClock;
}

pub type TestShared = Shared<NoopRawMutex, TestBoard>;

/// Uninitialized shared state whose sensor returns `readings`
pub fn test_state(readings: &[Celsius]) -> SharedState<TestBoard> {
    SharedState::new(
        MockSensor::new(readings),
        MockDisplay::new(),
        EventFlags::new(),
        MockClock::new(),
    )
}

/// Raise a line and run the dispatcher, as the event context would
pub fn fire(state: &mut SharedState<TestBoard>, line: EventLine) -> ServicedLines {
    state.lines_mut().raise(line);
    dispatch(state)
}

/// Polls after the script ran out before a wait for a press gives up
const IDLE_POLL_LIMIT: usize = 10_000;

/// Button replaying a list of levels, one per poll, then staying released
pub struct ScriptedButton {
    levels: RefCell<VecDeque<bool>>,
    idle_polls: Cell<usize>,
}

impl ScriptedButton {
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: RefCell::new(levels.iter().copied().collect()),
            idle_polls: Cell::new(0),
        }
    }

    /// `count` clean press-and-release cycles
    pub fn presses(count: usize) -> Self {
        let levels: Vec<bool> = [true, false, false].repeat(count);
        Self::new(&levels)
    }

    pub fn remaining(&self) -> usize {
        self.levels.borrow().len()
    }
}

impl InputPin for ScriptedButton {
    fn is_high(&self) -> bool {
        match self.levels.borrow_mut().pop_front() {
            Some(level) => level,
            None => {
                let idle = self.idle_polls.get() + 1;
                assert!(idle < IDLE_POLL_LIMIT, "button script exhausted");
                self.idle_polls.set(idle);
                false
            }
        }
    }
}

/// Delay that only adds up how long it was asked to wait
#[derive(Default)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

#[derive(Default)]
pub struct MockLed {
    high: bool,
}

impl OutputPin for MockLed {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Halt that delivers the next scripted event through the dispatcher
pub struct MockHalt<'a> {
    shared: &'a TestShared,
    events: VecDeque<EventLine>,
    serviced: Rc<RefCell<Vec<ServicedLines>>>,
}

impl<'a> MockHalt<'a> {
    pub fn new(shared: &'a TestShared, events: &[EventLine]) -> Self {
        Self {
            shared,
            events: events.iter().copied().collect(),
            serviced: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle to the lines serviced on each halt, readable after the halt
    /// has moved into a controller
    pub fn serviced(&self) -> Rc<RefCell<Vec<ServicedLines>>> {
        Rc::clone(&self.serviced)
    }
}

impl Halt for MockHalt<'_> {
    fn halt(&mut self) {
        let line = self
            .events
            .pop_front()
            .unwrap_or_else(|| panic!("halted with no scripted events left"));
        let serviced = self
            .shared
            .lock(|cell| fire(&mut cell.borrow_mut(), line));
        self.serviced.borrow_mut().push(serviced);
    }
}
