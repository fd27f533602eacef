//! Board pin map and bring-up
//!
//! | Function           | GPIO                |
//! |--------------------|---------------------|
//! | Segment bus a..dp  | 0..7                |
//! | Left digit select  | 8 (active low)      |
//! | Right digit select | 9 (active low)      |
//! | Mode button        | 10 (high = pressed) |
//! | Maximum LED        | 11                  |
//! | Current LED        | 12                  |
//! | Minimum LED        | 13                  |
//! | TMP36 output       | 26 (ADC0)           |

use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use thermo_core::ui::IndicatorLeds;
use thermo_core::{Board, Shared, SharedState};
use thermo_drivers::{SevenSegment, Tmp36};
use thermo_hal::{EventRegister, RegisterLines};
use thermo_hal_rp2040::{BlockingAdc, ClockError, ParallelBus, RpOutput, SioInput, SysClock};

/// Mode button GPIO, read by level from the main loop
pub const BUTTON_PIN: u8 = 10;

/// ADC reference: the RP2040 ADC runs from the 3.3 V rail
pub const ADC_VREF_MV: u16 = 3_300;

/// Idle `clk_sys` divider (125 MHz / 256 ≈ 488 kHz)
pub const IDLE_CLOCK_DIVIDER: u32 = 256;

pub struct RpBoard;

impl Board for RpBoard {
    type Sensor = Tmp36<BlockingAdc<'static>>;
    type Display = SevenSegment<ParallelBus<'static>, RpOutput<'static>>;
    type Lines = RegisterLines<'static, CriticalSectionRawMutex>;
    type Clock = SysClock;
}

pub type SharedBoard = Shared<CriticalSectionRawMutex, RpBoard>;

/// Event register shared by the main loop, the event task and the button task
pub type Events = EventRegister<CriticalSectionRawMutex>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    Clock(ClockError),
    ButtonPin(u8),
}

impl From<ClockError> for BoardError {
    fn from(e: ClockError) -> Self {
        BoardError::Clock(e)
    }
}

/// Everything the firmware needs, split by execution context
pub struct BoardParts {
    /// Goes behind the shared mutex
    pub state: SharedState<RpBoard>,
    /// Owned by the button task for edge detection
    pub button_edge: Input<'static>,
    /// Level view of the same pin for the debouncer
    pub button_level: SioInput,
    pub indicators: IndicatorLeds<RpOutput<'static>>,
}

pub fn split(p: Peripherals, events: &'static Events) -> Result<BoardParts, BoardError> {
    let bus = ParallelBus::new([
        Output::new(p.PIN_0, Level::High),
        Output::new(p.PIN_1, Level::High),
        Output::new(p.PIN_2, Level::High),
        Output::new(p.PIN_3, Level::High),
        Output::new(p.PIN_4, Level::High),
        Output::new(p.PIN_5, Level::High),
        Output::new(p.PIN_6, Level::High),
        Output::new(p.PIN_7, Level::High),
    ]);
    let left = RpOutput::new(Output::new(p.PIN_8, Level::High));
    let right = RpOutput::new(Output::new(p.PIN_9, Level::High));
    let display = SevenSegment::new(bus, left, right);

    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let sensor = Tmp36::new(BlockingAdc::new(adc, channel), ADC_VREF_MV);

    let clock = SysClock::new(IDLE_CLOCK_DIVIDER)?;

    let button_edge = Input::new(p.PIN_10, Pull::Down);
    let button_level = SioInput::new(BUTTON_PIN).ok_or(BoardError::ButtonPin(BUTTON_PIN))?;

    let indicators = IndicatorLeds::new(
        RpOutput::new(Output::new(p.PIN_11, Level::Low)),
        RpOutput::new(Output::new(p.PIN_12, Level::Low)),
        RpOutput::new(Output::new(p.PIN_13, Level::Low)),
    );

    Ok(BoardParts {
        state: SharedState::new(sensor, display, events.lines(), clock),
        button_edge,
        button_level,
        indicators,
    })
}
