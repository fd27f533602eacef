//! Two-digit seven-segment display
//!
//! Both digits share an 8-bit segment bus and each has its own select
//! line. Segments and selects are active low.

use thermo_core::traits::{CharacterCode, DigitPosition, SegmentDisplay};
use thermo_hal::{OutputPin, OutputPort};

/// Segment patterns indexed by [`CharacterCode::font_index`]
///
/// Active low, bit 7 unused and kept high.
pub const FONT: [u8; 12] = [
    0x40, // '0'
    0xEB, // '1'
    0x12, // '2'
    0x0A, // '3'
    0x29, // '4'
    0x0C, // '5'
    0x04, // '6'
    0x68, // '7'
    0x00, // '8'
    0x08, // '9'
    0xBF, // '-'
    0xFF, // empty
];

/// Bus value with every segment dark
pub const BUS_OFF: u8 = 0xFF;

/// Segment pattern for a character; a code past the font stays dark
pub const fn segments(code: CharacterCode) -> u8 {
    let index = code.font_index();
    if index < FONT.len() {
        FONT[index]
    } else {
        BUS_OFF
    }
}

/// Display on a parallel segment bus with two active-low select pins
pub struct SevenSegment<P: OutputPort, S: OutputPin> {
    bus: P,
    left: S,
    right: S,
    low_power: bool,
}

impl<P: OutputPort, S: OutputPin> SevenSegment<P, S> {
    pub fn new(bus: P, left: S, right: S) -> Self {
        Self {
            bus,
            left,
            right,
            low_power: true,
        }
    }

    fn select_pin(&mut self, position: DigitPosition) -> &mut S {
        match position {
            DigitPosition::Left => &mut self.left,
            DigitPosition::Right => &mut self.right,
        }
    }

    fn blank(&mut self) {
        self.left.set_high();
        self.right.set_high();
        self.bus.write(BUS_OFF);
    }

    /// Check whether a digit is selected
    pub fn is_selected(&self, position: DigitPosition) -> bool {
        match position {
            DigitPosition::Left => self.left.is_set_low(),
            DigitPosition::Right => self.right.is_set_low(),
        }
    }

    /// Value currently on the segment bus
    pub fn bus_value(&self) -> u8 {
        self.bus.value()
    }

    pub fn is_low_power(&self) -> bool {
        self.low_power
    }
}

impl<P: OutputPort, S: OutputPin> SegmentDisplay for SevenSegment<P, S> {
    fn initialize(&mut self) {
        self.blank();
    }

    fn set_low_power(&mut self, enabled: bool) {
        if enabled {
            self.blank();
        }
        self.low_power = enabled;
    }

    fn write_segment_code(&mut self, _position: DigitPosition, code: CharacterCode) {
        self.bus.write(segments(code));
    }

    fn enable_position(&mut self, position: DigitPosition) {
        self.select_pin(position).set_low();
    }

    fn disable_position(&mut self, position: DigitPosition) {
        self.select_pin(position).set_high();
    }
}
