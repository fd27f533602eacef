//! Two-character rendering of temperatures
//!
//! Only two digit positions exist, so the displayable range is -9..=99.
//! Anything outside shows "--".

use crate::traits::{Celsius, CharacterCode, DigitPosition};
use crate::tracker::{TemperatureTracker, TrackedField};

/// Contents of both digit positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharacterPair {
    pub left: CharacterCode,
    pub right: CharacterCode,
}

impl CharacterPair {
    /// Nothing lit
    pub const BLANK: Self = Self::new(CharacterCode::Empty, CharacterCode::Empty);

    /// Out-of-range marker
    pub const DASHES: Self = Self::new(CharacterCode::Minus, CharacterCode::Minus);

    pub const fn new(left: CharacterCode, right: CharacterCode) -> Self {
        Self { left, right }
    }

    /// Code shown at a position
    pub const fn get(&self, position: DigitPosition) -> CharacterCode {
        match position {
            DigitPosition::Left => self.left,
            DigitPosition::Right => self.right,
        }
    }
}

/// Convert a signed value into two character codes
///
/// - below -9 or above 99: "--"
/// - -9..=-1: minus sign, then the magnitude
/// - 0..=9: empty, then the digit
/// - 10..=99: tens, then ones
pub fn render_temperature(value: i16) -> CharacterPair {
    if !(-9..=99).contains(&value) {
        return CharacterPair::DASHES;
    }

    // In range, so the cast is lossless
    let magnitude = value.unsigned_abs() as u8;
    if value < 0 {
        CharacterPair::new(CharacterCode::Minus, digit(magnitude))
    } else if magnitude >= 10 {
        CharacterPair::new(digit(magnitude / 10), digit(magnitude % 10))
    } else {
        CharacterPair::new(CharacterCode::Empty, digit(magnitude))
    }
}

fn digit(value: u8) -> CharacterCode {
    CharacterCode::digit(value).unwrap_or(CharacterCode::Minus)
}

/// Render an optional reading; no reading yet shows nothing
pub fn render_reading(reading: Option<Celsius>) -> CharacterPair {
    match reading {
        Some(value) => render_temperature(i16::from(value)),
        None => CharacterPair::BLANK,
    }
}

/// Render the tracked value behind a UI state (`None` is the sleep state)
pub fn render_field(tracker: &TemperatureTracker, field: Option<TrackedField>) -> CharacterPair {
    match field {
        Some(field) => render_reading(tracker.reading(field)),
        None => CharacterPair::BLANK,
    }
}
