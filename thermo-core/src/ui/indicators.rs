//! Indicator LEDs
//!
//! One LED per display mode. Exactly one is lit while a mode is shown and
//! all are dark while sleeping.

use thermo_hal::OutputPin;

/// The three mode indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    Maximum,
    Current,
    Minimum,
}

/// One-hot driver for the mode LEDs (active high)
pub struct IndicatorLeds<O: OutputPin> {
    maximum: O,
    current: O,
    minimum: O,
}

impl<O: OutputPin> IndicatorLeds<O> {
    /// Take the three pins, all LEDs off
    pub fn new(maximum: O, current: O, minimum: O) -> Self {
        let mut leds = Self {
            maximum,
            current,
            minimum,
        };
        leds.show(None);
        leds
    }

    /// Light exactly one indicator, or none
    pub fn show(&mut self, indicator: Option<Indicator>) {
        self.maximum.set_state(indicator == Some(Indicator::Maximum));
        self.current.set_state(indicator == Some(Indicator::Current));
        self.minimum.set_state(indicator == Some(Indicator::Minimum));
    }

    /// The lit indicator, read back from the pins
    pub fn lit(&self) -> Option<Indicator> {
        if self.maximum.is_set_high() {
            Some(Indicator::Maximum)
        } else if self.current.is_set_high() {
            Some(Indicator::Current)
        } else if self.minimum.is_set_high() {
            Some(Indicator::Minimum)
        } else {
            None
        }
    }

    /// Number of LEDs currently lit
    pub fn lit_count(&self) -> usize {
        [&self.maximum, &self.current, &self.minimum]
            .iter()
            .filter(|pin| pin.is_set_high())
            .count()
    }
}
