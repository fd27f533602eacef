//! Digital I/O
//!
//! Indicator LEDs and digit selects are single output pins, the segment
//! lines form an eight-bit output port and the mode button is an input.
//! All operations are infallible.

/// Push-pull output
pub trait OutputPin {
    /// Drive logic 1
    fn set_high(&mut self);

    /// Drive logic 0
    fn set_low(&mut self);

    /// Drive `high` as the level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Level last driven
    fn is_set_high(&self) -> bool;

    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Level-sampled input
pub trait InputPin {
    /// Current level, `true` for logic 1
    fn is_high(&self) -> bool;
}

/// Eight output pins driven together as one parallel data bus
///
/// Bit `n` of the written value goes to line `n`.
pub trait OutputPort {
    /// Drive all eight lines at once
    fn write(&mut self, value: u8);

    /// Last value written to the port
    fn value(&self) -> u8;
}
