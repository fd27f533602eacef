//! GPIO adapters
//!
//! Wraps embassy-rp pins in the `thermo-hal` pin traits.

use embassy_rp::gpio::Output;
use embassy_rp::pac;
use thermo_hal::{InputPin, OutputPin, OutputPort};

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Push-pull output pin
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Level reader for a pin owned elsewhere
///
/// The button pin belongs to the event task, which waits on its edges; the
/// main loop only needs its level, read straight from `SIO.GPIO_IN`.
#[derive(Debug, Clone, Copy)]
pub struct SioInput {
    mask: u32,
}

impl SioInput {
    /// Returns `None` for a pin number past the last GPIO
    pub fn new(pin: u8) -> Option<Self> {
        (pin < GPIO_COUNT).then(|| Self { mask: 1 << pin })
    }
}

impl InputPin for SioInput {
    fn is_high(&self) -> bool {
        pac::SIO.gpio_in().read() & self.mask != 0
    }
}

/// Eight output pins driven as one data bus, bit `n` on `pins[n]`
pub struct ParallelBus<'d> {
    pins: [Output<'d>; 8],
    value: u8,
}

impl<'d> ParallelBus<'d> {
    /// Takes the pins as configured; the first write sets every line
    pub fn new(pins: [Output<'d>; 8]) -> Self {
        Self { pins, value: 0 }
    }
}

impl OutputPort for ParallelBus<'_> {
    fn write(&mut self, value: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if value & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
        self.value = value;
    }

    fn value(&self) -> u8 {
        self.value
    }
}
