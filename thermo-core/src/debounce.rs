//! Button debouncer
//!
//! Polling waits on the mode button. The only blocking the main loop does
//! besides the sleep halt happens here, always outside the shared mutex.

use core::hint::spin_loop;

use embedded_hal::delay::DelayNs;
use thermo_hal::InputPin;

use crate::config::DebounceConfig;

/// Mode button with its debounce timing (high = pressed)
pub struct Debouncer<P: InputPin, D: DelayNs> {
    button: P,
    delay: D,
    config: DebounceConfig,
}

impl<P: InputPin, D: DelayNs> Debouncer<P, D> {
    pub fn new(button: P, delay: D, config: DebounceConfig) -> Self {
        Self {
            button,
            delay,
            config,
        }
    }

    /// Raw button level
    pub fn is_pressed(&self) -> bool {
        self.button.is_high()
    }

    /// Spin until the button reads pressed
    pub fn wait_for_press(&mut self) {
        while !self.is_pressed() {
            spin_loop();
        }
    }

    /// Block until the button has been released and stopped bouncing
    ///
    /// Waits for the first release, lets the contacts settle, then keeps
    /// re-polling with short delays for as long as a bounce reads pressed.
    pub fn wait_for_release(&mut self) {
        while self.is_pressed() {
            spin_loop();
        }

        self.delay.delay_ms(self.config.settle_ms);
        while self.is_pressed() {
            self.delay.delay_ms(self.config.poll_ms);
        }
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}
