//! TMP36 analog temperature sensor
//!
//! Linear output of 10 mV/°C with a 500 mV offset at 0 °C. With the
//! reference board's 1.024 V reference and 10-bit converter one code is one
//! millivolt, giving a range of -50 °C to 102 °C.

use thermo_core::traits::{Celsius, TemperatureSensor};
use thermo_hal::AnalogInput;

/// Output voltage at 0 °C
const OFFSET_MV: i32 = 500;

/// Output slope
const MV_PER_DEGREE: i32 = 10;

/// Convert a sensor voltage to whole degrees, truncating toward zero
pub fn millivolts_to_celsius(millivolts: u16) -> Celsius {
    let celsius = (i32::from(millivolts) - OFFSET_MV) / MV_PER_DEGREE;
    celsius.clamp(i32::from(Celsius::MIN), i32::from(Celsius::MAX)) as Celsius
}

/// TMP36 on one analog input
pub struct Tmp36<A: AnalogInput> {
    adc: A,
    /// Converter reference voltage in millivolts
    vref_mv: u16,
}

impl<A: AnalogInput> Tmp36<A> {
    /// Create a sensor reading through `adc`
    ///
    /// # Arguments
    /// - `adc`: Converter channel wired to the sensor output
    /// - `vref_mv`: Reference voltage in millivolts (1024 on the reference board)
    pub fn new(adc: A, vref_mv: u16) -> Self {
        Self { adc, vref_mv }
    }

    /// Convert a raw conversion result to millivolts
    pub fn raw_to_millivolts(&self, raw: u16) -> u16 {
        let millivolts = u32::from(raw) * u32::from(self.vref_mv) / u32::from(A::FULL_SCALE);
        millivolts.min(u32::from(u16::MAX)) as u16
    }

    pub fn adc(&self) -> &A {
        &self.adc
    }
}

impl<A: AnalogInput> TemperatureSensor for Tmp36<A> {
    fn initialize(&mut self) {
        self.adc.set_enabled(false);
    }

    fn set_low_power(&mut self, enabled: bool) {
        self.adc.set_enabled(!enabled);
    }

    fn read_celsius(&mut self) -> Celsius {
        let raw = self.adc.read_raw();
        millivolts_to_celsius(self.raw_to_millivolts(raw))
    }
}
