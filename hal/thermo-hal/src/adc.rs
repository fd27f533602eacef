//! Analog input abstraction

/// A single analog input channel together with the converter and voltage
/// reference feeding it
pub trait AnalogInput {
    /// Full-scale code of the converter (1024 for 10-bit, 4096 for 12-bit)
    const FULL_SCALE: u16;

    /// Power the converter and its reference up (`true`) or down (`false`)
    ///
    /// Powering up blocks until the reference is stable.
    fn set_enabled(&mut self, enabled: bool);

    /// Run one blocking conversion
    ///
    /// Returns a code in `0..FULL_SCALE`. Only meaningful while enabled.
    fn read_raw(&mut self) -> u16;
}
