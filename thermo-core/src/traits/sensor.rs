//! Temperature sensor trait

/// Whole degrees Celsius
///
/// The reference sensor covers roughly -50 °C to 102 °C, well inside `i8`.
pub type Celsius = i8;

/// Trait for the temperature sampling collaborator
///
/// Implementations own the converter sequence and the voltage to Celsius
/// arithmetic. Sampling cannot fail: out-of-range values are returned as-is
/// and clamped later by rendering.
pub trait TemperatureSensor {
    /// One-time hardware setup
    fn initialize(&mut self);

    /// Power the converter and reference down (`true`) or up (`false`)
    fn set_low_power(&mut self, enabled: bool);

    /// Blocking read of the current temperature
    ///
    /// Takes `&mut self` because a conversion drives the ADC.
    fn read_celsius(&mut self) -> Celsius;
}
