//! Compile-time configuration
//!
//! The thermometer has no runtime configuration. These types collect the
//! timing constants in one place so boards and tests can see them; the
//! defaults reproduce the reference hardware (1 MHz core clock, 31 kHz idle
//! clock).

/// Periods of the three timers behind the event lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Multiplex tick period in microseconds (~122 Hz)
    pub multiplex_period_us: u32,
    /// Sample tick period in milliseconds (~0.95 Hz)
    pub sample_period_ms: u32,
    /// Wake timer period in seconds, only running while asleep
    pub wake_period_s: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            // 1 MHz / 4 / 256 / 8
            multiplex_period_us: 8_192,
            // 250 kHz / 65536 / 4
            sample_period_ms: 1_049,
            wake_period_s: 64,
        }
    }
}

impl TimingConfig {
    /// Multiplex tick rate in hertz
    pub fn multiplex_rate_hz(&self) -> u32 {
        1_000_000 / self.multiplex_period_us.max(1)
    }
}

/// Button debounce delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Delay after the first observed release
    pub settle_ms: u32,
    /// Delay between re-polls while contacts still bounce
    pub poll_ms: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            settle_ms: 50,
            poll_ms: 1,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermometerConfig {
    pub timing: TimingConfig,
    pub debounce: DebounceConfig,
}
