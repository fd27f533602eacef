//! Blocking ADC channel
//!
//! RP2040 has a single 12-bit ADC; analog inputs sit on GPIO26..29. The
//! converter's enable bit doubles as its power switch.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::pac;
use thermo_hal::AnalogInput;

/// One ADC channel read with blocking conversions
pub struct BlockingAdc<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    /// Last successful conversion, reported again when one fails
    last_raw: u16,
}

impl<'d> BlockingAdc<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            last_raw: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        pac::ADC.cs().read().en()
    }
}

impl AnalogInput for BlockingAdc<'_> {
    const FULL_SCALE: u16 = 4096;

    fn set_enabled(&mut self, enabled: bool) {
        pac::ADC.cs().modify(|w| w.set_en(enabled));
        if enabled {
            while !pac::ADC.cs().read().ready() {}
        }
    }

    fn read_raw(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(raw) => {
                self.last_raw = raw;
                raw
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC conversion failed: {}, reusing {}", _e, self.last_raw);
                self.last_raw
            }
        }
    }
}
