//! System clock divider and halt
//!
//! The idle clock is `clk_sys` divided down by an integer factor. The
//! timer behind embassy-time runs from `clk_ref`, so tick periods do not
//! change with the divider.

use embassy_rp::pac;
use thermo_hal::{CoreClock, Halt};

/// Largest integer divider `CLK_SYS_DIV` accepts (24-bit field)
pub const MAX_DIVIDER: u32 = (1 << 24) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Divider is zero or does not fit the register
    DividerOutOfRange(u32),
}

/// `clk_sys` switched between full speed and a divided idle speed
pub struct SysClock {
    idle_divider: u32,
    low_power: bool,
}

impl SysClock {
    pub fn new(idle_divider: u32) -> Result<Self, ClockError> {
        if idle_divider == 0 || idle_divider > MAX_DIVIDER {
            return Err(ClockError::DividerOutOfRange(idle_divider));
        }
        Ok(Self {
            idle_divider,
            low_power: false,
        })
    }

    fn write_divider(divider: u32) {
        pac::CLOCKS.clk_sys_div().write(|w| {
            w.set_int(divider);
            w.set_frac(0);
        });
    }
}

impl CoreClock for SysClock {
    fn set_low_power(&mut self, enabled: bool) {
        if enabled == self.low_power {
            return;
        }
        Self::write_divider(if enabled { self.idle_divider } else { 1 });
        self.low_power = enabled;
    }

    fn is_low_power(&self) -> bool {
        self.low_power
    }
}

/// Halt on `WFE`
///
/// The event task ends every dispatch with `SEV`, so a dispatch that slips
/// in between the caller's last check and the halt leaves the event flag
/// set and the halt returns at once.
#[derive(Debug, Default)]
pub struct WfeHalt;

impl Halt for WfeHalt {
    fn halt(&mut self) {
        cortex_m::asm::wfe();
    }
}
