//! Power controller
//!
//! Three subsystems switch between active and low power independently:
//!
//! - Display: multiplex timer and line, segment bus, digit buffer
//! - Sensor: sample timer and line, converter and voltage reference
//! - CPU: core clock speed and the wake timer that runs while asleep
//!
//! Each subsystem's flag is only written by its own `set_*_low_power`
//! operation. System sleep and the wake-timer cycle are sequences of these
//! operations, composed in [`crate::shared::SharedState`].

use thermo_hal::{CoreClock, EventLine, EventLines, TimerStart};

use crate::multiplex::Multiplexer;
use crate::traits::{SegmentDisplay, TemperatureSensor};

/// Power state of one subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Active,
    LowPower,
}

impl PowerState {
    fn from_low_power(enabled: bool) -> Self {
        if enabled {
            PowerState::LowPower
        } else {
            PowerState::Active
        }
    }
}

/// Subsystems with their own power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Subsystem {
    Cpu,
    Display,
    Sensor,
}

/// Per-subsystem power flags and the operations that switch them
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerController {
    cpu: PowerState,
    display: PowerState,
    sensor: PowerState,
}

impl Default for PowerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerController {
    /// CPU running at full speed; display and sensor not started yet
    pub const fn new() -> Self {
        Self {
            cpu: PowerState::Active,
            display: PowerState::LowPower,
            sensor: PowerState::LowPower,
        }
    }

    /// Power state of a subsystem
    pub fn state(&self, subsystem: Subsystem) -> PowerState {
        match subsystem {
            Subsystem::Cpu => self.cpu,
            Subsystem::Display => self.display,
            Subsystem::Sensor => self.sensor,
        }
    }

    /// Whether every subsystem is in low power
    pub fn is_system_asleep(&self) -> bool {
        self.cpu == PowerState::LowPower
            && self.display == PowerState::LowPower
            && self.sensor == PowerState::LowPower
    }

    /// Stop or restart display refreshing
    ///
    /// Going low blanks the segment bus and empties the buffer so nothing
    /// stale shows when it comes back. Going active restarts the ping-pong
    /// from the left digit and refreshes on the very next event.
    pub fn set_display_low_power<D, L>(
        &mut self,
        enabled: bool,
        display: &mut D,
        multiplexer: &mut Multiplexer,
        lines: &mut L,
    ) where
        D: SegmentDisplay,
        L: EventLines,
    {
        if enabled {
            lines.stop_timer(EventLine::MultiplexTimer);
            lines.disable(EventLine::MultiplexTimer);
            display.set_low_power(true);
            multiplexer.clear();
        } else {
            display.set_low_power(false);
            multiplexer.reset_position();
            lines.clear_pending(EventLine::MultiplexTimer);
            lines.enable(EventLine::MultiplexTimer);
            lines.start_timer(EventLine::MultiplexTimer, TimerStart::Expired);
        }
        self.display = PowerState::from_low_power(enabled);
    }

    /// Stop or restart temperature sampling
    ///
    /// Going active samples on the very next event instead of waiting a
    /// full period.
    pub fn set_sensor_low_power<S, L>(&mut self, enabled: bool, sensor: &mut S, lines: &mut L)
    where
        S: TemperatureSensor,
        L: EventLines,
    {
        if enabled {
            lines.stop_timer(EventLine::SampleTimer);
            lines.disable(EventLine::SampleTimer);
            sensor.set_low_power(true);
        } else {
            sensor.set_low_power(false);
            lines.clear_pending(EventLine::SampleTimer);
            lines.enable(EventLine::SampleTimer);
            lines.start_timer(EventLine::SampleTimer, TimerStart::Expired);
        }
        self.sensor = PowerState::from_low_power(enabled);
    }

    /// Slow the core down and start the wake timer, or the reverse
    ///
    /// This only selects the clock. Halting is done by the main loop.
    pub fn set_cpu_low_power<C, L>(&mut self, enabled: bool, clock: &mut C, lines: &mut L)
    where
        C: CoreClock,
        L: EventLines,
    {
        if enabled {
            lines.start_timer(EventLine::WakeTimer, TimerStart::Fresh);
            lines.clear_pending(EventLine::WakeTimer);
            lines.enable(EventLine::WakeTimer);
            clock.set_low_power(true);
        } else {
            lines.stop_timer(EventLine::WakeTimer);
            lines.disable(EventLine::WakeTimer);
            clock.set_low_power(false);
        }
        self.cpu = PowerState::from_low_power(enabled);
    }
}
