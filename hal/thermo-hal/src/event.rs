//! Event lines
//!
//! Models the interrupt sources that may preempt the main loop. Each line
//! has an enable bit and a pending bit, the way a microcontroller's
//! interrupt-enable and interrupt-flag registers pair up. Timer lines also
//! have a run bit: a stopped timer never raises its pending bit.
//!
//! A handler only runs for a line that is both enabled and pending.
//! Disabling a line masks it without losing a pending event.

/// An interrupt source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventLine {
    /// High-frequency display refresh timer
    MultiplexTimer,
    /// Temperature sampling timer
    SampleTimer,
    /// Slow timer that keeps sampling while the system sleeps
    WakeTimer,
    /// Button edge, used only as a wake source
    ButtonEdge,
}

impl EventLine {
    /// All lines in dispatch priority order
    pub const ALL: [EventLine; 4] = [
        EventLine::MultiplexTimer,
        EventLine::SampleTimer,
        EventLine::WakeTimer,
        EventLine::ButtonEdge,
    ];

    /// Bit of this line in an 8-bit register
    pub const fn mask(self) -> u8 {
        match self {
            EventLine::MultiplexTimer => 1 << 0,
            EventLine::SampleTimer => 1 << 1,
            EventLine::WakeTimer => 1 << 2,
            EventLine::ButtonEdge => 1 << 3,
        }
    }

    /// Whether a periodic timer sits behind this line
    pub const fn is_timer(self) -> bool {
        !matches!(self, EventLine::ButtonEdge)
    }
}

/// Initial count loaded when a timer starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerStart {
    /// Count preloaded one step before overflow: the line fires right away
    Expired,
    /// Count cleared: the line fires after a full period
    Fresh,
}

/// Interrupt enable/pending control plus the timers behind the lines
pub trait EventLines {
    /// Unmask a line
    fn enable(&mut self, line: EventLine);

    /// Mask a line (a pending event stays pending)
    fn disable(&mut self, line: EventLine);

    /// Check whether a line is unmasked
    fn is_enabled(&self, line: EventLine) -> bool;

    /// Check whether a line has an event waiting
    fn is_pending(&self, line: EventLine) -> bool;

    /// Acknowledge a line's event
    fn clear_pending(&mut self, line: EventLine);

    /// Start the periodic timer behind a line
    ///
    /// Ignored for [`EventLine::ButtonEdge`].
    fn start_timer(&mut self, line: EventLine, start: TimerStart);

    /// Stop the periodic timer behind a line
    fn stop_timer(&mut self, line: EventLine);

    /// Check whether the timer behind a line is running
    fn is_timer_running(&self, line: EventLine) -> bool;

    /// Check whether a handler would run for this line now
    fn is_active(&self, line: EventLine) -> bool {
        self.is_enabled(line) && self.is_pending(line)
    }
}

/// Plain register model of the event lines
///
/// Used directly by host tests and as the state behind chip
/// implementations that have no dedicated hardware for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventFlags {
    enabled: u8,
    pending: u8,
    running: u8,
}

impl EventFlags {
    /// All lines masked, idle and stopped
    pub const fn new() -> Self {
        Self {
            enabled: 0,
            pending: 0,
            running: 0,
        }
    }

    /// Record a hardware event on a line
    ///
    /// Timer lines only latch while their timer runs. The button line
    /// latches unconditionally, like an edge detector.
    pub fn raise(&mut self, line: EventLine) {
        if line.is_timer() && self.running & line.mask() == 0 {
            return;
        }
        self.pending |= line.mask();
    }

    /// Raw enable register
    pub fn enabled_bits(&self) -> u8 {
        self.enabled
    }

    /// Raw pending register
    pub fn pending_bits(&self) -> u8 {
        self.pending
    }
}

impl EventLines for EventFlags {
    fn enable(&mut self, line: EventLine) {
        self.enabled |= line.mask();
    }

    fn disable(&mut self, line: EventLine) {
        self.enabled &= !line.mask();
    }

    fn is_enabled(&self, line: EventLine) -> bool {
        self.enabled & line.mask() != 0
    }

    fn is_pending(&self, line: EventLine) -> bool {
        self.pending & line.mask() != 0
    }

    fn clear_pending(&mut self, line: EventLine) {
        self.pending &= !line.mask();
    }

    fn start_timer(&mut self, line: EventLine, start: TimerStart) {
        if !line.is_timer() {
            return;
        }
        self.running |= line.mask();
        if start == TimerStart::Expired {
            self.raise(line);
        }
    }

    fn stop_timer(&mut self, line: EventLine) {
        self.running &= !line.mask();
    }

    fn is_timer_running(&self, line: EventLine) -> bool {
        self.running & line.mask() != 0
    }
}
