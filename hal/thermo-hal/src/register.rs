//! Lock-free event register
//!
//! The main loop and the dispatcher reach the lines through
//! [`RegisterLines`] while holding the shared mutex. The context that owns
//! the timers, and any edge detector, raises lines through the same
//! [`EventRegister`] without taking that mutex.
//!
//! A line that becomes active outside the event context (an expired timer
//! start, an edge on an armed line, or unmasking a line with an event
//! waiting) signals the event context so it dispatches right away, the way
//! an interrupt controller takes a pending interrupt.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU8, Ordering};

use crate::event::{EventLine, EventLines, TimerStart};

pub struct EventRegister<M: RawMutex> {
    enabled: AtomicU8,
    pending: AtomicU8,
    running: AtomicU8,
    /// Timers started since the event context last looked
    restarted: AtomicU8,
    reschedule: Signal<M, ()>,
}

impl<M: RawMutex> Default for EventRegister<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> EventRegister<M> {
    pub const fn new() -> Self {
        Self {
            enabled: AtomicU8::new(0),
            pending: AtomicU8::new(0),
            running: AtomicU8::new(0),
            restarted: AtomicU8::new(0),
            reschedule: Signal::new(),
        }
    }

    /// Record a hardware event on a line
    ///
    /// Timer lines only latch while their timer runs; the button line
    /// always latches.
    pub fn raise(&self, line: EventLine) {
        if line.is_timer() && !self.is_timer_running(line) {
            return;
        }
        self.pending.fetch_or(line.mask(), Ordering::AcqRel);
    }

    /// Latch an event seen outside the event context and, if the line is
    /// armed, have the event context dispatch it
    pub fn trigger(&self, line: EventLine) {
        self.raise(line);
        if self.is_line_active(line) {
            self.request_dispatch();
        }
    }

    pub fn is_timer_running(&self, line: EventLine) -> bool {
        self.running.load(Ordering::Acquire) & line.mask() != 0
    }

    /// Take the set of timers to restart from a full period
    pub fn take_restarts(&self) -> u8 {
        self.restarted.swap(0, Ordering::AcqRel)
    }

    /// Whether any line is both enabled and pending
    pub fn has_active(&self) -> bool {
        self.enabled.load(Ordering::Acquire) & self.pending.load(Ordering::Acquire) != 0
    }

    /// Whether a dispatch request is waiting to be picked up
    pub fn is_dispatch_requested(&self) -> bool {
        self.reschedule.signaled()
    }

    /// Wait until a line changed outside the event context
    pub async fn wait_reschedule(&self) {
        self.reschedule.wait().await
    }

    /// Handle for the shared state
    pub fn lines(&self) -> RegisterLines<'_, M> {
        RegisterLines { register: self }
    }

    fn is_line_active(&self, line: EventLine) -> bool {
        self.enabled.load(Ordering::Acquire) & self.pending.load(Ordering::Acquire) & line.mask()
            != 0
    }

    fn request_dispatch(&self) {
        self.reschedule.signal(());
    }
}

/// [`EventLines`] view of an [`EventRegister`]
pub struct RegisterLines<'a, M: RawMutex> {
    register: &'a EventRegister<M>,
}

impl<M: RawMutex> EventLines for RegisterLines<'_, M> {
    fn enable(&mut self, line: EventLine) {
        let reg = self.register;
        reg.enabled.fetch_or(line.mask(), Ordering::AcqRel);
        if reg.is_line_active(line) {
            reg.request_dispatch();
        }
    }

    fn disable(&mut self, line: EventLine) {
        self.register
            .enabled
            .fetch_and(!line.mask(), Ordering::AcqRel);
    }

    fn is_enabled(&self, line: EventLine) -> bool {
        self.register.enabled.load(Ordering::Acquire) & line.mask() != 0
    }

    fn is_pending(&self, line: EventLine) -> bool {
        self.register.pending.load(Ordering::Acquire) & line.mask() != 0
    }

    fn clear_pending(&mut self, line: EventLine) {
        self.register
            .pending
            .fetch_and(!line.mask(), Ordering::AcqRel);
    }

    fn start_timer(&mut self, line: EventLine, start: TimerStart) {
        if !line.is_timer() {
            return;
        }
        let reg = self.register;
        reg.running.fetch_or(line.mask(), Ordering::AcqRel);
        reg.restarted.fetch_or(line.mask(), Ordering::AcqRel);
        if start == TimerStart::Expired {
            reg.raise(line);
        }
        reg.request_dispatch();
    }

    fn stop_timer(&mut self, line: EventLine) {
        self.register
            .running
            .fetch_and(!line.mask(), Ordering::AcqRel);
    }

    fn is_timer_running(&self, line: EventLine) -> bool {
        self.register.is_timer_running(line)
    }
}
