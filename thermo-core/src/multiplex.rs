//! Display multiplexer
//!
//! Both digit positions share one segment bus and only one may be selected
//! at a time. Each multiplex tick turns the lit position off, puts the
//! other slot's code on the bus and lights that position. At ~122 Hz
//! persistence of vision makes both digits look steadily lit.

use thermo_hal::{EventLine, EventLines};

use crate::mask::MaskedLine;
use crate::render::CharacterPair;
use crate::traits::{DigitPosition, SegmentDisplay};

/// Position considered lit right after a reset, so the first tick lights
/// the left digit
const RESET_POSITION: DigitPosition = DigitPosition::Right;

/// Double-buffered two-slot display scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Multiplexer {
    buffer: CharacterPair,
    lit: DigitPosition,
}

impl Default for Multiplexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplexer {
    /// Blank buffer, next tick lights the left position
    pub const fn new() -> Self {
        Self {
            buffer: CharacterPair::BLANK,
            lit: RESET_POSITION,
        }
    }

    /// Advance to the other position. Called from the multiplex tick only.
    pub fn tick<D: SegmentDisplay>(&mut self, display: &mut D) {
        display.disable_position(self.lit);
        let next = self.lit.other();
        display.write_segment_code(next, self.buffer.get(next));
        display.enable_position(next);
        self.lit = next;
    }

    /// Replace both slots as one unit
    ///
    /// The multiplex line is masked while the pair is written, so a tick
    /// can never show one stale and one fresh slot.
    pub fn set_displayed_characters<L: EventLines>(&mut self, lines: &mut L, pair: CharacterPair) {
        self.update(lines, || pair);
    }

    /// Compute and store a new pair inside the multiplex critical section
    pub fn update<L, F>(&mut self, lines: &mut L, render: F)
    where
        L: EventLines,
        F: FnOnce() -> CharacterPair,
    {
        let _masked = MaskedLine::new(lines, EventLine::MultiplexTimer);
        self.buffer = render();
    }

    /// Blank the buffer. Only used while the multiplex line is stopped.
    pub(crate) fn clear(&mut self) {
        self.buffer = CharacterPair::BLANK;
    }

    /// Restart the ping-pong from the left digit
    pub(crate) fn reset_position(&mut self) {
        self.lit = RESET_POSITION;
    }

    /// Current buffer contents
    pub fn buffer(&self) -> CharacterPair {
        self.buffer
    }

    /// Position lit by the last tick
    pub fn lit_position(&self) -> DigitPosition {
        self.lit
    }
}
