//! Per-line critical sections
//!
//! [`MaskedLine`] masks one event line for as long as the guard lives and
//! puts the enable bit back the way it found it on drop. A line that was
//! already masked (its subsystem is in low power) stays masked.

use core::ops::{Deref, DerefMut};

use thermo_hal::{EventLine, EventLines};

/// RAII guard masking a single event line
pub struct MaskedLine<'a, L: EventLines> {
    lines: &'a mut L,
    line: EventLine,
    was_enabled: bool,
}

impl<'a, L: EventLines> MaskedLine<'a, L> {
    /// Mask `line` until the guard is dropped
    pub fn new(lines: &'a mut L, line: EventLine) -> Self {
        let was_enabled = lines.is_enabled(line);
        lines.disable(line);
        Self {
            lines,
            line,
            was_enabled,
        }
    }
}

impl<L: EventLines> Deref for MaskedLine<'_, L> {
    type Target = L;

    fn deref(&self) -> &L {
        self.lines
    }
}

impl<L: EventLines> DerefMut for MaskedLine<'_, L> {
    fn deref_mut(&mut self) -> &mut L {
        self.lines
    }
}

impl<L: EventLines> Drop for MaskedLine<'_, L> {
    fn drop(&mut self) {
        if self.was_enabled {
            self.lines.enable(self.line);
        }
    }
}
