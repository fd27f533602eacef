//! UI state definition

use super::events::UiEvent;
use super::indicators::Indicator;
use crate::tracker::TrackedField;

/// Display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiState {
    /// Highest reading so far
    ShowMaximum,
    /// Latest reading
    ShowCurrent,
    /// Lowest reading so far
    ShowMinimum,
    /// Display, sensor and CPU in low power until the button is pressed
    Sleeping,
}

impl UiState {
    /// State shown right after power-on
    pub const POWER_ON: Self = UiState::ShowCurrent;

    /// Check if this state keeps the system asleep
    pub fn is_sleeping(&self) -> bool {
        matches!(self, UiState::Sleeping)
    }

    /// Tracker field rendered in this state, `None` while sleeping
    pub fn field(&self) -> Option<TrackedField> {
        match self {
            UiState::ShowMaximum => Some(TrackedField::Maximum),
            UiState::ShowCurrent => Some(TrackedField::Current),
            UiState::ShowMinimum => Some(TrackedField::Minimum),
            UiState::Sleeping => None,
        }
    }

    /// LED lit in this state, `None` while sleeping
    pub fn indicator(&self) -> Option<Indicator> {
        match self {
            UiState::ShowMaximum => Some(Indicator::Maximum),
            UiState::ShowCurrent => Some(Indicator::Current),
            UiState::ShowMinimum => Some(Indicator::Minimum),
            UiState::Sleeping => None,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: UiEvent) -> Self {
        use UiEvent::*;
        use UiState::*;

        match (self, event) {
            (ShowMaximum, ButtonPressed) => ShowCurrent,
            (ShowCurrent, ButtonPressed) => ShowMinimum,
            (ShowMinimum, ButtonPressed) => Sleeping,
            (Sleeping, ButtonPressed) => ShowMaximum,

            // The wake unwind lands on the maximum with a forced render
            (Sleeping, Woken) => ShowMaximum,

            // Default: stay in current state
            _ => self,
        }
    }
}
