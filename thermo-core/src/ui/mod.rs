//! UI state machine
//!
//! The display mode advances on debounced button presses only. The state
//! decides which indicator LED is lit and which tracked reading is shown.

pub mod events;
pub mod indicators;
pub mod machine;

pub use events::UiEvent;
pub use indicators::{Indicator, IndicatorLeds};
pub use machine::UiState;
