//! Events that trigger UI transitions

/// Events that can move the UI state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// Debounced button press seen by the main loop
    ButtonPressed,
    /// Button edge woke the system from sleep
    Woken,
}
