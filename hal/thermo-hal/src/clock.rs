//! Core clock control

/// Core clock speed switch
///
/// Called from both execution contexts, so implementations live inside the
/// shared state.
pub trait CoreClock {
    /// Run the core from the slow idle clock (`true`) or at full speed
    fn set_low_power(&mut self, enabled: bool);

    /// Whether the slow idle clock is selected
    fn is_low_power(&self) -> bool;
}

/// Idle halt of the main execution context
pub trait Halt {
    /// Stop the core until an enabled event line fires
    ///
    /// Must return immediately if an event was serviced since the caller
    /// last inspected shared state, otherwise a wake request raised between
    /// that check and the halt would be lost until the next event.
    fn halt(&mut self);
}
