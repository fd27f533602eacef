//! Collaborator traits
//!
//! These traits define the interface between the scheduling core and the
//! sensor and display drivers.

pub mod display;
pub mod sensor;

pub use display::{CharacterCode, DigitPosition, SegmentDisplay};
pub use sensor::{Celsius, TemperatureSensor};
