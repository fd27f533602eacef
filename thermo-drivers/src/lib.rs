//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in thermo-core, on top of the thermo-hal abstractions:
//!
//! - Temperature sensor (TMP36 on an analog input)
//! - Display (two multiplexed common-anode seven-segment digits)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod sensor;

pub use display::SevenSegment;
pub use sensor::Tmp36;
