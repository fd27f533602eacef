//! Thermo Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the thermometer core
//! is written against. Chip-specific crates (`thermo-hal-rp2040`) implement
//! them; host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (thermo-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermo-core / thermo-drivers           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermo-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  thermo-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::OutputPort`] - Digital I/O
//! - [`adc::AnalogInput`] - Analog sampling with a power switch
//! - [`event::EventLines`] - Interrupt enable/pending lines and their timers
//! - [`register::EventRegister`] - Lock-free register shared with the event context
//! - [`clock::CoreClock`], [`clock::Halt`] - Core clock speed and idle halt

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod event;
pub mod gpio;
pub mod register;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use clock::{CoreClock, Halt};
pub use event::{EventFlags, EventLine, EventLines, TimerStart};
pub use gpio::{InputPin, OutputPin, OutputPort};
pub use register::{EventRegister, RegisterLines};
