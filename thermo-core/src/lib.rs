//! Board-agnostic core logic for the dual-digit thermometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (temperature sensor, seven-segment display)
//! - Temperature tracking (current/minimum/maximum)
//! - Two-character rendering and the display multiplexer
//! - Power controller for the display, sensor and CPU subsystems
//! - UI state machine, indicator LEDs and button debouncing
//! - Shared state, event dispatcher and the main-loop controller
//!
//! # Execution model
//!
//! Two contexts touch the state: the main loop ([`controller::Controller`])
//! and a single, non-reentrant event context that calls
//! [`dispatcher::dispatch`] whenever an event line fires. Everything both
//! contexts touch lives in [`shared::SharedState`] behind one
//! [`shared::Shared`] mutex.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod controller;
pub mod debounce;
pub mod dispatcher;
pub mod mask;
pub mod multiplex;
pub mod power;
pub mod render;
pub mod shared;
pub mod tracker;
pub mod traits;
pub mod ui;

#[cfg(test)]
pub(crate) mod mock;

pub use controller::Controller;
pub use dispatcher::{dispatch, ServicedLines};
pub use shared::{Board, Shared, SharedState};
pub use traits::{Celsius, CharacterCode, DigitPosition, SegmentDisplay, TemperatureSensor};
pub use ui::{UiEvent, UiState};
