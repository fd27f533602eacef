//! RP2040-specific HAL for the thermometer firmware
//!
//! This crate provides RP2040 implementations of the shared `thermo-hal`
//! traits on top of embassy-rp:
//!
//! - GPIO pins and an eight-pin parallel bus
//! - Blocking ADC channel with a power switch
//! - `clk_sys` divider as the idle clock
//! - WFE-based halt

#![no_std]

pub mod adc;
pub mod clock;
pub mod gpio;

pub use adc::BlockingAdc;
pub use clock::{ClockError, SysClock, WfeHalt};
pub use gpio::{ParallelBus, RpOutput, SioInput};
