//! RP2040-specific HAL for the Hackerpad firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `hackerpad-hal` traits, plus board-specific functionality:
//!
//! - GPIO wrappers for embassy-rp inputs and outputs
//! - Blocking I2C adapter over any `embedded-hal` 1.0 bus
//! - Seeed XIAO RP2040 pad map (`D0`..`D10`)

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod pins;

// Re-export shared traits from hackerpad-hal for convenience
pub use hackerpad_hal::{I2cBus, InputPin, OutputPin};
