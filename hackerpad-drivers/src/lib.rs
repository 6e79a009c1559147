//! Input driver implementations
//!
//! This crate provides concrete implementations of the input traits defined
//! in hackerpad-core, written against the pin traits of hackerpad-hal:
//!
//! - Matrix keypad scanner
//! - Quadrature rotary encoder
//! - Debounced push-button

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod encoder;
pub mod keypad;

pub use button::Bounce;
pub use encoder::QuadratureEncoder;
pub use keypad::KeypadMatrix;
