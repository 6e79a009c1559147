//! Board-agnostic core logic for the Hackerpad firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Input driver contracts (keypad, encoder, button, display)
//! - Event model and the bounded event queue
//! - The poll-dispatch loop and the event dispatcher
//! - Key actions mapped by the host
//! - Build-time configuration constants

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod actions;
pub mod config;
pub mod event;
pub mod poll;
pub mod traits;

pub use event::{Event, EventQueue, RingBuffer};
pub use poll::{Dispatcher, DisplayStatus, EventHandler, Poller, TickReport};
