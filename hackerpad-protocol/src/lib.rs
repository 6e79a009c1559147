//! Hackerpad host protocol
//!
//! This crate defines the line-oriented protocol spoken between the host
//! GUI and the macro pad over the USB serial console. It is plain text so a
//! terminal is enough to drive it.
//!
//! # Protocol Overview
//!
//! ```text
//! host -> pad   MAP <key> <text>\n       map a keypad key to a text action
//! host -> pad   IMG <len>\n<len bytes>   show a 128x32 bitmap (page format)
//! pad  -> host  OK MAP <key>
//! pad  -> host  OK IMG <len>
//! pad  -> host  ERR <code>
//! ```
//!
//! Everything else the pad prints on the console (event diagnostics) is
//! free-form and only meant for the host's log view.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod parser;
pub mod reply;

pub use command::{HostCommand, ActionText, ImageData, IMAGE_BYTES, MAX_ACTION_LEN};
pub use parser::{CommandParser, ProtocolError, MAX_LINE_LEN};
pub use reply::{ErrorCode, Reply};
