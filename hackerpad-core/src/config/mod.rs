//! Configuration constants
//!
//! Everything here is fixed at build time. Pin numbers are RP2040 GPIOs,
//! annotated with the XIAO pad they sit behind.

pub mod hardware;
pub mod keymap;
pub mod timing;

pub use hardware::*;
pub use keymap::{KeyMap, KEYMAP, KEYPAD_COLS, KEYPAD_ROWS};
pub use timing::*;
