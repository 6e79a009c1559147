//! Hackerpad display
//!
//! SSD1306 OLED driver for the 128x32 panel with a page-organised
//! framebuffer. Text is rasterised with `embedded-graphics` mono fonts;
//! bitmaps from the host are copied in verbatim.
//!
//! # Usage
//!
//! ```ignore
//! use hackerpad_core::traits::TextDisplay;
//! use hackerpad_display::Ssd1306;
//!
//! let mut oled = Ssd1306::new(i2c);
//! oled.init()?;
//! oled.update_display("Key: 5")?;
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod framebuffer;
pub mod ssd1306;
pub mod text;

pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::Ssd1306;
