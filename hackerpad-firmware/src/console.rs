//! Diagnostic console
//!
//! Every line goes to the debug probe over defmt and, if there is room, to
//! the USB serial console where the host GUI shows it in its log.

use core::fmt::{self, Write};

use defmt::*;
use hackerpad_core::traits::Diagnostics;
use heapless::String;

use crate::channels::HOST_TX;

/// Longest line sent to the host; longer lines are cut
const LINE_LEN: usize = 96;

/// [`Diagnostics`] sink of the firmware
#[derive(Default)]
pub struct Console {
    /// Lines the host pipe had no room for
    dropped: u32,
}

impl Console {
    pub const fn new() -> Self {
        Self { dropped: 0 }
    }

    /// Lines not delivered to the host since boot
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl Diagnostics for Console {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        let mut line: String<LINE_LEN> = String::new();
        // On overflow keep what fits
        let _ = line.write_fmt(args);
        info!("{=str}", line.as_str());

        if HOST_TX.free_capacity() < line.len() + 2 {
            self.dropped = self.dropped.wrapping_add(1);
            return;
        }
        let _ = HOST_TX.try_write(line.as_bytes());
        let _ = HOST_TX.try_write(b"\r\n");
    }
}
