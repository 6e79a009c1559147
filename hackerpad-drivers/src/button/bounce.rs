//! Stable-interval button debouncer
//!
//! The debounced level only changes after the raw pin level has stayed the
//! same for a full interval. Chatter shorter than that never gets through.

use hackerpad_core::traits::{ButtonDebouncer, DriverError};
use hackerpad_hal::gpio::Level;
use hackerpad_hal::InputPin;

/// Debounced active-low button
pub struct Bounce<P> {
    pin: P,
    interval_ms: u32,
    /// Debounced level
    stable: Level,
    /// Raw level seen on the last update
    raw: Level,
    /// Time of the last raw change
    raw_since_ms: u32,
    changed: bool,
}

impl<P: InputPin> Bounce<P> {
    /// Attach to a pin that is already configured with its pull-up
    pub fn new(pin: P, interval_ms: u32) -> Self {
        let level = Level::of(&pin);
        Self {
            pin,
            interval_ms,
            stable: level,
            raw: level,
            raw_since_ms: 0,
            changed: false,
        }
    }

    /// Debounced level
    pub fn level(&self) -> Level {
        self.stable
    }

    /// True while the button is held (debounced low)
    pub fn is_pressed(&self) -> bool {
        self.stable == Level::Low
    }

    /// Debounce interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    fn sample(&mut self, now_ms: u32) {
        self.changed = false;
        let level = Level::of(&self.pin);
        if level != self.raw {
            self.raw = level;
            self.raw_since_ms = now_ms;
        } else if level != self.stable
            && now_ms.wrapping_sub(self.raw_since_ms) >= self.interval_ms
        {
            self.stable = level;
            self.changed = true;
        }
    }
}

impl<P: InputPin> ButtonDebouncer for Bounce<P> {
    fn update(&mut self, now_ms: u32) -> Result<(), DriverError> {
        self.sample(now_ms);
        Ok(())
    }

    fn fell(&self) -> bool {
        self.changed && self.stable == Level::Low
    }

    fn rose(&self) -> bool {
        self.changed && self.stable == Level::High
    }
}
