//! GPIO wrappers
//!
//! Newtypes over embassy-rp pins implementing the `hackerpad-hal` traits.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

/// Input pin with the internal pull-up enabled
pub struct PullUpInput<'d> {
    pin: Input<'d>,
}

impl<'d> PullUpInput<'d> {
    /// Configure a pad as a pulled-up input
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl hackerpad_hal::InputPin for PullUpInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Push-pull output pin
pub struct PushPullOutput<'d> {
    pin: Output<'d>,
}

impl<'d> PushPullOutput<'d> {
    /// Configure a pad as an output idling high
    ///
    /// Keypad columns idle high so an undriven column never reads as a key.
    pub fn idle_high(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::High),
        }
    }
}

impl hackerpad_hal::OutputPin for PushPullOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
