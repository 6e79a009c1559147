//! GPIO pin abstractions
//!
//! Digital input and output pins as seen by the keypad, encoder and button
//! drivers. Reads are plain polls: nothing here waits on an edge.

/// Digital output pin
///
/// The keypad scanner drives its columns through this trait.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Logic level of an input that is wired active-low with a pull-up.
///
/// Buttons, keypad rows and encoder phases on the pad all short to ground
/// when closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Pin reads low (contact closed)
    Low,
    /// Pin reads high (contact open, pulled up)
    High,
}

impl Level {
    /// Sample an input pin
    pub fn of<P: InputPin + ?Sized>(pin: &P) -> Self {
        if pin.is_high() {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Returns true for [`Level::High`]
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}
