//! Input driver traits

/// Errors reported by input drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Pin could not be read
    PinRead,
}

/// Matrix keypad scanner
pub trait KeypadScanner {
    /// Scan the keypad.
    ///
    /// Debouncing is internal. A key is reported once per press: holding it
    /// returns `Ok(None)` on later scans.
    fn scan(&mut self, now_ms: u32) -> Result<Option<char>, DriverError>;
}

/// Rotary encoder position counter
pub trait EncoderReader {
    /// Current absolute position in steps. Wraps at the `i32` range.
    fn read(&mut self) -> Result<i32, DriverError>;
}

/// Debounced push-button
pub trait ButtonDebouncer {
    /// Sample the pin and advance the debounce state
    fn update(&mut self, now_ms: u32) -> Result<(), DriverError>;

    /// True if the latest `update` saw a press (high to low) edge
    fn fell(&self) -> bool;

    /// True if the latest `update` saw a release (low to high) edge
    fn rose(&self) -> bool {
        false
    }
}
