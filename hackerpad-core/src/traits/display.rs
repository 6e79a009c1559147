//! Display driver trait

/// Errors that can occur when talking to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed (NACK, arbitration loss, ...)
    Bus,
    /// Display was not initialised
    NotInitialized,
    /// Bitmap size does not match the panel
    BadImageSize,
}

/// Text output device
///
/// Each update replaces the whole screen: clear, draw at the top-left
/// corner, flush.
pub trait TextDisplay {
    /// Bring the panel up and clear it
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Replace the screen contents with `text`
    fn update_display(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Replace the screen contents with a raw bitmap in the panel's native
    /// page format
    fn show_image(&mut self, bitmap: &[u8]) -> Result<(), DisplayError>;
}
