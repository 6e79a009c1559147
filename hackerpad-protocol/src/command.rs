//! Commands sent by the host

use heapless::{String, Vec};

/// Maximum length of a key action text in bytes
pub const MAX_ACTION_LEN: usize = 32;

/// Size of a full-screen bitmap: 128x32 pixels, 1 bit each, page-organised
pub const IMAGE_BYTES: usize = 128 * 32 / 8;

/// Text attached to a key by `MAP`
pub type ActionText = String<MAX_ACTION_LEN>;

/// Bitmap payload of an `IMG` command
pub type ImageData = Vec<u8, IMAGE_BYTES>;

/// A fully received host command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Map a keypad key to a text action; empty text clears the mapping
    Map {
        /// Keypad character
        key: char,
        /// Action text
        text: ActionText,
    },
    /// Full-screen bitmap in SSD1306 page format (column-major bytes per
    /// 8-pixel page, LSB at the top)
    Image(ImageData),
}

#[cfg(feature = "defmt")]
impl defmt::Format for HostCommand {
    fn format(&self, f: defmt::Formatter) {
        match self {
            HostCommand::Map { key, text } => {
                defmt::write!(f, "Map({}, {})", key, text.as_str())
            }
            HostCommand::Image(data) => defmt::write!(f, "Image({} bytes)", data.len()),
        }
    }
}
