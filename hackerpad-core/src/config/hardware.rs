//! Hardware configuration
//!
//! Pin assignments and panel geometry for the Seeed XIAO RP2040 build.

use super::keymap::{KEYPAD_COLS, KEYPAD_ROWS};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an active-low input with the internal pull-up enabled
    pub const fn active_low_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// OLED panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// 7-bit I2C address
    pub i2c_address: u8,
    /// I2C clock in Hz
    pub i2c_frequency: u32,
}

impl PanelConfig {
    /// Size of a full-screen 1bpp framebuffer in bytes
    pub const fn framebuffer_len(&self) -> usize {
        self.width as usize * self.height as usize / 8
    }
}

/// USB identity of the serial console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbIdentity {
    /// Vendor ID
    pub vid: u16,
    /// Product ID
    pub pid: u16,
    /// Manufacturer string
    pub manufacturer: &'static str,
    /// Product string
    pub product: &'static str,
    /// Serial number string
    pub serial: &'static str,
}

/// 128x32 SSD1306 at the usual address
pub const PANEL: PanelConfig = PanelConfig {
    width: 128,
    height: 32,
    i2c_address: 0x3C,
    i2c_frequency: 400_000,
};

/// OLED SDA (D4)
pub const OLED_SDA: PinConfig = PinConfig::new(6);
/// OLED SCL (D5)
pub const OLED_SCL: PinConfig = PinConfig::new(7);

/// Keypad rows, read with pull-ups (D2, D3, D6)
pub const KEYPAD_ROW_PINS: [PinConfig; KEYPAD_ROWS] = [
    PinConfig::active_low_pullup(28),
    PinConfig::active_low_pullup(29),
    PinConfig::active_low_pullup(0),
];

/// Keypad columns, driven low one at a time (D0, D1, D10)
pub const KEYPAD_COL_PINS: [PinConfig; KEYPAD_COLS] = [
    PinConfig::new(26),
    PinConfig::new(27),
    PinConfig::new(3),
];

/// Encoder phase A (D7)
pub const ENCODER_A: PinConfig = PinConfig::active_low_pullup(1);
/// Encoder phase B (D8)
pub const ENCODER_B: PinConfig = PinConfig::active_low_pullup(2);
/// Encoder push-button (D9)
pub const ENCODER_BTN: PinConfig = PinConfig::active_low_pullup(4);

/// USB console identity
pub const USB_IDENTITY: UsbIdentity = UsbIdentity {
    vid: 0xc0de,
    pid: 0xcafe,
    manufacturer: "Hackerpad",
    product: "Hackerpad macro pad",
    serial: "HP-0001",
};

/// Every GPIO used by the board, for overlap checks
pub const USED_PINS: [PinConfig; 11] = [
    OLED_SDA,
    OLED_SCL,
    KEYPAD_ROW_PINS[0],
    KEYPAD_ROW_PINS[1],
    KEYPAD_ROW_PINS[2],
    KEYPAD_COL_PINS[0],
    KEYPAD_COL_PINS[1],
    KEYPAD_COL_PINS[2],
    ENCODER_A,
    ENCODER_B,
    ENCODER_BTN,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pin_assigned_twice() {
        for (i, a) in USED_PINS.iter().enumerate() {
            for b in &USED_PINS[i + 1..] {
                assert_ne!(a.pin, b.pin, "GPIO{} assigned twice", a.pin);
            }
        }
    }

    #[test]
    fn test_pins_in_range() {
        assert!(USED_PINS.iter().all(|p| p.pin < 30));
    }

    #[test]
    fn test_panel_framebuffer() {
        assert_eq!(PANEL.framebuffer_len(), 512);
        assert_eq!(
            PANEL.framebuffer_len(),
            hackerpad_protocol::IMAGE_BYTES
        );
    }

    #[test]
    fn test_inputs_pulled_up() {
        assert!(KEYPAD_ROW_PINS.iter().all(|p| p.pull_up));
        assert!(ENCODER_BTN.pull_up && ENCODER_BTN.inverted);
    }
}
