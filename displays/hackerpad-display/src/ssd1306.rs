//! SSD1306 OLED Display Driver
//!
//! Driver for 128x32 SSD1306 panels on I2C. Drawing goes to the local
//! framebuffer; [`Ssd1306::flush`] pushes all pages to the panel.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use hackerpad_core::config::PANEL;
use hackerpad_core::traits::{DisplayError, TextDisplay};
use hackerpad_hal::I2cBus;

use crate::framebuffer::{Framebuffer, PAGES, WIDTH};
use crate::text;

/// Control byte: command stream follows
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: GDDRAM data follows
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up sequence for a 128x32 panel on the internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x1F, // 32 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x02, // Page addressing
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x02, // Sequential COM, no remap (32-row panels)
    cmd::SET_CONTRAST,
    0x8F,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    buffer: Framebuffer,
    initialized: bool,
}

impl<I2C: I2cBus> Ssd1306<I2C> {
    /// Create a driver at the panel's configured address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, PANEL.i2c_address)
    }

    /// Create a driver at a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: Framebuffer::new(),
            initialized: false,
        }
    }

    /// Run the power-up sequence and blank the panel
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;
        for &c in INIT_SEQUENCE {
            self.command(c)?;
        }
        self.initialized = true;
        self.buffer.clear();
        self.flush()
    }

    /// True once [`init`](Self::init) succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear the framebuffer (the panel keeps its contents until flushed)
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Framebuffer contents
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// Push every page to the panel
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(self.buffer.page(page));
            self.i2c
                .write(self.address, &data)
                .map_err(|_| DisplayError::Bus)?;
        }
        Ok(())
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, c: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, c])
            .map_err(|_| DisplayError::Bus)
    }
}

impl<I2C: I2cBus> TextDisplay for Ssd1306<I2C> {
    fn init(&mut self) -> Result<(), DisplayError> {
        Ssd1306::init(self)
    }

    fn update_display(&mut self, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.buffer.clear();
        // Drawing into the framebuffer cannot fail
        let _ = text::draw(&mut self.buffer, text);
        self.flush()
    }

    fn show_image(&mut self, bitmap: &[u8]) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.buffer.load(bitmap)?;
        self.flush()
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        self.buffer.size()
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.buffer.draw_iter(pixels)
    }
}
