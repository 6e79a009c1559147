//! Page-organised 1bpp framebuffer
//!
//! Byte `x` of page `p` holds pixels `(x, 8p)..(x, 8p + 7)`, LSB at the
//! top. This is the SSD1306 GDDRAM layout, so pages go to the panel as-is.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use hackerpad_core::config::PANEL;
use hackerpad_core::traits::DisplayError;

/// Panel width in pixels
pub const WIDTH: usize = PANEL.width as usize;
/// Panel height in pixels
pub const HEIGHT: usize = PANEL.height as usize;
/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Whole-screen pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Bytes in a full-screen bitmap
    pub const BYTES: usize = WIDTH * PAGES;

    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let mask = 1 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read one pixel
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Replace the contents with a bitmap already in page format
    pub fn load(&mut self, bitmap: &[u8]) -> Result<(), DisplayError> {
        if bitmap.len() != Self::BYTES {
            return Err(DisplayError::BadImageSize);
        }
        for (page, chunk) in self.pages.iter_mut().zip(bitmap.chunks_exact(WIDTH)) {
            page.copy_from_slice(chunk);
        }
        Ok(())
    }

    /// One page of column bytes
    pub fn page(&self, index: usize) -> &[u8; WIDTH] {
        &self.pages[index]
    }

    /// True if no pixel is on
    pub fn is_blank(&self) -> bool {
        self.pages.iter().flatten().all(|&b| b == 0)
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!((WIDTH, HEIGHT, PAGES), (128, 32, 4));
        assert_eq!(Framebuffer::BYTES, 512);
    }

    #[test]
    fn test_pixel_layout() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(3, 0, true);
        fb.set_pixel(3, 9, true);
        assert_eq!(fb.page(0)[3], 0b0000_0001);
        assert_eq!(fb.page(1)[3], 0b0000_0010);
        assert!(fb.pixel(3, 9));

        fb.set_pixel(3, 9, false);
        assert_eq!(fb.page(1)[3], 0);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(WIDTH, 0, true);
        fb.set_pixel(0, HEIGHT, true);
        assert!(fb.is_blank());
        assert!(!fb.pixel(500, 500));
    }

    #[test]
    fn test_load() {
        let mut fb = Framebuffer::new();
        let mut bitmap = [0u8; Framebuffer::BYTES];
        bitmap[0] = 0xFF;
        bitmap[WIDTH * 3 + 127] = 0x80;
        fb.load(&bitmap).unwrap();
        assert!(fb.pixel(0, 7));
        assert!(fb.pixel(127, 31));
        assert!(!fb.pixel(1, 0));

        assert_eq!(fb.load(&bitmap[..511]), Err(DisplayError::BadImageSize));
    }

    #[test]
    fn test_draw_target_clips() {
        let mut fb = Framebuffer::new();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(0, 200), BinaryColor::On),
            Pixel(Point::new(5, 5), BinaryColor::On),
        ])
        .unwrap();
        assert!(fb.pixel(5, 5));
        assert_eq!(fb.pages.iter().flatten().filter(|&&b| b != 0).count(), 1);
    }
}
