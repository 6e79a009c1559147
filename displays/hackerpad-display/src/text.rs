//! Text layout for the panel
//!
//! One font, top-left origin, hard wrap at the panel width.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::framebuffer::{HEIGHT, WIDTH};

/// Characters per line
pub const COLUMNS: usize = WIDTH / 6;

/// Lines that fit on the panel
pub const ROWS: usize = HEIGHT / 10;

/// Split `text` into display lines.
///
/// Lines break at `\n` and after [`COLUMNS`] characters. At most [`ROWS`]
/// lines are produced; the rest is cut.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    Wrap { rest: text }.take(ROWS)
}

struct Wrap<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Wrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let limit = self
            .rest
            .char_indices()
            .nth(COLUMNS)
            .map_or(self.rest.len(), |(i, _)| i);
        let (line, rest) = match self.rest[..limit].find('\n') {
            Some(nl) => (&self.rest[..nl], &self.rest[nl + 1..]),
            None => {
                let (line, rest) = self.rest.split_at(limit);
                // A break right after a full row ends that row
                (line, rest.strip_prefix('\n').unwrap_or(rest))
            }
        };
        self.rest = rest;
        Some(line)
    }
}

/// Draw `text` from the top-left corner onto `target`
pub fn draw<D>(target: &mut D, text: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let line_height = FONT_6X10.character_size.height as i32;
    for (row, line) in lines(text).enumerate() {
        let origin = Point::new(0, row as i32 * line_height);
        Text::with_baseline(line, origin, style, Baseline::Top).draw(target)?;
    }
    Ok(())
}
