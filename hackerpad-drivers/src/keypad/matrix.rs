//! Matrix keypad scanner
//!
//! Rows are inputs with pull-ups; columns are outputs that idle high. A scan
//! pulls one column low at a time and reads which rows follow it down.

use hackerpad_core::config::KeyMap;
use hackerpad_core::traits::{DriverError, KeypadScanner};
use hackerpad_hal::{InputPin, OutputPin};

/// Scanned key matrix
///
/// Scans are rate-limited to one per debounce interval, which also filters
/// contact bounce. A key is reported when it becomes the pressed key; holding
/// it does not repeat. With several keys down, the first in row-major order
/// wins.
pub struct KeypadMatrix<R, C, const ROWS: usize, const COLS: usize> {
    rows: [R; ROWS],
    cols: [C; COLS],
    keymap: KeyMap<ROWS, COLS>,
    debounce_ms: u32,
    last_scan_ms: Option<u32>,
    held: Option<char>,
}

impl<R, C, const ROWS: usize, const COLS: usize> KeypadMatrix<R, C, ROWS, COLS>
where
    R: InputPin,
    C: OutputPin,
{
    /// Create a scanner. All columns are released (driven high).
    pub fn new(
        rows: [R; ROWS],
        mut cols: [C; COLS],
        keymap: KeyMap<ROWS, COLS>,
        debounce_ms: u32,
    ) -> Self {
        for col in cols.iter_mut() {
            col.set_high();
        }
        Self {
            rows,
            cols,
            keymap,
            debounce_ms,
            last_scan_ms: None,
            held: None,
        }
    }

    /// Key seen down on the latest scan
    pub fn held(&self) -> Option<char> {
        self.held
    }

    /// Debounce interval in milliseconds
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    fn read_matrix(&mut self) -> Option<char> {
        let mut down = [[false; COLS]; ROWS];
        for (c, col) in self.cols.iter_mut().enumerate() {
            col.set_low();
            for (r, row) in self.rows.iter().enumerate() {
                down[r][c] = row.is_low();
            }
            col.set_high();
        }

        down.iter().enumerate().find_map(|(r, cols)| {
            cols.iter()
                .position(|&pressed| pressed)
                .and_then(|c| self.keymap.get(r, c))
        })
    }
}

impl<R, C, const ROWS: usize, const COLS: usize> KeypadScanner for KeypadMatrix<R, C, ROWS, COLS>
where
    R: InputPin,
    C: OutputPin,
{
    fn scan(&mut self, now_ms: u32) -> Result<Option<char>, DriverError> {
        if let Some(last) = self.last_scan_ms {
            if now_ms.wrapping_sub(last) < self.debounce_ms {
                return Ok(None);
            }
        }
        self.last_scan_ms = Some(now_ms);

        let pressed = self.read_matrix();
        let report = match pressed {
            Some(key) if self.held != Some(key) => Some(key),
            _ => None,
        };
        self.held = pressed;
        Ok(report)
    }
}
