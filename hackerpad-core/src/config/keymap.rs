//! Keypad layout

/// Keypad rows
pub const KEYPAD_ROWS: usize = 3;

/// Keypad columns
pub const KEYPAD_COLS: usize = 3;

/// Character grid of a matrix keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap<const ROWS: usize, const COLS: usize> {
    keys: [[char; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> KeyMap<ROWS, COLS> {
    /// Create a keymap from a row-major grid
    pub const fn new(keys: [[char; COLS]; ROWS]) -> Self {
        Self { keys }
    }

    /// Character at a row/column coordinate
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.keys.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Coordinate of a character, if it is on the keypad
    pub fn position(&self, key: char) -> Option<(usize, usize)> {
        self.keys.iter().enumerate().find_map(|(row, cols)| {
            cols.iter().position(|&c| c == key).map(|col| (row, col))
        })
    }

    /// Check whether a character is on the keypad
    pub fn contains(&self, key: char) -> bool {
        self.position(key).is_some()
    }

    /// Number of keys
    pub const fn len(&self) -> usize {
        ROWS * COLS
    }

    /// Always false for a non-degenerate grid
    pub const fn is_empty(&self) -> bool {
        ROWS * COLS == 0
    }
}

/// The 3x3 pad
pub const KEYMAP: KeyMap<KEYPAD_ROWS, KEYPAD_COLS> = KeyMap::new([
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
]);
