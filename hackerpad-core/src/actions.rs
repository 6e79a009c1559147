//! Host-assigned key actions
//!
//! The host GUI can attach a short text to any keypad key with `MAP`. The
//! table lives in RAM only and starts empty on every boot.

use heapless::FnvIndexMap;
use hackerpad_protocol::{ActionText, MAX_ACTION_LEN};

use crate::config::KEYMAP;

/// Table slots; heapless index maps need a power of two
const SLOTS: usize = 16;

/// Errors when changing the action table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionError {
    /// Key is not on the keypad
    UnknownKey,
    /// Text longer than the action limit
    TextTooLong,
    /// No free slot
    TableFull,
}

/// Mapping from keypad characters to action text
#[derive(Debug, Default)]
pub struct KeyActions {
    map: FnvIndexMap<char, ActionText, SLOTS>,
}

impl KeyActions {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            map: FnvIndexMap::new(),
        }
    }

    /// Attach `text` to `key`. Empty text removes the mapping.
    pub fn set(&mut self, key: char, text: &str) -> Result<(), ActionError> {
        if !KEYMAP.contains(key) {
            return Err(ActionError::UnknownKey);
        }
        if text.is_empty() {
            self.clear(key);
            return Ok(());
        }
        if text.len() > MAX_ACTION_LEN {
            return Err(ActionError::TextTooLong);
        }
        let mut owned = ActionText::new();
        owned
            .push_str(text)
            .map_err(|_| ActionError::TextTooLong)?;
        self.map
            .insert(key, owned)
            .map(|_| ())
            .map_err(|_| ActionError::TableFull)
    }

    /// Action text for `key`
    pub fn get(&self, key: char) -> Option<&str> {
        self.map.get(&key).map(|t| t.as_str())
    }

    /// Remove the mapping for `key`. Returns true if one existed.
    pub fn clear(&mut self, key: char) -> bool {
        self.map.remove(&key).is_some()
    }

    /// Number of mapped keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if no key is mapped
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut actions = KeyActions::new();
        assert!(actions.set('5', "ctrl+c").is_ok());
        assert_eq!(actions.get('5'), Some("ctrl+c"));
        assert_eq!(actions.get('6'), None);
    }

    #[test]
    fn test_overwrite() {
        let mut actions = KeyActions::new();
        actions.set('1', "first").unwrap();
        actions.set('1', "second").unwrap();
        assert_eq!(actions.get('1'), Some("second"));
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_empty_text_clears() {
        let mut actions = KeyActions::new();
        actions.set('9', "hello").unwrap();
        assert!(actions.set('9', "").is_ok());
        assert_eq!(actions.get('9'), None);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_rejects_unknown_key() {
        let mut actions = KeyActions::new();
        assert_eq!(actions.set('0', "x"), Err(ActionError::UnknownKey));
        assert_eq!(actions.set('a', "x"), Err(ActionError::UnknownKey));
    }

    #[test]
    fn test_rejects_long_text() {
        let mut actions = KeyActions::new();
        let long = "abcdefghijklmnopqrstuvwxyz0123456";
        assert_eq!(long.len(), MAX_ACTION_LEN + 1);
        assert_eq!(actions.set('2', long), Err(ActionError::TextTooLong));
        assert!(actions.set('2', &long[..MAX_ACTION_LEN]).is_ok());
    }

    #[test]
    fn test_all_keys_fit() {
        let mut actions = KeyActions::new();
        for key in '1'..='9' {
            actions.set(key, "x").unwrap();
        }
        assert_eq!(actions.len(), 9);
    }
}
