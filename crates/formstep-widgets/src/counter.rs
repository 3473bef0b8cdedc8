//! Description character counter
//!
//! The counter label is refreshed on key events, before the browser applies
//! the key, so it reports the length the field is about to have.

use serde::{Deserialize, Serialize};

/// Key events the counter cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    /// Any key that inserts a character
    Printable,
    Other,
}

impl Key {
    /// Map a legacy `keyCode`
    pub fn from_code(code: u32) -> Self {
        match code {
            8 => Key::Backspace,
            46 => Key::Delete,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterCounter {
    /// Template for exactly one character, `%s` is replaced by the count
    pub singular: String,
    pub plural: String,
}

impl Default for CharacterCounter {
    fn default() -> Self {
        Self {
            singular: "%s character".to_string(),
            plural: "%s characters".to_string(),
        }
    }
}

impl CharacterCounter {
    pub fn label(&self, count: usize) -> String {
        let template = if count == 1 {
            &self.singular
        } else {
            &self.plural
        };
        template.replace("%s", &count.to_string())
    }

    /// Length the field will have once `key` is applied, or `None` when the
    /// label should stay as it is.
    pub fn on_key(&self, key: Key, current_len: usize) -> Option<usize> {
        match key {
            Key::Backspace | Key::Delete if current_len > 0 => Some(current_len - 1),
            Key::Printable => Some(current_len + 1),
            _ => None,
        }
    }
}

/// English label with the default templates
pub fn character_label(count: usize) -> String {
    CharacterCounter::default().label(count)
}
