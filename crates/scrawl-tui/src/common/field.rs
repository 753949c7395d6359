//! Minimal single-line text field for form editing.
//!
//! Supports the subset of editing operations the form slices need: insert,
//! backspace/delete, and cursor movement. Length limits are enforced in
//! characters, mirroring the service's field maxima.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Single-line text field with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    cursor: usize,
    max_chars: Option<usize>,
}

impl TextField {
    /// Creates an empty field with a maximum length in characters.
    pub fn with_max(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Self::default()
        }
    }

    /// Returns the current contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the contents, moving the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = match self.max_chars {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        self.cursor = self.value.chars().count();
    }

    /// Clears the contents.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the display width of the text before the cursor.
    pub fn cursor_width(&self) -> u16 {
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value[..byte_idx].width() as u16
    }

    /// Applies a key event to the field. Returns true if it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        // Leave ctrl/alt chords to the caller.
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        if let Some(max) = self.max_chars
            && self.value.chars().count() >= max
        {
            return;
        }
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_idx = char_to_byte_index(&self.value, self.cursor - 1);
        self.value.remove(byte_idx);
        self.cursor -= 1;
    }

    fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.remove(byte_idx);
    }
}

/// Converts a char index to a byte index, clamping to the end.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(idx, _)| idx)
}
