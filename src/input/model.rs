//! State and message handling of the input field.

use super::keymap::{default_key_map, KeyMap};
use crate::key::matches_binding;
use bubbletea_rs::event::PasteMsg;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// The input field model.
///
/// The text is kept as a vector of chars so the cursor can be addressed by
/// character index. `offset..offset_right` is the slice currently on screen
/// when a width is set.
#[derive(Debug, Clone)]
pub struct Model {
    /// Prompt rendered in front of the text.
    pub prompt: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the typed text.
    pub text_style: Style,
    /// Text shown while the field is empty.
    pub placeholder: String,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,
    /// Visible width in terminal cells. 0 means unbounded.
    pub width: usize,
    /// Maximum number of characters accepted. 0 means no limit.
    pub char_limit: usize,
    /// Key bindings.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,
    pub(super) offset: usize,
    pub(super) offset_right: usize,
}

/// Creates an empty, unfocused field.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        width: 0,
        char_limit: 0,
        key_map: default_key_map(),
        value: Vec::new(),
        focus: false,
        pos: 0,
        offset: 0,
        offset_right: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Replaces the text. The cursor moves to the end.
    pub fn set_value(&mut self, s: &str) {
        let mut runes: Vec<char> = s.chars().collect();
        if self.char_limit > 0 && runes.len() > self.char_limit {
            runes.truncate(self.char_limit);
        }
        self.value = runes;
        self.pos = self.value.len();
        self.handle_overflow();
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamping to the end of the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Whether the field receives key input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the field key focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes key focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Clears the text.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
    }

    /// Sets the prompt.
    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the visible width in cells. 0 disables scrolling.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets the character limit. 0 means unlimited. Existing text is not
    /// truncated until it is next replaced.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Handles a key or paste message.
    ///
    /// Returns `true` when the text changed, which is what the owner needs to
    /// know to react to an edit. Cursor movement alone returns `false`, and an
    /// unfocused field ignores everything.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if !self.focus {
            return false;
        }

        let before = self.value.clone();
        if let Some(paste) = msg.downcast_ref::<PasteMsg>() {
            let runes: Vec<char> = paste.0.chars().filter(|c| !c.is_control()).collect();
            self.insert_runes(&runes);
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.handle_deletion_keys(key_msg) && !self.handle_movement_keys(key_msg) {
                self.handle_character_input(key_msg);
            }
        } else {
            return false;
        }
        self.handle_overflow();

        self.value != before
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.delete_after_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.delete_before_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_word_forward) {
            self.delete_word_forward();
        } else {
            return false;
        }
        true
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Shift is already folded into the character.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes(&[ch]);
            }
        }
    }

    /// Inserts characters at the cursor, respecting the character limit.
    pub fn insert_runes(&mut self, runes: &[char]) {
        let room = if self.char_limit > 0 {
            self.char_limit.saturating_sub(self.value.len())
        } else {
            usize::MAX
        };

        for &r in runes.iter().take(room) {
            self.value.insert(self.pos, r);
            self.pos += 1;
        }
        self.handle_overflow();
    }
}
