//! Key bindings for navigating and choosing suggestions.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Suggestion bindings of the search box. Text editing keys belong to the
/// embedded input field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Highlight the next suggestion.
    pub next_suggestion: Binding,
    /// Highlight the previous suggestion.
    pub prev_suggestion: Binding,
    /// Choose the highlighted suggestion.
    pub choose: Binding,
}

/// The default suggestion bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        next_suggestion: new_binding(vec![
            with_keys_str(&["down", "ctrl+n"]),
            with_help("↓/ctrl+n", "next"),
        ]),
        prev_suggestion: new_binding(vec![
            with_keys_str(&["up", "ctrl+p"]),
            with_help("↑/ctrl+p", "previous"),
        ]),
        choose: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "select")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next_suggestion, &self.prev_suggestion, &self.choose]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.next_suggestion, &self.prev_suggestion],
            vec![&self.choose],
        ]
    }
}
