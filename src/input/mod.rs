//! Single-line text field used as the search box's input line.
//!
//! The field owns the raw text the user types: a character buffer, a cursor
//! position and a horizontally scrolling window when a width is set. It does
//! not blink or talk to the clipboard; it only edits text and renders it.
//!
//! ```rust
//! use people_autocomplete::input;
//!
//! let mut field = input::new();
//! field.focus();
//! field.set_placeholder("Enter a part of the name");
//! field.set_value("Emma");
//! assert_eq!(field.value(), "Emma");
//! assert_eq!(field.position(), 4);
//! ```

pub mod editing;
pub mod keymap;
pub mod model;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
