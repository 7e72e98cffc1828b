//! Debounced people search box with a suggestion list.
//!
//! The search box combines an [input field](crate::input), a
//! [debouncer](crate::debounce) and the [substring filter](crate::filter).
//! Typing updates the raw input immediately and schedules a query update;
//! once typing pauses for [`DEBOUNCE_DELAY`] the suggestions are filtered by
//! the settled query. Choosing a suggestion fills the input with the person's
//! name, clears the query and hides the list until the next edit or focus.
//!
//! ```rust
//! use people_autocomplete::people::load;
//! use people_autocomplete::searchbox::{self, Phase};
//!
//! let people = load(r#"[
//!     {"name":"Alice","sex":"f","born":1,"died":2,"slug":"alice"},
//!     {"name":"Bob","sex":"m","born":3,"died":4,"slug":"bob"}
//! ]"#)?;
//! let mut search = searchbox::new(people);
//! search.on_focus();
//! assert!(search.suggestions_visible());
//! assert_eq!(search.matches().len(), 2);
//!
//! assert!(search.select(1));
//! assert_eq!(search.header(), "Bob (3 - 4)");
//! assert_eq!(search.raw_input(), "Bob");
//! assert_eq!(search.phase(), Phase::Selected);
//! # Ok::<(), people_autocomplete::Error>(())
//! ```
//!
//! In a bubbletea-rs program, return the command from
//! [`Model::update`] to the runtime so the debounce tick gets delivered back.

pub mod keys;
pub mod model;
pub mod style;
pub mod view;

#[cfg(test)]
mod tests;

pub use keys::{default_key_map, KeyMap};
pub use model::{
    new, with_bundled_people, Model, Phase, DEBOUNCE_DELAY, DEFAULT_PLACEHOLDER, NO_MATCHES,
    NO_SELECTION,
};
pub use style::{default_styles, Styles};
