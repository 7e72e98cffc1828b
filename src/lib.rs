#![warn(missing_docs)]

//! # people-autocomplete
//!
//! A debounced autocomplete search box for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! terminal applications. The user types part of a name, the suggestion list is
//! filtered once typing pauses, and picking a suggestion fills the input and
//! shows the chosen person in a header line.
//!
//! ## Overview
//!
//! Every component follows the Elm Architecture: state lives in a model,
//! messages are handled by `update()`, which may return a command for the
//! runtime, and `view()` renders a string.
//!
//! - [`searchbox`]: the widget itself, the selection and visibility state machine
//! - [`debounce`]: cancel-and-reschedule single pending update, built on `tick`
//! - [`filter`]: case-insensitive substring filter that keeps list order
//! - [`input`]: single-line text field holding the raw input
//! - [`people`]: the bundled list of people
//! - [`key`]: key bindings and help text
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use people_autocomplete::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     search: SearchBox,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut search = searchbox_with_bundled_people().expect("bundled people");
//!         search.on_focus();
//!         (Self { search }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Hand the debounce command back to the runtime.
//!         self.search.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.search.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`] and never installs a subscriber itself.
//! Debounce scheduling and dropped stale ticks are logged at `trace`; commits,
//! refilters and selections at `debug`.

pub mod debounce;
pub mod error;
pub mod filter;
pub mod input;
pub mod key;
pub mod people;
pub mod searchbox;

use bubbletea_rs::Cmd;

/// Focus management shared by the components.
///
/// A focused component receives key input; a blurred one ignores it.
/// `focus()` may return a command for the runtime.
///
/// ```rust
/// use people_autocomplete::prelude::*;
///
/// fn toggle<T: Component>(c: &mut T) {
///     if c.focused() {
///         c.blur();
///     } else {
///         let _ = c.focus();
///     }
/// }
///
/// let mut search = searchbox_new(Vec::new());
/// toggle(&mut search);
/// assert!(search.focused());
/// toggle(&mut search);
/// assert!(!search.focused());
/// ```
pub trait Component {
    /// Gives the component key focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes key focus.
    fn blur(&mut self);

    /// Whether the component has key focus.
    fn focused(&self) -> bool;
}

pub use debounce::{Model as Debouncer, SettledMsg};
pub use error::{Error, Result};
pub use filter::{filter, filter_indices, Candidate};
pub use input::Model as Input;
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use people::{Person, Sex};
pub use searchbox::{
    new as searchbox_new, with_bundled_people as searchbox_with_bundled_people,
    KeyMap as SearchBoxKeyMap, Model as SearchBox, Phase, Styles as SearchBoxStyles,
    DEBOUNCE_DELAY,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use people_autocomplete::prelude::*;
///
/// let search: SearchBox = searchbox_new(Vec::new());
/// assert_eq!(search.phase(), Phase::Idle);
/// ```
pub mod prelude {
    pub use crate::debounce::{Model as Debouncer, SettledMsg};
    pub use crate::filter::{filter, filter_indices, Candidate};
    pub use crate::input::Model as Input;
    pub use crate::key::{matches_binding, Binding, KeyMap, KeyPress};
    pub use crate::people::{Person, Sex};
    pub use crate::searchbox::{
        new as searchbox_new, with_bundled_people as searchbox_with_bundled_people,
        KeyMap as SearchBoxKeyMap, Model as SearchBox, Phase, Styles as SearchBoxStyles,
        DEBOUNCE_DELAY,
    };
    pub use crate::Component;
}
