//! State machine of the search box.

use super::keys::{default_key_map, KeyMap};
use super::style::{default_styles, Styles};
use crate::debounce;
use crate::filter::filter_indices;
use crate::input;
use crate::key::matches_binding;
use crate::people::{self, Person};
use crate::Component;
use bubbletea_rs::event::FocusMsg;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::time::Duration;
use tracing::{debug, error};

/// How long typing has to pause before the suggestions are filtered again.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(1000);

/// Header text while nobody is selected.
pub const NO_SELECTION: &str = "No selected person";

/// Shown in place of the suggestion rows when nothing matches.
pub const NO_MATCHES: &str = "No matching suggestions";

/// Placeholder of the input line.
pub const DEFAULT_PLACEHOLDER: &str = "Enter a part of the name";

/// Where the search box is in its interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed yet. The list may be open after a focus.
    Idle,
    /// The user is editing the query; suggestions are shown.
    Typing,
    /// A person was chosen; the list is hidden until the next edit or focus.
    Selected,
}

/// The search box model.
///
/// It owns the raw input (through the embedded [`input::Model`]), the
/// debounced query, the indices of the people matching that query, the
/// selection and the visibility of the suggestion list. Matches are only
/// recomputed when the debounced query changes, never on a raw keystroke.
#[derive(Debug, Clone)]
pub struct Model {
    /// Rendering styles.
    pub styles: Styles,
    /// Suggestion key bindings.
    pub key_map: KeyMap,

    pub(super) input: input::Model,
    pub(super) debounce: debounce::Model,
    pub(super) candidates: Vec<Person>,
    pub(super) matches: Vec<usize>,
    pub(super) highlighted: usize,
    pub(super) selected: Option<Person>,
    pub(super) suggestions_visible: bool,
    pub(super) phase: Phase,
    pub(super) closed: bool,
}

/// Creates a search box over the given people. The list is taken as is and
/// never changed afterwards.
pub fn new(candidates: Vec<Person>) -> Model {
    let mut input = input::new();
    input.set_placeholder(DEFAULT_PLACEHOLDER);

    let matches = filter_indices(&candidates, "");
    Model {
        styles: default_styles(),
        key_map: default_key_map(),
        input,
        debounce: debounce::new(DEBOUNCE_DELAY),
        candidates,
        matches,
        highlighted: 0,
        selected: None,
        suggestions_visible: false,
        phase: Phase::Idle,
        closed: false,
    }
}

/// Creates a search box over the bundled people.
///
/// # Errors
///
/// Fails only if the bundled fixture is invalid.
pub fn with_bundled_people() -> crate::Result<Model> {
    Ok(new(people::bundled()?.to_vec()))
}

impl Model {
    /// Sets the input placeholder.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.input.set_placeholder(placeholder);
        self
    }

    /// Sets the visible width of the input line. 0 disables scrolling.
    pub fn with_width(mut self, width: usize) -> Self {
        self.input.set_width(width);
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the suggestion key bindings.
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// The literal text in the input.
    pub fn raw_input(&self) -> String {
        self.input.value()
    }

    /// The query the suggestions are currently filtered by.
    pub fn debounced_query(&self) -> &str {
        self.debounce.value()
    }

    /// Whether a query update is waiting for typing to pause.
    pub fn query_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// All people, in their original order.
    pub fn candidates(&self) -> &[Person] {
        &self.candidates
    }

    /// People matching the debounced query, in their original order.
    pub fn matches(&self) -> Vec<&Person> {
        self.matches.iter().map(|&i| &self.candidates[i]).collect()
    }

    /// Whether the suggestion list is shown.
    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    /// The chosen person, if any.
    pub fn selected(&self) -> Option<&Person> {
        self.selected.as_ref()
    }

    /// Index of the highlighted row among the matches.
    pub fn highlight_index(&self) -> usize {
        self.highlighted
    }

    /// The highlighted match, if there are any matches.
    pub fn highlighted(&self) -> Option<&Person> {
        self.matches
            .get(self.highlighted)
            .map(|&i| &self.candidates[i])
    }

    /// Current phase of the interaction.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether [`Model::close`] was called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The header line: the selected person with their years, or
    /// [`NO_SELECTION`].
    pub fn header(&self) -> String {
        match &self.selected {
            Some(p) => p.header(),
            None => NO_SELECTION.to_string(),
        }
    }

    /// Replaces the input text programmatically, e.g. from a test driver or
    /// an embedding application. Keys and pastes arrive through [`Model::update`].
    ///
    /// Returns the debounce command to hand to the runtime.
    pub fn on_input(&mut self, text: &str) -> Option<Cmd> {
        if self.closed {
            return None;
        }
        self.input.set_value(text);
        self.text_changed()
    }

    /// Handles the input gaining focus: the suggestion list opens, even when
    /// nothing has been typed yet.
    pub fn on_focus(&mut self) {
        if self.closed {
            return;
        }
        self.input.focus();
        self.suggestions_visible = true;
        self.phase = if self.input.value().is_empty() {
            Phase::Idle
        } else {
            Phase::Typing
        };
    }

    /// Chooses the match at `index` among the currently visible matches.
    ///
    /// The input takes the person's name, the debounced query is cleared and
    /// the list closes. Any update still waiting on the debounce is canceled.
    /// Returns `false` and changes nothing if the list is hidden or the index
    /// is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if self.closed || !self.suggestions_visible {
            debug!(index, "selection ignored: suggestions hidden");
            return false;
        }
        let Some(&candidate) = self.matches.get(index) else {
            debug!(index, visible = self.matches.len(), "selection ignored: no such match");
            return false;
        };

        let person = self.candidates[candidate].clone();
        debug!(slug = %person.slug, "person selected");

        self.input.set_value(&person.name);
        self.debounce.reset("");
        self.refilter();
        self.selected = Some(person);
        self.suggestions_visible = false;
        self.phase = Phase::Selected;
        true
    }

    /// Tears the search box down. The pending query update is canceled and
    /// every later message is ignored.
    pub fn close(&mut self) {
        self.debounce.close();
        self.input.blur();
        self.closed = true;
    }

    /// Processes a message: debounce ticks, terminal focus, suggestion
    /// navigation, editing keys and pastes. Returns the command to run, if any.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if self.closed {
            return None;
        }

        if self.debounce.update(&msg).is_some() {
            self.refilter();
            return None;
        }

        if msg.downcast_ref::<FocusMsg>().is_some() {
            self.on_focus();
            return None;
        }

        if !self.input.focused() {
            return None;
        }

        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            // Pastes and other edits that aren't key presses.
            if self.input.update(&msg) {
                return self.text_changed();
            }
            return None;
        };

        if self.suggestions_visible {
            if matches_binding(key_msg, &self.key_map.next_suggestion) {
                self.move_highlight(1);
                return None;
            }
            if matches_binding(key_msg, &self.key_map.prev_suggestion) {
                self.move_highlight(-1);
                return None;
            }
            if matches_binding(key_msg, &self.key_map.choose) {
                self.select(self.highlighted);
                return None;
            }
        }

        if self.input.update(&msg) {
            return self.text_changed();
        }
        None
    }

    fn text_changed(&mut self) -> Option<Cmd> {
        self.suggestions_visible = true;
        self.phase = Phase::Typing;
        self.debounce.schedule(self.input.value())
    }

    fn refilter(&mut self) {
        self.matches = filter_indices(&self.candidates, self.debounce.value());
        self.highlighted = 0;
        debug!(
            query = %self.debounce.value(),
            matches = self.matches.len(),
            "suggestions refiltered"
        );
    }

    fn move_highlight(&mut self, delta: isize) {
        let n = self.matches.len();
        if n == 0 {
            return;
        }
        self.highlighted = (self.highlighted as isize + delta).rem_euclid(n as isize) as usize;
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.on_focus();
        None
    }

    fn blur(&mut self) {
        self.input.blur();
    }

    fn focused(&self) -> bool {
        self.input.focused()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let people = match people::bundled() {
            Ok(people) => people.to_vec(),
            Err(e) => {
                error!(error = %e, "bundled people failed to load");
                Vec::new()
            }
        };
        let mut model = new(people);
        model.input.focus();
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
