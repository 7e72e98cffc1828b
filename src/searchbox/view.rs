//! Rendering of the search box.

use super::model::{Model, NO_MATCHES};
use crate::key::KeyMap as _;
use crate::people::Person;

const HELP_SEPARATOR: &str = " • ";

impl Model {
    /// Renders the header, the input line and, when open, the suggestion
    /// list followed by a one-line help.
    pub fn view(&self) -> String {
        let mut lines = vec![self.styles.header.render(&self.header()), self.input.view()];

        if self.suggestions_visible {
            if self.matches.is_empty() {
                lines.push(self.styles.no_matches.render(NO_MATCHES));
            } else {
                for (row, &i) in self.matches.iter().enumerate() {
                    lines.push(self.row_view(&self.candidates[i], row == self.highlighted));
                }
            }
            lines.push(self.help_view());
        }

        lines.join("\n")
    }

    /// Renders one suggestion row, styled by the person's sex.
    pub fn row_view(&self, person: &Person, highlighted: bool) -> String {
        let marker = if highlighted && self.input.focused() {
            self.styles.highlight_marker.render("›")
        } else {
            " ".to_string()
        };
        format!("{} {}", marker, self.styles.row(person.sex).render(&person.name))
    }

    /// Renders the short help for the suggestion bindings.
    pub fn help_view(&self) -> String {
        self.key_map
            .short_help()
            .into_iter()
            .filter(|b| b.enabled())
            .map(|b| {
                format!(
                    "{} {}",
                    self.styles.help_key.render(&b.help().key),
                    self.styles.help_desc.render(&b.help().desc)
                )
            })
            .collect::<Vec<_>>()
            .join(HELP_SEPARATOR)
    }
}
