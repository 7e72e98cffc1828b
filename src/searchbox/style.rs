//! Styles of the search box.

use crate::people::Sex;
use lipgloss_extras::prelude::*;

/// Styles used when rendering the search box.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The header line with the selection.
    pub header: Style,
    /// Rows for women.
    pub female: Style,
    /// Rows for men.
    pub male: Style,
    /// Marker in front of the highlighted row.
    pub highlight_marker: Style,
    /// The "no matching suggestions" line.
    pub no_matches: Style,
    /// Help line key labels.
    pub help_key: Style,
    /// Help line descriptions.
    pub help_desc: Style,
}

impl Styles {
    /// The row style for a person of the given sex.
    pub fn row(&self, sex: Sex) -> &Style {
        match sex {
            Sex::Female => &self.female,
            Sex::Male => &self.male,
        }
    }
}

/// The default styles: red rows for women, blue rows for men.
pub fn default_styles() -> Styles {
    Styles {
        header: Style::new().bold(true),
        female: Style::new().foreground(Color::from("#f14668")),
        male: Style::new().foreground(Color::from("#485fc7")),
        highlight_marker: Style::new().foreground(Color::from("#04b575")).bold(true),
        no_matches: Style::new().foreground(Color::from("240")).italic(true),
        help_key: Style::new().foreground(Color::from("#909090")),
        help_desc: Style::new().foreground(Color::from("#626262")),
    }
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}
