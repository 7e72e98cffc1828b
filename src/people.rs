//! The people offered by the search box.
//!
//! A fixed list of people is compiled into the crate and parsed once per
//! process. Custom lists can be loaded from JSON with [`load`]; they go through
//! the same validation as the bundled one.

use crate::error::{Error, Result};
use crate::filter::Candidate;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const BUNDLED_JSON: &str = include_str!("../data/people.json");

static BUNDLED: OnceCell<Vec<Person>> = OnceCell::new();

/// Sex of a person, used only to pick the row style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialized as `"f"`.
    #[serde(rename = "f")]
    Female,
    /// Serialized as `"m"`.
    #[serde(rename = "m")]
    Male,
}

/// One selectable person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Display name, matched against the query.
    pub name: String,
    /// Picks the row style.
    pub sex: Sex,
    /// Year of birth.
    pub born: i32,
    /// Year of death.
    pub died: i32,
    /// Father's name, if known.
    #[serde(default)]
    pub father_name: Option<String>,
    /// Mother's name, if known.
    #[serde(default)]
    pub mother_name: Option<String>,
    /// Unique identifier.
    pub slug: String,
}

impl Person {
    /// The header line shown once this person is selected, e.g.
    /// `"Carolus Haverbeke (1832 - 1905)"`.
    pub fn header(&self) -> String {
        format!("{} ({} - {})", self.name, self.born, self.died)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Candidate for Person {
    fn filter_value(&self) -> &str {
        &self.name
    }
}

/// Parses and validates a JSON array of people.
///
/// # Errors
///
/// Fails if the JSON is malformed, the list is empty, a name is blank or two
/// people share a slug.
///
/// ```rust
/// use people_autocomplete::people::{load, Sex};
///
/// let people = load(r#"[{"name":"Alice","sex":"f","born":1,"died":2,"slug":"alice"}]"#)?;
/// assert_eq!(people[0].sex, Sex::Female);
/// assert_eq!(people[0].header(), "Alice (1 - 2)");
/// # Ok::<(), people_autocomplete::Error>(())
/// ```
pub fn load(json: &str) -> Result<Vec<Person>> {
    let people: Vec<Person> = serde_json::from_str(json)?;
    if people.is_empty() {
        return Err(Error::EmptyFixture);
    }

    let mut seen = HashSet::with_capacity(people.len());
    for p in &people {
        if p.name.trim().is_empty() {
            return Err(Error::BlankName(p.slug.clone()));
        }
        if !seen.insert(p.slug.as_str()) {
            return Err(Error::DuplicateSlug(p.slug.clone()));
        }
    }

    Ok(people)
}

/// The people compiled into the crate, parsed on first use.
pub fn bundled() -> Result<&'static [Person]> {
    BUNDLED
        .get_or_try_init(|| load(BUNDLED_JSON))
        .map(Vec::as_slice)
}
