//! Error types.
//!
//! Only loading candidate data can fail. The widget itself has no error
//! states: a query that matches nothing yields an empty list.

use thiserror::Error;

/// Errors produced while loading the people fixture.
#[derive(Debug, Error)]
pub enum Error {
    /// The fixture is not valid JSON or doesn't have the expected shape.
    #[error("invalid people fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    /// The fixture parsed but contains nobody.
    #[error("people fixture is empty")]
    EmptyFixture,

    /// Two people share a slug, so selections would be ambiguous.
    #[error("duplicate person slug `{0}`")]
    DuplicateSlug(String),

    /// A person has an empty or whitespace-only name.
    #[error("person `{0}` has a blank name")]
    BlankName(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
