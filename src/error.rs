//! Error conditions surfaced by the builders.
//!
//! Everything past construction is total: unknown roles, unregistered column
//! ids, and repeated registration are handled in place rather than reported
//! here.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A bare entity identifier was empty or whitespace-only.
    #[error("invalid entity name: {0:?}")]
    InvalidName(String),

    /// A partial name set was supplied without its required field.
    #[error("missing required name field `{0}`")]
    MissingField(&'static str),
}
