//! Error types for style parsing and cascade resolution.

use thiserror::Error;

/// Errors produced while parsing style strings or building style sheets.
///
/// Every variant carries the offending input text so callers can point at
/// the broken rule or token instead of guessing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A color token was not empty, `default`, or a valid `#` form
    /// (palette name, six characters, or three characters).
    #[error("Invalid color format '{0}'")]
    InvalidColorFormat(String),

    /// A `class:` token appeared in a rule definition, where only concrete
    /// attributes are allowed.
    #[error("Unexpected class reference '{0}' in rule definition")]
    UnexpectedClassReference(String),

    /// A `class:` token contained an empty name, e.g. `class:` or
    /// `class:a,,b`.
    #[error("Invalid class name in '{0}'")]
    InvalidClassName(String),
}
