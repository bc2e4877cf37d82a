use std::fmt;

use thiserror::Error;

/// Errors raised when a number fails validation.
///
/// `validate` raises the most specific applicable variant for the first
/// fault it detects, in the order format → length → component → checksum.
/// `is_valid` converts any of these to `false` and swallows nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Disallowed characters remain after normalization, or the basic
    /// structure of the number is not met.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The compact length is not in the allowed set for the identifier.
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// An extracted sub-field (province, embedded date, entity-type digit,
    /// reserved prefix, …) is outside its allowed domain.
    #[error("invalid component: {0}")]
    InvalidComponent(String),

    /// The number is structurally sound but fails its check digit(s).
    #[error("invalid checksum: {0}")]
    InvalidChecksum(String),
}

/// Error returned when a registry lookup names an identifier kind the
/// library does not know.
///
/// This is a programmer error, deliberately distinct from
/// [`ValidationError`]: `is_valid` never swallows it.
#[derive(Debug, Clone)]
pub struct UnknownKindError {
    /// The name that failed to resolve.
    pub name: String,
}

impl fmt::Display for UnknownKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown identifier kind '{}'", self.name)
    }
}

impl std::error::Error for UnknownKindError {}
