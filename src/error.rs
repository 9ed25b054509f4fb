//! Error type shared by every operator.
//!
//! Argument errors are raised when an operator is called, before anything is
//! pulled from its inputs. Sequence errors are raised by the accessors that
//! need exactly one (or at least one) element, at the point the input shows it
//! cannot supply it.

use thiserror::Error as ThisError;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any error reported by an `ironseq` operator.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required collaborator (selector, sentinel, sequence) was not supplied.
    #[error("argument `{param}` is required but was not supplied")]
    MissingArgument {
        /// Name of the missing parameter.
        param: &'static str,
    },

    /// A value parameter is outside its documented bounds.
    #[error("argument `{param}` is out of range (value: {value}): {message}")]
    OutOfRange {
        /// Name of the offending parameter.
        param: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// Human-readable description of the valid range.
        message: String,
    },

    /// A closed-set parameter holds a value outside the set.
    #[error("argument `{param}` holds `{value}`, which is not a defined value")]
    InvalidEnum {
        /// Name of the offending parameter.
        param: &'static str,
        /// The rejected value, rendered for display.
        value: String,
    },

    /// The sequence contains no (qualifying) element.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// The sequence contains more than one (qualifying) element.
    #[error("sequence contains more than one element")]
    TooManyElements,
}

impl Error {
    /// Name of the parameter this error refers to, if it is an argument error.
    #[must_use]
    pub const fn param(&self) -> Option<&'static str> {
        match self {
            Self::MissingArgument { param }
            | Self::OutOfRange { param, .. }
            | Self::InvalidEnum { param, .. } => Some(param),
            Self::EmptySequence | Self::TooManyElements => None,
        }
    }
}
