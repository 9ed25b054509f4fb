//! Guard clauses run by every public operator at call time.
//!
//! Each guard names the parameter it checks so that a failure is attributable
//! to a single argument:
//!
//! ```
//! use ironseq::Error;
//! use ironseq::validation::ensure_in_range;
//!
//! assert!(ensure_in_range("size", 3usize, 1, usize::MAX).is_ok());
//!
//! let err = ensure_in_range("size", 0usize, 1, usize::MAX).unwrap_err();
//! assert_eq!(err.param(), Some("size"));
//! ```

use crate::error::{Error, Result};
use std::fmt::Display;

/// Validate that `value` lies in the inclusive range `[min, max]`.
///
/// # Errors
/// Returns [`Error::OutOfRange`] naming `param` when the value is outside the
/// range.
pub fn ensure_in_range<T>(param: &'static str, value: T, min: T, max: T) -> Result<T>
where
    T: PartialOrd + Display,
{
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            param,
            value: value.to_string(),
            message: format!("must be in [{min}, {max}]"),
        })
    }
}

/// Validate that `index` addresses an element of a list of length `len`.
///
/// # Errors
/// Returns [`Error::OutOfRange`] naming `param` when `index >= len`.
pub fn ensure_index(param: &'static str, index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::OutOfRange {
            param,
            value: index.to_string(),
            message: format!("must be a valid index into a list of length {len}"),
        })
    }
}

/// Unwrap a required collaborator that was passed as an `Option`.
///
/// # Errors
/// Returns [`Error::MissingArgument`] naming `param` when `value` is `None`.
pub fn ensure_present<T>(param: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(Error::MissingArgument { param })
}
