use alloc::string::String;
use thiserror::Error;

/// Errors raised by the fallible [`BitField`] operations.
///
/// Only hard failures end up here. Out-of-range reads, out-of-range single-bit
/// flips and unusable ranges are reported through `Option`/`bool` instead.
///
/// [`BitField`]: crate::BitField
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitFieldError {
    /// The requested size is negative or not an integer.
    #[error("invalid bit field size: {0}")]
    InvalidArgument(String),
    /// An index or value argument is not an integer.
    #[error("wrong argument type {found} (expected Integer)")]
    Type {
        /// Name of the type that was passed in.
        found: &'static str,
    },
    /// A single-index write addressed a bit outside the field.
    #[error("BitField out of range with value {index}.")]
    IndexOutOfRange {
        /// The offending index as given by the caller.
        index: i64,
    },
    /// A range write ran out of values before the range was filled.
    #[error("Array is smaller than given range.")]
    ValuesExhausted,
    /// A variadic flip got more arguments than it accepts.
    #[error("wrong number of arguments({given} for 1 or 0)")]
    Arity {
        /// Number of arguments that were passed.
        given: usize,
    },
}
