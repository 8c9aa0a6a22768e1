//! # Error reporting for operations on sparse vectors
//!
//! Precondition violations that a caller can run into through the public API. Broken internal
//! invariants are not represented here; those are bugs and panic in the invariant checks.
use std::error;
use std::fmt;

/// An `Error` is returned when the arguments of an operation don't fit the vector.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Error {
    /// A vector was requested with a negative length.
    NegativeLength {
        /// The requested length.
        len: i64,
    },
    /// An element outside of the vector was written to.
    IndexOutOfBounds {
        /// Index that was written to.
        index: usize,
        /// Length of the vector.
        len: usize,
    },
    /// Two vectors that should have the same length, don't.
    ///
    /// Vectors are never resized or truncated to make them fit.
    LengthMismatch {
        /// Length of the vector that is operated on.
        left: usize,
        /// Length of the other operand.
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NegativeLength { len } => {
                write!(f, "Vector length should be nonnegative, got {}", len)
            },
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} is out of bounds for a vector of length {}", index, len)
            },
            Error::LengthMismatch { left, right } => {
                write!(f, "Vector lengths differ: {} and {}", left, right)
            },
        }
    }
}

impl error::Error for Error {}
