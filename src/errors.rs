//! Error types for vector construction and vector algebra
//!
//! Every failure is reported synchronously to the caller. Operations validate
//! all of their inputs before touching the receiver, so an `Err` never leaves
//! a vector half-modified.

use thiserror::Error;

/// Main error type for gridvec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Fewer than two coordinates were supplied
    #[error("A vector needs at least 2 dimensions, got {found}")]
    InvalidDimension {
        /// The number of coordinates that was supplied
        found: usize,
    },

    /// A coordinate is not a finite real number
    #[error("A vector can only comprise finite numbers: coordinate {index} is {value:?}")]
    NonNumericCoordinate {
        /// Position of the offending coordinate
        index: usize,
        /// The offending value, as text
        value: String,
    },

    /// Two operands have a different number of dimensions
    #[error("The vectors need to have the same size: {left} != {right}")]
    DimensionMismatch {
        /// Size of the receiver
        left: usize,
        /// Size of the operand
        right: usize,
    },

    /// An argument of a vector-combining operation is not a vector
    #[error("Operand {position} is not a vector: {found}")]
    InvalidOperand {
        /// Position of the offending argument
        position: usize,
        /// What was supplied instead
        found: String,
    },

    /// A scale factor is not a finite real number
    #[error("The scalar value needs to be a finite number: {0}")]
    InvalidScalar(String),

    /// Cross product attempted outside of 3-dimensional space
    #[error("The cross product can only be calculated in 3-dimensional space, got {left} and {right}")]
    UnsupportedDimension {
        /// Size of the receiver
        left: usize,
        /// Size of the operand
        right: usize,
    },
}

/// Extension of the Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Helper to build a `DimensionMismatch` when two sizes differ
pub(crate) fn ensure_same_size(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(VectorError::DimensionMismatch { left, right });
    }
    Ok(())
}
