//! # Vector Module
//!
//! This module provides [`Vector`], a Euclidean vector of any dimension
//! greater than one, together with [`VectorLike`], the read-only capability
//! set every operand of a vector operation has to expose.
//!
//! ## Exact Comparisons
//!
//! The predicates `is_null_vector`, `is_unit_vector` and `is_orthogonal`
//! compare against `0.0` and `1.0` with exact floating point equality. A
//! vector that is only approximately unit length is not a unit vector.
//!
//! ## Examples
//!
//! ```rust
//! use gridvec::{Vector, VectorLike};
//!
//! let v = Vector::from_values(&[1.0, 0.0, 0.0]).unwrap();
//! assert!(v.is_unit_vector());
//! assert_eq!(v.size(), 3);
//! ```

mod bearing;
pub mod euclidean;
pub mod interop;

pub use euclidean::Vector;

/// Euclidean norm of a coordinate slice
///
/// Squares are accumulated first and a single square root is taken at the end.
/// Without rescaling, coordinates beyond about `1e154` overflow to infinity.
pub fn euclidean_norm(coordinates: &[f64]) -> f64 {
    coordinates.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// Read-only capabilities of a vector-like value
///
/// Anything that can expose its coordinates as a contiguous slice can be
/// passed as an operand to the binary operations of [`Vector`]. The trait is
/// object safe, so heterogeneous operands can be mixed as `&dyn VectorLike`.
pub trait VectorLike {
    /// Ordered coordinates, one per axis
    fn coordinates(&self) -> &[f64];

    /// Number of dimensions
    fn size(&self) -> usize {
        self.coordinates().len()
    }

    /// Coordinate along the given axis, `None` when the axis does not exist
    fn coordinate(&self, index: usize) -> Option<f64> {
        self.coordinates().get(index).copied()
    }

    /// Euclidean length
    fn length(&self) -> f64 {
        euclidean_norm(self.coordinates())
    }

    /// Whether the length is exactly zero
    fn is_null_vector(&self) -> bool {
        self.length() == 0.0
    }

    /// Whether the length is exactly one
    fn is_unit_vector(&self) -> bool {
        self.length() == 1.0
    }
}
