//! gridvec: general-dimensional Euclidean vectors
//!
//! This crate provides a vector value type of any dimension greater than one,
//! with norm and classification predicates (null, unit, collinear,
//! orthogonal), algebra (invert, add, scale, normalize, dot, angle, cross and
//! triple products) and construction from a length plus grid-bearing angles.
//!
//! ```rust
//! use gridvec::Vector;
//!
//! let a = Vector::from_values(&[1.0, 4.0, -2.0]).unwrap();
//! let b = Vector::from_values(&[-2.0, 1.0, -5.0]).unwrap();
//! let c = Vector::from_values(&[4.0, 2.0, 6.0]).unwrap();
//!
//! // Coplanar vectors span no volume
//! assert_eq!(a.triple_product(&b, &c).unwrap(), 0.0);
//! ```

pub mod cli;
pub mod errors;
pub mod operand;
pub mod vector;

// Re-export commonly used types
pub use errors::{Result, VectorError};
pub use operand::{to_typed_list, Operand};
pub use vector::{Vector, VectorLike};
