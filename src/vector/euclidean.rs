//! # Euclidean Vector Module
//!
//! This module provides [`Vector`], a vector over an ordered sequence of real
//! numbers with a dimension fixed at construction.
//!
//! ## Construction
//!
//! Every constructor funnels into the same validation:
//! - at least two coordinates are required
//! - every coordinate must be a finite `f64` (NaN and infinities are rejected)
//!
//! ## Mutating and Copy-Returning Pairs
//!
//! The algebraic operations come in pairs. The mutating form (`invert`,
//! `add`, `scale`, `normalize`) changes the receiver in place and hands back
//! `&mut Self` so calls can be chained. The copy-returning form
//! (`inverted_vector`, `added_vector`, `scaled_vector`, `normalized_vector`)
//! clones the receiver, applies the mutating form to the clone and returns it,
//! leaving the receiver untouched.
//!
//! ## Examples
//!
//! ```rust
//! use gridvec::Vector;
//!
//! let mut a = Vector::from_values(&[1.0, 0.0]).unwrap();
//! let b = Vector::from_values(&[0.0, 1.0]).unwrap();
//!
//! a.add([&b]).unwrap().scale(2.0).unwrap();
//! assert_eq!(a.coordinates(), &[2.0, 2.0]);
//! ```

use std::fmt;
use std::ops::{Index, Neg};
use std::str::FromStr;

use num_traits::ToPrimitive;

use super::VectorLike;
use crate::errors::{ensure_same_size, Result, VectorError};
use crate::operand::{to_typed_list, Operand};

/// Smallest dimension a vector may have
pub const MIN_DIMENSION: usize = 2;

/// Euclidean vector of dimension two or more
///
/// The coordinates are exclusively owned by the vector. Binary operations only
/// read their operands, which may be any [`VectorLike`] value.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coordinates: Vec<f64>,
}

/// Shared validation for every constructor
fn validate(coordinates: Vec<f64>) -> Result<Vec<f64>> {
    if coordinates.len() < MIN_DIMENSION {
        return Err(VectorError::InvalidDimension {
            found: coordinates.len(),
        });
    }

    if let Some((index, value)) = coordinates
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_finite())
    {
        return Err(VectorError::NonNumericCoordinate {
            index,
            value: value.to_string(),
        });
    }

    Ok(coordinates)
}

/// Rejects an operand holding a NaN or infinite coordinate
fn ensure_finite<V: VectorLike + ?Sized>(v: &V) -> Result<()> {
    if let Some((index, value)) = v
        .coordinates()
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_finite())
    {
        return Err(VectorError::NonNumericCoordinate {
            index,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Cross product of two 3-dimensional operands
pub(crate) fn cross_coordinates<A, B>(a: &A, b: &B) -> Result<[f64; 3]>
where
    A: VectorLike + ?Sized,
    B: VectorLike + ?Sized,
{
    if a.size() != 3 || b.size() != 3 {
        return Err(VectorError::UnsupportedDimension {
            left: a.size(),
            right: b.size(),
        });
    }

    ensure_finite(a)?;
    ensure_finite(b)?;

    let a = a.coordinates();
    let b = b.coordinates();

    Ok([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

impl Vector {
    /// Creates a vector from owned coordinates
    ///
    /// # Errors
    ///
    /// * `InvalidDimension` - fewer than two coordinates
    /// * `NonNumericCoordinate` - a coordinate is NaN or infinite
    pub fn new(coordinates: Vec<f64>) -> Result<Self> {
        Ok(Vector {
            coordinates: validate(coordinates)?,
        })
    }

    /// Creates a vector from any ordered sequence of numbers
    ///
    /// Elements only need to be convertible to `f64`, so integer sequences
    /// work as well. The number of elements is checked before their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridvec::Vector;
    ///
    /// let v = Vector::from_sequence([1, 2, 3]).unwrap();
    /// assert_eq!(v.coordinates(), &[1.0, 2.0, 3.0]);
    ///
    /// assert!(Vector::from_sequence([1]).is_err());
    /// ```
    pub fn from_sequence<I, T>(sequence: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: ToPrimitive + fmt::Debug,
    {
        let items: Vec<T> = sequence.into_iter().collect();

        if items.len() < MIN_DIMENSION {
            return Err(VectorError::InvalidDimension { found: items.len() });
        }

        let coordinates = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.to_f64()
                    .ok_or_else(|| VectorError::NonNumericCoordinate {
                        index,
                        value: format!("{:?}", item),
                    })
            })
            .collect::<Result<Vec<f64>>>()?;

        Self::new(coordinates)
    }

    /// Creates a vector from a list of values
    ///
    /// ```rust
    /// use gridvec::Vector;
    ///
    /// let v = Vector::from_values(&[4.0, -2.0, 5.0]).unwrap();
    /// assert_eq!(v.size(), 3);
    /// ```
    pub fn from_values(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    /// Creates a vector from labelled values
    ///
    /// Labels are discarded; coordinates keep the iteration order of the pairs.
    ///
    /// ```rust
    /// use gridvec::Vector;
    ///
    /// let v = Vector::from_keyed([("x", 1.0), ("y", 2.0), ("z", 3.0)]).unwrap();
    /// assert_eq!(v.coordinates(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_keyed<K, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        Self::new(pairs.into_iter().map(|(_, value)| value).collect())
    }

    /// Coordinate along the given axis, `None` when the axis does not exist
    pub fn coordinate(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    /// Immutable view of all coordinates
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Number of dimensions
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    /// Iterator over the coordinates in axis order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.coordinates.iter()
    }

    /// Consumes the vector and returns its coordinates
    pub fn into_coordinates(self) -> Vec<f64> {
        self.coordinates
    }

    /// Euclidean length
    ///
    /// `sqrt(c₀² + c₁² + ... + cₙ²)`, accumulated before a single square root.
    ///
    /// The squares are not rescaled, so very large coordinates such as
    /// `(1e200, 1e200)` overflow to an infinite length. Such a vector
    /// normalizes to a null vector and has a grid bearing of `π/2` on every
    /// axis.
    pub fn length(&self) -> f64 {
        super::euclidean_norm(&self.coordinates)
    }

    /// Whether the length is exactly `0.0`
    ///
    /// This is an exact comparison, not a tolerance check.
    pub fn is_null_vector(&self) -> bool {
        self.length() == 0.0
    }

    /// Whether the length is exactly `1.0`
    ///
    /// This is an exact comparison: a normalized vector whose length rounds to
    /// `0.9999999999999999` is not a unit vector.
    pub fn is_unit_vector(&self) -> bool {
        self.length() == 1.0
    }

    /// Tests whether `other` is a scalar multiple of this vector
    ///
    /// For every axis where this vector's coordinate is non-zero the ratio
    /// `other[i] / self[i]` is computed; the vectors are collinear when all
    /// computed ratios are exactly equal. Axes with a zero coordinate in this
    /// vector are skipped and add no constraint, even when `other` is non-zero
    /// there. When no ratio can be computed the result is `true`.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - the vectors have different sizes
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridvec::Vector;
    ///
    /// let a = Vector::from_values(&[1.0, 1.0]).unwrap();
    /// let b = Vector::from_values(&[-1.0, -1.0]).unwrap();
    /// assert!(a.is_collinear(&b).unwrap());
    /// assert!(b.is_collinear(&a).unwrap());
    /// ```
    pub fn is_collinear<V: VectorLike + ?Sized>(&self, other: &V) -> Result<bool> {
        ensure_same_size(self.size(), other.size())?;

        let mut scalar: Option<f64> = None;

        for (axis, (a, b)) in self.coordinates.iter().zip(other.coordinates()).enumerate() {
            if *a == 0.0 {
                log::trace!("Collinearity: skipping axis {} with zero divisor", axis);
                continue;
            }

            let ratio = b / a;
            match scalar {
                None => scalar = Some(ratio),
                Some(s) if s != ratio => return Ok(false),
                Some(_) => {}
            }
        }

        Ok(true)
    }

    /// Negates every coordinate in place
    pub fn invert(&mut self) -> &mut Self {
        for c in &mut self.coordinates {
            *c = -*c;
        }
        self
    }

    /// Returns a negated copy
    pub fn inverted_vector(&self) -> Vector {
        let mut v = self.clone();
        v.invert();
        v
    }

    /// Adds one or more vectors component-wise, left to right
    ///
    /// All operands are checked before the first coordinate changes, so a
    /// failed call leaves the receiver as it was.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - an operand's size differs from the receiver's
    /// * `NonNumericCoordinate` - an operand holds a NaN or infinite coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridvec::Vector;
    ///
    /// let mut a = Vector::from_values(&[1.0, 0.0]).unwrap();
    /// let b = Vector::from_values(&[0.0, 1.0]).unwrap();
    /// let c = Vector::from_values(&[1.0, 1.0]).unwrap();
    ///
    /// a.add([&b, &c]).unwrap();
    /// assert_eq!(a.coordinates(), &[2.0, 2.0]);
    /// ```
    pub fn add<'a, I, V>(&mut self, vectors: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'a V>,
        V: VectorLike + ?Sized + 'a,
    {
        let vectors: Vec<&V> = vectors.into_iter().collect();

        for v in &vectors {
            ensure_same_size(self.size(), v.size())?;
            ensure_finite(*v)?;
        }

        for v in vectors {
            for (c, d) in self.coordinates.iter_mut().zip(v.coordinates()) {
                *c += d;
            }
        }

        Ok(self)
    }

    /// Returns the sum of this vector and the given vectors
    pub fn added_vector<'a, I, V>(&self, vectors: I) -> Result<Vector>
    where
        I: IntoIterator<Item = &'a V>,
        V: VectorLike + ?Sized + 'a,
    {
        let mut v = self.clone();
        v.add(vectors)?;
        Ok(v)
    }

    /// Adds a heterogeneous list of operands
    ///
    /// Every operand must hold a vector.
    ///
    /// # Errors
    ///
    /// * `InvalidOperand` - an operand is a scalar or text
    /// * `DimensionMismatch` - an operand's size differs from the receiver's
    pub fn add_operands(&mut self, operands: &[Operand]) -> Result<&mut Self> {
        let vectors = to_typed_list::<Vector, _>(operands)?;
        self.add(vectors)
    }

    /// Copy-returning form of [`Vector::add_operands`]
    pub fn added_operands_vector(&self, operands: &[Operand]) -> Result<Vector> {
        let mut v = self.clone();
        v.add_operands(operands)?;
        Ok(v)
    }

    /// Multiplies every coordinate by `scalar`
    ///
    /// # Errors
    ///
    /// * `InvalidScalar` - `scalar` is NaN or infinite
    pub fn scale(&mut self, scalar: f64) -> Result<&mut Self> {
        if !scalar.is_finite() {
            return Err(VectorError::InvalidScalar(scalar.to_string()));
        }

        for c in &mut self.coordinates {
            *c *= scalar;
        }

        Ok(self)
    }

    /// Returns a scaled copy
    pub fn scaled_vector(&self, scalar: f64) -> Result<Vector> {
        let mut v = self.clone();
        v.scale(scalar)?;
        Ok(v)
    }

    /// Divides every coordinate by the length
    ///
    /// A null vector is left unchanged. The resulting length is one only up to
    /// floating point rounding.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();

        if length == 0.0 {
            log::debug!("Normalize: leaving null vector {} unchanged", self);
            return self;
        }

        for c in &mut self.coordinates {
            *c /= length;
        }

        self
    }

    /// Returns a normalized copy
    pub fn normalized_vector(&self) -> Vector {
        let mut v = self.clone();
        v.normalize();
        v
    }

    /// Sum of pairwise coordinate products
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - the vectors have different sizes
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridvec::Vector;
    ///
    /// let a = Vector::from_values(&[1.0, 2.0, -3.0]).unwrap();
    /// let b = Vector::from_values(&[5.0, -1.0, -5.0]).unwrap();
    /// assert_eq!(a.dot_product(&b).unwrap(), 18.0);
    /// ```
    pub fn dot_product<V: VectorLike + ?Sized>(&self, v: &V) -> Result<f64> {
        ensure_same_size(self.size(), v.size())?;

        Ok(self
            .coordinates
            .iter()
            .zip(v.coordinates())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Angle between two vectors in radians, `acos(a·b / (|a| |b|))`
    ///
    /// Zero-length operands are not special-cased: the division yields NaN or
    /// an infinity and `acos` returns NaN, exactly as IEEE arithmetic does.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - the vectors have different sizes
    pub fn angle<V: VectorLike + ?Sized>(&self, v: &V) -> Result<f64> {
        let dot = self.dot_product(v)?;
        let lengths = self.length() * v.length();

        if lengths == 0.0 {
            log::debug!("Angle: null vector operand, result is not a number");
        }

        Ok((dot / lengths).acos())
    }

    /// Whether the dot product is exactly `0.0`
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - the vectors have different sizes
    pub fn is_orthogonal<V: VectorLike + ?Sized>(&self, v: &V) -> Result<bool> {
        Ok(self.dot_product(v)? == 0.0)
    }

    /// Cross product in 3-dimensional space
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// a × b = (a₁b₂ - a₂b₁, a₂b₀ - a₀b₂, a₀b₁ - a₁b₀)
    /// ```
    ///
    /// # Errors
    ///
    /// * `UnsupportedDimension` - either vector is not 3-dimensional
    /// * `NonNumericCoordinate` - an operand holds a NaN or infinite coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridvec::Vector;
    ///
    /// let a = Vector::from_values(&[1.0, 4.0, 0.0]).unwrap();
    /// let b = Vector::from_values(&[-2.0, 5.0, 3.0]).unwrap();
    /// let c = a.cross_product(&b).unwrap();
    /// assert_eq!(c.coordinates(), &[12.0, -3.0, 13.0]);
    /// ```
    pub fn cross_product<V: VectorLike + ?Sized>(&self, v: &V) -> Result<Vector> {
        let coordinates = cross_coordinates(self, v)?;

        Ok(Vector {
            coordinates: coordinates.to_vec(),
        })
    }

    /// Scalar triple product `self · (b × c)`
    ///
    /// The signed volume of the parallelepiped spanned by the three vectors.
    ///
    /// # Errors
    ///
    /// * `UnsupportedDimension` - `b` or `c` is not 3-dimensional
    /// * `DimensionMismatch` - this vector is not 3-dimensional
    pub fn triple_product<B, C>(&self, b: &B, c: &C) -> Result<f64>
    where
        B: VectorLike + ?Sized,
        C: VectorLike + ?Sized,
    {
        let bc = Vector {
            coordinates: cross_coordinates(b, c)?.to_vec(),
        };
        self.dot_product(&bc)
    }
}

impl VectorLike for Vector {
    fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    fn length(&self) -> f64 {
        Vector::length(self)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Vector::new(coordinates)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Vector::from_values(coordinates)
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.coordinates
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coordinates[index]
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(mut self) -> Vector {
        self.invert();
        self
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.inverted_vector()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// Strips one pair of surrounding `()` or `[]`
fn strip_delimiters(s: &str) -> &str {
    s.strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .or_else(|| s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')))
        .unwrap_or(s)
}

/// Parses comma-separated coordinates such as `1, 2, 3` or `(1, 2, 3)`
impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = strip_delimiters(s.trim()).trim();

        let tokens: Vec<&str> = if inner.is_empty() {
            Vec::new()
        } else {
            inner.split(',').map(str::trim).collect()
        };

        if tokens.len() < MIN_DIMENSION {
            return Err(VectorError::InvalidDimension {
                found: tokens.len(),
            });
        }

        let coordinates = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                token
                    .parse::<f64>()
                    .map_err(|_| VectorError::NonNumericCoordinate {
                        index,
                        value: token.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>>>()?;

        Vector::new(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn v(coordinates: &[f64]) -> Vector {
        Vector::from_values(coordinates).unwrap()
    }

    #[test]
    fn test_construction_keeps_order() {
        let a = v(&[1.0, 2.0]);
        assert_eq!(a.coordinates(), &[1.0, 2.0]);
        assert_eq!(a.coordinate(0), Some(1.0));
        assert_eq!(a.coordinate(1), Some(2.0));

        let b = Vector::from_sequence(vec![1, 2, 3]).unwrap();
        assert_eq!(b.coordinates(), &[1.0, 2.0, 3.0]);
        assert_eq!(b.coordinate(2), Some(3.0));
        assert_eq!(b.coordinate(3), None);
    }

    #[test]
    fn test_keyed_construction_drops_keys() {
        let a = Vector::from_keyed(vec![("x", 1.0), ("y", 2.0), ("z", 3.0)]).unwrap();
        assert_eq!(a.coordinates(), &[1.0, 2.0, 3.0]);

        let b = Vector::from_keyed(vec![("z", 3.0), ("a", 1.0)]).unwrap();
        assert_eq!(b.coordinates(), &[3.0, 1.0]);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1.0])]
    fn test_invalid_dimension(#[case] coordinates: Vec<f64>) {
        let found = coordinates.len();
        assert_eq!(
            Vector::new(coordinates),
            Err(VectorError::InvalidDimension { found })
        );
    }

    #[test]
    fn test_single_non_numeric_is_dimension_error() {
        assert_eq!(
            Vector::from_values(&[f64::NAN]),
            Err(VectorError::InvalidDimension { found: 1 })
        );
    }

    #[rstest]
    #[case(vec![f64::NAN, 1.0], 0)]
    #[case(vec![1.0, f64::INFINITY], 1)]
    #[case(vec![1.0, 2.0, f64::NEG_INFINITY], 2)]
    fn test_non_numeric_coordinate(#[case] coordinates: Vec<f64>, #[case] expected: usize) {
        match Vector::new(coordinates) {
            Err(VectorError::NonNumericCoordinate { index, .. }) => assert_eq!(index, expected),
            other => panic!("expected NonNumericCoordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_coordinates_view_is_read_only_copy() {
        let a = v(&[1.0, 2.0]);
        let mut copy = a.coordinates().to_vec();
        copy[0] = 99.0;
        assert_eq!(a.coordinates(), &[1.0, 2.0]);
    }

    #[test]
    fn test_collinear_skips_zero_divisor() {
        // The zero axis of the receiver adds no constraint
        let a = v(&[1.0, 0.0]);
        let b = v(&[2.0, 5.0]);
        assert!(a.is_collinear(&b).unwrap());
        assert!(!b.is_collinear(&a).unwrap());

        // No ratio can be computed from a null receiver
        let zero = v(&[0.0, 0.0]);
        assert!(zero.is_collinear(&b).unwrap());
    }

    #[test]
    fn test_collinear_dimension_mismatch() {
        let a = v(&[1.0, 1.0]);
        let b = v(&[1.0, 1.0, 1.0]);
        assert_eq!(
            a.is_collinear(&b),
            Err(VectorError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_invert_pair_agrees() {
        let mut a = v(&[1.0, 2.0, 3.0]);
        let copy = a.inverted_vector();
        assert_eq!(a.coordinates(), &[1.0, 2.0, 3.0]);

        a.invert();
        assert_eq!(a, copy);
        assert_eq!(a, v(&[-1.0, -2.0, -3.0]));
        assert_eq!(-&copy, v(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_add_is_all_or_nothing() {
        let mut a = v(&[1.0, 1.0]);
        let b = v(&[1.0, 1.0]);
        let c = v(&[1.0, 1.0, 1.0]);

        let result = a.add([&b, &c]);
        assert_eq!(
            result.err(),
            Some(VectorError::DimensionMismatch { left: 2, right: 3 })
        );
        assert_eq!(a.coordinates(), &[1.0, 1.0]);
    }

    #[test]
    fn test_add_mixed_operands() {
        let mut a = v(&[1.0, 0.0]);
        let b = v(&[0.0, 1.0]);
        let c = nalgebra::Vector2::new(1.0, 1.0);

        let operands: [&dyn VectorLike; 2] = [&b, &c];
        a.add(operands).unwrap();
        assert_eq!(a.coordinates(), &[2.0, 2.0]);
    }

    #[test]
    fn test_add_rejects_non_finite_operand() {
        let mut a = v(&[1.0, 1.0]);
        let bad = nalgebra::DVector::from_vec(vec![f64::NAN, f64::INFINITY]);

        assert!(matches!(
            a.add([&bad]),
            Err(VectorError::NonNumericCoordinate { index: 0, .. })
        ));
        assert_eq!(a.coordinates(), &[1.0, 1.0]);

        let good = v(&[1.0, 1.0]);
        let operands: [&dyn VectorLike; 2] = [&good, &bad];
        assert!(a.added_vector(operands).is_err());
        assert_eq!(a.coordinates(), &[1.0, 1.0]);
    }

    #[test]
    fn test_cross_product_rejects_non_finite_operand() {
        let x = v(&[1.0, 0.0, 0.0]);
        let bad = nalgebra::Vector3::new(f64::NAN, 1.0, 0.0);

        assert!(matches!(
            x.cross_product(&bad),
            Err(VectorError::NonNumericCoordinate { index: 0, .. })
        ));
        assert!(matches!(
            x.triple_product(&x, &bad),
            Err(VectorError::NonNumericCoordinate { .. })
        ));
    }

    #[test]
    fn test_length_overflows_for_huge_coordinates() {
        let mut huge = v(&[1e200, 1e200]);
        assert!(huge.length().is_infinite());
        assert!(!huge.is_null_vector());

        huge.normalize();
        assert!(huge.is_null_vector());
    }

    #[test]
    fn test_add_operands_rejects_scalar() {
        let mut a = v(&[1.0, 1.0]);
        let operands = vec![Operand::Vector(v(&[1.0, 1.0])), Operand::Scalar(2.0)];

        match a.add_operands(&operands) {
            Err(VectorError::InvalidOperand { position, .. }) => assert_eq!(position, 1),
            other => panic!("expected InvalidOperand, got {:?}", other),
        }
        assert_eq!(a.coordinates(), &[1.0, 1.0]);

        let sum = a.added_operands_vector(&operands[..1]).unwrap();
        assert_eq!(sum.coordinates(), &[2.0, 2.0]);
        assert_eq!(a.coordinates(), &[1.0, 1.0]);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_scale_rejects_non_finite(#[case] scalar: f64) {
        let mut a = v(&[1.0, 1.0]);
        assert!(matches!(a.scale(scalar), Err(VectorError::InvalidScalar(_))));
        assert_eq!(a.coordinates(), &[1.0, 1.0]);
    }

    #[test]
    fn test_scaled_vector_leaves_receiver() {
        let a = v(&[1.0, 1.0]);
        let b = a.scaled_vector(0.5).unwrap();
        assert_eq!(b, v(&[0.5, 0.5]));
        assert_eq!(a, v(&[1.0, 1.0]));
    }

    #[test]
    fn test_normalize_null_vector_is_noop() {
        let mut zero = v(&[0.0, 0.0, 0.0]);
        zero.normalize();
        assert!(zero.is_null_vector());
        assert_eq!(zero.coordinates(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalized_vector() {
        let a = v(&[3.0, 4.0]);
        let n = a.normalized_vector();
        assert_eq!(n.coordinates(), &[0.6, 0.8]);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-15);
        assert_eq!(a.coordinates(), &[3.0, 4.0]);
    }

    #[test]
    fn test_angle_against_null_vector_is_nan() {
        let a = v(&[1.0, 0.0]);
        let zero = v(&[0.0, 0.0]);
        assert!(a.angle(&zero).unwrap().is_nan());
    }

    #[test]
    fn test_angle_between_axes() {
        let x = v(&[1.0, 0.0, 0.0]);
        let y = v(&[0.0, 1.0, 0.0]);
        assert_relative_eq!(x.angle(&y).unwrap(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(x.angle(&x).unwrap(), 0.0);
    }

    #[test]
    fn test_dot_product_dimension_mismatch() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            a.dot_product(&b),
            Err(VectorError::DimensionMismatch { .. })
        ));
        assert!(a.is_orthogonal(&b).is_err());
        assert!(a.angle(&b).is_err());
    }

    #[test]
    fn test_cross_product_right_hand_rule() {
        let x = v(&[1.0, 0.0, 0.0]);
        let y = v(&[0.0, 1.0, 0.0]);
        assert_eq!(x.cross_product(&y).unwrap(), v(&[0.0, 0.0, 1.0]));
        assert_eq!(y.cross_product(&x).unwrap(), v(&[0.0, 0.0, -1.0]));
    }

    #[test]
    fn test_cross_product_mixed_sizes() {
        let a = v(&[1.0, 0.0, 0.0]);
        let b = v(&[0.0, 1.0]);
        assert_eq!(
            a.cross_product(&b),
            Err(VectorError::UnsupportedDimension { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_triple_product_error_order() {
        let a = v(&[1.0, 0.0]);
        let b = v(&[0.0, 1.0, 0.0]);
        let c = v(&[0.0, 0.0, 1.0]);
        assert_eq!(
            a.triple_product(&b, &c),
            Err(VectorError::DimensionMismatch { left: 2, right: 3 })
        );

        let d = v(&[1.0, 0.0, 0.0]);
        assert_eq!(d.triple_product(&b, &c).unwrap(), 1.0);
        assert!(matches!(
            d.triple_product(&a, &c),
            Err(VectorError::UnsupportedDimension { .. })
        ));
    }

    #[rstest]
    #[case("1, 2, 3", &[1.0, 2.0, 3.0])]
    #[case("(4,-2,5)", &[4.0, -2.0, 5.0])]
    #[case("[0.5, 0.5]", &[0.5, 0.5])]
    fn test_parse(#[case] text: &str, #[case] expected: &[f64]) {
        let parsed: Vector = text.parse().unwrap();
        assert_eq!(parsed.coordinates(), expected);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<Vector>(),
            Err(VectorError::InvalidDimension { found: 0 })
        );
        assert_eq!(
            "1".parse::<Vector>(),
            Err(VectorError::InvalidDimension { found: 1 })
        );
        assert_eq!(
            "1, foo".parse::<Vector>(),
            Err(VectorError::NonNumericCoordinate {
                index: 1,
                value: "foo".to_string()
            })
        );
        assert!(matches!(
            "1, NaN".parse::<Vector>(),
            Err(VectorError::NonNumericCoordinate { index: 1, .. })
        ));
    }

    #[test]
    fn test_display_parses_back() {
        let a = v(&[1.0, -2.5, 3.0]);
        assert_eq!(a.to_string(), "(1, -2.5, 3)");
        assert_eq!(a.to_string().parse::<Vector>().unwrap(), a);
    }

    #[test]
    fn test_indexing_and_iteration() {
        let a = v(&[1.0, 2.0, 3.0]);
        assert_eq!(a[1], 2.0);
        assert_eq!(a.iter().sum::<f64>(), 6.0);
        assert_eq!((&a).into_iter().count(), 3);
        assert_eq!(a.as_ref(), &[1.0, 2.0, 3.0]);
        assert_eq!(a.into_coordinates(), vec![1.0, 2.0, 3.0]);
    }
}
