//! Grid bearings: the angles between a vector and each coordinate axis
//!
//! For a vector `v` of length `|v|` the grid bearing along axis `k` is
//! `acos(v[k] / |v|)`, the direction-cosine angle in `[0, π]`. Going the other
//! way, a length and one bearing per axis give back coordinates
//! `length * cos(θ_k)`.

use super::Vector;
use crate::errors::{Result, VectorError};

impl Vector {
    /// Creates a vector from a length and one grid bearing per axis
    ///
    /// No check is made that the bearings are consistent direction cosines or
    /// that `length` matches them; the caller supplies consistent input.
    ///
    /// # Arguments
    ///
    /// * `length` - Length of the resulting vector
    /// * `bearings` - Angles in radians, one per axis
    ///
    /// # Errors
    ///
    /// Fails like [`Vector::new`] when fewer than two bearings are given or a
    /// resulting coordinate is not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridvec::Vector;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vector::from_grid_bearings(2.0, [0.0, FRAC_PI_2]).unwrap();
    /// assert_eq!(v.coordinate(0), Some(2.0));
    /// assert!(v.coordinate(1).unwrap().abs() < 1e-15);
    /// ```
    pub fn from_grid_bearings<I>(length: f64, bearings: I) -> Result<Vector>
    where
        I: IntoIterator<Item = f64>,
    {
        Vector::new(
            bearings
                .into_iter()
                .map(|theta| length * theta.cos())
                .collect(),
        )
    }

    /// Variadic form of [`Vector::from_grid_bearings`]
    ///
    /// The first value is the length, the remaining values are the bearings.
    pub fn from_length_and_bearings(values: &[f64]) -> Result<Vector> {
        match values.split_first() {
            Some((length, bearings)) => {
                Vector::from_grid_bearings(*length, bearings.iter().copied())
            }
            None => Err(VectorError::InvalidDimension { found: 0 }),
        }
    }

    /// Grid bearing of every axis in radians
    ///
    /// A null vector has no direction; its bearings are all `0.0`.
    pub fn grid_bearings(&self) -> Vec<f64> {
        let length = self.length();

        if length == 0.0 {
            return vec![0.0; self.size()];
        }

        self.iter().map(|c| (c / length).acos()).collect()
    }
}
