//! Conversions between [`Vector`] and nalgebra vectors
//!
//! nalgebra's fixed-size `SVector` and dynamic `DVector` both implement
//! [`VectorLike`], so they can be passed directly as operands:
//!
//! ```rust
//! use gridvec::Vector;
//! use nalgebra::Vector3;
//!
//! let a = Vector::from_values(&[1.0, 4.0, 0.0]).unwrap();
//! let b = Vector3::new(-2.0, 5.0, 3.0);
//! assert_eq!(a.cross_product(&b).unwrap().coordinates(), &[12.0, -3.0, 13.0]);
//! ```

use nalgebra::{DVector, SVector, Vector3};

use super::{Vector, VectorLike};
use crate::errors::{ensure_same_size, Result, VectorError};

impl VectorLike for DVector<f64> {
    fn coordinates(&self) -> &[f64] {
        self.as_slice()
    }
}

impl<const D: usize> VectorLike for SVector<f64, D> {
    fn coordinates(&self) -> &[f64] {
        self.as_slice()
    }
}

impl Vector {
    /// Copies the coordinates into a nalgebra `DVector`
    pub fn to_dvector(&self) -> DVector<f64> {
        DVector::from_column_slice(self.coordinates())
    }
}

impl TryFrom<DVector<f64>> for Vector {
    type Error = VectorError;

    fn try_from(vec: DVector<f64>) -> Result<Self> {
        Vector::from_values(vec.as_slice())
    }
}

impl<const D: usize> TryFrom<SVector<f64, D>> for Vector {
    type Error = VectorError;

    fn try_from(vec: SVector<f64, D>) -> Result<Self> {
        Vector::from_values(vec.as_slice())
    }
}

impl TryFrom<&Vector> for Vector3<f64> {
    type Error = VectorError;

    fn try_from(v: &Vector) -> Result<Self> {
        ensure_same_size(v.size(), 3)?;
        Ok(Vector3::from_column_slice(v.coordinates()))
    }
}
