//! Heterogeneous operands and capability-checked conversion
//!
//! Arguments that arrive untyped, for example from the command line, are
//! modelled as [`Operand`]s. [`to_typed_list`] turns a slice of such arguments
//! into references of the type an operation needs, failing at the first
//! argument that lacks the required capability.
//!
//! ```rust
//! use gridvec::operand::{to_typed_list, Operand};
//! use gridvec::{Vector, VectorError};
//!
//! let args: Vec<Operand> = vec!["1,0".parse().unwrap(), "2".parse().unwrap()];
//! let result = to_typed_list::<Vector, _>(&args);
//! assert!(matches!(result, Err(VectorError::InvalidOperand { position: 1, .. })));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, VectorError};
use crate::vector::{Vector, VectorLike};

/// An untyped argument of a vector operation
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A validated vector
    Vector(Vector),
    /// A single number
    Scalar(f64),
    /// Anything else
    Text(String),
}

impl Operand {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "vector",
            Operand::Scalar(_) => "scalar",
            Operand::Text(_) => "text",
        }
    }

    /// Interprets the operand as a scale factor
    ///
    /// # Errors
    ///
    /// * `InvalidScalar` - the operand is a vector, text, or a non-finite number
    pub fn as_scalar(&self) -> Result<f64> {
        match self {
            Operand::Scalar(s) if s.is_finite() => Ok(*s),
            other => Err(VectorError::InvalidScalar(other.to_string())),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Vector(v) => write!(f, "{}", v),
            Operand::Scalar(s) => write!(f, "{}", s),
            Operand::Text(t) => write!(f, "{}", t),
        }
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

/// Parses an operand from text
///
/// - a number becomes a [`Operand::Scalar`]
/// - text with a comma, or wrapped in `()` or `[]`, is parsed as a vector and
///   its parse errors are returned
/// - anything else is kept as [`Operand::Text`]
impl FromStr for Operand {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if let Ok(scalar) = trimmed.parse::<f64>() {
            return Ok(Operand::Scalar(scalar));
        }

        let delimited = (trimmed.starts_with('(') && trimmed.ends_with(')'))
            || (trimmed.starts_with('[') && trimmed.ends_with(']'));

        if delimited || trimmed.contains(',') {
            return trimmed.parse::<Vector>().map(Operand::Vector);
        }

        Ok(Operand::Text(trimmed.to_string()))
    }
}

/// Capability of an argument to provide a `T`
pub trait Extract<T: ?Sized> {
    /// Borrows the `T` inside the argument, `None` when there is none
    fn extract(&self) -> Option<&T>;

    /// Describes the argument for error messages
    fn describe(&self) -> String;
}

impl Extract<Vector> for Operand {
    fn extract(&self) -> Option<&Vector> {
        match self {
            Operand::Vector(v) => Some(v),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        format!("{} {}", self.kind(), self)
    }
}

impl Extract<dyn VectorLike> for Operand {
    fn extract(&self) -> Option<&(dyn VectorLike + 'static)> {
        match self {
            Operand::Vector(v) => Some(v as &dyn VectorLike),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        format!("{} {}", self.kind(), self)
    }
}

impl<T> Extract<T> for T {
    fn extract(&self) -> Option<&T> {
        Some(self)
    }

    fn describe(&self) -> String {
        String::from("value")
    }
}

/// Converts a list of arguments into references of the required type
///
/// # Errors
///
/// * `InvalidOperand` - at the first argument that cannot provide a `T`
pub fn to_typed_list<'a, T, A>(args: &'a [A]) -> Result<Vec<&'a T>>
where
    T: ?Sized,
    A: Extract<T>,
{
    args.iter()
        .enumerate()
        .map(|(position, arg)| {
            arg.extract().ok_or_else(|| {
                log::debug!("Rejecting operand {}: {}", position, arg.describe());
                VectorError::InvalidOperand {
                    position,
                    found: arg.describe(),
                }
            })
        })
        .collect()
}
