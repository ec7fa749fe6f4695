//! Plain data shapes.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ObjectError;
use crate::json::{Construct, arg_f64, check_arity};

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Write whole numbers without a fractional part (`10`, not `10.0`).
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// An axis-aligned rectangle.
///
/// Fields are public and may be changed at any time; [`Rectangle::area`]
/// always reads the current values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    /// Horizontal extent.
    #[serde(serialize_with = "js_number")]
    pub width: f64,
    /// Vertical extent.
    #[serde(serialize_with = "js_number")]
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Factory for [`Rectangle`].
///
/// ```
/// let mut r = selkit_objects::make(10.0, 20.0);
/// assert_eq!(r.area(), 200.0);
/// r.width = 5.0;
/// assert_eq!(r.area(), 100.0);
/// ```
#[must_use]
pub const fn make(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

/// Values are taken as `(width, height)` in document order, whatever
/// their keys are called.
impl Construct for Rectangle {
    const ARITY: usize = 2;

    fn construct(args: &[Value]) -> Result<Self, ObjectError> {
        check_arity::<Self>(args)?;
        Ok(Self::new(arg_f64(args, 0)?, arg_f64(args, 1)?))
    }
}

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    /// Distance from the centre to the edge.
    #[serde(serialize_with = "js_number")]
    pub radius: f64,
}

impl Circle {
    /// Create a circle.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// `π * radius²`.
    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Construct for Circle {
    const ARITY: usize = 1;

    fn construct(args: &[Value]) -> Result<Self, ObjectError> {
        check_arity::<Self>(args)?;
        Ok(Self::new(arg_f64(args, 0)?))
    }
}
