//! `Point`: a real-valued coordinate tuple with a fixed number of axes.
//!
//! Points are plain `Copy` values; arithmetic returns new values and never
//! mutates in place. The dimension is part of the type, so mixing points of
//! different dimensions is a compile error rather than a runtime check.

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

/// A position in `D`-dimensional space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<const D: usize> {
    coords: [f64; D],
}

impl<const D: usize> Point<D> {
    /// Creates a point from its per-axis coordinates.
    #[inline]
    pub const fn new(coords: [f64; D]) -> Self {
        Self { coords }
    }

    /// The origin of the coordinate system.
    #[inline]
    pub const fn zero() -> Self {
        Self { coords: [0.0; D] }
    }

    /// Builds a point by evaluating `f` on every axis index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> f64) -> Self {
        Self {
            coords: std::array::from_fn(f),
        }
    }

    /// Coordinates as a slice, axis 0 first.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Euclidean distance between two points.
    pub fn dist(a: Point<D>, b: Point<D>) -> f64 {
        Self::dist_sq(a, b).sqrt()
    }

    /// Squared Euclidean distance; avoids the square root in comparisons.
    pub fn dist_sq(a: Point<D>, b: Point<D>) -> f64 {
        (0..D).map(|i| (a.coords[i] - b.coords[i]).powi(2)).sum()
    }

    /// Dot product.
    pub fn dot(a: Point<D>, b: Point<D>) -> f64 {
        (0..D).map(|i| a.coords[i] * b.coords[i]).sum()
    }
}

impl<const D: usize> Default for Point<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self { coords }
    }
}

impl<const D: usize> Index<usize> for Point<D> {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

impl<const D: usize> Add for Point<D> {
    type Output = Point<D>;

    fn add(self, rhs: Point<D>) -> Point<D> {
        Point::from_fn(|i| self.coords[i] + rhs.coords[i])
    }
}

impl<const D: usize> Sub for Point<D> {
    type Output = Point<D>;

    fn sub(self, rhs: Point<D>) -> Point<D> {
        Point::from_fn(|i| self.coords[i] - rhs.coords[i])
    }
}

impl<const D: usize> Mul<f64> for Point<D> {
    type Output = Point<D>;

    fn mul(self, val: f64) -> Point<D> {
        Point::from_fn(|i| self.coords[i] * val)
    }
}

impl<const D: usize> Mul<Point<D>> for f64 {
    type Output = Point<D>;

    fn mul(self, p: Point<D>) -> Point<D> {
        p * self
    }
}

/// Prints as `(x, y, z)`.
impl<const D: usize> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

// Serialized as a plain coordinate sequence so points embed naturally in
// JSON/binary result files regardless of the dimension.
impl<const D: usize> Serialize for Point<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.coords.as_slice().serialize(serializer)
    }
}

impl<'de, const D: usize> Deserialize<'de> for Point<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let coords = Vec::<f64>::deserialize(deserializer)?;
        let len = coords.len();
        let coords: [f64; D] = coords
            .try_into()
            .map_err(|_| De::Error::custom(format!("expected {D} coordinates, found {len}")))?;
        Ok(Self { coords })
    }
}
