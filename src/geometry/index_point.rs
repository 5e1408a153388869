//! `IndexPoint`: an integer lattice coordinate with a fixed number of axes.
//!
//! Index points address nodes and elements of a structured grid, one
//! non-negative component per spatial axis. They are immutable values:
//! stepping along an axis returns a new point, and stepping below zero is
//! reported as `None` rather than wrapping around.

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// A lattice coordinate in a `D`-dimensional structured grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPoint<const D: usize> {
    ind: [usize; D],
}

impl<const D: usize> Default for IndexPoint<D> {
    fn default() -> Self {
        Self { ind: [0; D] }
    }
}

impl<const D: usize> IndexPoint<D> {
    /// Creates an index point from its per-axis components.
    #[inline]
    pub const fn new(ind: [usize; D]) -> Self {
        Self { ind }
    }

    /// Builds an index point by evaluating `f` on every axis index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> usize) -> Self {
        Self {
            ind: std::array::from_fn(f),
        }
    }

    /// Components as a slice, axis 0 first.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.ind
    }

    /// Product of all components; the node count of a grid with these
    /// per-axis extents.
    pub fn component_product(&self) -> usize {
        self.ind.iter().product()
    }

    /// Steps the given axis by `delta`, returning `None` if the component
    /// would leave `usize` range. Underflow at the lattice boundary is a
    /// `None`, never a wrapped huge value.
    pub fn offset(self, axis: usize, delta: isize) -> Option<Self> {
        let stepped = self.ind[axis].checked_add_signed(delta)?;
        let mut out = self;
        out.ind[axis] = stepped;
        Some(out)
    }

    /// Replaces the component on `axis` with `value`.
    pub fn with_axis(self, axis: usize, value: usize) -> Self {
        let mut out = self;
        out.ind[axis] = value;
        out
    }
}

impl<const D: usize> From<[usize; D]> for IndexPoint<D> {
    fn from(ind: [usize; D]) -> Self {
        Self { ind }
    }
}

impl<const D: usize> Index<usize> for IndexPoint<D> {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.ind[axis]
    }
}

/// Prints as `[i, j, k]`.
impl<const D: usize> fmt::Display for IndexPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.ind.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

impl<const D: usize> Serialize for IndexPoint<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ind.as_slice().serialize(serializer)
    }
}

impl<'de, const D: usize> Deserialize<'de> for IndexPoint<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let ind = Vec::<usize>::deserialize(deserializer)?;
        let len = ind.len();
        let ind: [usize; D] = ind
            .try_into()
            .map_err(|_| De::Error::custom(format!("expected {D} components, found {len}")))?;
        Ok(Self { ind })
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that the wrapper adds no overhead.
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(IndexPoint<3>, [usize; 3]);
    assert_eq_size!(IndexPoint<1>, usize);
}
