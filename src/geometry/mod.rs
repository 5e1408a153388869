//! Geometric value types for gridbox.
//!
//! This module provides the coordinate tuples the mesh types are built on:
//! [`Point`] for real-valued positions and [`IndexPoint`] for integer lattice
//! coordinates.

pub mod index_point;
pub mod point;

pub use index_point::IndexPoint;
pub use point::Point;
