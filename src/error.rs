//! `GridBoxError`: unified error type for gridbox public APIs
//!
//! Every fallible operation in the crate reports through this enum so
//! downstream simulation codes can match on failure kinds instead of
//! parsing panic messages.

use thiserror::Error;

/// Unified error type for gridbox operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridBoxError {
    /// Degenerate or malformed grid description (zero-length axis,
    /// non-positive spacing, unsupported dimension).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Axis index is not a valid axis of the mesh dimension.
    #[error("axis {axis} out of range for dimension {dim}")]
    AxisOutOfRange { axis: usize, dim: usize },
    /// A lattice coordinate lies outside the per-axis extent.
    #[error("coordinate {coord} on axis {axis} outside extent {extent}")]
    CoordOutOfRange {
        axis: usize,
        coord: usize,
        extent: usize,
    },
    /// A linear (serialized) index lies outside the array it addresses.
    #[error("linear index {index} outside array of length {len}")]
    LinearIndexOutOfRange { index: usize, len: usize },
    /// Neighbor lookup would step across the lattice boundary.
    #[error("no neighbor across the boundary of axis {axis} from index {index}")]
    NeighborOutOfRange { index: usize, axis: usize },
    /// A spatial query point lies outside the mesh bounding box.
    #[error("query coordinate on axis {axis} outside the mesh bounding box")]
    QueryOutOfBounds { axis: usize },
    /// A data field does not match the entity count it is attached to.
    #[error("data field `{name}` has length {found}, expected {expected}")]
    DataLengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    /// Mesh file could not be parsed.
    #[error("mesh I/O parse error: {0}")]
    MeshIoParse(String),
    /// Underlying I/O failure, flattened to its message.
    #[error("I/O error: {0}")]
    Io(String),
    /// Internal index structures disagree with each other.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl From<std::io::Error> for GridBoxError {
    fn from(err: std::io::Error) -> Self {
        GridBoxError::Io(err.to_string())
    }
}
