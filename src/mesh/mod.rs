//! Mesh representations: axis-aligned regular grids and unstructured meshes.
//!
//! Both mesh kinds share the same element representation — an ordered
//! corner-index list plus a [`CellType`] tag — so writers and classification
//! code can consume either without conversion.

pub mod cell_type;
pub mod classify;
pub mod regular;
pub mod unstructured;

pub use cell_type::CellType;
pub use regular::RegularMesh;
pub use unstructured::UnstructuredMesh;

use serde::{Deserialize, Serialize};

/// A single mesh element: corner node indices in topology order.
///
/// The corner order encodes the element topology: counter-clockwise for
/// quads, front face then back face (each counter-clockwise from the
/// bottom-left corner) for hexahedra.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Node linear indices forming this element.
    pub corners: Vec<usize>,
    /// Topology tag for the corner ordering.
    pub cell_type: CellType,
}

impl Element {
    /// Creates an element from its corner list and topology tag.
    pub fn new(corners: Vec<usize>, cell_type: CellType) -> Self {
        Self { corners, cell_type }
    }

    /// Number of corner vertices.
    pub fn vertex_count(&self) -> usize {
        self.corners.len()
    }
}
