//! # gridbox
//!
//! gridbox is a support library for scientific-computing and simulation codes.
//! It provides mesh representations (axis-aligned regular grids and
//! unstructured meshes, 1D–3D), mesh file I/O (Gmsh MSH import, XDMF export),
//! closed-form signal generators with DFT/convolution utilities, and a
//! multi-set keyed container for spatial classification of mesh entities.
//!
//! ## Highlights
//! - `RegularMesh`: bijective mapping between per-axis lattice coordinates
//!   and linear node/element indices, with checked neighbor lookups and O(1)
//!   nearest-node queries
//! - `MultiSetContainer`: keyed storage whose entries belong to any number of
//!   overlapping named subsets, with sorted set algebra over subset keys
//! - Gmsh ASCII v2.2 reading and XDMF 2.0 writing sharing one element
//!   representation across the regular and unstructured paths
//! - Signal generators (Gaussian, Ricker, bursts, ramps, …) plus streaming
//!   and batch single-frequency DFT accumulation
//!
//! ## Error handling
//! All fallible operations return [`error::GridBoxError`]; out-of-range
//! lattice arithmetic is reported as a typed error instead of wrapping.
//!
//! ## Concurrency
//! Meshes are immutable after generation and safe to share for reading.
//! `MultiSetContainer` is single-threaded; wrap it in a lock for concurrent
//! mutation.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! gridbox = "0.4"
//! ```

// Re-export our major subsystems:
pub mod container;
pub mod debug_invariants;
pub mod error;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod signal;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::container::{MultiSetContainer, SetView};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::error::GridBoxError;
    pub use crate::geometry::{IndexPoint, Point};
    pub use crate::io::{DataBufferWriter, MeshReader, MeshWriter, MshReader, XdmfWriter};
    pub use crate::mesh::{CellType, Element, RegularMesh, UnstructuredMesh};
    pub use crate::mesh::classify::classify_boundary_nodes;
    pub use crate::signal::{Signal, sample};
}
