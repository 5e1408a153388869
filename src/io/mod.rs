//! Mesh and data file I/O.
//!
//! This module provides trait-based readers and writers for loading and
//! saving meshes together with their associated data fields, plus a
//! buffered text writer for time-series data.

pub mod data_buffer;
pub mod msh;
pub mod xdmf;

pub use data_buffer::DataBufferWriter;
pub use msh::MshReader;
pub use xdmf::XdmfWriter;

use std::io::{Read, Write};

use crate::error::GridBoxError;
use crate::mesh::UnstructuredMesh;

/// Trait for mesh readers producing an unstructured mesh.
pub trait MeshReader<const D: usize> {
    /// Parse mesh data from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<UnstructuredMesh<D>, GridBoxError>;
}

/// Trait for mesh writers serializing an unstructured mesh.
pub trait MeshWriter<const D: usize> {
    /// Write mesh data to a writer.
    fn write<W: Write>(&self, writer: W, mesh: &UnstructuredMesh<D>) -> Result<(), GridBoxError>;
}
