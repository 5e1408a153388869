//! Gmsh `.msh` reader.
//!
//! # Supported format
//! - ASCII `.msh` version **2.2**.
//! - Element types: 1 (line), 2 (triangle), 3 (quad), 4 (tet), 5 (hex),
//!   6 (prism), 7 (pyramid), 15 (point).
//!
//! # Limitations
//! - Binary files are not supported.
//! - `.msh` v4.x (block-based) is not supported.
//! - Higher-order elements are not supported.
//! - Element tags are ignored (no physical groups or boundary markers yet).
//! - `$NodeData`/`$ElementData` sections are skipped with a warning.
//! - Coordinates are always stored as 3D `(x, y, z)` tuples, matching the
//!   MSH node record.

use std::collections::HashMap;
use std::io::Read;

use once_cell::sync::Lazy;

use crate::error::GridBoxError;
use crate::geometry::Point;
use crate::io::MeshReader;
use crate::mesh::{CellType, Element, UnstructuredMesh};

/// MSH element-type code → cell type.
static MSH_CELL_TYPES: Lazy<HashMap<u32, CellType>> = Lazy::new(|| {
    HashMap::from([
        (1, CellType::Segment),
        (2, CellType::Triangle),
        (3, CellType::Quadrilateral),
        (4, CellType::Tetrahedron),
        (5, CellType::Hexahedron),
        (6, CellType::Prism),
        (7, CellType::Pyramid),
        (15, CellType::Vertex),
    ])
});

/// Gmsh `.msh` reader for ASCII v2.2 meshes.
#[derive(Debug, Default, Clone)]
pub struct MshReader;

impl MshReader {
    fn parse_version(line: &str) -> Result<String, GridBoxError> {
        let mut parts = line.split_whitespace();
        let version = parts
            .next()
            .ok_or_else(|| GridBoxError::MeshIoParse("missing mesh format version".into()))?;
        let file_type = parts
            .next()
            .ok_or_else(|| GridBoxError::MeshIoParse("missing mesh format type".into()))?;
        if file_type != "0" {
            return Err(GridBoxError::MeshIoParse(
                "binary .msh files are not supported".into(),
            ));
        }
        Ok(version.to_string())
    }

    fn parse_coord(raw: &str) -> Result<f64, GridBoxError> {
        raw.parse::<f64>()
            .map_err(|_| GridBoxError::MeshIoParse(format!("invalid coordinate: {raw}")))
    }

    fn parse_count(raw: &str) -> Result<usize, GridBoxError> {
        raw.trim()
            .parse::<usize>()
            .map_err(|_| GridBoxError::MeshIoParse(format!("invalid count: {raw}")))
    }

    /// Node indices in MSH files are 1-based; corners are stored 0-based.
    fn parse_corner(raw: &str) -> Result<usize, GridBoxError> {
        let id = raw
            .parse::<usize>()
            .map_err(|_| GridBoxError::MeshIoParse(format!("invalid node index: {raw}")))?;
        id.checked_sub(1)
            .ok_or_else(|| GridBoxError::MeshIoParse("node index 0 in element list".into()))
    }
}

impl MeshReader<3> for MshReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<UnstructuredMesh<3>, GridBoxError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        let mut lines = contents.lines();

        let mut version: Option<String> = None;
        let mut mesh = UnstructuredMesh::new();

        while let Some(line) = lines.next() {
            match line.trim() {
                "$MeshFormat" => {
                    let format_line = lines
                        .next()
                        .ok_or_else(|| GridBoxError::MeshIoParse("missing MeshFormat".into()))?;
                    version = Some(Self::parse_version(format_line)?);
                    let end = lines
                        .next()
                        .ok_or_else(|| GridBoxError::MeshIoParse("missing EndMeshFormat".into()))?;
                    if end.trim() != "$EndMeshFormat" {
                        return Err(GridBoxError::MeshIoParse("missing $EndMeshFormat".into()));
                    }
                }
                "$Nodes" => {
                    let count_line = lines
                        .next()
                        .ok_or_else(|| GridBoxError::MeshIoParse("missing node count".into()))?;
                    let node_count = Self::parse_count(count_line)?;
                    for _ in 0..node_count {
                        let node_line = lines.next().ok_or_else(|| {
                            GridBoxError::MeshIoParse("unexpected end of node list".into())
                        })?;
                        let mut parts = node_line.split_whitespace();
                        // node index is implicit in file order
                        parts
                            .next()
                            .ok_or_else(|| GridBoxError::MeshIoParse("missing node id".into()))?;
                        let x = Self::parse_coord(parts.next().ok_or_else(|| {
                            GridBoxError::MeshIoParse("missing x coordinate".into())
                        })?)?;
                        let y = Self::parse_coord(parts.next().ok_or_else(|| {
                            GridBoxError::MeshIoParse("missing y coordinate".into())
                        })?)?;
                        let z = Self::parse_coord(parts.next().ok_or_else(|| {
                            GridBoxError::MeshIoParse("missing z coordinate".into())
                        })?)?;
                        mesh.push_node(Point::new([x, y, z]));
                    }
                    let end = lines
                        .next()
                        .ok_or_else(|| GridBoxError::MeshIoParse("missing EndNodes".into()))?;
                    if end.trim() != "$EndNodes" {
                        return Err(GridBoxError::MeshIoParse("missing $EndNodes".into()));
                    }
                }
                "$Elements" => {
                    let count_line = lines
                        .next()
                        .ok_or_else(|| GridBoxError::MeshIoParse("missing element count".into()))?;
                    let elem_count = Self::parse_count(count_line)?;
                    for _ in 0..elem_count {
                        let elem_line = lines.next().ok_or_else(|| {
                            GridBoxError::MeshIoParse("unexpected end of element list".into())
                        })?;
                        let mut parts = elem_line.split_whitespace();
                        // element index is implicit in file order
                        parts.next().ok_or_else(|| {
                            GridBoxError::MeshIoParse("missing element id".into())
                        })?;
                        let elem_type = parts
                            .next()
                            .ok_or_else(|| {
                                GridBoxError::MeshIoParse("missing element type".into())
                            })?
                            .parse::<u32>()
                            .map_err(|_| {
                                GridBoxError::MeshIoParse("invalid element type".into())
                            })?;
                        let cell_type =
                            *MSH_CELL_TYPES.get(&elem_type).ok_or_else(|| {
                                GridBoxError::MeshIoParse(format!(
                                    "unsupported element type: {elem_type}"
                                ))
                            })?;
                        let num_tags = Self::parse_count(parts.next().ok_or_else(|| {
                            GridBoxError::MeshIoParse("missing element tag count".into())
                        })?)?;
                        for _ in 0..num_tags {
                            parts.next();
                        }
                        let mut corners = Vec::with_capacity(cell_type.vertex_count());
                        for _ in 0..cell_type.vertex_count() {
                            let corner = parts.next().ok_or_else(|| {
                                GridBoxError::MeshIoParse("missing element node id".into())
                            })?;
                            corners.push(Self::parse_corner(corner)?);
                        }
                        mesh.push_element(Element::new(corners, cell_type));
                    }
                    let end = lines
                        .next()
                        .ok_or_else(|| GridBoxError::MeshIoParse("missing EndElements".into()))?;
                    if end.trim() != "$EndElements" {
                        return Err(GridBoxError::MeshIoParse("missing $EndElements".into()));
                    }
                }
                "$NodeData" | "$ElementData" => {
                    log::warn!("MSH {} section skipped, values will be lost", line.trim());
                }
                other if other.starts_with("$End") => {}
                other if other.starts_with('$') => {
                    log::debug!("ignoring MSH section {other}");
                }
                _ => {}
            }
        }

        let version = version.unwrap_or_else(|| "2.2".to_string());
        if version != "2.2" {
            return Err(GridBoxError::MeshIoParse(format!(
                "unsupported msh version: {version}"
            )));
        }

        log::debug!(
            "read MSH mesh: {} nodes, {} elements",
            mesh.node_count(),
            mesh.element_count()
        );
        Ok(mesh)
    }
}
