//! XDMF (XML) writer for meshes.
//!
//! Writes an XDMF 2.0 document with inline XML `DataItem` payloads: one
//! `Grid` holding the topology (uniform cell type, or `Mixed` with per-cell
//! type codes), the node geometry, and one `Attribute` block per registered
//! node/element data field. HDF5-backed `DataItem`s are intentionally not
//! produced; heavy payloads belong to the external HDF5 tooling.

use std::io::Write;

use crate::error::GridBoxError;
use crate::io::MeshWriter;
use crate::mesh::{CellType, UnstructuredMesh};

/// XDMF topology type name for a uniform-topology grid.
fn topology_type(cell_type: CellType) -> &'static str {
    match cell_type {
        CellType::Vertex => "Polyvertex",
        CellType::Segment => "Polyline",
        CellType::Triangle => "Triangle",
        CellType::Quadrilateral => "Quadrilateral",
        CellType::Tetrahedron => "Tetrahedron",
        CellType::Pyramid => "Pyramid",
        CellType::Prism => "Wedge",
        CellType::Hexahedron => "Hexahedron",
    }
}

/// XDMF mixed-topology cell code; `None` for types the mixed encoding does
/// not cover with a fixed vertex count.
fn mixed_code(cell_type: CellType) -> Option<i64> {
    match cell_type {
        CellType::Triangle => Some(4),
        CellType::Quadrilateral => Some(5),
        CellType::Tetrahedron => Some(6),
        CellType::Pyramid => Some(7),
        CellType::Prism => Some(8),
        CellType::Hexahedron => Some(9),
        CellType::Vertex | CellType::Segment => None,
    }
}

/// XDMF 2.0 writer with inline XML payloads.
#[derive(Debug, Default, Clone)]
pub struct XdmfWriter {
    grid_name: Option<String>,
}

impl XdmfWriter {
    /// Creates a writer using the default grid name `mesh`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the `Grid` element name.
    pub fn with_grid_name(name: impl Into<String>) -> Self {
        Self {
            grid_name: Some(name.into()),
        }
    }

    fn write_data_item<W: Write>(
        writer: &mut W,
        indent: &str,
        dimensions: &str,
        number_type: &str,
        values: impl Iterator<Item = String>,
    ) -> Result<(), GridBoxError> {
        writeln!(
            writer,
            "{indent}<DataItem Dimensions=\"{dimensions}\" NumberType=\"{number_type}\" Format=\"XML\">"
        )?;
        write!(writer, "{indent}  ")?;
        for (idx, value) in values.enumerate() {
            if idx > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{value}")?;
        }
        writeln!(writer)?;
        writeln!(writer, "{indent}</DataItem>")?;
        Ok(())
    }

    fn check_corners<const D: usize>(mesh: &UnstructuredMesh<D>) -> Result<(), GridBoxError> {
        for (index, element) in mesh.elements().iter().enumerate() {
            if element.corners.len() != element.cell_type.vertex_count() {
                return Err(GridBoxError::MeshIoParse(format!(
                    "element {index} has {} corners, {:?} expects {}",
                    element.corners.len(),
                    element.cell_type,
                    element.cell_type.vertex_count()
                )));
            }
            if let Some(&bad) = element.corners.iter().find(|&&c| c >= mesh.node_count()) {
                return Err(GridBoxError::MeshIoParse(format!(
                    "element {index} references missing node {bad}"
                )));
            }
        }
        Ok(())
    }
}

impl<const D: usize> MeshWriter<D> for XdmfWriter {
    fn write<W: Write>(
        &self,
        mut writer: W,
        mesh: &UnstructuredMesh<D>,
    ) -> Result<(), GridBoxError> {
        if D == 0 || D > 3 {
            return Err(GridBoxError::InvalidGeometry(format!(
                "unsupported mesh dimension {D}"
            )));
        }
        Self::check_corners(mesh)?;

        let grid_name = self.grid_name.as_deref().unwrap_or("mesh");
        writeln!(writer, "<?xml version=\"1.0\" ?>")?;
        writeln!(writer, "<!DOCTYPE Xdmf SYSTEM \"Xdmf.dtd\" []>")?;
        writeln!(
            writer,
            "<Xdmf Version=\"2.0\" xmlns:xi=\"http://www.w3.org/2001/XInclude\">"
        )?;
        writeln!(writer, "  <Domain>")?;
        writeln!(
            writer,
            "    <Grid Name=\"{grid_name}\" GridType=\"Uniform\">"
        )?;

        // topology: uniform if every element shares one cell type
        let uniform = mesh
            .elements()
            .first()
            .map(|e| e.cell_type)
            .filter(|&ct| mesh.elements().iter().all(|e| e.cell_type == ct));
        let element_count = mesh.element_count();
        match uniform {
            Some(cell_type) => {
                let nodes_per_element = cell_type.vertex_count();
                write!(
                    writer,
                    "      <Topology TopologyType=\"{}\" NumberOfElements=\"{element_count}\"",
                    topology_type(cell_type)
                )?;
                if matches!(cell_type, CellType::Segment | CellType::Vertex) {
                    write!(writer, " NodesPerElement=\"{nodes_per_element}\"")?;
                }
                writeln!(writer, ">")?;
                Self::write_data_item(
                    &mut writer,
                    "        ",
                    &format!("{element_count} {nodes_per_element}"),
                    "Int",
                    mesh.elements()
                        .iter()
                        .flat_map(|e| e.corners.iter())
                        .map(|c| c.to_string()),
                )?;
            }
            None => {
                writeln!(
                    writer,
                    "      <Topology TopologyType=\"Mixed\" NumberOfElements=\"{element_count}\">"
                )?;
                let mut values = Vec::new();
                for (index, element) in mesh.elements().iter().enumerate() {
                    let code = mixed_code(element.cell_type).ok_or_else(|| {
                        GridBoxError::MeshIoParse(format!(
                            "element {index}: {:?} cannot appear in a mixed topology",
                            element.cell_type
                        ))
                    })?;
                    values.push(code.to_string());
                    values.extend(element.corners.iter().map(|c| c.to_string()));
                }
                let total = values.len();
                Self::write_data_item(
                    &mut writer,
                    "        ",
                    &total.to_string(),
                    "Int",
                    values.into_iter(),
                )?;
            }
        }
        writeln!(writer, "      </Topology>")?;

        // geometry: node coordinates, axis 0 first per node
        let geometry_type = if D == 3 { "XYZ" } else { "XY" };
        writeln!(
            writer,
            "      <Geometry GeometryType=\"{geometry_type}\">"
        )?;
        let node_count = mesh.node_count();
        let embed_dim = if D == 3 { 3 } else { 2 };
        Self::write_data_item(
            &mut writer,
            "        ",
            &format!("{node_count} {embed_dim}"),
            "Float",
            mesh.nodes().iter().flat_map(|node| {
                (0..embed_dim).map(move |axis| {
                    if axis < D {
                        node[axis].to_string()
                    } else {
                        "0".to_string()
                    }
                })
            }),
        )?;
        writeln!(writer, "      </Geometry>")?;

        // one scalar attribute per registered data field
        for name in mesh.node_data_names() {
            let values = mesh.node_data(name).unwrap_or(&[]);
            writeln!(
                writer,
                "      <Attribute Name=\"{name}\" AttributeType=\"Scalar\" Center=\"Node\">"
            )?;
            Self::write_data_item(
                &mut writer,
                "        ",
                &values.len().to_string(),
                "Float",
                values.iter().map(|v| v.to_string()),
            )?;
            writeln!(writer, "      </Attribute>")?;
        }
        for name in mesh.element_data_names() {
            let values = mesh.element_data(name).unwrap_or(&[]);
            writeln!(
                writer,
                "      <Attribute Name=\"{name}\" AttributeType=\"Scalar\" Center=\"Cell\">"
            )?;
            Self::write_data_item(
                &mut writer,
                "        ",
                &values.len().to_string(),
                "Float",
                values.iter().map(|v| v.to_string()),
            )?;
            writeln!(writer, "      </Attribute>")?;
        }

        writeln!(writer, "    </Grid>")?;
        writeln!(writer, "  </Domain>")?;
        writeln!(writer, "</Xdmf>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{IndexPoint, Point};
    use crate::mesh::{Element, RegularMesh};

    fn write_to_string<const D: usize>(mesh: &UnstructuredMesh<D>) -> String {
        let mut buffer = Vec::new();
        XdmfWriter::new().write(&mut buffer, mesh).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn quad_grid_has_uniform_topology() {
        let regular = RegularMesh::generate(
            IndexPoint::new([3, 2]),
            Point::new([1.0, 1.0]),
            Point::zero(),
        )
        .unwrap();
        let mut mesh = regular.to_unstructured();
        mesh.add_node_data("temperature", vec![0.0; 6]).unwrap();
        mesh.add_element_data("volume", vec![1.0, 1.0]).unwrap();

        let doc = write_to_string(&mesh);
        assert!(doc.starts_with("<?xml version=\"1.0\" ?>"));
        assert!(doc.contains("TopologyType=\"Quadrilateral\" NumberOfElements=\"2\""));
        assert!(doc.contains("GeometryType=\"XY\""));
        assert!(doc.contains("0 1 4 3 1 2 5 4"));
        assert!(doc.contains("Attribute Name=\"temperature\" AttributeType=\"Scalar\" Center=\"Node\""));
        assert!(doc.contains("Attribute Name=\"volume\" AttributeType=\"Scalar\" Center=\"Cell\""));
        assert!(doc.trim_end().ends_with("</Xdmf>"));
    }

    #[test]
    fn mixed_meshes_carry_type_codes() {
        let mut mesh = UnstructuredMesh::<2>::new();
        for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [2.0, 0.0]] {
            mesh.push_node(Point::new(p));
        }
        mesh.push_element(Element::new(vec![0, 1, 2, 3], CellType::Quadrilateral));
        mesh.push_element(Element::new(vec![1, 4, 2], CellType::Triangle));

        let doc = write_to_string(&mesh);
        assert!(doc.contains("TopologyType=\"Mixed\""));
        // quad code 5 then triangle code 4, each followed by its corners
        assert!(doc.contains("5 0 1 2 3 4 1 4 2"));
    }

    #[test]
    fn out_of_range_corner_is_rejected() {
        let mut mesh = UnstructuredMesh::<2>::new();
        mesh.push_node(Point::new([0.0, 0.0]));
        mesh.push_node(Point::new([1.0, 0.0]));
        mesh.push_element(Element::new(vec![0, 1, 7], CellType::Triangle));
        let mut buffer = Vec::new();
        assert!(matches!(
            XdmfWriter::new().write(&mut buffer, &mesh),
            Err(GridBoxError::MeshIoParse(msg)) if msg.contains("missing node 7")
        ));
    }

    #[test]
    fn hex_grid_pads_nothing_in_3d() {
        let regular = RegularMesh::generate(
            IndexPoint::new([2, 2, 2]),
            Point::new([1.0, 1.0, 1.0]),
            Point::zero(),
        )
        .unwrap();
        let doc = write_to_string(&regular.to_unstructured());
        assert!(doc.contains("TopologyType=\"Hexahedron\" NumberOfElements=\"1\""));
        assert!(doc.contains("GeometryType=\"XYZ\""));
        assert!(doc.contains("0 1 3 2 4 5 7 6"));
    }
}
