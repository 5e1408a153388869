//! Unstructured meshes: explicit node and element arrays plus named data
//! fields.
//!
//! Unlike [`RegularMesh`](crate::mesh::RegularMesh) there is no lattice
//! structure; nodes and elements are addressed by their array position only.
//! The element representation (corner-index list + cell type) is shared with
//! the regular path, so writers accept either.

use std::collections::BTreeMap;

use crate::error::GridBoxError;
use crate::geometry::Point;
use crate::mesh::Element;

/// An unstructured mesh with per-node and per-element scalar data fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnstructuredMesh<const D: usize> {
    nodes: Vec<Point<D>>,
    elements: Vec<Element>,
    node_data: BTreeMap<String, Vec<f64>>,
    element_data: BTreeMap<String, Vec<f64>>,
}

impl<const D: usize> UnstructuredMesh<D> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from existing node and element arrays.
    pub fn from_parts(nodes: Vec<Point<D>>, elements: Vec<Element>) -> Self {
        Self {
            nodes,
            elements,
            node_data: BTreeMap::new(),
            element_data: BTreeMap::new(),
        }
    }

    /// Appends a node and returns its linear index.
    pub fn push_node(&mut self, node: Point<D>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Appends an element and returns its linear index.
    pub fn push_element(&mut self, element: Element) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Node coordinates, by linear index.
    pub fn nodes(&self) -> &[Point<D>] {
        &self.nodes
    }

    /// Elements, by linear index.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Bounding box of the node cloud, or `None` for an empty mesh.
    pub fn extents(&self) -> Option<(Point<D>, Point<D>)> {
        let first = *self.nodes.first()?;
        let mut min = first;
        let mut max = first;
        for node in &self.nodes[1..] {
            min = Point::from_fn(|axis| min[axis].min(node[axis]));
            max = Point::from_fn(|axis| max[axis].max(node[axis]));
        }
        Some((min, max))
    }

    /// Linear index of the node closest to `query`, by scanning all nodes.
    /// Returns `None` for an empty mesh.
    pub fn nearest_node(&self, query: Point<D>) -> Option<usize> {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, node) in self.nodes.iter().enumerate() {
            let d = Point::dist_sq(query, *node);
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        (!self.nodes.is_empty()).then_some(best)
    }

    /// Centroid of element `index` (mean of its corner coordinates).
    pub fn element_center(&self, index: usize) -> Result<Point<D>, GridBoxError> {
        let element = self
            .elements
            .get(index)
            .ok_or(GridBoxError::LinearIndexOutOfRange {
                index,
                len: self.elements.len(),
            })?;
        let mut center = Point::zero();
        for &corner in &element.corners {
            let node = self
                .nodes
                .get(corner)
                .ok_or(GridBoxError::LinearIndexOutOfRange {
                    index: corner,
                    len: self.nodes.len(),
                })?;
            center = center + *node;
        }
        Ok(center * (1.0 / element.corners.len() as f64))
    }

    /// Registers a per-node scalar field. The value count must match the
    /// node count. Re-registering an existing name keeps the old field and
    /// only logs a warning, so callers cannot clobber data by accident.
    pub fn add_node_data(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), GridBoxError> {
        let name = name.into();
        if values.len() != self.nodes.len() {
            return Err(GridBoxError::DataLengthMismatch {
                name,
                expected: self.nodes.len(),
                found: values.len(),
            });
        }
        if self.node_data.contains_key(&name) {
            log::warn!("node data field `{name}` already registered, keeping existing values");
            return Ok(());
        }
        self.node_data.insert(name, values);
        Ok(())
    }

    /// Registers a per-element scalar field; same rules as
    /// [`add_node_data`](Self::add_node_data).
    pub fn add_element_data(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), GridBoxError> {
        let name = name.into();
        if values.len() != self.elements.len() {
            return Err(GridBoxError::DataLengthMismatch {
                name,
                expected: self.elements.len(),
                found: values.len(),
            });
        }
        if self.element_data.contains_key(&name) {
            log::warn!("element data field `{name}` already registered, keeping existing values");
            return Ok(());
        }
        self.element_data.insert(name, values);
        Ok(())
    }

    /// Values of a registered node field.
    pub fn node_data(&self, name: &str) -> Option<&[f64]> {
        self.node_data.get(name).map(Vec::as_slice)
    }

    /// Values of a registered element field.
    pub fn element_data(&self, name: &str) -> Option<&[f64]> {
        self.element_data.get(name).map(Vec::as_slice)
    }

    /// Names of all registered node fields, ascending.
    pub fn node_data_names(&self) -> impl Iterator<Item = &str> {
        self.node_data.keys().map(String::as_str)
    }

    /// Names of all registered element fields, ascending.
    pub fn element_data_names(&self) -> impl Iterator<Item = &str> {
        self.element_data.keys().map(String::as_str)
    }

    /// Node coordinates flattened to `D` values per node, axis 0 first —
    /// the layout mesh writers consume.
    pub fn flat_coordinates(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.nodes.len() * D);
        for node in &self.nodes {
            out.extend_from_slice(node.as_slice());
        }
        out
    }
}
