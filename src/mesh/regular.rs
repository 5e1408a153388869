//! Axis-aligned regular meshes with serial-index bijections.
//!
//! A [`RegularMesh`] is an orthogonal grid with a constant spacing along
//! every axis. Nodes and elements live on two lattices (the element lattice
//! is one smaller per axis) and are addressed either by a per-axis
//! [`IndexPoint`] or by a single linear index; the two addressings are
//! bijective. The mesh is immutable once generated and safe to share across
//! threads for reading.
//!
//! Linear indices are row-major with axis 0 fastest-varying:
//! `linear = Σ_j idx[j] · stride_j`, `stride_0 = 1`,
//! `stride_j = stride_{j-1} · extent_{j-1}`.

use crate::debug_invariants::DebugInvariants;
use crate::error::GridBoxError;
use crate::geometry::{IndexPoint, Point};
use crate::mesh::{CellType, Element, UnstructuredMesh};

/// Corner offsets for one element, encoded as bit masks: bit `a` set means
/// the corner is on the max side of axis `a`. Order is the fixed winding:
/// counter-clockwise quad in 2D, front face then back face in 3D.
fn corner_masks(dim: usize) -> &'static [usize] {
    match dim {
        1 => &[0b0, 0b1],
        2 => &[0b00, 0b01, 0b11, 0b10],
        3 => &[0b000, 0b001, 0b011, 0b010, 0b100, 0b101, 0b111, 0b110],
        _ => unreachable!("dimension validated at generation"),
    }
}

fn element_cell_type(dim: usize) -> CellType {
    match dim {
        1 => CellType::Segment,
        2 => CellType::Quadrilateral,
        3 => CellType::Hexahedron,
        _ => unreachable!("dimension validated at generation"),
    }
}

/// An orthogonal mesh with constant per-axis spacing.
#[derive(Clone, Debug, PartialEq)]
pub struct RegularMesh<const D: usize> {
    num_nodes: IndexPoint<D>,
    spacing: Point<D>,
    origin: Point<D>,
    max_corner: Point<D>,
    nodes: Vec<Point<D>>,
    elements: Vec<Element>,
}

impl<const D: usize> RegularMesh<D> {
    /// Generates a grid with `num_nodes` nodes per axis, uniform `spacing`,
    /// and minimum corner at `origin`. Both the node and element arrays are
    /// fully materialized in serial-index order.
    ///
    /// Fails with [`GridBoxError::InvalidGeometry`] on a zero-node axis,
    /// non-positive or non-finite spacing, or a dimension outside 1..=3.
    pub fn generate(
        num_nodes: IndexPoint<D>,
        spacing: Point<D>,
        origin: Point<D>,
    ) -> Result<Self, GridBoxError> {
        if D == 0 || D > 3 {
            return Err(GridBoxError::InvalidGeometry(format!(
                "unsupported mesh dimension {D}"
            )));
        }
        for axis in 0..D {
            if num_nodes[axis] == 0 {
                return Err(GridBoxError::InvalidGeometry(format!(
                    "axis {axis} has zero nodes"
                )));
            }
            if !spacing[axis].is_finite() || spacing[axis] <= 0.0 {
                return Err(GridBoxError::InvalidGeometry(format!(
                    "axis {axis} spacing must be positive and finite, got {}",
                    spacing[axis]
                )));
            }
        }

        let max_corner =
            Point::from_fn(|axis| origin[axis] + spacing[axis] * (num_nodes[axis] - 1) as f64);

        let total_nodes = num_nodes.component_product();
        let mut nodes = Vec::with_capacity(total_nodes);
        for linear in 0..total_nodes {
            let idx = decode::<D>(linear, num_nodes);
            nodes.push(Point::from_fn(|axis| {
                origin[axis] + spacing[axis] * idx[axis] as f64
            }));
        }

        let elem_extents = IndexPoint::from_fn(|axis| num_nodes[axis] - 1);
        let total_elements = elem_extents.component_product();
        let cell_type = element_cell_type(D);
        let masks = corner_masks(D);
        let mut elements = Vec::with_capacity(total_elements);
        for linear in 0..total_elements {
            let base = decode::<D>(linear, elem_extents);
            let corners = masks
                .iter()
                .map(|mask| {
                    let corner = IndexPoint::from_fn(|axis| base[axis] + ((mask >> axis) & 1));
                    encode::<D>(corner, num_nodes)
                })
                .collect();
            elements.push(Element::new(corners, cell_type));
        }

        log::debug!(
            "generated regular {D}D mesh: {} nodes, {} elements",
            total_nodes,
            total_elements
        );

        Ok(Self {
            num_nodes,
            spacing,
            origin,
            max_corner,
            nodes,
            elements,
        })
    }

    /// Node count along `axis`.
    pub fn node_count(&self, axis: usize) -> usize {
        self.num_nodes[axis]
    }

    /// Element count along `axis`.
    pub fn element_count(&self, axis: usize) -> usize {
        self.num_nodes[axis] - 1
    }

    /// Per-axis node extents.
    pub fn num_nodes(&self) -> IndexPoint<D> {
        self.num_nodes
    }

    /// Grid spacing along `axis`.
    pub fn dx(&self, axis: usize) -> f64 {
        self.spacing[axis]
    }

    /// Minimum corner of the bounding box.
    pub fn origin(&self) -> Point<D> {
        self.origin
    }

    /// Maximum corner of the bounding box.
    pub fn max_corner(&self) -> Point<D> {
        self.max_corner
    }

    /// Total number of nodes.
    pub fn total_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of elements.
    pub fn total_elements(&self) -> usize {
        self.elements.len()
    }

    /// Node coordinates, addressable by node linear index.
    pub fn nodes(&self) -> &[Point<D>] {
        &self.nodes
    }

    /// Elements, addressable by element linear index.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn element_extents(&self) -> IndexPoint<D> {
        IndexPoint::from_fn(|axis| self.num_nodes[axis] - 1)
    }

    fn check_axis(&self, axis: usize) -> Result<(), GridBoxError> {
        if axis >= D {
            return Err(GridBoxError::AxisOutOfRange { axis, dim: D });
        }
        Ok(())
    }

    /// Linear index of the node at lattice coordinate `idx`.
    pub fn node_serial_index(&self, idx: IndexPoint<D>) -> Result<usize, GridBoxError> {
        check_coords::<D>(idx, self.num_nodes)?;
        Ok(encode::<D>(idx, self.num_nodes))
    }

    /// Linear index of the element at lattice coordinate `idx`.
    pub fn element_serial_index(&self, idx: IndexPoint<D>) -> Result<usize, GridBoxError> {
        let extents = self.element_extents();
        check_coords::<D>(idx, extents)?;
        Ok(encode::<D>(idx, extents))
    }

    /// Lattice coordinate of the node with linear index `linear`.
    pub fn node_array_index(&self, linear: usize) -> Result<IndexPoint<D>, GridBoxError> {
        if linear >= self.nodes.len() {
            return Err(GridBoxError::LinearIndexOutOfRange {
                index: linear,
                len: self.nodes.len(),
            });
        }
        Ok(decode::<D>(linear, self.num_nodes))
    }

    /// Lattice coordinate of the element with linear index `linear`.
    pub fn element_array_index(&self, linear: usize) -> Result<IndexPoint<D>, GridBoxError> {
        if linear >= self.elements.len() {
            return Err(GridBoxError::LinearIndexOutOfRange {
                index: linear,
                len: self.elements.len(),
            });
        }
        Ok(decode::<D>(linear, self.element_extents()))
    }

    /// Linear index of the node one step toward the min side of `axis`.
    ///
    /// Stepping across the lattice boundary is a
    /// [`GridBoxError::NeighborOutOfRange`], never a wrapped index.
    pub fn neighbor_node_min(&self, index: usize, axis: usize) -> Result<usize, GridBoxError> {
        self.check_axis(axis)?;
        let idx = self.node_array_index(index)?;
        let stepped = idx
            .offset(axis, -1)
            .ok_or(GridBoxError::NeighborOutOfRange { index, axis })?;
        self.node_serial_index(stepped)
            .map_err(|_| GridBoxError::NeighborOutOfRange { index, axis })
    }

    /// Linear index of the node one step toward the max side of `axis`.
    pub fn neighbor_node_max(&self, index: usize, axis: usize) -> Result<usize, GridBoxError> {
        self.check_axis(axis)?;
        let idx = self.node_array_index(index)?;
        let stepped = idx
            .offset(axis, 1)
            .ok_or(GridBoxError::NeighborOutOfRange { index, axis })?;
        self.node_serial_index(stepped)
            .map_err(|_| GridBoxError::NeighborOutOfRange { index, axis })
    }

    /// Linear index of the element one step toward the min side of `axis`.
    pub fn neighbor_element_min(&self, index: usize, axis: usize) -> Result<usize, GridBoxError> {
        self.check_axis(axis)?;
        let idx = self.element_array_index(index)?;
        let stepped = idx
            .offset(axis, -1)
            .ok_or(GridBoxError::NeighborOutOfRange { index, axis })?;
        self.element_serial_index(stepped)
            .map_err(|_| GridBoxError::NeighborOutOfRange { index, axis })
    }

    /// Linear index of the element one step toward the max side of `axis`.
    pub fn neighbor_element_max(&self, index: usize, axis: usize) -> Result<usize, GridBoxError> {
        self.check_axis(axis)?;
        let idx = self.element_array_index(index)?;
        let stepped = idx
            .offset(axis, 1)
            .ok_or(GridBoxError::NeighborOutOfRange { index, axis })?;
        self.element_serial_index(stepped)
            .map_err(|_| GridBoxError::NeighborOutOfRange { index, axis })
    }

    /// Linear index of the node nearest to `query`, by mapping the query's
    /// fractional position along each axis to a lattice coordinate. O(axes),
    /// valid because the spacing is uniform.
    ///
    /// Queries outside the bounding box fail with
    /// [`GridBoxError::QueryOutOfBounds`]. The exact minimum corner maps to
    /// node 0 and the exact maximum corner to the last node.
    pub fn nearest_node(&self, query: Point<D>) -> Result<usize, GridBoxError> {
        let mut coords = [0usize; D];
        for axis in 0..D {
            let min = self.origin[axis];
            let max = self.max_corner[axis];
            if query[axis] < min || query[axis] > max {
                return Err(GridBoxError::QueryOutOfBounds { axis });
            }
            let n = self.num_nodes[axis];
            coords[axis] = if n == 1 {
                // single-node axis: the only in-bounds coordinate is the origin
                0
            } else {
                let frac = (n - 1) as f64 * (query[axis] - min) / (max - min);
                (frac.floor() as usize).min(n - 1)
            };
        }
        self.node_serial_index(IndexPoint::new(coords))
    }

    /// Copies the mesh into the unstructured representation, preserving node
    /// order and corner-index lists.
    pub fn to_unstructured(&self) -> UnstructuredMesh<D> {
        UnstructuredMesh::from_parts(self.nodes.clone(), self.elements.clone())
    }
}

fn check_coords<const D: usize>(
    idx: IndexPoint<D>,
    extents: IndexPoint<D>,
) -> Result<(), GridBoxError> {
    for axis in 0..D {
        if idx[axis] >= extents[axis] {
            return Err(GridBoxError::CoordOutOfRange {
                axis,
                coord: idx[axis],
                extent: extents[axis],
            });
        }
    }
    Ok(())
}

fn encode<const D: usize>(idx: IndexPoint<D>, extents: IndexPoint<D>) -> usize {
    let mut answer = 0;
    let mut stride = 1;
    for axis in 0..D {
        answer += stride * idx[axis];
        stride *= extents[axis];
    }
    answer
}

fn decode<const D: usize>(linear: usize, extents: IndexPoint<D>) -> IndexPoint<D> {
    let mut strides = [1usize; D];
    for axis in 1..D {
        strides[axis] = strides[axis - 1] * extents[axis - 1];
    }
    let mut rem = linear;
    let mut out = [0usize; D];
    for axis in (0..D).rev() {
        out[axis] = rem / strides[axis];
        rem %= strides[axis];
    }
    IndexPoint::new(out)
}

impl<const D: usize> DebugInvariants for RegularMesh<D> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "RegularMesh");
    }

    fn validate_invariants(&self) -> Result<(), GridBoxError> {
        if self.nodes.len() != self.num_nodes.component_product() {
            return Err(GridBoxError::InvariantViolation(format!(
                "node array has {} entries, extents demand {}",
                self.nodes.len(),
                self.num_nodes.component_product()
            )));
        }
        if self.elements.len() != self.element_extents().component_product() {
            return Err(GridBoxError::InvariantViolation(format!(
                "element array has {} entries, extents demand {}",
                self.elements.len(),
                self.element_extents().component_product()
            )));
        }
        for (i, element) in self.elements.iter().enumerate() {
            let mut seen = element.corners.clone();
            seen.sort_unstable();
            seen.dedup();
            if seen.len() != element.corners.len() {
                return Err(GridBoxError::InvariantViolation(format!(
                    "element {i} repeats a corner node"
                )));
            }
            if let Some(&bad) = element.corners.iter().find(|&&c| c >= self.nodes.len()) {
                return Err(GridBoxError::InvariantViolation(format!(
                    "element {i} references missing node {bad}"
                )));
            }
        }
        Ok(())
    }
}
