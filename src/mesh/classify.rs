//! Axis-face classification of regular-mesh nodes.
//!
//! Tags every node of a [`RegularMesh`] with the boundary faces it lies on
//! (or `interior`), collected in a [`MultiSetContainer`] keyed by node
//! linear index. A corner node carries one tag per face it touches, so the
//! subsets overlap; set algebra over the container recovers edges and
//! corners (e.g. the intersection of two face subsets).

use crate::container::MultiSetContainer;
use crate::error::GridBoxError;
use crate::geometry::Point;
use crate::mesh::RegularMesh;

/// Boundary tag for the minimum-x face.
pub const BOUNDARY_X_MIN: &str = "boundary_x_min";
/// Boundary tag for the maximum-x face.
pub const BOUNDARY_X_MAX: &str = "boundary_x_max";
/// Boundary tag for the minimum-y face.
pub const BOUNDARY_Y_MIN: &str = "boundary_y_min";
/// Boundary tag for the maximum-y face.
pub const BOUNDARY_Y_MAX: &str = "boundary_y_max";
/// Boundary tag for the minimum-z face.
pub const BOUNDARY_Z_MIN: &str = "boundary_z_min";
/// Boundary tag for the maximum-z face.
pub const BOUNDARY_Z_MAX: &str = "boundary_z_max";
/// Tag for nodes on no boundary face.
pub const INTERIOR: &str = "interior";

/// Node classification result: node linear index → coordinate, with one
/// subset per populated tag.
pub type NodeSets<const D: usize> = MultiSetContainer<usize, Point<D>, String>;

fn face_tag(axis: usize, max_side: bool) -> &'static str {
    match (axis, max_side) {
        (0, false) => BOUNDARY_X_MIN,
        (0, true) => BOUNDARY_X_MAX,
        (1, false) => BOUNDARY_Y_MIN,
        (1, true) => BOUNDARY_Y_MAX,
        (2, false) => BOUNDARY_Z_MIN,
        (2, true) => BOUNDARY_Z_MAX,
        _ => unreachable!("mesh dimension is at most 3"),
    }
}

/// Classifies every node of `mesh` by the boundary faces it lies on.
pub fn classify_boundary_nodes<const D: usize>(
    mesh: &RegularMesh<D>,
) -> Result<NodeSets<D>, GridBoxError> {
    let mut sets = MultiSetContainer::new();
    for (linear, node) in mesh.nodes().iter().enumerate() {
        sets.insert(linear, *node);
    }
    for linear in 0..mesh.total_nodes() {
        let idx = mesh.node_array_index(linear)?;
        let mut on_boundary = false;
        for axis in 0..D {
            if idx[axis] == 0 {
                sets.add_to_set(&linear, face_tag(axis, false).to_string());
                on_boundary = true;
            }
            if idx[axis] == mesh.node_count(axis) - 1 {
                sets.add_to_set(&linear, face_tag(axis, true).to_string());
                on_boundary = true;
            }
        }
        if !on_boundary {
            sets.add_to_set(&linear, INTERIOR.to_string());
        }
    }
    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IndexPoint;

    #[test]
    fn three_by_three_grid_classification() {
        let mesh = RegularMesh::generate(
            IndexPoint::new([3, 3]),
            Point::new([1.0, 1.0]),
            Point::zero(),
        )
        .unwrap();
        let sets = classify_boundary_nodes(&mesh).unwrap();

        assert_eq!(sets.set_len(&BOUNDARY_X_MIN.to_string()), 3);
        assert_eq!(sets.set_len(&BOUNDARY_Y_MAX.to_string()), 3);
        assert_eq!(sets.set_len(&INTERIOR.to_string()), 1);
        assert!(sets.set(&INTERIOR.to_string()).contains(&4));

        // the bottom-left corner sits on two faces at once
        let corner_tags: Vec<String> = sets.tags_of(&0).cloned().collect();
        assert_eq!(
            corner_tags,
            vec![BOUNDARY_X_MIN.to_string(), BOUNDARY_Y_MIN.to_string()]
        );

        // face intersections recover corners
        assert_eq!(
            sets.set_intersection(&BOUNDARY_X_MAX.to_string(), &BOUNDARY_Y_MIN.to_string()),
            vec![2]
        );
    }

    #[test]
    fn one_dimensional_grid_has_two_end_nodes() {
        let mesh =
            RegularMesh::generate(IndexPoint::new([5]), Point::new([0.5]), Point::zero()).unwrap();
        let sets = classify_boundary_nodes(&mesh).unwrap();
        assert_eq!(sets.set_len(&BOUNDARY_X_MIN.to_string()), 1);
        assert_eq!(sets.set_len(&BOUNDARY_X_MAX.to_string()), 1);
        assert_eq!(sets.set_len(&INTERIOR.to_string()), 3);
        assert_eq!(sets.enumerate_sets().len(), 3);
    }
}
