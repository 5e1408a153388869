use gridbox::error::GridBoxError;
use gridbox::prelude::*;
use proptest::prelude::*;

fn grid3(extents: [usize; 3]) -> RegularMesh<3> {
    RegularMesh::generate(
        IndexPoint::new(extents),
        Point::new([0.5, 1.0, 2.0]),
        Point::new([-1.0, 0.0, 3.0]),
    )
    .expect("valid grid")
}

proptest! {
    #[test]
    fn node_index_bijection_1d(nx in 1usize..40) {
        let mesh = RegularMesh::generate(
            IndexPoint::new([nx]),
            Point::new([0.25]),
            Point::zero(),
        ).unwrap();
        for linear in 0..mesh.total_nodes() {
            let idx = mesh.node_array_index(linear).unwrap();
            prop_assert_eq!(mesh.node_serial_index(idx).unwrap(), linear);
        }
    }

    #[test]
    fn node_index_bijection_2d(nx in 1usize..8, ny in 1usize..8) {
        let mesh = RegularMesh::generate(
            IndexPoint::new([nx, ny]),
            Point::new([1.0, 1.0]),
            Point::zero(),
        ).unwrap();
        for linear in 0..mesh.total_nodes() {
            let idx = mesh.node_array_index(linear).unwrap();
            prop_assert_eq!(mesh.node_serial_index(idx).unwrap(), linear);
        }
        // encode then decode over every lattice coordinate
        for i in 0..nx {
            for j in 0..ny {
                let idx = IndexPoint::new([i, j]);
                let linear = mesh.node_serial_index(idx).unwrap();
                prop_assert_eq!(mesh.node_array_index(linear).unwrap(), idx);
            }
        }
    }

    #[test]
    fn node_index_bijection_3d(nx in 1usize..6, ny in 1usize..6, nz in 1usize..6) {
        let mesh = grid3([nx, ny, nz]);
        for linear in 0..mesh.total_nodes() {
            let idx = mesh.node_array_index(linear).unwrap();
            prop_assert_eq!(mesh.node_serial_index(idx).unwrap(), linear);
        }
    }

    #[test]
    fn element_index_bijection_3d(nx in 2usize..6, ny in 2usize..6, nz in 2usize..6) {
        let mesh = grid3([nx, ny, nz]);
        prop_assert_eq!(mesh.total_elements(), (nx - 1) * (ny - 1) * (nz - 1));
        for linear in 0..mesh.total_elements() {
            let idx = mesh.element_array_index(linear).unwrap();
            prop_assert_eq!(mesh.element_serial_index(idx).unwrap(), linear);
        }
    }

    #[test]
    fn neighbor_min_then_max_is_identity(nx in 2usize..6, ny in 2usize..6, nz in 2usize..6) {
        let mesh = grid3([nx, ny, nz]);
        for linear in 0..mesh.total_nodes() {
            let idx = mesh.node_array_index(linear).unwrap();
            for axis in 0..3 {
                if idx[axis] > 0 {
                    let down = mesh.neighbor_node_min(linear, axis).unwrap();
                    prop_assert_eq!(mesh.neighbor_node_max(down, axis).unwrap(), linear);
                } else {
                    prop_assert!(mesh.neighbor_node_min(linear, axis).is_err());
                }
            }
        }
    }

    #[test]
    fn nearest_node_recovers_every_node(nx in 1usize..5, ny in 1usize..5, nz in 1usize..5) {
        let mesh = grid3([nx, ny, nz]);
        for (linear, node) in mesh.nodes().iter().enumerate() {
            prop_assert_eq!(mesh.nearest_node(*node).unwrap(), linear);
        }
    }
}

#[test]
fn unit_cube_generation() {
    let mesh = RegularMesh::generate(
        IndexPoint::new([2, 2, 2]),
        Point::new([1.0, 1.0, 1.0]),
        Point::zero(),
    )
    .unwrap();
    assert_eq!(mesh.total_nodes(), 8);
    assert_eq!(mesh.total_elements(), 1);
    assert_eq!(mesh.nodes()[0], Point::new([0.0, 0.0, 0.0]));
    let far = mesh.node_serial_index(IndexPoint::new([1, 1, 1])).unwrap();
    assert_eq!(mesh.nodes()[far], Point::new([1.0, 1.0, 1.0]));

    let hex = &mesh.elements()[0];
    assert_eq!(hex.cell_type, CellType::Hexahedron);
    let mut corners = hex.corners.clone();
    corners.sort_unstable();
    assert_eq!(corners, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    mesh.validate_invariants().unwrap();
}

#[test]
fn nearest_node_at_the_exact_corners() {
    let mesh = grid3([4, 3, 2]);
    assert_eq!(mesh.nearest_node(mesh.origin()).unwrap(), 0);
    assert_eq!(
        mesh.nearest_node(mesh.max_corner()).unwrap(),
        mesh.total_nodes() - 1
    );
}

#[test]
fn element_neighbors_step_the_element_lattice() {
    let mesh = grid3([4, 4, 4]);
    // element (1,1,1) in a 3x3x3 element lattice
    let center = mesh
        .element_serial_index(IndexPoint::new([1, 1, 1]))
        .unwrap();
    assert_eq!(mesh.neighbor_element_min(center, 0).unwrap(), center - 1);
    assert_eq!(mesh.neighbor_element_max(center, 0).unwrap(), center + 1);
    assert_eq!(mesh.neighbor_element_min(center, 1).unwrap(), center - 3);
    assert_eq!(mesh.neighbor_element_max(center, 2).unwrap(), center + 9);

    let corner = mesh
        .element_serial_index(IndexPoint::new([0, 0, 0]))
        .unwrap();
    assert!(matches!(
        mesh.neighbor_element_min(corner, 2),
        Err(GridBoxError::NeighborOutOfRange { axis: 2, .. })
    ));
}

#[test]
fn conversion_keeps_arrays_addressable_by_linear_index() {
    let regular = grid3([3, 3, 3]);
    let unstructured = regular.to_unstructured();
    assert_eq!(unstructured.node_count(), regular.total_nodes());
    assert_eq!(unstructured.element_count(), regular.total_elements());
    for linear in 0..regular.total_nodes() {
        assert_eq!(unstructured.nodes()[linear], regular.nodes()[linear]);
    }
    assert_eq!(
        unstructured.elements()[0].corners,
        regular.elements()[0].corners
    );
}
