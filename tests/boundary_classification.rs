use gridbox::mesh::classify::{
    BOUNDARY_X_MAX, BOUNDARY_X_MIN, BOUNDARY_Y_MAX, BOUNDARY_Y_MIN, BOUNDARY_Z_MAX,
    BOUNDARY_Z_MIN, INTERIOR, classify_boundary_nodes,
};
use gridbox::prelude::*;

#[test]
fn cube_faces_edges_and_interior() {
    let mesh = RegularMesh::generate(
        IndexPoint::new([3, 3, 3]),
        Point::new([1.0, 1.0, 1.0]),
        Point::zero(),
    )
    .unwrap();
    let sets = classify_boundary_nodes(&mesh).unwrap();

    // 27 nodes: 1 interior, 26 on the boundary
    assert_eq!(sets.len(), 27);
    assert_eq!(sets.set_len(&INTERIOR.to_string()), 1);
    for tag in [
        BOUNDARY_X_MIN,
        BOUNDARY_X_MAX,
        BOUNDARY_Y_MIN,
        BOUNDARY_Y_MAX,
        BOUNDARY_Z_MIN,
        BOUNDARY_Z_MAX,
    ] {
        assert_eq!(sets.set_len(&tag.to_string()), 9, "face {tag}");
    }

    // an edge is the intersection of two faces
    let edge = sets.set_intersection(&BOUNDARY_X_MIN.to_string(), &BOUNDARY_Y_MIN.to_string());
    assert_eq!(edge.len(), 3);
    // a corner lies on three faces
    let corner: Vec<String> = sets.tags_of(&0).cloned().collect();
    assert_eq!(corner.len(), 3);

    // interior and any face are disjoint
    assert!(
        sets.set_intersection(&INTERIOR.to_string(), &BOUNDARY_Z_MAX.to_string())
            .is_empty()
    );
    sets.validate_invariants().unwrap();
}

#[test]
fn classification_values_are_node_coordinates() {
    let mesh = RegularMesh::generate(
        IndexPoint::new([2, 2]),
        Point::new([2.0, 2.0]),
        Point::new([1.0, 1.0]),
    )
    .unwrap();
    let sets = classify_boundary_nodes(&mesh).unwrap();
    // every node of a 2x2 grid is a corner on two faces
    assert_eq!(sets.set_len(&INTERIOR.to_string()), 0);
    for (key, point) in sets.iter() {
        assert_eq!(*point, mesh.nodes()[*key]);
        assert_eq!(sets.tags_of(key).count(), 2);
    }
}
