use gridbox::prelude::*;

const BAR_MSH: &str = "\
$MeshFormat
2.2 0 8
$EndMeshFormat
$Comments
generated by hand
$EndComments
$Nodes
8
1 0 0 0
2 1 0 0
3 1 1 0
4 0 1 0
5 0 0 1
6 1 0 1
7 1 1 1
8 0 1 1
$EndNodes
$Elements
1
1 5 2 0 1 1 2 3 4 5 6 7 8
$EndElements
";

#[test]
fn msh_to_xdmf_pipeline() {
    let mut mesh = MshReader.read(BAR_MSH.as_bytes()).unwrap();
    assert_eq!(mesh.node_count(), 8);
    assert_eq!(mesh.element_count(), 1);
    assert_eq!(mesh.elements()[0].cell_type, CellType::Hexahedron);
    assert_eq!(mesh.elements()[0].corners, vec![0, 1, 2, 3, 4, 5, 6, 7]);

    let (min, max) = mesh.extents().unwrap();
    assert_eq!(min, Point::new([0.0, 0.0, 0.0]));
    assert_eq!(max, Point::new([1.0, 1.0, 1.0]));

    mesh.add_node_data("height", mesh.nodes().iter().map(|n| n[2]).collect())
        .unwrap();

    let mut buffer = Vec::new();
    XdmfWriter::new().write(&mut buffer, &mesh).unwrap();
    let doc = String::from_utf8(buffer).unwrap();
    assert!(doc.contains("TopologyType=\"Hexahedron\" NumberOfElements=\"1\""));
    assert!(doc.contains("0 1 2 3 4 5 6 7"));
    assert!(doc.contains("Attribute Name=\"height\""));
}

#[test]
fn generated_grid_round_trips_through_the_same_writer() {
    let regular = RegularMesh::generate(
        IndexPoint::new([3, 3]),
        Point::new([0.5, 0.5]),
        Point::zero(),
    )
    .unwrap();
    let mut mesh = regular.to_unstructured();
    let centers: Vec<f64> = (0..mesh.element_count())
        .map(|i| mesh.element_center(i).unwrap()[0])
        .collect();
    mesh.add_element_data("center_x", centers).unwrap();

    let mut buffer = Vec::new();
    XdmfWriter::with_grid_name("unit_square")
        .write(&mut buffer, &mesh)
        .unwrap();
    let doc = String::from_utf8(buffer).unwrap();
    assert!(doc.contains("<Grid Name=\"unit_square\" GridType=\"Uniform\">"));
    assert!(doc.contains("TopologyType=\"Quadrilateral\" NumberOfElements=\"4\""));
    assert!(doc.contains("Center=\"Cell\""));
    assert!(doc.contains("0.25 0.75 0.25 0.75"));
}
