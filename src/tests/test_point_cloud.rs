use crate::geom::{Point3, Tolerance};
use crate::import::{
    PointCloudOptions, PointRecord, color_from_components, import_points,
};
use crate::model::{MaterialRegistry, MeshBuffer, RgbaColor, edge_topology, signed_volume};

#[test]
fn colorless_point_becomes_gray_marker_box() {
    let mut mesh = MeshBuffer::new();
    let mut materials = MaterialRegistry::new();
    let points = [PointRecord::new(Point3::new(-3.0, 0.5, 12.0))];

    let range = import_points(
        &mut mesh,
        &mut materials,
        &points,
        &PointCloudOptions::default(),
    );

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(range.len(), 12);
    assert_eq!(materials.len(), 1);
    assert_eq!(materials.entries()[0].color, RgbaColor::GRAY);

    // The marker is a closed box centered on the point.
    assert!(edge_topology(&mesh, Tolerance::WELD).is_watertight());
    let expected_volume = 0.1_f64.powi(3);
    assert!((signed_volume(&mesh) - expected_volume).abs() < 1e-9);

    let centroid = mesh.vertices().iter().fold(Point3::ORIGIN, |acc, v| {
        Point3::new(acc.x + v.x / 8.0, acc.y + v.y / 8.0, acc.z + v.z / 8.0)
    });
    assert!(Tolerance::DEFAULT.approx_eq_point3(centroid, points[0].position));
}

#[test]
fn marker_size_follows_options() {
    let mut mesh = MeshBuffer::new();
    let mut materials = MaterialRegistry::new();
    let points = [PointRecord::new(Point3::ORIGIN)];

    import_points(
        &mut mesh,
        &mut materials,
        &points,
        &PointCloudOptions { half_size: 0.5 },
    );

    for v in mesh.vertices() {
        assert_eq!(v.x.abs(), 0.5);
        assert_eq!(v.y.abs(), 0.5);
        assert_eq!(v.z.abs(), 0.5);
    }
}

#[test]
fn component_heuristic_distinguishes_normalized_from_bytes() {
    // All components at most 1: normalized floats.
    assert_eq!(
        color_from_components(0.0, 1.0, 0.0),
        RgbaColor::opaque(0, 255, 0)
    );
    // Any component above 1: byte values.
    assert_eq!(
        color_from_components(0.0, 255.0, 0.0),
        RgbaColor::opaque(0, 255, 0)
    );
    // All-zero reads as normalized black, which is still black.
    assert_eq!(color_from_components(0.0, 0.0, 0.0), RgbaColor::BLACK);
}

#[test]
fn batch_of_points_emits_one_box_each() {
    let mut mesh = MeshBuffer::new();
    let mut materials = MaterialRegistry::new();
    let points: Vec<PointRecord> = (0..10)
        .map(|i| PointRecord::new(Point3::new(f64::from(i), 0.0, 0.0)))
        .collect();

    let range = import_points(
        &mut mesh,
        &mut materials,
        &points,
        &PointCloudOptions::default(),
    );

    assert_eq!(mesh.vertex_count(), 10 * 8);
    assert_eq!(range.len(), 10 * 12);
    assert_eq!(materials.len(), 1);
}
