use crate::geom::Point3;
use crate::import::{
    Entity, EntityColor, EntityGeometry, ImportOptions, PointCloudOptions, PointRecord,
    import_entities, import_points,
};
use crate::model::{MaterialRegistry, MeshBuffer, RgbaColor};
use crate::primitive::{PrimitiveRequest, SphereParams, generate_primitive};

// Every import path appends into the same buffer; this exercises them
// together the way a scene build does.
#[test]
fn mixed_sources_share_one_buffer_and_registry() {
    let mut mesh = MeshBuffer::with_name("scene");
    let mut materials = MaterialRegistry::new();

    let entities = [Entity::new(EntityGeometry::Line {
        start: Point3::ORIGIN,
        end: Point3::new(1.0, 0.0, 0.0),
    })
    .with_color(EntityColor::ByIndex(1))];
    let stats = import_entities(
        &mut mesh,
        &mut materials,
        &entities,
        &ImportOptions::default(),
    );
    assert_eq!(stats.emitted, 1);

    let red = RgbaColor::opaque(255, 0, 0);
    let points = [PointRecord::with_color(Point3::new(5.0, 0.0, 0.0), red)];
    import_points(
        &mut mesh,
        &mut materials,
        &points,
        &PointCloudOptions::default(),
    );

    let sphere_material = materials.get_or_create(RgbaColor::WHITE);
    let request = PrimitiveRequest::Sphere(SphereParams::default());
    let sphere = generate_primitive(&mut mesh, sphere_material, &request).unwrap();

    // Palette index 1 and the explicit point color are the same red.
    assert_eq!(materials.len(), 2);

    // Ranges cover the buffer without gaps and all indices stay in bounds.
    assert_eq!(sphere.end as usize, mesh.triangle_count());
    for triangle in mesh.triangles() {
        assert!(triangle.has_distinct_indices());
        for index in triangle.indices() {
            assert!((index as usize) < mesh.vertex_count());
        }
        assert!((triangle.material as usize) < materials.len());
    }
    for vertex in mesh.vertices() {
        assert!(vertex.is_finite());
    }

    assert_eq!(mesh.name(), Some("scene"));
}
