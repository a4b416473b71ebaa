//! Curve tessellation for imported entities.
//!
//! Wireframe entities have no surface of their own, so lines become thin
//! tubes and circles become filled disk fans. Ring vertices duplicate the
//! seam sample (angle 0 appears at both ends of the loop) while triangles
//! wrap with a modulo, so the final duplicate stays unreferenced. Topology
//! diagnostics weld it away.

use std::f64::consts::TAU;

use crate::geom::{Point3, Vec3};
use crate::model::{IndexError, MaterialRegistry, MeshBuffer, TriangleRange};

use super::entity::{Entity, EntityGeometry};

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Tube parameters for line-like entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTubeOptions {
    /// Radial segments per ring; clamped to at least 1.
    pub segments: u32,
    /// Tube radius in model units.
    pub radius: f64,
}

impl Default for LineTubeOptions {
    fn default() -> Self {
        Self {
            segments: 8,
            radius: 0.01,
        }
    }
}

/// Fan parameters for circle and arc entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskOptions {
    /// Rim segments; clamped to at least 1.
    pub segments: u32,
}

impl Default for DiskOptions {
    fn default() -> Self {
        Self { segments: 32 }
    }
}

/// Combined options for a batch import.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImportOptions {
    pub line_tube: LineTubeOptions,
    pub disk: DiskOptions,
}

// ─────────────────────────────────────────────────────────────────────────────
// Generators
// ─────────────────────────────────────────────────────────────────────────────

/// Tessellate a line segment as a thin tube around the segment axis.
///
/// Ring offsets lie in the XY plane (the fixed +Z reference axis), so the
/// tube cross-section does not rotate with the segment direction. Emits
/// `2 * (segments + 1)` vertices and `2 * segments` triangles. A zero-length
/// segment collapses the tube but still emits valid triangles; a segment
/// count below 2 cannot form distinct triangles and fails before touching
/// the buffer.
pub fn tessellate_line(
    mesh: &mut MeshBuffer,
    start: Point3,
    end: Point3,
    material: u32,
    options: &LineTubeOptions,
) -> Result<TriangleRange, IndexError> {
    let segments = options.segments.max(1);
    let first = mesh.next_triangle_index();
    let base = mesh.vertex_count() as u32;

    if segments < 2 {
        // The first triangle would be (base, base, base + 1).
        return Err(IndexError::RepeatedIndex {
            v0: base,
            v1: base,
            v2: base + 1,
        });
    }

    for i in 0..=segments {
        let theta = TAU * f64::from(i) / f64::from(segments);
        let offset = Vec3::new(
            theta.cos() * options.radius,
            theta.sin() * options.radius,
            0.0,
        );
        mesh.add_vertex(start.add_vec(offset));
        mesh.add_vertex(end.add_vec(offset));
    }

    for i in 0..segments {
        let curr = base + 2 * i;
        let next = base + 2 * ((i + 1) % segments);
        mesh.add_triangle(curr, next, next + 1, material)?;
        mesh.add_triangle(curr, next + 1, curr + 1, material)?;
    }

    Ok(mesh.range_from(first))
}

/// Tessellate a circle as a filled disk fan in the XY plane at the center's
/// height. Emits `segments + 2` vertices and `segments` triangles wound
/// counter-clockwise seen from +Z.
pub fn tessellate_circle(
    mesh: &mut MeshBuffer,
    center: Point3,
    radius: f64,
    material: u32,
    options: &DiskOptions,
) -> Result<TriangleRange, IndexError> {
    let segments = options.segments.max(1);
    let first = mesh.next_triangle_index();

    if segments < 2 {
        // The fan triangle would repeat its rim vertex.
        let hub = mesh.vertex_count() as u32;
        return Err(IndexError::RepeatedIndex {
            v0: hub,
            v1: hub + 1,
            v2: hub + 1,
        });
    }

    let hub = mesh.add_vertex(center);
    let base = mesh.vertex_count() as u32;
    for i in 0..=segments {
        let theta = TAU * f64::from(i) / f64::from(segments);
        let offset = Vec3::new(theta.cos() * radius, theta.sin() * radius, 0.0);
        mesh.add_vertex(center.add_vec(offset));
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle(hub, base + i, base + next, material)?;
    }

    Ok(mesh.range_from(first))
}

/// Tessellate a polyline as one tube per segment, with a closing segment
/// when `closed`. Fewer than two points emits nothing.
pub fn tessellate_polyline(
    mesh: &mut MeshBuffer,
    points: &[Point3],
    closed: bool,
    material: u32,
    options: &LineTubeOptions,
) -> Result<TriangleRange, IndexError> {
    let first = mesh.next_triangle_index();

    for pair in points.windows(2) {
        tessellate_line(mesh, pair[0], pair[1], material, options)?;
    }
    if closed && points.len() >= 2 {
        let last = points[points.len() - 1];
        tessellate_line(mesh, last, points[0], material, options)?;
    }

    Ok(mesh.range_from(first))
}

// ─────────────────────────────────────────────────────────────────────────────
// Batch driver
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome counts for one batch import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportStats {
    /// Entities that produced triangles.
    pub emitted: usize,
    /// Entities skipped (unsupported kind or tessellation failure).
    pub skipped: usize,
}

/// Tessellate every entity in the batch into `mesh`.
///
/// Failures are per-entity: an unsupported kind or a tessellation error is
/// logged and counted as skipped, and the batch continues. Materials are
/// resolved through the registry only for kinds this engine can tessellate,
/// so a skipped kind never grows the registry; entities sharing a color
/// share an index.
pub fn import_entities(
    mesh: &mut MeshBuffer,
    materials: &mut MaterialRegistry,
    entities: &[Entity],
    options: &ImportOptions,
) -> ImportStats {
    let mut stats = ImportStats::default();

    for entity in entities {
        let result = match &entity.geometry {
            EntityGeometry::Line { start, end } => {
                let material = materials.get_or_create(entity.color.resolve());
                tessellate_line(mesh, *start, *end, material, &options.line_tube)
            }
            EntityGeometry::Circle { center, radius }
            | EntityGeometry::Arc { center, radius } => {
                let material = materials.get_or_create(entity.color.resolve());
                tessellate_circle(mesh, *center, *radius, material, &options.disk)
            }
            EntityGeometry::Polyline { points, closed } => {
                let material = materials.get_or_create(entity.color.resolve());
                tessellate_polyline(mesh, points, *closed, material, &options.line_tube)
            }
            EntityGeometry::Unsupported { source_kind } => {
                log::debug!("skipping unsupported entity kind '{source_kind}'");
                stats.skipped += 1;
                continue;
            }
        };

        match result {
            Ok(_) => stats.emitted += 1,
            Err(err) => {
                log::warn!(
                    "skipping {} entity: {err}",
                    entity.geometry.kind_name()
                );
                stats.skipped += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_tube_emits_ring_pairs() {
        let mut mesh = MeshBuffer::new();
        let options = LineTubeOptions::default();
        let range = tessellate_line(
            &mut mesh,
            Point3::ORIGIN,
            Point3::new(0.0, 0.0, 5.0),
            0,
            &options,
        )
        .unwrap();

        assert_eq!(mesh.vertex_count(), 2 * (8 + 1));
        assert_eq!(range.len(), 2 * 8);

        // Start-ring vertices sit on the tube radius around the start point.
        for i in 0..=8u32 {
            let v = mesh.vertex(2 * i).unwrap();
            let r = (v.x * v.x + v.y * v.y).sqrt();
            assert!((r - options.radius).abs() < 1e-12);
            assert_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn zero_length_line_still_emits() {
        let mut mesh = MeshBuffer::new();
        let p = Point3::new(1.0, 2.0, 3.0);
        let range =
            tessellate_line(&mut mesh, p, p, 0, &LineTubeOptions::default()).unwrap();
        assert_eq!(range.len(), 16);
    }

    #[test]
    fn disk_fan_counts() {
        let mut mesh = MeshBuffer::new();
        let range = tessellate_circle(
            &mut mesh,
            Point3::new(0.0, 0.0, 1.0),
            2.0,
            0,
            &DiskOptions::default(),
        )
        .unwrap();

        assert_eq!(mesh.vertex_count(), 32 + 2);
        assert_eq!(range.len(), 32);
        // All rim vertices stay at the center's height.
        for v in mesh.vertices() {
            assert_eq!(v.z, 1.0);
        }
    }

    #[test]
    fn polyline_open_and_closed_segment_counts() {
        let points = [
            Point3::ORIGIN,
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let options = LineTubeOptions::default();

        let mut open = MeshBuffer::new();
        let open_range =
            tessellate_polyline(&mut open, &points, false, 0, &options).unwrap();
        assert_eq!(open_range.len(), 2 * 16);

        let mut closed = MeshBuffer::new();
        let closed_range =
            tessellate_polyline(&mut closed, &points, true, 0, &options).unwrap();
        assert_eq!(closed_range.len(), 3 * 16);
    }

    #[test]
    fn short_polyline_emits_nothing() {
        let mut mesh = MeshBuffer::new();
        let range = tessellate_polyline(
            &mut mesh,
            &[Point3::ORIGIN],
            true,
            0,
            &LineTubeOptions::default(),
        )
        .unwrap();
        assert!(range.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn one_segment_tube_fails_without_touching_the_buffer() {
        let mut mesh = MeshBuffer::new();
        let result = tessellate_line(
            &mut mesh,
            Point3::ORIGIN,
            Point3::new(1.0, 0.0, 0.0),
            0,
            &LineTubeOptions {
                segments: 1,
                radius: 0.01,
            },
        );
        assert!(matches!(result, Err(IndexError::RepeatedIndex { .. })));
        assert_eq!(mesh.vertex_count(), 0);

        let result = tessellate_circle(
            &mut mesh,
            Point3::ORIGIN,
            1.0,
            0,
            &DiskOptions { segments: 1 },
        );
        assert!(matches!(result, Err(IndexError::RepeatedIndex { .. })));
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn closed_two_point_polyline_gets_a_closing_segment() {
        let points = [Point3::ORIGIN, Point3::new(1.0, 0.0, 0.0)];
        let mut mesh = MeshBuffer::new();
        let range = tessellate_polyline(
            &mut mesh,
            &points,
            true,
            0,
            &LineTubeOptions::default(),
        )
        .unwrap();

        // One forward segment plus the closing segment back.
        assert_eq!(range.len(), 2 * 16);
    }
}
