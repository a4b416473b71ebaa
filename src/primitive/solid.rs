//! Procedural solid primitives.
//!
//! Every generator appends into the caller's buffer, tags all of its
//! triangles with one material index, and returns the triangle range it
//! wrote. Winding is counter-clockwise seen from outside, so the closed
//! solids come out with positive signed volume. Z is up.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::geom::Point3;
use crate::model::{IndexError, MeshBuffer, TriangleRange};

// ─────────────────────────────────────────────────────────────────────────────
// Params
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeParams {
    /// Edge length.
    pub size: f64,
    pub center: Point3,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            size: 1.0,
            center: Point3::ORIGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    pub radius: f64,
    /// Longitudinal divisions; clamped to at least 3.
    pub segments: u32,
    /// Latitudinal divisions pole to pole; clamped to at least 2.
    pub rings: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: 32,
            rings: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    pub radius: f64,
    pub height: f64,
    /// Radial divisions; clamped to at least 3.
    pub segments: u32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 2.0,
            segments: 32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    pub radius: f64,
    pub height: f64,
    /// Radial divisions; clamped to at least 3.
    pub segments: u32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 2.0,
            segments: 32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneParams {
    /// Edge length of the square sheet.
    pub size: f64,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generators
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned cube: 8 vertices, 12 triangles.
///
/// The point-cloud importer reuses this path with a per-point center, so the
/// center offset is part of the params rather than a post-transform.
pub fn generate_cube(
    mesh: &mut MeshBuffer,
    material: u32,
    params: &CubeParams,
) -> Result<TriangleRange, IndexError> {
    let first = mesh.next_triangle_index();
    let h = params.size / 2.0;
    let c = params.center;

    let corners = [
        Point3::new(c.x - h, c.y - h, c.z - h),
        Point3::new(c.x + h, c.y - h, c.z - h),
        Point3::new(c.x + h, c.y + h, c.z - h),
        Point3::new(c.x - h, c.y + h, c.z - h),
        Point3::new(c.x - h, c.y - h, c.z + h),
        Point3::new(c.x + h, c.y - h, c.z + h),
        Point3::new(c.x + h, c.y + h, c.z + h),
        Point3::new(c.x - h, c.y + h, c.z + h),
    ];
    let base = mesh.vertex_count() as u32;
    for corner in corners {
        mesh.add_vertex(corner);
    }

    // Bottom, top, then the four sides; quads wound outward.
    const FACES: [[u32; 4]; 6] = [
        [0, 3, 2, 1],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
    ];
    for [a, b, c, d] in FACES {
        mesh.add_triangle(base + a, base + b, base + c, material)?;
        mesh.add_triangle(base + a, base + c, base + d, material)?;
    }

    Ok(mesh.range_from(first))
}

/// UV sphere centered at the origin.
///
/// The grid duplicates the seam column and the pole rows; pole-row quads
/// produce triangles with distinct indices but coincident positions, which
/// the topology weld collapses.
pub fn generate_sphere(
    mesh: &mut MeshBuffer,
    material: u32,
    params: &SphereParams,
) -> Result<TriangleRange, IndexError> {
    let segments = params.segments.max(3);
    let rings = params.rings.max(2);
    let first = mesh.next_triangle_index();
    let base = mesh.vertex_count() as u32;

    for ring in 0..=rings {
        let phi = PI * f64::from(ring) / f64::from(rings);
        let (sin_phi, cos_phi) = phi.sin_cos();
        for seg in 0..=segments {
            let theta = TAU * f64::from(seg) / f64::from(segments);
            mesh.add_vertex(Point3::new(
                params.radius * sin_phi * theta.cos(),
                params.radius * sin_phi * theta.sin(),
                params.radius * cos_phi,
            ));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let a = base + ring * (segments + 1) + seg;
            let b = a + segments + 1;
            mesh.add_triangle(a, b, a + 1, material)?;
            mesh.add_triangle(b, b + 1, a + 1, material)?;
        }
    }

    Ok(mesh.range_from(first))
}

/// Capped cylinder centered at the origin, axis along Z.
pub fn generate_cylinder(
    mesh: &mut MeshBuffer,
    material: u32,
    params: &CylinderParams,
) -> Result<TriangleRange, IndexError> {
    let segments = params.segments.max(3);
    let first = mesh.next_triangle_index();
    let h = params.height / 2.0;

    let bottom_center = mesh.add_vertex(Point3::new(0.0, 0.0, -h));
    let top_center = mesh.add_vertex(Point3::new(0.0, 0.0, h));

    let ring_base = mesh.vertex_count() as u32;
    for seg in 0..=segments {
        let theta = TAU * f64::from(seg) / f64::from(segments);
        let (x, y) = (params.radius * theta.cos(), params.radius * theta.sin());
        mesh.add_vertex(Point3::new(x, y, -h));
        mesh.add_vertex(Point3::new(x, y, h));
    }

    for seg in 0..segments {
        let b0 = ring_base + 2 * seg;
        let t0 = b0 + 1;
        let b1 = ring_base + 2 * (seg + 1);
        let t1 = b1 + 1;

        mesh.add_triangle(bottom_center, b1, b0, material)?;
        mesh.add_triangle(top_center, t0, t1, material)?;
        mesh.add_triangle(b0, b1, t1, material)?;
        mesh.add_triangle(b0, t1, t0, material)?;
    }

    Ok(mesh.range_from(first))
}

/// Cone centered at the origin, apex up.
pub fn generate_cone(
    mesh: &mut MeshBuffer,
    material: u32,
    params: &ConeParams,
) -> Result<TriangleRange, IndexError> {
    let segments = params.segments.max(3);
    let first = mesh.next_triangle_index();
    let h = params.height / 2.0;

    let apex = mesh.add_vertex(Point3::new(0.0, 0.0, h));
    let base_center = mesh.add_vertex(Point3::new(0.0, 0.0, -h));

    let ring_base = mesh.vertex_count() as u32;
    for seg in 0..=segments {
        let theta = TAU * f64::from(seg) / f64::from(segments);
        mesh.add_vertex(Point3::new(
            params.radius * theta.cos(),
            params.radius * theta.sin(),
            -h,
        ));
    }

    for seg in 0..segments {
        let v0 = ring_base + seg;
        let v1 = ring_base + seg + 1;
        mesh.add_triangle(apex, v0, v1, material)?;
        mesh.add_triangle(base_center, v1, v0, material)?;
    }

    Ok(mesh.range_from(first))
}

/// Single-sided square sheet in the XY plane, facing +Z. Open by design;
/// its four boundary edges show up as open edges in the diagnostics.
pub fn generate_plane(
    mesh: &mut MeshBuffer,
    material: u32,
    params: &PlaneParams,
) -> Result<TriangleRange, IndexError> {
    let first = mesh.next_triangle_index();
    let h = params.size / 2.0;

    let base = mesh.vertex_count() as u32;
    mesh.add_vertex(Point3::new(-h, -h, 0.0));
    mesh.add_vertex(Point3::new(h, -h, 0.0));
    mesh.add_vertex(Point3::new(h, h, 0.0));
    mesh.add_vertex(Point3::new(-h, h, 0.0));

    mesh.add_triangle(base, base + 1, base + 2, material)?;
    mesh.add_triangle(base, base + 2, base + 3, material)?;

    Ok(mesh.range_from(first))
}
