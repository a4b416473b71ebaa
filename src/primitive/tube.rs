//! Tube sweep along a closed parametric curve.
//!
//! The curve is any `Fn(f64) -> Point3` over `u in [0, 2π)`. Frames are
//! built per sample from a forward-difference tangent and the fixed +Z
//! helper axis; a degenerate difference reuses the previous sample's
//! tangent so a locally stalled curve never breaks the sweep.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::geom::{CurveFrame, Point3, Tolerance, Vec3};
use crate::model::{IndexError, MeshBuffer, TriangleRange};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TubeOptions {
    /// Samples along the curve; clamped to at least 1.
    pub seg_u: u32,
    /// Samples around the cross-section; clamped to at least 1.
    pub seg_v: u32,
    /// Cross-section radius.
    pub radius: f64,
}

impl Default for TubeOptions {
    fn default() -> Self {
        Self {
            seg_u: 128,
            seg_v: 16,
            radius: 0.3,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TubeError {
    #[error("tube radius must be finite, got {0}")]
    NonFiniteRadius(f64),
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// One evaluated curve position with its sweep frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    pub point: Point3,
    pub frame: CurveFrame,
}

// Frame of a +X tangent; the last-resort basis when every fallback above
// it has failed (possible only for non-finite curve output).
const AXIS_FALLBACK: CurveFrame = CurveFrame {
    tangent: Vec3::X,
    normal: Vec3::new(0.0, -1.0, 0.0),
    binormal: Vec3::new(0.0, 0.0, -1.0),
};

/// Evaluate `seg_u + 1` samples of a closed curve over one period.
///
/// The last parameter value is `2π`, so for a periodic curve the final
/// sample coincides with the first. Tangents are forward differences with
/// index wraparound; a difference below [`Tolerance::ZERO_LENGTH`] reuses
/// the previous tangent (the first sample falls back to +X).
#[must_use]
pub fn sample_closed_curve(curve: impl Fn(f64) -> Point3, seg_u: u32) -> Vec<CurveSample> {
    let seg_u = seg_u.max(1);
    let n = seg_u as usize;
    let tol = Tolerance::ZERO_LENGTH;

    let points: Vec<Point3> = (0..=seg_u)
        .map(|i| curve(TAU * f64::from(i) / f64::from(seg_u)))
        .collect();

    let mut samples = Vec::with_capacity(points.len());
    let mut prev_tangent = Vec3::X;
    for (i, point) in points.iter().copied().enumerate() {
        let diff = points[(i + 1) % n] - point;
        let tangent = if tol.is_zero_vec3(diff) {
            prev_tangent
        } else {
            diff.normalized().unwrap_or(prev_tangent)
        };
        prev_tangent = tangent;

        let frame = CurveFrame::from_tangent(tangent).unwrap_or(AXIS_FALLBACK);
        samples.push(CurveSample { point, frame });
    }

    samples
}

/// Sweep a circular cross-section along a closed curve.
///
/// Emits `(seg_u + 1) * (seg_v + 1)` vertices and `2 * seg_u * seg_v`
/// triangles wound outward. Both seam rows duplicate their first sample;
/// welding closes the surface.
pub fn generate_tube(
    mesh: &mut MeshBuffer,
    curve: impl Fn(f64) -> Point3,
    material: u32,
    options: &TubeOptions,
) -> Result<TriangleRange, TubeError> {
    if !options.radius.is_finite() {
        return Err(TubeError::NonFiniteRadius(options.radius));
    }
    let seg_u = options.seg_u.max(1);
    let seg_v = options.seg_v.max(1);
    let first = mesh.next_triangle_index();
    let base = mesh.vertex_count() as u32;

    for sample in sample_closed_curve(curve, seg_u) {
        for j in 0..=seg_v {
            let v = TAU * f64::from(j) / f64::from(seg_v);
            let offset = sample.frame.normal * (v.cos() * options.radius)
                + sample.frame.binormal * (v.sin() * options.radius);
            mesh.add_vertex(sample.point + offset);
        }
    }

    for i in 0..seg_u {
        for j in 0..seg_v {
            let a = base + i * (seg_v + 1) + j;
            let b = a + seg_v + 1;
            mesh.add_triangle(a, a + 1, b + 1, material)?;
            mesh.add_triangle(a, b + 1, b, material)?;
        }
    }

    Ok(mesh.range_from(first))
}

// ─────────────────────────────────────────────────────────────────────────────
// Trefoil
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrefoilParams {
    /// Torus major radius.
    pub a: f64,
    /// Torus minor radius.
    pub b: f64,
    /// Winding count around the torus tube.
    pub q: u32,
    pub tube: TubeOptions,
}

impl Default for TrefoilParams {
    fn default() -> Self {
        Self {
            a: 2.0,
            b: 1.0,
            q: 3,
            tube: TubeOptions::default(),
        }
    }
}

/// Point on the `(a, b, q)` torus-knot curve at parameter `u`.
#[must_use]
pub fn trefoil_point(a: f64, b: f64, q: u32, u: f64) -> Point3 {
    let qu = f64::from(q) * u;
    let r = a + b * qu.cos();
    Point3::new(r * u.cos(), r * u.sin(), b * qu.sin())
}

/// Sweep a tube along the trefoil curve.
pub fn generate_trefoil(
    mesh: &mut MeshBuffer,
    material: u32,
    params: &TrefoilParams,
) -> Result<TriangleRange, TubeError> {
    let TrefoilParams { a, b, q, tube } = *params;
    generate_tube(mesh, |u| trefoil_point(a, b, q, u), material, &tube)
}
