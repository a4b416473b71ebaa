//! Point cloud import.
//!
//! Each point becomes a small axis-aligned box through the cube generator,
//! so point clouds render as solid markers without any point-sprite support
//! downstream.

use serde::{Deserialize, Serialize};

use crate::geom::Point3;
use crate::model::{MaterialRegistry, MeshBuffer, RgbaColor, TriangleRange};
use crate::primitive::{CubeParams, generate_cube};

/// One point with an optional per-point color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub position: Point3,
    /// Colorless points resolve to [`RgbaColor::GRAY`].
    #[serde(default)]
    pub color: Option<RgbaColor>,
}

impl PointRecord {
    #[must_use]
    pub const fn new(position: Point3) -> Self {
        Self {
            position,
            color: None,
        }
    }

    #[must_use]
    pub const fn with_color(position: Point3, color: RgbaColor) -> Self {
        Self {
            position,
            color: Some(color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCloudOptions {
    /// Half the edge length of each point's marker box.
    pub half_size: f64,
}

impl Default for PointCloudOptions {
    fn default() -> Self {
        Self { half_size: 0.05 }
    }
}

/// Interpret raw color components from a point file.
///
/// Files store either normalized `0..=1` floats or `0..=255` byte values
/// with no marker for which; when every component is at most 1 the values
/// are treated as normalized and scaled up. An all-zero black point is
/// indistinguishable from normalized black, which is harmless.
#[must_use]
pub fn color_from_components(r: f64, g: f64, b: f64) -> RgbaColor {
    let normalized = r <= 1.0 && g <= 1.0 && b <= 1.0;
    if normalized {
        RgbaColor::from_float_channels(r * 255.0, g * 255.0, b * 255.0, 255.0)
    } else {
        RgbaColor::from_float_channels(r, g, b, 255.0)
    }
}

/// Emit one marker box per point.
///
/// Returns the triangle range covering all boxes. Box generation cannot
/// fail index validation, so the whole batch either emits or the range is
/// empty for an empty input.
pub fn import_points(
    mesh: &mut MeshBuffer,
    materials: &mut MaterialRegistry,
    points: &[PointRecord],
    options: &PointCloudOptions,
) -> TriangleRange {
    let first = mesh.next_triangle_index();
    let size = options.half_size * 2.0;

    for record in points {
        let color = record.color.unwrap_or(RgbaColor::GRAY);
        let material = materials.get_or_create(color);
        let params = CubeParams {
            size,
            center: record.position,
        };
        if let Err(err) = generate_cube(mesh, material, &params) {
            // Unreachable for a well-formed buffer; never aborts the batch.
            log::warn!("skipping point at {:?}: {err}", record.position);
        }
    }

    mesh.range_from(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorless_point_gets_gray_box() {
        let mut mesh = MeshBuffer::new();
        let mut materials = MaterialRegistry::new();
        let points = [PointRecord::new(Point3::new(1.0, 2.0, 3.0))];

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

        // Box corners sit half_size away from the point on each axis.
        for v in mesh.vertices() {
            assert!(((v.x - 1.0).abs() - 0.05).abs() < 1e-12);
            assert!(((v.y - 2.0).abs() - 0.05).abs() < 1e-12);
            assert!(((v.z - 3.0).abs() - 0.05).abs() < 1e-12);
        }
    }

    #[test]
    fn normalized_components_scale_to_bytes() {
        assert_eq!(
            color_from_components(1.0, 0.5, 0.0),
            RgbaColor::opaque(255, 128, 0)
        );
        assert_eq!(
            color_from_components(255.0, 128.0, 0.0),
            RgbaColor::opaque(255, 128, 0)
        );
        // Mixed magnitudes force the byte interpretation.
        assert_eq!(
            color_from_components(200.0, 0.5, 0.0),
            RgbaColor::opaque(200, 1, 0)
        );
    }

    #[test]
    fn points_sharing_a_color_share_a_material() {
        let mut mesh = MeshBuffer::new();
        let mut materials = MaterialRegistry::new();
        let red = RgbaColor::opaque(255, 0, 0);
        let points = [
            PointRecord::with_color(Point3::ORIGIN, red),
            PointRecord::with_color(Point3::new(1.0, 0.0, 0.0), red),
            PointRecord::new(Point3::new(2.0, 0.0, 0.0)),
        ];

        import_points(
            &mut mesh,
            &mut materials,
            &points,
            &PointCloudOptions::default(),
        );

        assert_eq!(materials.len(), 2);
        assert_eq!(mesh.triangle_count(), 3 * 12);
    }
}
