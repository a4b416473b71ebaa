//! Mesh topology diagnostics.
//!
//! Generators in this crate duplicate seam and pole vertices (the last rim
//! vertex repeats angle 0, sphere poles repeat per column), so topology is
//! judged after welding coincident positions: duplicated seams collapse onto
//! one edge, and pole quads collapse into degenerate triangles that are
//! dropped before counting. The diagnostics only verify; nothing here
//! repairs a mesh.

use std::collections::HashMap;

use crate::geom::{Point3, Tolerance};
use crate::model::mesh::MeshBuffer;

/// Undirected edge usage counts for a welded triangle mesh.
///
/// A closed 2-manifold surface has zero open and zero non-manifold edges;
/// an open sheet (the plane primitive) reports its boundary as open edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeTopology {
    /// Edges used by exactly one triangle (boundary edges).
    pub open_edge_count: usize,
    /// Edges used by more than two triangles.
    pub non_manifold_edge_count: usize,
}

impl EdgeTopology {
    /// True for a closed 2-manifold surface.
    #[must_use]
    pub const fn is_watertight(self) -> bool {
        self.open_edge_count == 0 && self.non_manifold_edge_count == 0
    }
}

/// Count open and non-manifold edges after welding coincident vertices.
#[must_use]
pub fn edge_topology(mesh: &MeshBuffer, tol: Tolerance) -> EdgeTopology {
    let remap = weld_remap(mesh.vertices(), tol);

    let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();
    for triangle in mesh.triangles() {
        let [a, b, c] = triangle.indices().map(|i| remap[i as usize]);

        // Welding can collapse a triangle; skip it like a culled degenerate.
        if a == b || b == c || a == c {
            continue;
        }

        for (ea, eb) in [(a, b), (b, c), (c, a)] {
            let key = if ea <= eb { (ea, eb) } else { (eb, ea) };
            *edge_counts.entry(key).or_insert(0) += 1;
        }
    }

    let mut topology = EdgeTopology::default();
    for count in edge_counts.into_values() {
        if count == 1 {
            topology.open_edge_count += 1;
        } else if count > 2 {
            topology.non_manifold_edge_count += 1;
        }
    }
    topology
}

/// Signed volume of the triangle mesh via the divergence theorem.
///
/// Positive for closed surfaces wound counter-clockwise as seen from
/// outside; meaningless for open meshes.
#[must_use]
pub fn signed_volume(mesh: &MeshBuffer) -> f64 {
    let vertices = mesh.vertices();
    let mut volume = 0.0;
    for triangle in mesh.triangles() {
        let (Some(a), Some(b), Some(c)) = (
            vertices.get(triangle.v0 as usize),
            vertices.get(triangle.v1 as usize),
            vertices.get(triangle.v2 as usize),
        ) else {
            continue;
        };

        let av = a.to_vec3();
        let bv = b.to_vec3();
        let cv = c.to_vec3();
        volume += av.dot(bv.cross(cv));
    }
    volume / 6.0
}

/// Map each vertex index to the index of the first vertex within `tol` of it.
fn weld_remap(vertices: &[Point3], tol: Tolerance) -> Vec<u32> {
    if !tol.eps.is_finite() || tol.eps <= 0.0 {
        return (0..vertices.len() as u32).collect();
    }

    let inv = 1.0 / tol.eps;
    let quantize = |value: f64| -> Option<i64> {
        if value.is_finite() {
            Some((value * inv).floor().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
        } else {
            None
        }
    };

    let mut buckets: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();
    let mut remap: Vec<u32> = Vec::with_capacity(vertices.len());

    for (i, p) in vertices.iter().copied().enumerate() {
        let key = match (quantize(p.x), quantize(p.y), quantize(p.z)) {
            (Some(kx), Some(ky), Some(kz)) if p.is_finite() => Some((kx, ky, kz)),
            _ => None,
        };

        let mut found = None;
        if let Some(key) = key {
            'search: for dx in -1i64..=1 {
                for dy in -1i64..=1 {
                    for dz in -1i64..=1 {
                        let lookup = (key.0 + dx, key.1 + dy, key.2 + dz);
                        if let Some(candidates) = buckets.get(&lookup) {
                            for &candidate in candidates {
                                if tol.approx_eq_point3(vertices[candidate as usize], p) {
                                    found = Some(candidate);
                                    break 'search;
                                }
                            }
                        }
                    }
                }
            }
        }

        let index = i as u32;
        match found {
            Some(existing) => remap.push(existing),
            None => {
                remap.push(index);
                if let Some(key) = key {
                    buckets.entry(key).or_default().push(index);
                }
            }
        }
    }

    remap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> MeshBuffer {
        let mut mesh = MeshBuffer::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        let d = mesh.add_vertex(Point3::new(0.0, 0.0, 1.0));

        // Outward winding.
        mesh.add_triangle(a, c, b, 0).unwrap();
        mesh.add_triangle(a, b, d, 0).unwrap();
        mesh.add_triangle(b, c, d, 0).unwrap();
        mesh.add_triangle(a, d, c, 0).unwrap();
        mesh
    }

    #[test]
    fn tetrahedron_is_watertight_with_positive_volume() {
        let mesh = tetrahedron();
        let topology = edge_topology(&mesh, Tolerance::WELD);

        assert!(topology.is_watertight());
        assert!((signed_volume(&mesh) - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn single_triangle_has_three_open_edges() {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2, 0).unwrap();

        let topology = edge_topology(&mesh, Tolerance::WELD);
        assert_eq!(topology.open_edge_count, 3);
        assert_eq!(topology.non_manifold_edge_count, 0);
    }

    #[test]
    fn seam_duplicates_weld_into_shared_edges() {
        // Two triangles sharing an edge only through duplicated positions.
        let mut mesh = MeshBuffer::new();
        let a0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b0 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(a0, b0, c, 0).unwrap();

        let a1 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let d = mesh.add_vertex(Point3::new(0.0, -1.0, 0.0));
        mesh.add_triangle(b1, a1, d, 0).unwrap();

        let topology = edge_topology(&mesh, Tolerance::WELD);
        // The shared (welded) edge is interior; the other four stay open.
        assert_eq!(topology.open_edge_count, 4);
        assert_eq!(topology.non_manifold_edge_count, 0);
    }
}
