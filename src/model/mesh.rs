//! Append-only mesh storage.
//!
//! `MeshBuffer` is the only mutator of vertex/triangle storage: generators
//! append vertices, then append triangles referencing them. Indices are
//! assigned in insertion order and stay stable for the lifetime of the mesh;
//! there is no removal operation. A finished buffer is handed to the scene
//! layer read-only.

use crate::geom::Point3;

/// A triangle referencing three vertex indices plus one material index.
///
/// A plain record with no behavior attached; winding order is significant
/// (counter-clockwise seen from the outward-facing side for closed solids).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub v0: u32,
    pub v1: u32,
    pub v2: u32,
    pub material: u32,
}

impl Triangle {
    #[must_use]
    pub const fn new(v0: u32, v1: u32, v2: u32, material: u32) -> Self {
        Self { v0, v1, v2, material }
    }

    /// Vertex indices as an array, in winding order.
    #[must_use]
    pub const fn indices(self) -> [u32; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// True when all three vertex indices are distinct.
    #[must_use]
    pub const fn has_distinct_indices(self) -> bool {
        self.v0 != self.v1 && self.v1 != self.v2 && self.v0 != self.v2
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("vertex index {index} is out of range (vertex count {vertex_count})")]
    OutOfRange { index: u32, vertex_count: u32 },
    #[error("triangle repeats a vertex index ({v0}, {v1}, {v2})")]
    RepeatedIndex { v0: u32, v1: u32, v2: u32 },
}

/// Half-open range `[start, end)` of triangle indices written by one
/// generator call, so callers can attribute geometry to its source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleRange {
    pub start: u32,
    pub end: u32,
}

impl TriangleRange {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

/// Growable vertex and triangle buffers with stable insertion-order indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    name: Option<String>,
    vertices: Vec<Point3>,
    triangles: Vec<Triangle>,
}

impl MeshBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named buffer; the scene layer names meshes after their source.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Append a vertex and return its index (monotonically increasing from 0).
    pub fn add_vertex(&mut self, p: Point3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(p);
        index
    }

    /// Append a triangle and return its index.
    ///
    /// Fails when any vertex index is out of range or the triple repeats an
    /// index. Failure leaves the buffer unchanged; it is fatal only to this
    /// one insertion, never to the mesh.
    pub fn add_triangle(
        &mut self,
        v0: u32,
        v1: u32,
        v2: u32,
        material: u32,
    ) -> Result<u32, IndexError> {
        let vertex_count = self.vertices.len() as u32;
        for index in [v0, v1, v2] {
            if index >= vertex_count {
                return Err(IndexError::OutOfRange { index, vertex_count });
            }
        }

        let triangle = Triangle::new(v0, v1, v2, material);
        if !triangle.has_distinct_indices() {
            return Err(IndexError::RepeatedIndex { v0, v1, v2 });
        }

        let index = self.triangles.len() as u32;
        self.triangles.push(triangle);
        Ok(index)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[must_use]
    pub fn vertex(&self, index: u32) -> Option<Point3> {
        self.vertices.get(index as usize).copied()
    }

    #[must_use]
    pub fn triangle(&self, index: u32) -> Option<Triangle> {
        self.triangles.get(index as usize).copied()
    }

    /// The range that triangles appended from this moment on will occupy.
    /// Pair with [`MeshBuffer::range_from`] around a generator call.
    #[must_use]
    pub fn next_triangle_index(&self) -> u32 {
        self.triangles.len() as u32
    }

    /// Range of triangles appended since `start` was captured.
    #[must_use]
    pub fn range_from(&self, start: u32) -> TriangleRange {
        TriangleRange::new(start, self.triangles.len() as u32)
    }
}
