#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Tessellation engine turning CAD entity records, point clouds and
//! procedural primitives into indexed triangle meshes.
//!
//! All geometry flows into [`MeshBuffer`]: generators append vertices and
//! triangles, tag triangles with indices into a color-deduplicated
//! [`MaterialRegistry`], and return the [`TriangleRange`] they wrote so the
//! caller can attribute geometry back to its source record. Coordinates are
//! world-space with +Z up; closed solids are wound counter-clockwise seen
//! from outside.

pub mod geom;
pub mod import;
pub mod model;
pub mod primitive;

pub use geom::{CurveFrame, Point3, Tolerance, Vec3};
pub use model::{
    EdgeTopology, IndexError, MaterialEntry, MaterialRegistry, MeshBuffer, RgbaColor,
    Triangle, TriangleRange, edge_topology, signed_volume,
};

#[cfg(test)]
mod tests;
