mod solid;
mod tube;

use serde::{Deserialize, Serialize};

use crate::model::{IndexError, MeshBuffer, TriangleRange};

pub use solid::{
    ConeParams, CubeParams, CylinderParams, PlaneParams, SphereParams, generate_cone,
    generate_cube, generate_cylinder, generate_plane, generate_sphere,
};
pub use tube::{
    CurveSample, TrefoilParams, TubeError, TubeOptions, generate_trefoil, generate_tube,
    sample_closed_curve, trefoil_point,
};

/// One primitive request from the studio/UI layer, kind plus its params.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimitiveRequest {
    Cube(CubeParams),
    Sphere(SphereParams),
    Cylinder(CylinderParams),
    Cone(ConeParams),
    Plane(PlaneParams),
    Trefoil(TrefoilParams),
}

#[derive(Debug, thiserror::Error)]
pub enum PrimitiveError {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Tube(#[from] TubeError),
}

/// Generate the requested primitive into `mesh`.
pub fn generate_primitive(
    mesh: &mut MeshBuffer,
    material: u32,
    request: &PrimitiveRequest,
) -> Result<TriangleRange, PrimitiveError> {
    let range = match request {
        PrimitiveRequest::Cube(params) => generate_cube(mesh, material, params)?,
        PrimitiveRequest::Sphere(params) => generate_sphere(mesh, material, params)?,
        PrimitiveRequest::Cylinder(params) => generate_cylinder(mesh, material, params)?,
        PrimitiveRequest::Cone(params) => generate_cone(mesh, material, params)?,
        PrimitiveRequest::Plane(params) => generate_plane(mesh, material, params)?,
        PrimitiveRequest::Trefoil(params) => generate_trefoil(mesh, material, params)?,
    };
    Ok(range)
}
