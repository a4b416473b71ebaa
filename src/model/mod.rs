mod material;
mod mesh;
mod topology;

pub use material::{MaterialEntry, MaterialRegistry, RgbaColor};
pub use mesh::{IndexError, MeshBuffer, Triangle, TriangleRange};
pub use topology::{EdgeTopology, edge_topology, signed_volume};
