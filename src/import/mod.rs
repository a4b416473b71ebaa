mod entity;
mod point_cloud;
mod tessellate;

pub use entity::{Entity, EntityColor, EntityGeometry, INDEX_PALETTE};
pub use point_cloud::{
    PointCloudOptions, PointRecord, color_from_components, import_points,
};
pub use tessellate::{
    DiskOptions, ImportOptions, ImportStats, LineTubeOptions, import_entities,
    tessellate_circle, tessellate_line, tessellate_polyline,
};
