mod test_mesh_sanity;
mod test_point_cloud;
