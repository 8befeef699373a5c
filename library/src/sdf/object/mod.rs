pub mod sdf_box;
pub mod sdf_capped_cylinder_along_y;
pub mod sdf_menger_sponge;
pub mod sdf_plane;
pub mod sdf_pyramid;
pub mod sdf_sphere;
pub mod sdf_torus_xz;
