pub mod sdf_intersection;
pub mod sdf_intersection_smooth;
pub mod sdf_subtraction;
pub mod sdf_subtraction_smooth;
pub mod sdf_union;
pub mod sdf_union_smooth;
mod smoothing;
