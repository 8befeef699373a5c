pub mod sdf_elongate;
pub mod sdf_onion;
pub mod sdf_round;
