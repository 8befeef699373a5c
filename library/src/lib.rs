#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]
#![allow(clippy::needless_range_loop)]

pub mod animation;
pub mod geometry;
pub mod material;
pub mod render;
pub mod scene;
pub mod sdf;
pub mod serialization;
pub mod tracer;
pub mod utils;
