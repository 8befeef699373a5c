pub mod camera;
pub mod error;
pub mod frozen_scene;
pub mod scene;
