pub mod frame;
pub mod pinhole;
pub mod progress;
pub mod renderer;
pub mod settings;
