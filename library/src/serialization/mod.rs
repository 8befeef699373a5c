pub mod description_error;
pub(crate) mod number;
pub(crate) mod scene_description;
pub mod scene_loader;
pub(crate) mod track_library;
