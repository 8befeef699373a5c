use crate::scene::error::SceneError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptionError {
    #[error("failed to read {path:?}: {what}")]
    Io { path: PathBuf, what: String },
    #[error("malformed scene description: {what}")]
    Syntax { what: String },
    #[error("can not evaluate number {text:?}")]
    InvalidNumber { text: String },
    #[error("object {object:?} refers to unknown material {material:?}")]
    UnknownMaterial { object: String, material: String },
    #[error("object {object:?} refers to unknown object {reference:?}")]
    UnknownObject { object: String, reference: String },
    #[error("object {object:?} is part of a reference cycle")]
    CyclicReference { object: String },
    #[error("unknown track {name:?}")]
    UnknownTrack { name: String },
    #[error("track {name:?} is defined more than once")]
    DuplicateTrack { name: String },
    #[error("track {name:?} has no keys")]
    EmptyTrack { name: String },
    #[error("track {name:?} does not hold {expected} values")]
    TrackValueMismatch { name: String, expected: &'static str },
    #[error("{field} of {object:?} expects {expected} components, got {actual}")]
    WrongArity { object: String, field: &'static str, expected: &'static str, actual: usize },
    #[error("rotation of {object:?} is malformed: {what}")]
    InvalidRotation { object: String, what: &'static str },
    #[error("material {material:?} is invalid: {source}")]
    InvalidMaterial {
        material: String,
        #[source]
        source: SceneError,
    },
    #[error("object {object:?} is invalid: {source}")]
    InvalidObject {
        object: String,
        #[source]
        source: SceneError,
    },
    #[error(transparent)]
    Scene(#[from] SceneError),
}
