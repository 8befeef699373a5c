use crate::animation::track::Blending;
use crate::material::material::MaterialClass;
use crate::render::settings::RenderSettings;
use crate::serialization::number::Number;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top level of a scene file; render settings sit beside the scene sections.
#[derive(Debug, Deserialize)]
pub(crate) struct SceneDescription {
    #[serde(flatten)]
    pub(crate) settings: RenderSettings,
    #[serde(default)]
    pub(crate) camera: CameraDescription,
    #[serde(default)]
    pub(crate) tracks: Vec<TrackDescription>,
    #[serde(default)]
    pub(crate) materials: BTreeMap<String, MaterialDescription>,
    #[serde(default)]
    pub(crate) objects: BTreeMap<String, ObjectDescription>,
}

/// A value given in place, or a reference to a named track.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Field<T> {
    Track { track: String },
    Fixed(T),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CameraDescription {
    pub(crate) pos: Option<Field<[Number; 3]>>,
    pub(crate) center: Option<Field<[Number; 3]>>,
    pub(crate) up: Option<Field<[Number; 3]>>,
    pub(crate) fov: Option<Field<Number>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackDescription {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) blending: Blending,
    pub(crate) keys: Vec<KeyDescription>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeyDescription {
    pub(crate) time: Number,
    pub(crate) value: KeyValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum KeyValue {
    Scalar(Number),
    Triple([Number; 3]),
}

#[derive(Debug, Deserialize)]
pub(crate) struct MaterialDescription {
    #[serde(default)]
    pub(crate) shading: MaterialClass,
    pub(crate) emission: Option<Number>,
    pub(crate) ior: Option<Number>,
    pub(crate) color: Option<[Number; 3]>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObjectDescription {
    #[serde(flatten)]
    pub(crate) shape: ShapeDescription,
    pub(crate) material: Option<String>,
    pub(crate) scale: Option<ScaleDescription>,
    pub(crate) rotation: Option<RotationDescription>,
    pub(crate) position: Option<[Number; 3]>,
    pub(crate) animation: Option<AnimationDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub(crate) enum ShapeDescription {
    Sphere { radius: Number },
    Box { dim: [Number; 3] },
    Cylinder { height: Number, radius: Number },
    Torus { radius_revolve: Number, radius: Number },
    Plane { normal: Vec<Number> },
    Pyramid { height: Number },
    MengerSponge { iterations: usize },
    Union { a: String, b: String },
    Subtraction { a: String, b: String },
    Intersection { a: String, b: String },
    SmoothUnion { a: String, b: String, radius: Number },
    SmoothSubtraction { a: String, b: String, radius: Number },
    SmoothIntersection { a: String, b: String, radius: Number },
    Elongate { object: String, extent: [Number; 3] },
    Round { object: String, radius: Number },
    Onion { object: String, thickness: Number },
}

impl ShapeDescription {
    /// Names of the objects this shape is built from.
    #[must_use]
    pub(crate) fn children(&self) -> Vec<&str> {
        match self {
            ShapeDescription::Union { a, b }
            | ShapeDescription::Subtraction { a, b }
            | ShapeDescription::Intersection { a, b }
            | ShapeDescription::SmoothUnion { a, b, .. }
            | ShapeDescription::SmoothSubtraction { a, b, .. }
            | ShapeDescription::SmoothIntersection { a, b, .. } => vec![a.as_str(), b.as_str()],
            ShapeDescription::Elongate { object, .. }
            | ShapeDescription::Round { object, .. }
            | ShapeDescription::Onion { object, .. } => vec![object.as_str()],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScaleDescription {
    Uniform(Number),
    Axes([Number; 3]),
}

/// Angles are in radians; Euler angles apply about x, then y, then z.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RotationDescription {
    Euler([Number; 3]),
    Components(RotationComponents),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RotationComponents {
    pub(crate) x: Option<Number>,
    pub(crate) y: Option<Number>,
    pub(crate) z: Option<Number>,
    pub(crate) angle: Option<Number>,
    pub(crate) axis: Option<[Number; 3]>,
}

/// Track names driving the node on top of its fixed placement.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnimationDescription {
    pub(crate) scale: Option<String>,
    pub(crate) rotation: Option<String>,
    pub(crate) position: Option<String>,
}
