use crate::animation::keyframeable::Keyframeable;
use crate::animation::track::{Blending, Track};
use crate::geometry::alias::{Float, Point, Rotation, Vector};
use crate::geometry::utils::euler_rotation;
use crate::scene::error::ensure_finite;
use crate::serialization::description_error::DescriptionError;
use crate::serialization::number::NumberSource;
use crate::serialization::scene_description::{KeyValue, TrackDescription};
use cgmath::EuclideanSpace;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Copy, Clone, Debug)]
enum KeyData {
    Scalar(Float),
    Triple(Vector),
}

struct ResolvedTrack {
    blending: Blending,
    keys: Vec<(Float, KeyData)>,
}

/// Named tracks of a description. A track becomes typed when a field uses
/// it; every use of the same name and type shares one track instance.
pub(crate) struct TrackLibrary {
    tracks: HashMap<String, ResolvedTrack>,
    scalars: HashMap<String, Arc<Track<Float>>>,
    points: HashMap<String, Arc<Track<Point>>>,
    vectors: HashMap<String, Arc<Track<Vector>>>,
    rotations: HashMap<String, Arc<Track<Rotation>>>,
}

impl TrackLibrary {
    pub(crate) fn new(descriptions: &[TrackDescription], numbers: &mut NumberSource) -> Result<Self, DescriptionError> {
        let mut tracks = HashMap::with_capacity(descriptions.len());
        for description in descriptions {
            if tracks.contains_key(&description.name) {
                return Err(DescriptionError::DuplicateTrack { name: description.name.clone() });
            }
            if description.keys.is_empty() {
                return Err(DescriptionError::EmptyTrack { name: description.name.clone() });
            }
            let mut keys = Vec::with_capacity(description.keys.len());
            for key in &description.keys {
                let time = ensure_finite("keyframe time", numbers.resolve(&key.time)?)?;
                let value = match &key.value {
                    KeyValue::Scalar(number) => KeyData::Scalar(numbers.resolve(number)?),
                    KeyValue::Triple(components) => KeyData::Triple(numbers.resolve_vector(components)?),
                };
                keys.push((time, value));
            }
            tracks.insert(description.name.clone(), ResolvedTrack { blending: description.blending, keys });
        }

        Ok(Self {
            tracks,
            scalars: HashMap::new(),
            points: HashMap::new(),
            vectors: HashMap::new(),
            rotations: HashMap::new(),
        })
    }

    #[must_use]
    pub(crate) fn count(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn scalar(&mut self, name: &str) -> Result<Arc<Track<Float>>, DescriptionError> {
        typed(&self.tracks, &mut self.scalars, name, "scalar", |value| match value {
            KeyData::Scalar(scalar) => Some(scalar),
            KeyData::Triple(_) => None,
        })
    }

    pub(crate) fn point(&mut self, name: &str) -> Result<Arc<Track<Point>>, DescriptionError> {
        typed(&self.tracks, &mut self.points, name, "point", |value| match value {
            KeyData::Triple(vector) => Some(Point::from_vec(vector)),
            KeyData::Scalar(_) => None,
        })
    }

    pub(crate) fn vector(&mut self, name: &str) -> Result<Arc<Track<Vector>>, DescriptionError> {
        typed(&self.tracks, &mut self.vectors, name, "vector", |value| match value {
            KeyData::Triple(vector) => Some(vector),
            KeyData::Scalar(_) => None,
        })
    }

    /// Keys hold Euler angles in radians.
    pub(crate) fn rotation(&mut self, name: &str) -> Result<Arc<Track<Rotation>>, DescriptionError> {
        typed(&self.tracks, &mut self.rotations, name, "rotation", |value| match value {
            KeyData::Triple(angles) => Some(euler_rotation(angles)),
            KeyData::Scalar(_) => None,
        })
    }
}

fn typed<T: Keyframeable>(
    tracks: &HashMap<String, ResolvedTrack>,
    cache: &mut HashMap<String, Arc<Track<T>>>,
    name: &str,
    expected: &'static str,
    convert: impl Fn(KeyData) -> Option<T>,
) -> Result<Arc<Track<T>>, DescriptionError> {
    if let Some(track) = cache.get(name) {
        return Ok(Arc::clone(track));
    }
    let source = tracks.get(name).ok_or_else(|| DescriptionError::UnknownTrack { name: name.to_string() })?;
    let mismatch = || DescriptionError::TrackValueMismatch { name: name.to_string(), expected };

    let mut keys = source.keys.iter();
    let Some((first_time, first_value)) = keys.next() else {
        return Err(DescriptionError::EmptyTrack { name: name.to_string() });
    };
    let mut track = Track::new(*first_time, convert(*first_value).ok_or_else(mismatch)?, source.blending);
    for (time, value) in keys {
        track.insert(*time, convert(*value).ok_or_else(mismatch)?);
    }

    let track = Arc::new(track);
    cache.insert(name.to_string(), Arc::clone(&track));
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::scene_description::TrackDescription;

    #[must_use]
    fn make_library(json: &str) -> Result<TrackLibrary, DescriptionError> {
        let descriptions: Vec<TrackDescription> = serde_json::from_str(json).unwrap();
        TrackLibrary::new(&descriptions, &mut NumberSource::new(0))
    }

    #[test]
    fn test_typed_tracks_are_shared() {
        let mut system_under_test = make_library(
            r#"[{"name": "orbit", "blending": "smooth", "keys": [{"time": 0, "value": [0, 0, 1]}, {"time": 2, "value": [2, 0, 1]}]}]"#,
        )
        .unwrap();

        let first = system_under_test.vector("orbit").unwrap();
        let second = system_under_test.vector("orbit").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.blending(), Blending::Smooth);
        assert_eq!(first.keyframes_count(), 2);
        assert_eq!(system_under_test.point("orbit").unwrap().sample(2.0), Point::new(2.0, 0.0, 1.0));
    }

    #[test]
    fn test_scalar_track() {
        let mut system_under_test =
            make_library(r#"[{"name": "fov", "keys": [{"time": 0, "value": 1.0}, {"time": 1, "value": 2.0}]}]"#).unwrap();

        let actual = system_under_test.scalar("fov").unwrap();

        assert_eq!(actual.sample(0.5), 1.5);
        assert!(matches!(
            system_under_test.vector("fov"),
            Err(DescriptionError::TrackValueMismatch { expected: "vector", .. })
        ));
    }

    #[test]
    fn test_unknown_track() {
        let mut system_under_test = make_library("[]").unwrap();
        assert!(matches!(system_under_test.scalar("missing"), Err(DescriptionError::UnknownTrack { .. })));
    }

    #[test]
    fn test_duplicate_and_empty_tracks_rejected() {
        let duplicate = make_library(
            r#"[{"name": "a", "keys": [{"time": 0, "value": 1}]}, {"name": "a", "keys": [{"time": 1, "value": 2}]}]"#,
        );
        assert!(matches!(duplicate, Err(DescriptionError::DuplicateTrack { .. })));

        let empty = make_library(r#"[{"name": "a", "keys": []}]"#);
        assert!(matches!(empty, Err(DescriptionError::EmptyTrack { .. })));
    }

    #[test]
    fn test_rotation_track_from_euler_angles() {
        let mut system_under_test = make_library(
            r#"[{"name": "spin", "keys": [{"time": 0, "value": [0, 0, 0]}, {"time": 1, "value": [0, 3.141592653589793, 0]}]}]"#,
        )
        .unwrap();

        let actual = system_under_test.rotation("spin").unwrap().sample(0.5);

        let expected = euler_rotation(Vector::new(0.0, std::f64::consts::FRAC_PI_2, 0.0));
        assert!((actual.s - expected.s).abs() < 1e-9);
        assert!((actual.v.y - expected.v.y).abs() < 1e-9);
        assert_eq!(system_under_test.count(), 1);
    }
}
