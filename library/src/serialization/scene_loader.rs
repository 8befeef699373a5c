use crate::animation::animated::Animated;
use crate::animation::track::Track;
use crate::geometry::alias::{Float, Point, Vector};
use crate::geometry::utils::euler_rotation;
use crate::material::material::{Material, MaterialClass};
use crate::material::material_index::MaterialIndex;
use crate::render::settings::RenderSettings;
use crate::scene::error::{SceneError, ensure_non_negative, ensure_positive};
use crate::scene::scene::Scene;
use crate::sdf::composition::sdf_intersection::SdfIntersection;
use crate::sdf::composition::sdf_intersection_smooth::SdfIntersectionSmooth;
use crate::sdf::composition::sdf_subtraction::SdfSubtraction;
use crate::sdf::composition::sdf_subtraction_smooth::SdfSubtractionSmooth;
use crate::sdf::composition::sdf_union::SdfUnion;
use crate::sdf::composition::sdf_union_smooth::SdfUnionSmooth;
use crate::sdf::framework::sdf_index::SdfIndex;
use crate::sdf::framework::sdf_node::SdfNode;
use crate::sdf::framework::shape::Shape;
use crate::sdf::modifier::sdf_elongate::SdfElongate;
use crate::sdf::modifier::sdf_onion::SdfOnion;
use crate::sdf::modifier::sdf_round::SdfRound;
use crate::sdf::object::sdf_box::SdfBox;
use crate::sdf::object::sdf_capped_cylinder_along_y::SdfCappedCylinderAlongY;
use crate::sdf::object::sdf_menger_sponge::SdfMengerSponge;
use crate::sdf::object::sdf_plane::SdfPlane;
use crate::sdf::object::sdf_pyramid::SdfPyramid;
use crate::sdf::object::sdf_sphere::SdfSphere;
use crate::sdf::object::sdf_torus_xz::SdfTorusXz;
use crate::serialization::description_error::DescriptionError;
use crate::serialization::number::{Number, NumberSource};
use crate::serialization::scene_description::{
    AnimationDescription, CameraDescription, Field, MaterialDescription, ObjectDescription, RotationComponents,
    RotationDescription, ScaleDescription, SceneDescription, ShapeDescription,
};
use crate::serialization::track_library::TrackLibrary;
use cgmath::{InnerSpace, Rad};
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A scene together with the render settings stored beside it.
#[derive(Debug)]
pub struct SceneDocument {
    pub scene: Scene,
    pub settings: RenderSettings,
}

pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneDocument, DescriptionError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|error| DescriptionError::Io { path: path.to_path_buf(), what: error.to_string() })?;
    let document = parse_scene(&text)?;
    info!("loaded scene {path:?}");
    Ok(document)
}

/// Random numbers of the description are drawn from a generator seeded with
/// the description's `seed`.
pub fn parse_scene(text: &str) -> Result<SceneDocument, DescriptionError> {
    let description: SceneDescription =
        serde_json::from_str(text).map_err(|error| DescriptionError::Syntax { what: error.to_string() })?;
    let SceneDescription { settings, camera, tracks, materials, objects } = description;

    let mut numbers = NumberSource::new(settings.seed);
    let tracks = TrackLibrary::new(&tracks, &mut numbers)?;
    let mut builder = SceneBuilder {
        objects: &objects,
        numbers,
        tracks,
        scene: Scene::default(),
        materials: HashMap::new(),
        built: HashMap::new(),
        visiting: HashSet::new(),
    };

    builder.add_camera(&camera)?;
    builder.add_materials(&materials)?;
    builder.add_objects()?;

    info!(
        "scene description holds {} materials, {} objects and {} tracks",
        materials.len(),
        objects.len(),
        builder.tracks.count(),
    );
    Ok(SceneDocument { scene: builder.scene, settings })
}

struct SceneBuilder<'d> {
    objects: &'d BTreeMap<String, ObjectDescription>,
    numbers: NumberSource,
    tracks: TrackLibrary,
    scene: Scene,
    materials: HashMap<&'d str, MaterialIndex>,
    built: HashMap<&'d str, SdfIndex>,
    visiting: HashSet<&'d str>,
}

impl<'d> SceneBuilder<'d> {
    fn add_camera(&mut self, description: &CameraDescription) -> Result<(), DescriptionError> {
        let eye = description.pos.as_ref().map(|field| self.point_field(field)).transpose()?;
        let look_at = description.center.as_ref().map(|field| self.point_field(field)).transpose()?;
        let up = description.up.as_ref().map(|field| self.vector_field(field)).transpose()?;
        self.scene.camera_mut().set(eye, look_at, up);

        if let Some(field) = &description.fov {
            let field_of_view = match field {
                Field::Fixed(number) => Animated::Fixed(ensure_positive("field of view", self.numbers.resolve(number)?)?),
                Field::Track { track } => Animated::Keyed(self.tracks.scalar(track)?),
            };
            self.scene.camera_mut().set_field_of_view(field_of_view);
        }
        Ok(())
    }

    fn point_field(&mut self, field: &Field<[Number; 3]>) -> Result<Animated<Point>, DescriptionError> {
        Ok(match field {
            Field::Fixed(numbers) => Animated::Fixed(self.numbers.resolve_point(numbers)?),
            Field::Track { track } => Animated::Keyed(self.tracks.point(track)?),
        })
    }

    fn vector_field(&mut self, field: &Field<[Number; 3]>) -> Result<Animated<Vector>, DescriptionError> {
        Ok(match field {
            Field::Fixed(numbers) => Animated::Fixed(self.numbers.resolve_vector(numbers)?),
            Field::Track { track } => Animated::Keyed(self.tracks.vector(track)?),
        })
    }

    fn add_materials(&mut self, materials: &'d BTreeMap<String, MaterialDescription>) -> Result<(), DescriptionError> {
        for (name, description) in materials {
            let material = self.make_material(name, description)?;
            let index = self.scene.add_material(&material);
            debug!("material {name:?} registered as {index}");
            self.materials.insert(name.as_str(), index);
        }
        Ok(())
    }

    fn make_material(&mut self, name: &str, description: &MaterialDescription) -> Result<Material, DescriptionError> {
        let invalid = |source: SceneError| DescriptionError::InvalidMaterial { material: name.to_string(), source };
        let mut material = Material::new().with_class(description.shading);

        if let Some(color) = &description.color {
            let color = self.numbers.resolve_vector(color)?;
            let red = ensure_non_negative("red component", color.x).map_err(invalid)?;
            let green = ensure_non_negative("green component", color.y).map_err(invalid)?;
            let blue = ensure_non_negative("blue component", color.z).map_err(invalid)?;
            material = material.with_color(red, green, blue);
        }
        if let Some(emission) = &description.emission {
            let emission = ensure_non_negative("emission", self.numbers.resolve(emission)?).map_err(invalid)?;
            material = material.with_emission(emission);
        }
        match &description.ior {
            Some(refractive_index) => {
                let refractive_index = ensure_positive("refractive index", self.numbers.resolve(refractive_index)?).map_err(invalid)?;
                material = material.with_refractive_index(refractive_index);
            }
            None if MaterialClass::Dielectric == description.shading => {
                warn!("refractive material {name:?} has no ior, light passes it unbent");
            }
            None => {}
        }
        Ok(material)
    }

    /// Every object is a top level object; the ones without material only
    /// shape others.
    fn add_objects(&mut self) -> Result<(), DescriptionError> {
        let objects = self.objects;
        for name in objects.keys() {
            let index = self.build_object(name, name)?;
            self.scene.register_object(index)?;
        }
        Ok(())
    }

    fn build_object(&mut self, name: &'d str, referrer: &str) -> Result<SdfIndex, DescriptionError> {
        if let Some(index) = self.built.get(name) {
            return Ok(*index);
        }
        let objects = self.objects;
        let Some((name, description)) = objects.get_key_value(name) else {
            return Err(DescriptionError::UnknownObject { object: referrer.to_string(), reference: name.to_string() });
        };
        let name = name.as_str();
        if false == self.visiting.insert(name) {
            return Err(DescriptionError::CyclicReference { object: name.to_string() });
        }

        let children = description
            .shape
            .children()
            .into_iter()
            .map(|child| self.build_object(child, name))
            .collect::<Result<Vec<SdfIndex>, DescriptionError>>()?;
        let node = self.make_node(name, description, &children)?;
        let index = self
            .scene
            .add_node(node)
            .map_err(|source| DescriptionError::InvalidObject { object: name.to_string(), source })?;
        debug!("object {name:?} added as {index}");

        self.visiting.remove(name);
        self.built.insert(name, index);
        Ok(index)
    }

    fn make_node(&mut self, name: &str, description: &ObjectDescription, children: &[SdfIndex]) -> Result<SdfNode, DescriptionError> {
        let shape = self.make_shape(name, &description.shape, children)?;
        let mut node = SdfNode::new(shape);

        if let Some(material) = &description.material {
            let index = self
                .materials
                .get(material.as_str())
                .ok_or_else(|| DescriptionError::UnknownMaterial { object: name.to_string(), material: material.clone() })?;
            node = node.with_material(*index);
        }
        if let Some(scale) = &description.scale {
            node = node.scaled(self.scale_factors(name, scale)?);
        }
        if let Some(rotation) = &description.rotation {
            node = self.rotate(name, node, rotation)?;
        }
        if let Some(position) = &description.position {
            node = node.translated(self.numbers.resolve_vector(position)?);
        }
        if let Some(animation) = &description.animation {
            node = self.animate(name, node, animation)?;
        }
        Ok(node)
    }

    fn make_shape(&mut self, name: &str, description: &ShapeDescription, children: &[SdfIndex]) -> Result<Shape, DescriptionError> {
        let invalid = |source: SceneError| DescriptionError::InvalidObject { object: name.to_string(), source };
        let shape: Shape = match description {
            ShapeDescription::Sphere { radius } => SdfSphere::new(self.numbers.resolve(radius)?).map_err(invalid)?.into(),
            ShapeDescription::Box { dim } => SdfBox::new(self.numbers.resolve_vector(dim)?).map_err(invalid)?.into(),
            ShapeDescription::Cylinder { height, radius } => {
                let half_height = self.numbers.resolve(height)?;
                SdfCappedCylinderAlongY::new(half_height, self.numbers.resolve(radius)?).map_err(invalid)?.into()
            }
            ShapeDescription::Torus { radius_revolve, radius } => {
                let major_radius = self.numbers.resolve(radius_revolve)?;
                SdfTorusXz::new(major_radius, self.numbers.resolve(radius)?).map_err(invalid)?.into()
            }
            ShapeDescription::Plane { normal } => {
                let components = normal.iter().map(|number| self.numbers.resolve(number)).collect::<Result<Vec<Float>, _>>()?;
                let (direction, offset) = match components.as_slice() {
                    [x, y, z] => (Vector::new(*x, *y, *z), 0.0),
                    [x, y, z, offset] => (Vector::new(*x, *y, *z), *offset),
                    _ => {
                        return Err(DescriptionError::WrongArity {
                            object: name.to_string(),
                            field: "normal",
                            expected: "3 or 4",
                            actual: components.len(),
                        });
                    }
                };
                SdfPlane::new(direction, offset).map_err(invalid)?.into()
            }
            ShapeDescription::Pyramid { height } => SdfPyramid::new(self.numbers.resolve(height)?).map_err(invalid)?.into(),
            ShapeDescription::MengerSponge { iterations } => SdfMengerSponge::new(*iterations).into(),
            ShapeDescription::Union { .. } => SdfUnion::new(children[0], children[1]).into(),
            ShapeDescription::Subtraction { .. } => SdfSubtraction::new(children[0], children[1]).into(),
            ShapeDescription::Intersection { .. } => SdfIntersection::new(children[0], children[1]).into(),
            ShapeDescription::SmoothUnion { radius, .. } => {
                SdfUnionSmooth::new(children[0], children[1], self.numbers.resolve(radius)?).map_err(invalid)?.into()
            }
            ShapeDescription::SmoothSubtraction { radius, .. } => {
                SdfSubtractionSmooth::new(children[0], children[1], self.numbers.resolve(radius)?).map_err(invalid)?.into()
            }
            ShapeDescription::SmoothIntersection { radius, .. } => {
                SdfIntersectionSmooth::new(children[0], children[1], self.numbers.resolve(radius)?).map_err(invalid)?.into()
            }
            ShapeDescription::Elongate { extent, .. } => {
                SdfElongate::new(children[0], self.numbers.resolve_vector(extent)?).map_err(invalid)?.into()
            }
            ShapeDescription::Round { radius, .. } => SdfRound::new(children[0], self.numbers.resolve(radius)?).map_err(invalid)?.into(),
            ShapeDescription::Onion { thickness, .. } => {
                SdfOnion::new(children[0], self.numbers.resolve(thickness)?).map_err(invalid)?.into()
            }
        };
        Ok(shape)
    }

    fn scale_factors(&mut self, name: &str, description: &ScaleDescription) -> Result<Vector, DescriptionError> {
        let factors = match description {
            ScaleDescription::Uniform(number) => {
                let factor = self.numbers.resolve(number)?;
                Vector::new(factor, factor, factor)
            }
            ScaleDescription::Axes(numbers) => self.numbers.resolve_vector(numbers)?,
        };
        ensure_usable_scale(name, factors)?;
        Ok(factors)
    }

    /// Scale keys may not vanish, and each axis keeps one sign, so blending
    /// between keys never passes through a zero scale.
    fn scale_track(&mut self, name: &str, track: &str) -> Result<Arc<Track<Vector>>, DescriptionError> {
        let result = self.tracks.vector(track)?;
        let keyframes = result.keyframes();
        for keyframe in keyframes {
            ensure_usable_scale(name, keyframe.value)?;
        }
        let first = keyframes[0].value;
        for keyframe in &keyframes[1..] {
            let flips = |axis: usize| first[axis].is_sign_positive() != keyframe.value[axis].is_sign_positive();
            if flips(0) || flips(1) || flips(2) {
                return Err(DescriptionError::InvalidObject {
                    object: name.to_string(),
                    source: SceneError::ZeroScale { what: format!("track '{track}' changes sign between keys") },
                });
            }
        }
        Ok(result)
    }

    fn rotate(&mut self, name: &str, node: SdfNode, description: &RotationDescription) -> Result<SdfNode, DescriptionError> {
        match description {
            RotationDescription::Euler(angles) => Ok(node.rotated_by(euler_rotation(self.numbers.resolve_vector(angles)?))),
            RotationDescription::Components(components) => self.rotate_by_components(name, node, components),
        }
    }

    fn rotate_by_components(&mut self, name: &str, mut node: SdfNode, components: &RotationComponents) -> Result<SdfNode, DescriptionError> {
        let axes = [(&components.x, Vector::unit_x()), (&components.y, Vector::unit_y()), (&components.z, Vector::unit_z())];
        for (angle, axis) in axes {
            if let Some(angle) = angle {
                node = node.rotated(Rad(self.numbers.resolve(angle)?), axis);
            }
        }

        match (&components.angle, &components.axis) {
            (Some(angle), Some(axis)) => {
                let angle = self.numbers.resolve(angle)?;
                let axis = self.numbers.resolve_vector(axis)?;
                if false == (axis.magnitude2() > 0.0) {
                    return Err(DescriptionError::InvalidRotation { object: name.to_string(), what: "axis must not be zero" });
                }
                Ok(node.rotated(Rad(angle), axis))
            }
            (None, None) => Ok(node),
            _ => Err(DescriptionError::InvalidRotation { object: name.to_string(), what: "angle and axis go together" }),
        }
    }

    fn animate(&mut self, name: &str, mut node: SdfNode, description: &AnimationDescription) -> Result<SdfNode, DescriptionError> {
        if let Some(track) = &description.scale {
            node = node.with_animated_scale(Animated::Keyed(self.scale_track(name, track)?));
        }
        if let Some(track) = &description.rotation {
            node = node.with_animated_rotation(Animated::Keyed(self.tracks.rotation(track)?));
        }
        if let Some(track) = &description.position {
            node = node.with_animated_translation(Animated::Keyed(self.tracks.vector(track)?));
        }
        Ok(node)
    }
}

fn ensure_usable_scale(name: &str, factors: Vector) -> Result<(), DescriptionError> {
    let usable = |factor: Float| factor != 0.0 && factor.is_finite();
    if false == (usable(factors.x) && usable(factors.y) && usable(factors.z)) {
        return Err(DescriptionError::InvalidObject {
            object: name.to_string(),
            source: SceneError::ZeroScale { what: format!("{:?}", (factors.x, factors.y, factors.z)) },
        });
    }
    Ok(())
}
