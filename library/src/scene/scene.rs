use crate::animation::animated::TimeSpan;
use crate::geometry::alias::Float;
use crate::material::material::Material;
use crate::material::material_index::MaterialIndex;
use crate::material::materials_warehouse::MaterialsWarehouse;
use crate::scene::camera::Camera;
use crate::scene::error::SceneError;
use crate::scene::frozen_scene::FrozenScene;
use crate::sdf::framework::sdf_arena::SdfArena;
use crate::sdf::framework::sdf_index::SdfIndex;
use crate::sdf::framework::sdf_node::SdfNode;
use log::debug;

/// Everything a frame is rendered from. Objects are the top level nodes the
/// rays are marched against; nodes without a material are skipped there and
/// only matter as children.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    materials: MaterialsWarehouse,
    arena: SdfArena,
    objects: Vec<SdfIndex>,
    camera: Camera,
}

impl Scene {
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            materials: MaterialsWarehouse::new(),
            arena: SdfArena::new(),
            objects: Vec::new(),
            camera,
        }
    }

    #[must_use]
    pub fn add_material(&mut self, material: &Material) -> MaterialIndex {
        self.materials.add(material)
    }

    /// Adds a node that can be used as a child but is not an object itself.
    pub fn add_node(&mut self, node: SdfNode) -> Result<SdfIndex, SceneError> {
        if let Some(material) = node.material() {
            if false == self.materials.contains(material) {
                return Err(SceneError::UnknownMaterial { index: material });
            }
        }
        self.arena.add(node)
    }

    pub fn add_object(&mut self, node: SdfNode) -> Result<SdfIndex, SceneError> {
        let index = self.add_node(node)?;
        self.objects.push(index);
        Ok(index)
    }

    /// Promotes a node already in the arena to a top level object.
    pub fn register_object(&mut self, index: SdfIndex) -> Result<(), SceneError> {
        if false == self.arena.contains(index) {
            return Err(SceneError::UnknownObject { index });
        }
        self.objects.push(index);
        Ok(())
    }

    #[must_use]
    pub fn materials(&self) -> &MaterialsWarehouse {
        &self.materials
    }

    #[must_use]
    pub fn arena(&self) -> &SdfArena {
        &self.arena
    }

    pub fn node_mut(&mut self, index: SdfIndex) -> Result<&mut SdfNode, SceneError> {
        self.arena.get_mut(index).ok_or(SceneError::UnknownObject { index })
    }

    #[must_use]
    pub fn objects(&self) -> &[SdfIndex] {
        &self.objects
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Span covered by every keyframe in the scene, `None` for a still scene.
    #[must_use]
    pub fn time_span(&self) -> Option<TimeSpan> {
        TimeSpan::merge(self.arena.time_span(), self.camera.time_span())
    }

    #[must_use]
    pub fn freeze(&self, time: Float) -> FrozenScene<'_> {
        let objects: Vec<SdfIndex> = self
            .objects
            .iter()
            .copied()
            .filter(|index| self.arena.get(*index).and_then(|node| node.material()).is_some())
            .collect();
        debug!("scene frozen at {time}: {} of {} objects are visible", objects.len(), self.objects.len());

        FrozenScene::new(self.arena.freeze(time), objects, self.camera.at(time), &self.materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::animated::Animated;
    use crate::animation::track::{Blending, Track};
    use crate::geometry::alias::{Point, Vector};
    use crate::sdf::object::sdf_sphere::SdfSphere;

    #[test]
    fn test_unknown_material_rejected() {
        let mut system_under_test = Scene::default();

        let actual = system_under_test.add_object(SdfNode::new(SdfSphere::new(1.0).unwrap()).with_material(MaterialIndex(0)));

        assert_eq!(actual, Err(SceneError::UnknownMaterial { index: MaterialIndex(0) }));
    }

    #[test]
    fn test_freeze_skips_structural_objects() {
        let mut system_under_test = Scene::default();
        let material = system_under_test.add_material(&Material::new());
        let visible = system_under_test
            .add_object(SdfNode::new(SdfSphere::new(1.0).unwrap()).with_material(material))
            .unwrap();
        let _structural = system_under_test.add_object(SdfNode::new(SdfSphere::new(2.0).unwrap())).unwrap();

        let frozen = system_under_test.freeze(0.0);

        assert_eq!(system_under_test.objects().len(), 2);
        assert_eq!(frozen.objects(), &[visible]);
    }

    #[test]
    fn test_register_object() {
        let mut system_under_test = Scene::default();
        let node = system_under_test.add_node(SdfNode::new(SdfSphere::new(1.0).unwrap())).unwrap();

        assert!(system_under_test.objects().is_empty());
        assert_eq!(system_under_test.register_object(node), Ok(()));
        assert_eq!(system_under_test.objects(), &[node]);
        assert_eq!(
            system_under_test.register_object(SdfIndex(5)),
            Err(SceneError::UnknownObject { index: SdfIndex(5) })
        );
    }

    #[test]
    fn test_time_span_covers_camera_and_nodes() {
        let mut system_under_test = Scene::default();
        let camera_track = Track::new(0.0, Point::new(0.0, 0.0, -5.0), Blending::Smooth).with_keyframe(2.0, Point::new(1.0, 0.0, -5.0));
        system_under_test.camera_mut().set(Some(Animated::keyed(camera_track)), None, None);
        let node_track = Track::new(1.0, Vector::new(0.0, 0.0, 0.0), Blending::Linear).with_keyframe(3.0, Vector::new(0.0, 1.0, 0.0));
        let _ = system_under_test
            .add_node(SdfNode::new(SdfSphere::new(1.0).unwrap()).with_animated_translation(Animated::keyed(node_track)))
            .unwrap();

        assert_eq!(system_under_test.time_span(), Some(TimeSpan::new(0.0, 3.0)));
    }
}
