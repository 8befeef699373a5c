use crate::geometry::alias::{Float, Point};
use crate::material::materials_warehouse::MaterialsWarehouse;
use crate::scene::camera::CameraInstant;
use crate::sdf::framework::frozen_graph::FrozenGraph;
use crate::sdf::framework::sdf_index::SdfIndex;

/// A scene resolved for one instant, shared read-only by render workers.
#[derive(Clone, Debug)]
pub struct FrozenScene<'a> {
    graph: FrozenGraph,
    objects: Vec<SdfIndex>,
    camera: CameraInstant,
    materials: &'a MaterialsWarehouse,
}

/// The object closest to a probe point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Proximity {
    pub distance: Float,
    pub object: SdfIndex,
}

impl<'a> FrozenScene<'a> {
    #[must_use]
    pub(crate) fn new(graph: FrozenGraph, objects: Vec<SdfIndex>, camera: CameraInstant, materials: &'a MaterialsWarehouse) -> Self {
        Self { graph, objects, camera, materials }
    }

    /// Linear scan over the visible objects; `None` when there are none.
    #[must_use]
    pub fn closest(&self, point: Point) -> Option<Proximity> {
        let mut result: Option<Proximity> = None;
        for object in &self.objects {
            let distance = self.graph.evaluate(*object, point);
            if result.is_none_or(|closest| distance < closest.distance) {
                result = Some(Proximity { distance, object: *object });
            }
        }
        result
    }

    #[must_use]
    pub fn graph(&self) -> &FrozenGraph {
        &self.graph
    }

    #[must_use]
    pub fn objects(&self) -> &[SdfIndex] {
        &self.objects
    }

    #[must_use]
    pub fn camera(&self) -> &CameraInstant {
        &self.camera
    }

    #[must_use]
    pub fn materials(&self) -> &'a MaterialsWarehouse {
        self.materials
    }
}
