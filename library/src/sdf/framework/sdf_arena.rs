use crate::animation::animated::TimeSpan;
use crate::scene::error::SceneError;
use crate::sdf::framework::frozen_graph::{FrozenGraph, FrozenNode};
use crate::sdf::framework::sdf_base::Sdf;
use crate::sdf::framework::sdf_index::SdfIndex;
use crate::sdf::framework::sdf_node::SdfNode;
use crate::geometry::alias::Float;

/// Owns every node of the graph. Children are referenced by handle and may
/// be shared by several parents; a child has to be added before any parent
/// that refers to it, so the graph can never contain a cycle.
#[derive(Clone, Debug, Default)]
pub struct SdfArena {
    nodes: Vec<SdfNode>,
}

impl SdfArena {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add(&mut self, node: SdfNode) -> Result<SdfIndex, SceneError> {
        for child in node.shape().descendants() {
            if false == self.contains(child) {
                return Err(SceneError::DanglingChild { kind: node.shape().kind(), child });
            }
        }
        self.nodes.push(node);
        Ok(SdfIndex(self.nodes.len() - 1))
    }

    #[must_use]
    pub fn contains(&self, index: SdfIndex) -> bool {
        index.0 < self.nodes.len()
    }

    #[must_use]
    pub fn get(&self, index: SdfIndex) -> Option<&SdfNode> {
        self.nodes.get(index.0)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: SdfIndex) -> Option<&mut SdfNode> {
        self.nodes.get_mut(index.0)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn nodes(&self) -> &[SdfNode] {
        &self.nodes
    }

    /// Union of the keyframe spans of every animated placement.
    #[must_use]
    pub fn time_span(&self) -> Option<TimeSpan> {
        self.nodes
            .iter()
            .fold(None, |span, node| TimeSpan::merge(span, node.placement().time_span()))
    }

    #[must_use]
    pub fn freeze(&self, time: Float) -> FrozenGraph {
        FrozenGraph::new(
            self.nodes
                .iter()
                .map(|node| FrozenNode::new(*node.shape(), node.placement().resolve(time), node.material()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::animated::Animated;
    use crate::animation::track::{Blending, Track};
    use crate::geometry::alias::{Point, Vector};
    use crate::sdf::composition::sdf_union::SdfUnion;
    use crate::sdf::object::sdf_sphere::SdfSphere;

    #[test]
    fn test_child_must_exist() {
        let mut system_under_test = SdfArena::new();
        let sphere = system_under_test.add(SdfNode::new(SdfSphere::new(1.0).unwrap())).unwrap();

        let dangling = system_under_test.add(SdfNode::new(SdfUnion::new(sphere, SdfIndex(1))));

        assert_eq!(dangling, Err(SceneError::DanglingChild { kind: "Union", child: SdfIndex(1) }));
        assert_eq!(system_under_test.count(), 1);
    }

    #[test]
    fn test_shared_child() {
        let mut system_under_test = SdfArena::new();
        let sphere = system_under_test.add(SdfNode::new(SdfSphere::new(1.0).unwrap())).unwrap();
        let shifted = system_under_test
            .add(SdfNode::new(SdfUnion::new(sphere, sphere)).translated(Vector::new(5.0, 0.0, 0.0)))
            .unwrap();
        let both = system_under_test.add(SdfNode::new(SdfUnion::new(sphere, shifted))).unwrap();

        let frozen = system_under_test.freeze(0.0);

        assert_eq!(frozen.signed_distance(both, Point::new(2.5, 0.0, 0.0)), 1.5);
        assert_eq!(frozen.signed_distance(both, Point::new(5.0, 0.0, 0.0)), -1.0);
    }

    #[test]
    fn test_time_span() {
        let mut system_under_test = SdfArena::new();
        assert_eq!(system_under_test.time_span(), None);

        let track = Track::new(1.0, Vector::new(0.0, 0.0, 0.0), Blending::Linear).with_keyframe(4.0, Vector::new(1.0, 0.0, 0.0));
        let _ = system_under_test
            .add(SdfNode::new(SdfSphere::new(1.0).unwrap()).with_animated_translation(Animated::keyed(track)))
            .unwrap();

        assert_eq!(system_under_test.time_span(), Some(TimeSpan::new(1.0, 4.0)));
    }

    #[test]
    fn test_freeze_resolves_animation() {
        let mut system_under_test = SdfArena::new();
        let track = Track::new(0.0, Vector::new(0.0, 0.0, 0.0), Blending::Linear).with_keyframe(1.0, Vector::new(0.0, 0.0, 10.0));
        let sphere = system_under_test
            .add(SdfNode::new(SdfSphere::new(1.0).unwrap()).with_animated_translation(Animated::keyed(track)))
            .unwrap();

        let early = system_under_test.freeze(0.0);
        let late = system_under_test.freeze(0.5);

        assert_eq!(early.signed_distance(sphere, Point::new(0.0, 0.0, 5.0)), 4.0);
        assert_eq!(late.signed_distance(sphere, Point::new(0.0, 0.0, 5.0)), -1.0);
    }
}
