use crate::animation::animated::Animated;
use crate::animation::placement::Placement;
use crate::geometry::alias::{Float, Rotation, Vector};
use crate::material::material_index::MaterialIndex;
use crate::sdf::framework::shape::Shape;
use cgmath::Rad;

/// A shape together with where it sits and what it is made of. Nodes without
/// a material only serve as children of other nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct SdfNode {
    shape: Shape,
    placement: Placement,
    material: Option<MaterialIndex>,
}

impl SdfNode {
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            placement: Placement::default(),
            material: None,
        }
    }

    #[must_use]
    pub fn with_material(mut self, material: MaterialIndex) -> Self {
        self.material = Some(material);
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn translated(mut self, offset: Vector) -> Self {
        self.placement.base_mut().translate(offset);
        self
    }

    #[must_use]
    pub fn rotated(mut self, angle: Rad<Float>, axis: Vector) -> Self {
        self.placement.base_mut().rotate(angle, axis);
        self
    }

    #[must_use]
    pub fn rotated_by(mut self, rotation: Rotation) -> Self {
        self.placement.base_mut().rotate_by(rotation);
        self
    }

    #[must_use]
    pub fn scaled(mut self, factors: Vector) -> Self {
        self.placement.base_mut().scale(factors);
        self
    }

    #[must_use]
    pub fn with_animated_scale(mut self, scale: Animated<Vector>) -> Self {
        self.placement = std::mem::take(&mut self.placement).with_scale(scale);
        self
    }

    #[must_use]
    pub fn with_animated_rotation(mut self, rotation: Animated<Rotation>) -> Self {
        self.placement = std::mem::take(&mut self.placement).with_rotation(rotation);
        self
    }

    #[must_use]
    pub fn with_animated_translation(mut self, translation: Animated<Vector>) -> Self {
        self.placement = std::mem::take(&mut self.placement).with_translation(translation);
        self
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    #[must_use]
    pub fn material(&self) -> Option<MaterialIndex> {
        self.material
    }
}
