use crate::geometry::alias::{Float, Point, Vector};
use crate::material::material_index::MaterialIndex;
use cgmath::InnerSpace;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
    medium: Option<MaterialIndex>,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Point, direction: Vector) -> Self {
        assert!(direction.magnitude2() > 0.0, "ray direction must not be zero");
        Self { origin, direction: direction.normalize(), medium: None }
    }

    /// The ray travels inside `medium` until it leaves it through a surface
    /// of the same material.
    #[must_use]
    pub fn with_medium(mut self, medium: Option<MaterialIndex>) -> Self {
        self.medium = medium;
        self
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    #[must_use]
    pub fn medium(&self) -> Option<MaterialIndex> {
        self.medium
    }

    #[must_use]
    pub fn at(&self, distance: Float) -> Point {
        self.origin + self.direction * distance
    }
}
