use crate::geometry::alias::{Affine, Float, Point, Rotation, Vector};
use cgmath::{InnerSpace, Matrix, Rad, Rotation3, SquareMatrix, Transform};

/// Affine placement of a node: the forward matrix maps local space to world
/// space, the inverse is maintained alongside it by every operation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transformation {
    forward: Affine,
    inverse: Affine,
}

impl Transformation {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            forward: Affine::identity(),
            inverse: Affine::identity(),
        }
    }

    pub fn translate(&mut self, offset: Vector) -> &mut Self {
        self.forward = Affine::from_translation(offset) * self.forward;
        self.inverse = self.inverse * Affine::from_translation(-offset);
        self
    }

    pub fn rotate(&mut self, angle: Rad<Float>, axis: Vector) -> &mut Self {
        assert!(axis.magnitude2() > 0.0, "rotation axis must not be zero");
        self.rotate_by(Rotation::from_axis_angle(axis.normalize(), angle))
    }

    pub fn rotate_by(&mut self, rotation: Rotation) -> &mut Self {
        let rotation = rotation.normalize();
        self.forward = Affine::from(rotation) * self.forward;
        self.inverse = self.inverse * Affine::from(rotation.conjugate());
        self
    }

    pub fn scale(&mut self, factors: Vector) -> &mut Self {
        assert!(factors.x != 0.0 && factors.y != 0.0 && factors.z != 0.0, "scale factors must not be zero");
        self.forward = Affine::from_nonuniform_scale(factors.x, factors.y, factors.z) * self.forward;
        self.inverse = self.inverse * Affine::from_nonuniform_scale(1.0 / factors.x, 1.0 / factors.y, 1.0 / factors.z);
        self
    }

    #[must_use]
    pub fn of_point(&self, target: Point) -> Point {
        self.forward.transform_point(target)
    }

    #[must_use]
    pub fn to_local(&self, target: Point) -> Point {
        self.inverse.transform_point(target)
    }

    /// Maps a local-space surface normal (or gradient) into world space.
    #[must_use]
    pub fn of_surface_vector(&self, target: Vector) -> Vector {
        self.inverse.transpose().transform_vector(target)
    }

    #[must_use]
    pub fn forward(&self) -> &Affine {
        &self.forward
    }

    #[must_use]
    pub fn inverse(&self) -> &Affine {
        &self.inverse
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}
