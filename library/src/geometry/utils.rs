use crate::geometry::alias::{Float, Rotation, Vector};
use crate::geometry::axis::Axis;
use cgmath::{InnerSpace, One, Rad, Rotation3};
use strum::IntoEnumIterator;

pub(crate) trait ComponentWise {
    #[must_use]
    fn abs(self) -> Self;

    #[must_use]
    fn max_scalar(self, threshold: Float) -> Self;

    #[must_use]
    fn max_component(self) -> Float;
}

impl ComponentWise for Vector {
    fn abs(self) -> Self {
        self.map(Float::abs)
    }

    fn max_scalar(self, threshold: Float) -> Self {
        self.map(|component| component.max(threshold))
    }

    fn max_component(self) -> Float {
        self.x.max(self.y.max(self.z))
    }
}

/// Builds two tangents completing `normal` to a right-handed orthonormal
/// basis. The larger of |x| and |y| picks the construction so the cross
/// products never degenerate.
#[must_use]
pub(crate) fn orthonormal_basis(normal: Vector) -> (Vector, Vector) {
    let tangent = if normal.x.abs() > normal.y.abs() {
        let inverse_length = 1.0 / (normal.x * normal.x + normal.z * normal.z).sqrt();
        Vector::new(-normal.z * inverse_length, 0.0, normal.x * inverse_length)
    } else {
        let inverse_length = 1.0 / (normal.y * normal.y + normal.z * normal.z).sqrt();
        Vector::new(0.0, normal.z * inverse_length, -normal.y * inverse_length)
    };
    let bitangent = normal.cross(tangent);
    (tangent, bitangent)
}

#[must_use]
pub(crate) fn reflect(incident: Vector, normal: Vector) -> Vector {
    incident - normal * (2.0 * normal.dot(incident))
}

/// Snell refraction of a unit `incident` through a unit `normal` facing
/// against it; `None` on total internal reflection.
#[must_use]
pub(crate) fn refract(incident: Vector, normal: Vector, eta: Float) -> Option<Vector> {
    let cosine = normal.dot(incident);
    let k = 1.0 - eta * eta * (1.0 - cosine * cosine);
    if k < 0.0 {
        return None;
    }
    Some(incident * eta - normal * (eta * cosine + k.sqrt()))
}

/// Rotation about x, then y, then z (parent axes), angles in radians.
#[must_use]
pub(crate) fn euler_rotation(angles: Vector) -> Rotation {
    Axis::iter().fold(Rotation::one(), |result, axis| {
        Rotation::from_axis_angle(axis.unit(), Rad(angles[axis.as_index()])) * result
    })
}
