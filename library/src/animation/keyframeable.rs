use crate::geometry::alias::{Float, Point, Rotation, Vector, Vector2D, Vector4D};
use cgmath::{EuclideanSpace, InnerSpace, Zero};
use std::ops::{Add, Mul, Sub};

/// A value that can be reconstructed between keyframes.
pub trait Keyframeable: Copy {
    /// Blends two neighbouring keys; `fraction` runs from 0 at `from` to 1 at `to`.
    #[must_use]
    fn linear(from: Self, to: Self, fraction: Float) -> Self;

    /// Blends `from` and `to` using the outer neighbours as curve controls.
    /// At sequence boundaries the caller repeats the bracketing key.
    #[must_use]
    fn smooth(before: Self, from: Self, to: Self, after: Self, fraction: Float) -> Self;
}

#[must_use]
fn linear_interpolation<T>(from: T, to: T, fraction: Float) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Float, Output = T>,
{
    from + (to - from) * fraction
}

#[must_use]
fn cubic_hermite<T>(before: T, from: T, to: T, after: T, fraction: Float) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Float, Output = T>,
{
    let fraction_squared = fraction * fraction;
    let fraction_cubed = fraction_squared * fraction;

    let from_tangent = (from - before) * 0.5 + (to - from) * 0.5;
    let to_tangent = (to - from) * 0.5 + (after - to) * 0.5;

    let from_weight = 2.0 * fraction_cubed - 3.0 * fraction_squared + 1.0;
    let from_tangent_weight = fraction_cubed - 2.0 * fraction_squared + fraction;
    let to_tangent_weight = fraction_cubed - fraction_squared;
    let to_weight = -2.0 * fraction_cubed + 3.0 * fraction_squared;

    from * from_weight + from_tangent * from_tangent_weight + to_tangent * to_tangent_weight + to * to_weight
}

macro_rules! impl_keyframeable_for_linear_space {
    ($($target:ty),+) => {
        $(
            impl Keyframeable for $target {
                fn linear(from: Self, to: Self, fraction: Float) -> Self {
                    linear_interpolation(from, to, fraction)
                }

                fn smooth(before: Self, from: Self, to: Self, after: Self, fraction: Float) -> Self {
                    cubic_hermite(before, from, to, after, fraction)
                }
            }
        )+
    };
}

impl_keyframeable_for_linear_space!(Float, Vector2D, Vector, Vector4D);

impl Keyframeable for Point {
    fn linear(from: Self, to: Self, fraction: Float) -> Self {
        Point::from_vec(Vector::linear(from.to_vec(), to.to_vec(), fraction))
    }

    fn smooth(before: Self, from: Self, to: Self, after: Self, fraction: Float) -> Self {
        Point::from_vec(Vector::smooth(before.to_vec(), from.to_vec(), to.to_vec(), after.to_vec(), fraction))
    }
}

impl Keyframeable for Rotation {
    fn linear(from: Self, to: Self, fraction: Float) -> Self {
        from.normalize().slerp(to.normalize(), fraction).normalize()
    }

    fn smooth(before: Self, from: Self, to: Self, after: Self, fraction: Float) -> Self {
        squad(before, from, to, after, fraction)
    }
}

const DEGENERATE_ROTATION_SINE: Float = 1e-12;

#[must_use]
fn same_hemisphere(reference: Rotation, candidate: Rotation) -> Rotation {
    if reference.dot(candidate) < 0.0 { -candidate } else { candidate }
}

#[must_use]
fn logarithm(unit: Rotation) -> Rotation {
    let sine = unit.v.magnitude();
    if sine < DEGENERATE_ROTATION_SINE {
        return Rotation::from_sv(0.0, Vector::zero());
    }
    let half_angle = sine.atan2(unit.s);
    Rotation::from_sv(0.0, unit.v * (half_angle / sine))
}

#[must_use]
fn exponential(pure: Rotation) -> Rotation {
    let half_angle = pure.v.magnitude();
    if half_angle < DEGENERATE_ROTATION_SINE {
        return Rotation::from_sv(1.0, pure.v);
    }
    Rotation::from_sv(half_angle.cos(), pure.v * (half_angle.sin() / half_angle))
}

#[must_use]
fn squad_control_point(previous: Rotation, current: Rotation, next: Rotation) -> Rotation {
    let inverse = current.conjugate();
    let tangent = (logarithm(inverse * next) + logarithm(inverse * previous)) * -0.25;
    (current * exponential(tangent)).normalize()
}

/// Spherical quadrangle interpolation between `from` and `to`.
#[must_use]
fn squad(before: Rotation, from: Rotation, to: Rotation, after: Rotation, fraction: Float) -> Rotation {
    let from = from.normalize();
    let to = same_hemisphere(from, to.normalize());
    let before = same_hemisphere(from, before.normalize());
    let after = same_hemisphere(to, after.normalize());

    let from_control = squad_control_point(before, from, to);
    let to_control = squad_control_point(from, to, after);

    let outer = from.slerp(to, fraction);
    let inner = from_control.slerp(to_control, fraction);
    outer.slerp(inner, 2.0 * fraction * (1.0 - fraction)).normalize()
}
