use crate::geometry::alias::Float;

/// Quadratic correction applied by the smooth combinators; zero once the
/// children are `radius` or more apart.
#[must_use]
pub(crate) fn quadratic_blend(radius: Float, separation: Float) -> Float {
    let h = (radius - separation.abs()).max(0.0);
    h * h * 0.25 / radius
}
