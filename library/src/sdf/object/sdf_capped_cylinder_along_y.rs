use crate::geometry::alias::{Float, Point, Vector2D};
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use cgmath::InnerSpace;

/// Cylinder around the Y axis spanning `[-half_height, half_height]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfCappedCylinderAlongY {
    half_height: Float,
    radius: Float,
}

impl SdfCappedCylinderAlongY {
    pub fn new(half_height: Float, radius: Float) -> Result<Self, SceneError> {
        Ok(Self {
            half_height: ensure_positive("cylinder half height", half_height)?,
            radius: ensure_positive("cylinder radius", radius)?,
        })
    }
}

impl Sdf for SdfCappedCylinderAlongY {
    fn distance(&self, point: Point, _descendants: &dyn Descendants) -> Float {
        let radial = Vector2D::new(point.x, point.z).magnitude();
        let d = Vector2D::new(radial.abs() - self.radius, point.y.abs() - self.half_height);
        d.x.max(d.y).min(0.0) + Vector2D::new(d.x.max(0.0), d.y.max(0.0)).magnitude()
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::framework::dummy_sdf::tests::DummyDescendants;
    use rstest::rstest;

    #[rstest]
    #[case(Point::new(0.0, 0.0, 0.0), -1.0)]
    #[case(Point::new(0.0, 1.5, 0.0), -0.5)]
    #[case(Point::new(0.0, 0.0, 3.0), 2.0)]
    #[case(Point::new(0.0, 5.0, 0.0), 3.0)]
    #[case(Point::new(4.0, 6.0, 0.0), 5.0)]
    fn test_distance(#[case] point: Point, #[case] expected: Float) {
        let system_under_test = SdfCappedCylinderAlongY::new(2.0, 1.0).unwrap();
        let actual = system_under_test.distance(point, &DummyDescendants::default());
        assert!((actual - expected).abs() < 1e-12, "distance at {point:?} is {actual}, expected {expected}");
    }
}
