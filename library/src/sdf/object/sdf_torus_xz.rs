use crate::geometry::alias::{Float, Point, Vector2D};
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use cgmath::InnerSpace;

/// Torus lying in the XZ plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfTorusXz {
    major_radius: Float,
    minor_radius: Float,
}

impl SdfTorusXz {
    pub fn new(major_radius: Float, minor_radius: Float) -> Result<Self, SceneError> {
        Ok(Self {
            major_radius: ensure_positive("torus major radius", major_radius)?,
            minor_radius: ensure_positive("torus minor radius", minor_radius)?,
        })
    }
}

impl Sdf for SdfTorusXz {
    fn distance(&self, point: Point, _descendants: &dyn Descendants) -> Float {
        let q = Vector2D::new(Vector2D::new(point.x, point.z).magnitude() - self.major_radius, point.y);
        q.magnitude() - self.minor_radius
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
    #[case(Point::new(3.0, 0.0, 0.0), -0.5)]
    #[case(Point::new(0.0, 0.0, -3.5), 0.0)]
    #[case(Point::new(0.0, 0.0, 0.0), 2.5)]
    #[case(Point::new(3.0, 2.0, 0.0), 1.5)]
    fn test_distance(#[case] point: Point, #[case] expected: Float) {
        let system_under_test = SdfTorusXz::new(3.0, 0.5).unwrap();
        let actual = system_under_test.distance(point, &DummyDescendants::default());
        assert!((actual - expected).abs() < 1e-12, "distance at {point:?} is {actual}, expected {expected}");
    }
}
