use crate::geometry::alias::{Float, Point, Vector};
use crate::geometry::utils::ComponentWise;
use crate::scene::error::{SceneError, ensure_finite};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use cgmath::EuclideanSpace;

/// Stretches the child by inserting a slab of `2 * extent` along each axis
/// through its local origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfElongate {
    child: SdfIndex,
    extent: Vector,
}

impl SdfElongate {
    pub fn new(child: SdfIndex, extent: Vector) -> Result<Self, SceneError> {
        for (what, value) in [("elongation x", extent.x), ("elongation y", extent.y), ("elongation z", extent.z)] {
            ensure_finite(what, value)?;
            if value < 0.0 {
                return Err(SceneError::NonPositiveParameter { what, value });
            }
        }
        Ok(Self { child, extent })
    }
}

impl Sdf for SdfElongate {
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float {
        let q = point.to_vec().abs() - self.extent;
        let folded = Point::from_vec(q.max_scalar(0.0));
        descendants.signed_distance(self.child, folded) + q.max_component().min(0.0)
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        vec![self.child]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::framework::dummy_sdf::tests::{LEFT, SphereDescendants};
    use rstest::rstest;

    #[rstest]
    #[case(Point::new(0.0, 0.0, 0.0), -1.0)]
    #[case(Point::new(2.0, 0.0, 0.0), -1.0)]
    #[case(Point::new(-3.5, 0.0, 0.0), 0.5)]
    #[case(Point::new(1.0, 2.0, 0.0), 1.0)]
    fn test_capsule_from_sphere(#[case] point: Point, #[case] expected: Float) {
        let system_under_test = SdfElongate::new(LEFT, Vector::new(2.0, 0.0, 0.0)).unwrap();
        let descendants = SphereDescendants::default().with(LEFT, 1.0);

        let actual = system_under_test.distance(point, &descendants);

        assert!((actual - expected).abs() < 1e-12, "distance at {point:?} is {actual}, expected {expected}");
    }

    #[test]
    fn test_negative_extent_rejected() {
        assert!(SdfElongate::new(LEFT, Vector::new(0.0, -1.0, 0.0)).is_err());
    }
}
