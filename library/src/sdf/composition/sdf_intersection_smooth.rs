use crate::geometry::alias::{Float, Point};
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::composition::smoothing::quadratic_blend;
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfIntersectionSmooth {
    left: SdfIndex,
    right: SdfIndex,
    radius: Float,
}

impl SdfIntersectionSmooth {
    pub fn new(left: SdfIndex, right: SdfIndex, radius: Float) -> Result<Self, SceneError> {
        Ok(Self { left, right, radius: ensure_positive("smooth intersection radius", radius)? })
    }

    #[must_use]
    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Sdf for SdfIntersectionSmooth {
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float {
        let left = descendants.signed_distance(self.left, point);
        let right = descendants.signed_distance(self.right, point);
        left.max(right) + quadratic_blend(self.radius, left - right)
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        vec![self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::framework::dummy_sdf::tests::{LEFT, RIGHT, make_dummy_pair};

    #[test]
    fn test_far_apart_children_are_plain_intersection() {
        let system_under_test = SdfIntersectionSmooth::new(LEFT, RIGHT, 0.5).unwrap();
        assert_eq!(system_under_test.distance(Point::new(0.0, 0.0, 0.0), &make_dummy_pair(-3.0, 1.0)), 1.0);
    }

    #[test]
    fn test_equal_children_are_pushed_out() {
        let system_under_test = SdfIntersectionSmooth::new(LEFT, RIGHT, 1.0).unwrap();
        assert_eq!(system_under_test.distance(Point::new(0.0, 0.0, 0.0), &make_dummy_pair(-1.0, -1.0)), -0.75);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(SdfIntersectionSmooth::new(LEFT, RIGHT, 0.0).is_err());
    }
}
