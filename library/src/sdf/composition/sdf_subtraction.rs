use crate::geometry::alias::{Float, Point};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;

/// Carves `left` out of `right`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfSubtraction {
    left: SdfIndex,
    right: SdfIndex,
}

impl SdfSubtraction {
    #[must_use]
    pub fn new(left: SdfIndex, right: SdfIndex) -> Self {
        Self { left, right }
    }
}

impl Sdf for SdfSubtraction {
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float {
        let left = descendants.signed_distance(self.left, point);
        let right = descendants.signed_distance(self.right, point);
        (-left).max(right)
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        vec![self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::framework::dummy_sdf::tests::{LEFT, RIGHT, make_dummy_pair};
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 2.0, 2.0)]
    #[case(-3.0, 2.0, 3.0)]
    #[case(0.5, -0.25, -0.25)]
    #[case(-0.5, -0.75, 0.5)]
    fn test_left_is_carved_out_of_right(#[case] left: Float, #[case] right: Float, #[case] expected: Float) {
        let system_under_test = SdfSubtraction::new(LEFT, RIGHT);
        assert_eq!(system_under_test.distance(Point::new(0.0, 0.0, 0.0), &make_dummy_pair(left, right)), expected);
    }
}
