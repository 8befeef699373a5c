use crate::geometry::alias::{Float, Point};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfUnion {
    left: SdfIndex,
    right: SdfIndex,
}

impl SdfUnion {
    #[must_use]
    pub fn new(left: SdfIndex, right: SdfIndex) -> Self {
        Self { left, right }
    }
}

impl Sdf for SdfUnion {
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float {
        let left = descendants.signed_distance(self.left, point);
        let right = descendants.signed_distance(self.right, point);
        left.min(right)
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        vec![self.left, self.right]
    }
}
