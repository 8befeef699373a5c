use crate::geometry::alias::{Float, Point};
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::composition::smoothing::quadratic_blend;
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfUnionSmooth {
    left: SdfIndex,
    right: SdfIndex,
    radius: Float,
}

impl SdfUnionSmooth {
    pub fn new(left: SdfIndex, right: SdfIndex, radius: Float) -> Result<Self, SceneError> {
        Ok(Self { left, right, radius: ensure_positive("smooth union radius", radius)? })
    }

    #[must_use]
    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Sdf for SdfUnionSmooth {
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float {
        let left = descendants.signed_distance(self.left, point);
        let right = descendants.signed_distance(self.right, point);
        left.min(right) - quadratic_blend(self.radius, left - right)
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        vec![self.left, self.right]
    }
}
