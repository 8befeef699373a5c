use crate::geometry::alias::{Float, Point};
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfRound {
    child: SdfIndex,
    radius: Float,
}

impl SdfRound {
    pub fn new(child: SdfIndex, radius: Float) -> Result<Self, SceneError> {
        Ok(Self { child, radius: ensure_positive("rounding radius", radius)? })
    }
}

impl Sdf for SdfRound {
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float {
        descendants.signed_distance(self.child, point) - self.radius
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        vec![self.child]
    }
}
