use crate::geometry::alias::{Float, Point};
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;

/// Hollows the child into a shell of the given thickness around its surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfOnion {
    child: SdfIndex,
    thickness: Float,
}

impl SdfOnion {
    pub fn new(child: SdfIndex, thickness: Float) -> Result<Self, SceneError> {
        Ok(Self { child, thickness: ensure_positive("onion thickness", thickness)? })
    }
}

impl Sdf for SdfOnion {
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float {
        descendants.signed_distance(self.child, point).abs() - self.thickness
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        vec![self.child]
    }
}
