use crate::geometry::alias::{Float, Point};
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use cgmath::{EuclideanSpace, InnerSpace};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfSphere {
    radius: Float,
}

impl SdfSphere {
    pub fn new(radius: Float) -> Result<Self, SceneError> {
        Ok(Self { radius: ensure_positive("sphere radius", radius)? })
    }

    #[must_use]
    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Sdf for SdfSphere {
    fn distance(&self, point: Point, _descendants: &dyn Descendants) -> Float {
        point.to_vec().magnitude() - self.radius
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        Vec::new()
    }
}
