use crate::geometry::alias::{Float, Point, Vector};
use crate::geometry::utils::ComponentWise;
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use cgmath::{EuclideanSpace, InnerSpace};

/// Axis aligned box centred at the origin, given by its half extents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfBox {
    half_size: Vector,
}

impl SdfBox {
    pub fn new(half_size: Vector) -> Result<Self, SceneError> {
        ensure_positive("box half size x", half_size.x)?;
        ensure_positive("box half size y", half_size.y)?;
        ensure_positive("box half size z", half_size.z)?;
        Ok(Self { half_size })
    }
}

/// Distance to the box `|q| <= 0` where `q` is the point relative to the
/// box faces.
#[must_use]
pub(crate) fn box_distance(relative_to_faces: Vector) -> Float {
    relative_to_faces.max_scalar(0.0).magnitude() + relative_to_faces.max_component().min(0.0)
}

impl Sdf for SdfBox {
    fn distance(&self, point: Point, _descendants: &dyn Descendants) -> Float {
        box_distance(point.to_vec().abs() - self.half_size)
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        Vec::new()
    }
}
