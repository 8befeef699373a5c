use crate::geometry::alias::{Float, Point, Vector};
use crate::scene::error::{SceneError, ensure_finite};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use cgmath::{EuclideanSpace, InnerSpace};

/// Half space `dot(normal, p) <= offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfPlane {
    normal: Vector,
    offset: Float,
}

impl SdfPlane {
    /// The normal does not have to be unit length: both it and the offset
    /// are divided by its length, keeping the distance exact.
    pub fn new(normal: Vector, offset: Float) -> Result<Self, SceneError> {
        ensure_finite("plane offset", offset)?;
        let length = normal.magnitude();
        if false == (length > 0.0 && length.is_finite()) {
            return Err(SceneError::NonPositiveParameter { what: "plane normal length", value: length });
        }
        Ok(Self { normal: normal / length, offset: offset / length })
    }

    #[must_use]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    #[must_use]
    pub fn offset(&self) -> Float {
        self.offset
    }
}

impl Sdf for SdfPlane {
    fn distance(&self, point: Point, _descendants: &dyn Descendants) -> Float {
        point.to_vec().dot(self.normal) - self.offset
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        Vec::new()
    }
}
