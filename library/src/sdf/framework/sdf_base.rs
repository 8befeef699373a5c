use crate::geometry::alias::{Float, Point};
use crate::sdf::framework::sdf_index::SdfIndex;

/// Signed distances of already placed nodes, looked up by handle.
pub trait Descendants {
    /// Distance from `point`, given in the caller's local space, to `child`
    /// after the child's own placement.
    #[must_use]
    fn signed_distance(&self, child: SdfIndex, point: Point) -> Float;
}

pub trait Sdf {
    /// Signed distance from a point in the node's local space: negative
    /// inside, positive outside.
    #[must_use]
    fn distance(&self, point: Point, descendants: &dyn Descendants) -> Float;

    #[must_use]
    fn descendants(&self) -> Vec<SdfIndex>;
}
