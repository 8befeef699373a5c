use crate::geometry::alias::{Float, Point};
use crate::scene::error::{SceneError, ensure_positive};
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;

/// Four sided pyramid with a unit square base on the XZ plane and its apex at
/// `(0, height, 0)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfPyramid {
    height: Float,
}

impl SdfPyramid {
    pub fn new(height: Float) -> Result<Self, SceneError> {
        Ok(Self { height: ensure_positive("pyramid height", height)? })
    }
}

impl Sdf for SdfPyramid {
    fn distance(&self, point: Point, _descendants: &dyn Descendants) -> Float {
        let h = self.height;
        let m2 = h * h + 0.25;

        let (mut x, mut z) = (point.x.abs(), point.z.abs());
        if z > x {
            std::mem::swap(&mut x, &mut z);
        }
        x -= 0.5;
        z -= 0.5;
        let y = point.y;

        let qx = z;
        let qy = h * y - 0.5 * x;
        let qz = h * x + 0.5 * y;

        let s = (-qx).max(0.0);
        let t = ((qy - 0.5 * z) / (m2 + 0.25)).clamp(0.0, 1.0);

        let a = m2 * (qx + s) * (qx + s) + qy * qy;
        let b = m2 * (qx + 0.5 * t) * (qx + 0.5 * t) + (qy - m2 * t) * (qy - m2 * t);

        let d2 = if qy.min(-qx * m2 - qy * 0.5) > 0.0 { 0.0 } else { a.min(b) };

        ((d2 + qz * qz) / m2).sqrt() * qz.max(-y).signum()
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::framework::dummy_sdf::tests::DummyDescendants;
    use more_asserts::{assert_gt, assert_lt};

    #[test]
    fn test_apex_is_on_surface() {
        let system_under_test = SdfPyramid::new(2.0).unwrap();
        let actual = system_under_test.distance(Point::new(0.0, 2.0, 0.0), &DummyDescendants::default());
        assert_lt!(actual.abs(), 1e-9);
    }

    #[test]
    fn test_inside_and_outside() {
        let system_under_test = SdfPyramid::new(2.0).unwrap();
        let dummy = DummyDescendants::default();

        assert_lt!(system_under_test.distance(Point::new(0.0, 0.5, 0.0), &dummy), 0.0);
        assert_gt!(system_under_test.distance(Point::new(3.0, 0.5, 0.0), &dummy), 0.0);
        assert_gt!(system_under_test.distance(Point::new(0.0, 3.0, 0.0), &dummy), 0.0);
    }

    #[test]
    fn test_below_base_is_outside() {
        let system_under_test = SdfPyramid::new(1.0).unwrap();
        let actual = system_under_test.distance(Point::new(0.0, -0.75, 0.0), &DummyDescendants::default());
        assert_gt!(actual, 0.0);
    }

    #[test]
    fn test_above_apex_is_exact() {
        let system_under_test = SdfPyramid::new(2.0).unwrap();
        let actual = system_under_test.distance(Point::new(0.0, 3.0, 0.0), &DummyDescendants::default());
        assert!((actual - 1.0).abs() < 1e-9);
    }
}
