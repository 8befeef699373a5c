use crate::geometry::alias::{Float, Point, Vector};
use crate::geometry::utils::ComponentWise;
use crate::sdf::framework::sdf_base::{Descendants, Sdf};
use crate::sdf::framework::sdf_index::SdfIndex;
use crate::sdf::object::sdf_box::box_distance;
use cgmath::EuclideanSpace;

/// Menger sponge carved out of the cube `[-1, 1]^3`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SdfMengerSponge {
    iterations: usize,
}

impl SdfMengerSponge {
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }
}

impl Sdf for SdfMengerSponge {
    fn distance(&self, point: Point, _descendants: &dyn Descendants) -> Float {
        let position = point.to_vec();
        let mut result = box_distance(position.abs() - Vector::new(1.0, 1.0, 1.0));

        let mut scale = 1.0;
        for _ in 0..self.iterations {
            let a = (position * scale).map(|component| component.rem_euclid(2.0) - 1.0);
            scale *= 3.0;
            let r = a.abs().map(|component| (1.0 - 3.0 * component).abs());
            let da = r.x.max(r.y);
            let db = r.y.max(r.z);
            let dc = r.z.max(r.x);
            let c = (da.min(db).min(dc) - 1.0) / scale;

            result = result.max(c);
        }
        result
    }

    fn descendants(&self) -> Vec<SdfIndex> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::framework::dummy_sdf::tests::DummyDescendants;
    use more_asserts::{assert_ge, assert_gt, assert_lt};

    #[test]
    fn test_zero_iterations_is_a_cube() {
        let system_under_test = SdfMengerSponge::new(0);
        let dummy = DummyDescendants::default();

        assert!((system_under_test.distance(Point::new(3.0, 0.0, 0.0), &dummy) - 2.0).abs() < 1e-12);
        assert!((system_under_test.distance(Point::new(0.0, 0.0, 0.0), &dummy) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_centre_is_hollow() {
        let system_under_test = SdfMengerSponge::new(1);
        assert_gt!(system_under_test.distance(Point::new(0.0, 0.0, 0.0), &DummyDescendants::default()), 0.0);
    }

    #[test]
    fn test_corner_is_solid() {
        let system_under_test = SdfMengerSponge::new(3);
        assert_lt!(system_under_test.distance(Point::new(0.95, 0.95, 0.95), &DummyDescendants::default()), 0.0);
    }

    #[test]
    fn test_iterations_only_remove_material() {
        let coarse = SdfMengerSponge::new(1);
        let fine = SdfMengerSponge::new(4);
        let dummy = DummyDescendants::default();

        for step in 0..50 {
            let t = step as Float / 49.0;
            let point = Point::new(-1.2 + 2.4 * t, 0.3 - 0.6 * t, 0.77 * t);
            assert_ge!(fine.distance(point, &dummy), coarse.distance(point, &dummy) - 1e-12);
        }
    }
}
