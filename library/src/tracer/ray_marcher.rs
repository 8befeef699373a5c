use crate::geometry::alias::Float;
use crate::scene::frozen_scene::FrozenScene;
use crate::sdf::framework::sdf_index::SdfIndex;
use crate::tracer::ray::Ray;

/// Result of sphere tracing a single ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarchOutcome {
    /// Travelled distance: up to the hit, or past the far limit on a miss.
    pub distance: Float,
    pub hit: Option<SdfIndex>,
    /// First distance at which the scene came closer than the footprint of
    /// a pixel; informational only.
    pub marginal: Option<Float>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayMarcher {
    maximum_distance: Float,
    epsilon_distance: Float,
}

impl RayMarcher {
    #[must_use]
    pub fn new(maximum_distance: Float, epsilon_distance: Float) -> Self {
        assert!(epsilon_distance > 0.0, "hit epsilon must be positive");
        assert!(maximum_distance > 0.0, "maximum distance must be positive");
        Self { maximum_distance, epsilon_distance }
    }

    #[must_use]
    pub fn epsilon_distance(&self) -> Float {
        self.epsilon_distance
    }

    #[must_use]
    pub fn march(&self, scene: &FrozenScene, ray: &Ray, pixel_arc: Option<Float>) -> MarchOutcome {
        let mut distance: Float = 0.0;
        let mut marginal = None;

        while distance < self.maximum_distance {
            let Some(closest) = scene.closest(ray.at(distance)) else {
                break;
            };
            if closest.distance < self.epsilon_distance {
                return MarchOutcome { distance, hit: Some(closest.object), marginal };
            }
            if marginal.is_none() && pixel_arc.is_some_and(|arc| closest.distance < distance * arc) {
                marginal = Some(distance);
            }
            distance += closest.distance;
        }

        MarchOutcome { distance, hit: None, marginal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::alias::{Point, Vector};
    use crate::material::material::Material;
    use crate::scene::scene::Scene;
    use crate::sdf::framework::sdf_node::SdfNode;
    use crate::sdf::object::sdf_sphere::SdfSphere;
    use more_asserts::{assert_ge, assert_lt};
    use rstest::rstest;

    #[must_use]
    fn make_scene_with_sphere(center: Point) -> (Scene, SdfIndex) {
        let mut scene = Scene::default();
        let material = scene.add_material(&Material::new());
        let sphere = scene
            .add_object(SdfNode::new(SdfSphere::new(1.0).unwrap()).translated(center - Point::new(0.0, 0.0, 0.0)).with_material(material))
            .unwrap();
        (scene, sphere)
    }

    #[rstest]
    #[case(3.0, 1e-3)]
    #[case(10.0, 1e-3)]
    #[case(42.5, 1e-6)]
    fn test_hits_sphere_at_expected_distance(#[case] center_distance: Float, #[case] epsilon: Float) {
        let direction = Vector::new(1.0, 2.0, -2.0) / 3.0;
        let (scene, sphere) = make_scene_with_sphere(Point::new(0.0, 0.0, 0.0) + direction * center_distance);
        let frozen = scene.freeze(0.0);
        let system_under_test = RayMarcher::new(1e3, epsilon);

        let outcome = system_under_test.march(&frozen, &Ray::new(Point::new(0.0, 0.0, 0.0), direction), None);

        assert_eq!(outcome.hit, Some(sphere));
        assert_lt!((outcome.distance - (center_distance - 1.0)).abs(), epsilon);
    }

    #[test]
    fn test_miss() {
        let (scene, _) = make_scene_with_sphere(Point::new(0.0, 0.0, 5.0));
        let frozen = scene.freeze(0.0);
        let system_under_test = RayMarcher::new(100.0, 1e-3);

        let outcome = system_under_test.march(&frozen, &Ray::new(Point::new(0.0, 0.0, 0.0), Vector::unit_x()), None);

        assert_eq!(outcome.hit, None);
        assert_ge!(outcome.distance, 100.0);
    }

    #[test]
    fn test_empty_scene_misses_immediately() {
        let scene = Scene::default();
        let system_under_test = RayMarcher::new(100.0, 1e-3);

        let outcome = system_under_test.march(&scene.freeze(0.0), &Ray::new(Point::new(0.0, 0.0, 0.0), Vector::unit_x()), None);

        assert_eq!(outcome, MarchOutcome { distance: 0.0, hit: None, marginal: None });
    }

    #[test]
    fn test_marginal_distance_does_not_change_hit() {
        let (scene, _) = make_scene_with_sphere(Point::new(0.0, 1.05, 10.0));
        let frozen = scene.freeze(0.0);
        let system_under_test = RayMarcher::new(1e3, 1e-3);
        let ray = Ray::new(Point::new(0.0, 0.0, 0.0), Vector::unit_z());

        let with_arc = system_under_test.march(&frozen, &ray, Some(0.01));
        let without_arc = system_under_test.march(&frozen, &ray, None);

        assert_eq!(with_arc.hit, None);
        assert_eq!(without_arc.hit, None);
        assert_eq!(with_arc.distance, without_arc.distance);
        assert_eq!(without_arc.marginal, None);
        let marginal = with_arc.marginal.unwrap();
        assert_lt!(marginal, 10.0);
        assert_ge!(marginal, 8.0);
    }
}
