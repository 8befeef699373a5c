use crate::geometry::alias::Float;
use crate::material::material::{Color, Material};
use crate::render::settings::RenderSettings;
use crate::scene::frozen_scene::FrozenScene;
use crate::tracer::ray::Ray;
use crate::tracer::ray_marcher::RayMarcher;
use rand::Rng;

/// Chance of ending a path once it is deeper than the configured maximum.
pub const RUSSIAN_ROULETTE_STOP_PROBABILITY: Float = 0.1;

/// Multiple of the hit epsilon a continued path starts away from the surface.
const RECURSION_OFFSET_FACTOR: Float = 10.0;

/// Radiance estimate of a camera ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PrimarySample {
    pub radiance: Color,
    /// The ray passed closer to a surface than the footprint of its pixel.
    pub grazing: bool,
}

pub struct PathTracer<'a, 'b> {
    scene: &'b FrozenScene<'a>,
    marcher: RayMarcher,
    maximum_depth: usize,
    normal_epsilon: Float,
}

impl<'a, 'b> PathTracer<'a, 'b> {
    #[must_use]
    pub fn new(scene: &'b FrozenScene<'a>, settings: &RenderSettings) -> Self {
        Self {
            scene,
            marcher: RayMarcher::new(settings.maximum_distance, settings.epsilon_distance),
            maximum_depth: settings.maximum_depth,
            normal_epsilon: settings.normal_epsilon,
        }
    }

    #[must_use]
    pub fn trace_primary<R: Rng + ?Sized>(&self, ray: &Ray, pixel_arc: Float, generator: &mut R) -> PrimarySample {
        let mut grazing = false;
        let radiance = self.trace_with_arc(ray, 0, Some(pixel_arc), &mut grazing, generator);
        PrimarySample { radiance, grazing }
    }

    #[must_use]
    pub fn trace<R: Rng + ?Sized>(&self, ray: &Ray, depth: usize, generator: &mut R) -> Color {
        let mut grazing = false;
        self.trace_with_arc(ray, depth, None, &mut grazing, generator)
    }

    #[must_use]
    fn trace_with_arc<R: Rng + ?Sized>(
        &self,
        ray: &Ray,
        depth: usize,
        pixel_arc: Option<Float>,
        grazing: &mut bool,
        generator: &mut R,
    ) -> Color {
        let mut weight = 1.0;
        if depth >= self.maximum_depth {
            if generator.random::<Float>() <= RUSSIAN_ROULETTE_STOP_PROBABILITY {
                return Material::BLACK;
            }
            weight = 1.0 / (1.0 - RUSSIAN_ROULETTE_STOP_PROBABILITY);
        }

        let outcome = self.marcher.march(self.scene, ray, pixel_arc);
        *grazing = outcome.marginal.is_some();
        let Some(object) = outcome.hit else {
            return Material::BLACK;
        };
        let Some(material_index) = self.scene.graph().node(object).material() else {
            return Material::BLACK;
        };

        let hit = ray.at(outcome.distance);
        let normal = self.scene.graph().normal(object, hit, self.normal_epsilon);
        let materials = self.scene.materials();
        let material = materials.at(material_index);

        let scattering = materials.scatter(material_index, ray.direction(), normal, ray.medium(), generator);
        let radiance = match scattering {
            Some(scattering) => {
                let origin = hit + scattering.direction * (RECURSION_OFFSET_FACTOR * self.marcher.epsilon_distance());
                let continued = Ray::new(origin, scattering.direction).with_medium(scattering.medium);
                let recursive = self.trace(&continued, depth + 1, generator);
                material.evaluate(recursive, scattering.direction, normal)
            }
            None => material.evaluate(Material::BLACK, ray.direction(), normal),
        };

        radiance * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::alias::{Point, Vector};
    use crate::material::material::MaterialClass;
    use crate::scene::scene::Scene;
    use crate::sdf::framework::sdf_node::SdfNode;
    use crate::sdf::object::sdf_plane::SdfPlane;
    use crate::sdf::object::sdf_sphere::SdfSphere;
    use more_asserts::{assert_gt, assert_lt};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[must_use]
    fn make_settings() -> RenderSettings {
        RenderSettings { maximum_depth: 4, ..RenderSettings::default() }
    }

    #[test]
    fn test_miss_is_black() {
        let scene = Scene::default();
        let frozen = scene.freeze(0.0);
        let system_under_test = PathTracer::new(&frozen, &make_settings());
        let mut generator = Pcg64Mcg::seed_from_u64(3);

        let actual = system_under_test.trace(&Ray::new(Point::new(0.0, 0.0, 0.0), Vector::unit_z()), 0, &mut generator);

        assert_eq!(actual, Material::BLACK);
    }

    #[test]
    fn test_light_seen_directly() {
        let mut scene = Scene::default();
        let light = scene.add_material(&Material::new().with_class(MaterialClass::Emissive).with_color(1.0, 0.5, 0.25).with_emission(2.0));
        let _ = scene
            .add_object(SdfNode::new(SdfSphere::new(1.0).unwrap()).translated(Vector::new(0.0, 0.0, 5.0)).with_material(light))
            .unwrap();
        let frozen = scene.freeze(0.0);
        let system_under_test = PathTracer::new(&frozen, &make_settings());
        let mut generator = Pcg64Mcg::seed_from_u64(3);

        let actual = system_under_test.trace(&Ray::new(Point::new(0.0, 0.0, 0.0), Vector::unit_z()), 0, &mut generator);

        assert_eq!(actual, Color::new(2.0, 1.0, 0.5));
    }

    #[test]
    fn test_mirror_shows_light_behind_camera() {
        let mut scene = Scene::default();
        let light = scene.add_material(&Material::new().with_class(MaterialClass::Emissive).with_emission(1.0));
        let mirror = scene.add_material(&Material::new().with_class(MaterialClass::Specular));
        let _ = scene
            .add_object(SdfNode::new(SdfPlane::new(Vector::new(0.0, 0.0, -1.0), -5.0).unwrap()).with_material(mirror))
            .unwrap();
        let _ = scene
            .add_object(SdfNode::new(SdfSphere::new(1.0).unwrap()).translated(Vector::new(0.0, 0.0, -5.0)).with_material(light))
            .unwrap();
        let frozen = scene.freeze(0.0);
        let system_under_test = PathTracer::new(&frozen, &make_settings());
        let mut generator = Pcg64Mcg::seed_from_u64(3);

        let actual = system_under_test.trace(&Ray::new(Point::new(0.0, 0.0, 0.0), Vector::unit_z()), 0, &mut generator);

        assert_eq!(actual, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_dielectric_sphere_round_trip_stays_finite() {
        let mut scene = Scene::default();
        let light = scene.add_material(&Material::new().with_class(MaterialClass::Emissive).with_emission(1.0));
        let glass = scene.add_material(&Material::new().with_class(MaterialClass::Dielectric).with_refractive_index(1.5));
        let _ = scene
            .add_object(SdfNode::new(SdfSphere::new(1.0).unwrap()).translated(Vector::new(0.0, 0.0, 4.0)).with_material(glass))
            .unwrap();
        let _ = scene
            .add_object(SdfNode::new(SdfPlane::new(Vector::new(0.0, 0.0, -1.0), -10.0).unwrap()).with_material(light))
            .unwrap();
        let frozen = scene.freeze(0.0);
        let system_under_test = PathTracer::new(&frozen, &make_settings());
        let mut generator = Pcg64Mcg::seed_from_u64(11);

        for step in 0..64 {
            let offset = step as Float / 64.0 - 0.5;
            let ray = Ray::new(Point::new(offset, offset * 0.5, 0.0), Vector::unit_z());
            let actual = system_under_test.trace(&ray, 0, &mut generator);

            assert!(actual.red.is_finite() && actual.green.is_finite() && actual.blue.is_finite());
            assert_gt!(actual.red, 0.0);
        }
    }

    #[test]
    fn test_central_ray_passes_glass_unbent() {
        let mut scene = Scene::default();
        let light = scene.add_material(&Material::new().with_class(MaterialClass::Emissive).with_emission(1.0));
        let glass = scene.add_material(&Material::new().with_class(MaterialClass::Dielectric).with_refractive_index(1.5));
        let _ = scene
            .add_object(SdfNode::new(SdfSphere::new(1.0).unwrap()).translated(Vector::new(0.0, 0.0, 4.0)).with_material(glass))
            .unwrap();
        let _ = scene
            .add_object(SdfNode::new(SdfSphere::new(0.5).unwrap()).translated(Vector::new(0.0, 0.0, 8.0)).with_material(light))
            .unwrap();
        let frozen = scene.freeze(0.0);
        let system_under_test = PathTracer::new(&frozen, &make_settings());
        let mut generator = Pcg64Mcg::seed_from_u64(5);

        let actual = system_under_test.trace(&Ray::new(Point::new(0.0, 0.0, 0.0), Vector::unit_z()), 0, &mut generator);

        let gain = 1.15 * 1.15;
        assert_lt!((actual.red - gain).abs(), 1e-6);
    }

    #[test]
    fn test_primary_sample_flags_grazing_rays() {
        let mut scene = Scene::default();
        let diffuse = scene.add_material(&Material::new());
        let _ = scene
            .add_object(SdfNode::new(SdfSphere::new(1.0).unwrap()).translated(Vector::new(0.0, 1.05, 10.0)).with_material(diffuse))
            .unwrap();
        let frozen = scene.freeze(0.0);
        let system_under_test = PathTracer::new(&frozen, &make_settings());
        let mut generator = Pcg64Mcg::seed_from_u64(5);

        let grazing = system_under_test.trace_primary(&Ray::new(Point::new(0.0, 0.0, 0.0), Vector::unit_z()), 0.01, &mut generator);
        let clear = system_under_test.trace_primary(&Ray::new(Point::new(0.0, 0.0, 0.0), -Vector::unit_z()), 0.01, &mut generator);

        assert!(grazing.grazing);
        assert!(false == clear.grazing);
        assert_eq!(grazing.radiance, Material::BLACK);
    }
}
