use sdf_marcher::animation::animated::Animated;
use sdf_marcher::animation::track::{Blending, Track};
use sdf_marcher::geometry::alias::{Point, Vector};
use sdf_marcher::material::material::{Material, MaterialClass};
use sdf_marcher::scene::camera::Camera;
use sdf_marcher::scene::error::SceneError;
use sdf_marcher::scene::scene::Scene;
use sdf_marcher::sdf::framework::sdf_node::SdfNode;
use sdf_marcher::sdf::object::sdf_plane::SdfPlane;
use sdf_marcher::sdf::object::sdf_sphere::SdfSphere;

#[must_use]
fn make_orbiting_camera() -> Camera {
    let orbit = Track::new(0.0, Point::new(0.0, 0.0, 0.1), Blending::Linear)
        .with_keyframe(1.0, Point::new(1.9, 0.0, 2.0))
        .with_keyframe(2.0, Point::new(0.0, 0.0, 3.9))
        .with_keyframe(3.0, Point::new(-1.9, 0.0, 2.0))
        .with_keyframe(4.0, Point::new(0.0, 0.0, 0.1));

    Camera::new()
        .with_eye(Animated::keyed(orbit))
        .with_look_at(Point::new(0.0, -0.5, 2.0))
        .with_up(Vector::unit_y())
}

/// A closed box lit from the ceiling, with glass, mirror and diffuse balls
/// inside, watched by a camera circling the room.
pub(crate) fn make_demo_scene() -> Result<Scene, SceneError> {
    let mut scene = Scene::new(make_orbiting_camera());

    let white = scene.add_material(&Material::new());
    let light = scene.add_material(&Material::new().with_class(MaterialClass::Emissive).with_emission(10.0));
    let red = scene.add_material(&Material::new().with_color(1.0, 0.2, 0.2));
    let green = scene.add_material(&Material::new().with_color(0.2, 1.0, 0.2));
    let blue = scene.add_material(&Material::new().with_color(0.2, 0.2, 1.0));
    let glass = scene.add_material(&Material::new().with_class(MaterialClass::Dielectric).with_refractive_index(1.5));
    let mirror = scene.add_material(&Material::new().with_class(MaterialClass::Specular));

    let walls = [
        (Vector::new(0.0, 1.0, 0.0), -2.0, white),
        (Vector::new(0.0, -1.0, 0.0), -2.0, light),
        (Vector::new(-1.0, 0.0, 0.0), -2.0, red),
        (Vector::new(1.0, 0.0, 0.0), -2.0, green),
        (Vector::new(0.0, 0.0, -1.0), -4.0, blue),
        (Vector::new(0.0, 0.0, 1.0), 0.0, white),
    ];
    for (normal, offset, material) in walls {
        scene.add_object(SdfNode::new(SdfPlane::new(normal, offset)?).with_material(material))?;
    }

    scene.add_object(SdfNode::new(SdfSphere::new(1.0)?).translated(Vector::new(1.0, -1.0, 3.0)).with_material(glass))?;
    scene.add_object(SdfNode::new(SdfSphere::new(0.5)?).translated(Vector::new(-0.5, -1.5, 2.0)).with_material(mirror))?;
    scene.add_object(SdfNode::new(SdfSphere::new(0.5)?).translated(Vector::new(-1.0, -1.5, 3.0)).with_material(white))?;

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdf_marcher::animation::animated::TimeSpan;

    #[test]
    fn test_demo_scene_layout() {
        let system_under_test = make_demo_scene().unwrap();

        assert_eq!(system_under_test.objects().len(), 9);
        assert_eq!(system_under_test.materials().count(), 7);
        assert_eq!(system_under_test.time_span(), Some(TimeSpan::new(0.0, 4.0)));
    }

    #[test]
    fn test_camera_stays_inside_the_room() {
        let system_under_test = make_demo_scene().unwrap();
        let frozen = system_under_test.freeze(2.5);

        let eye = frozen.camera().eye;
        let closest = frozen.closest(eye).unwrap();

        assert!(closest.distance > 0.05);
    }
}
