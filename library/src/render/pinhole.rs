use crate::geometry::alias::{Float, Point, Vector};
use crate::render::settings::Resolution;
use crate::scene::camera::{CameraBasis, CameraInstant};
use crate::tracer::ray::Ray;

/// Maps pixels to primary rays. Image columns grow along the camera's right
/// axis, rows grow downwards.
#[derive(Copy, Clone, Debug)]
pub struct Pinhole {
    eye: Point,
    basis: CameraBasis,
    film_distance: Float,
    half_width: Float,
    half_height: Float,
}

impl Pinhole {
    #[must_use]
    pub fn new(camera: &CameraInstant, resolution: Resolution) -> Self {
        Self {
            eye: camera.eye,
            basis: camera.basis(),
            film_distance: camera.film_distance(resolution.width),
            half_width: resolution.width as Float / 2.0,
            half_height: resolution.height as Float / 2.0,
        }
    }

    /// `jitter_x` and `jitter_y` in `[0, 1)` place the sample inside the pixel.
    #[must_use]
    pub fn ray(&self, column: usize, row: usize, jitter_x: Float, jitter_y: Float) -> Ray {
        let horizontal = column as Float - self.half_width + jitter_x;
        let vertical = self.half_height - row as Float - jitter_y;
        let direction: Vector =
            self.basis.right * horizontal + self.basis.up * vertical + self.basis.forward * self.film_distance;
        Ray::new(self.eye, direction)
    }

    /// Angle covered by one pixel at the centre of the image.
    #[must_use]
    pub fn pixel_arc(&self) -> Float {
        1.0 / self.film_distance
    }
}
