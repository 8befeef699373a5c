use crate::animation::animated::{Animated, TimeSpan};
use crate::geometry::alias::{Float, Point, Vector};
use cgmath::{EuclideanSpace, InnerSpace};
use std::f64::consts::FRAC_PI_2;

/// Pinhole camera whose every parameter may be keyframed.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    eye: Animated<Point>,
    look_at: Animated<Point>,
    up: Animated<Vector>,
    field_of_view: Animated<Float>,
}

/// A camera resolved for one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraInstant {
    pub eye: Point,
    pub look_at: Point,
    pub up: Vector,
    /// Radians subtended by the image width.
    pub field_of_view: Float,
}

/// Camera to world axes of a left handed look-at frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraBasis {
    pub right: Vector,
    pub up: Vector,
    pub forward: Vector,
}

impl Camera {
    pub const DEFAULT_FIELD_OF_VIEW: Float = FRAC_PI_2;

    #[must_use]
    pub fn new() -> Self {
        Self {
            eye: Point::new(0.0, 0.0, -5.0).into(),
            look_at: Point::origin().into(),
            up: Vector::unit_y().into(),
            field_of_view: Self::DEFAULT_FIELD_OF_VIEW.into(),
        }
    }

    pub fn set(&mut self, eye: Option<Animated<Point>>, look_at: Option<Animated<Point>>, up: Option<Animated<Vector>>) {
        if let Some(eye) = eye {
            self.eye = eye;
        }
        if let Some(look_at) = look_at {
            self.look_at = look_at;
        }
        if let Some(up) = up {
            self.up = up;
        }
    }

    pub fn set_field_of_view(&mut self, field_of_view: Animated<Float>) {
        self.field_of_view = field_of_view;
    }

    #[must_use]
    pub fn with_eye(mut self, eye: impl Into<Animated<Point>>) -> Self {
        self.eye = eye.into();
        self
    }

    #[must_use]
    pub fn with_look_at(mut self, look_at: impl Into<Animated<Point>>) -> Self {
        self.look_at = look_at.into();
        self
    }

    #[must_use]
    pub fn with_up(mut self, up: impl Into<Animated<Vector>>) -> Self {
        self.up = up.into();
        self
    }

    #[must_use]
    pub fn with_field_of_view(mut self, field_of_view: impl Into<Animated<Float>>) -> Self {
        self.field_of_view = field_of_view.into();
        self
    }

    #[must_use]
    pub fn at(&self, time: Float) -> CameraInstant {
        CameraInstant {
            eye: self.eye.at(time),
            look_at: self.look_at.at(time),
            up: self.up.at(time),
            field_of_view: self.field_of_view.at(time),
        }
    }

    #[must_use]
    pub fn time_span(&self) -> Option<TimeSpan> {
        let span = TimeSpan::merge(self.eye.time_span(), self.look_at.time_span());
        let span = TimeSpan::merge(span, self.up.time_span());
        TimeSpan::merge(span, self.field_of_view.time_span())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraInstant {
    /// Falls back to a canonical frame when the view direction is undefined
    /// or parallel to `up`.
    #[must_use]
    pub fn basis(&self) -> CameraBasis {
        let forward = self.look_at - self.eye;
        let forward = if forward.magnitude2() > 0.0 { forward.normalize() } else { Vector::unit_z() };

        let side = self.up.cross(forward);
        let right = if side.magnitude2() > Float::EPSILON {
            side.normalize()
        } else {
            let helper = if forward.x.abs() < 0.9 { Vector::unit_x() } else { Vector::unit_y() };
            forward.cross(helper).cross(forward).normalize()
        };

        CameraBasis { right, up: forward.cross(right), forward }
    }

    /// Distance from the eye to an image plane on which one pixel is one
    /// unit wide.
    #[must_use]
    pub fn film_distance(&self, width: usize) -> Float {
        width as Float / (2.0 * (self.field_of_view / 2.0).tan())
    }
}
